use yew::prelude::*;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config;
use crate::view::View;

pub fn scrolled_past(offset: f64) -> bool {
    offset > config::SCROLL_THRESHOLD
}

/// The bar is see-through only on top of the home hero.
pub fn solid_bar(is_scrolled: bool, current: View) -> bool {
    is_scrolled || current != View::Home
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub current: View,
    pub on_select: Callback<View>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { current, on_select } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.clone().map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scrolled_past(offset));
                }) as Box<dyn FnMut()>);

                if let Err(e) = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    log::warn!("Could not watch scroll position: {:?}", e);
                }
                scroll_callback
            });

            move || {
                if let (Some(window), Some(scroll_callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    // Picking a destination always closes the overlay in the same step
    let go_to = |view: View| {
        let menu_open = menu_open.clone();
        let on_select = on_select.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_select.emit(view);
        })
    };

    let link_class = |view: View| {
        classes!("nav-link", (*current == view).then(|| "active"))
    };

    html! {
        <nav class={classes!("top-nav", solid_bar(*is_scrolled, *current).then(|| "solid"))}>
            <style>
                {r#"
                    .top-nav { position: fixed; width: 100%; z-index: 50; padding: 1.5rem 0; transition: all 0.5s; background: transparent; }
                    .top-nav.solid { padding: 1rem 0; background: rgba(0, 0, 0, 0.95); backdrop-filter: blur(12px); border-bottom: 1px solid rgba(255, 255, 255, 0.1); }
                    .nav-content { max-width: 80rem; margin: 0 auto; padding: 0 1rem; display: flex; justify-content: space-between; align-items: center; }
                    .nav-logo { display: flex; align-items: center; gap: 0.75rem; cursor: pointer; font-weight: 800; font-size: 1.25rem; letter-spacing: -0.05em; background: none; border: none; color: #fff; }
                    .nav-logo .accent { color: #a855f7; }
                    .nav-logo-badge { background: #9333ea; padding: 0.5rem; border-radius: 0.75rem; color: #facc15; }
                    .nav-right { display: flex; align-items: center; gap: 2.5rem; }
                    .nav-link { background: none; border: none; cursor: pointer; font-size: 0.75rem; font-weight: 700; letter-spacing: 0.1em; text-transform: uppercase; color: #94a3b8; }
                    .nav-link:hover, .nav-link.active { color: #facc15; }
                    .nav-book-button { background: #9333ea; color: #fff; border: none; padding: 0.625rem 2rem; border-radius: 9999px; font-weight: 700; cursor: pointer; }
                    .burger-menu { display: none; background: none; border: none; cursor: pointer; padding: 0.5rem; }
                    .burger-menu span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #fff; }
                    .mobile-overlay { position: fixed; inset: 0; z-index: 40; background: rgba(0, 0, 0, 0.98); display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 2.5rem; }
                    .mobile-overlay .nav-link { font-size: 1.875rem; font-weight: 900; color: #fff; }
                    .mobile-overlay .nav-link.active { color: #facc15; }
                    .overlay-close { position: absolute; top: 1.5rem; right: 1.5rem; background: none; border: none; color: #fff; font-size: 2rem; cursor: pointer; }
                    @media (max-width: 768px) {
                        .nav-right { display: none; }
                        .burger-menu { display: block; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <button class="nav-logo" onclick={go_to(View::Home)}>
                    <span class="nav-logo-badge">{"♥"}</span>
                    {"DR. JORDAN "}<span class="accent">{"MUGISHA"}</span>
                </button>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class="nav-right">
                    {
                        View::ALL.iter().map(|view| html! {
                            <button key={view.label()} class={link_class(*view)} onclick={go_to(*view)}>
                                {view.label()}
                            </button>
                        }).collect::<Html>()
                    }
                    <button class="nav-book-button" onclick={go_to(View::Contact)}>
                        {"Book Now"}
                    </button>
                </div>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-overlay">
                            <button class="overlay-close" onclick={close_menu}>{"✕"}</button>
                            {
                                View::ALL.iter().map(|view| html! {
                                    <button key={view.label()} class={link_class(*view)} onclick={go_to(*view)}>
                                        {view.label()}
                                    </button>
                                }).collect::<Html>()
                            }
                            <button class="nav-book-button" onclick={go_to(View::Contact)}>
                                {"Book Appointment"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_flag_flips_after_threshold() {
        assert!(!scrolled_past(0.0));
        assert!(!scrolled_past(20.0));
        assert!(scrolled_past(20.5));
    }

    #[test]
    fn bar_is_transparent_only_on_unscrolled_home() {
        assert!(!solid_bar(false, View::Home));
        assert!(solid_bar(true, View::Home));
        for view in [View::About, View::Services, View::Contact] {
            assert!(solid_bar(false, view));
        }
    }
}
