use chrono::Datelike;
use yew::prelude::*;
use web_sys::MouseEvent;

use crate::view::View;

pub fn copyright_line(year: i32) -> String {
    format!("© {} Cardiac Health Tanzania.", year)
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_select: Callback<View>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let go_to = |view: View| {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(view))
    };
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer { position: relative; margin-top: auto; padding: 6rem 0; background: #000; border-top: 1px solid rgba(255, 255, 255, 0.05); }
                    .site-footer::after { content: ''; position: absolute; bottom: 0; left: 0; width: 100%; height: 4px; background: linear-gradient(to right, #9333ea, #facc15, #9333ea); }
                    .footer-content { max-width: 80rem; margin: 0 auto; padding: 0 1rem; display: flex; flex-wrap: wrap; justify-content: space-between; align-items: center; gap: 3rem; }
                    .footer-brand { background: none; border: none; color: #fff; cursor: pointer; font-size: 1.25rem; font-weight: 900; }
                    .footer-links { display: flex; gap: 2.5rem; }
                    .footer-links button { background: none; border: none; cursor: pointer; color: #64748b; font-size: 0.625rem; font-weight: 900; text-transform: uppercase; letter-spacing: 0.1em; }
                    .footer-links button:hover { color: #facc15; }
                    .copyright { color: #475569; font-size: 0.625rem; font-weight: 900; text-transform: uppercase; letter-spacing: 0.1em; }
                "#}
            </style>
            <div class="footer-content">
                <button class="footer-brand" onclick={go_to(View::Home)}>
                    {"♥ DR. JORDAN MUGISHA"}
                </button>
                <div class="footer-links">
                    <button onclick={go_to(View::Home)}>{"Home"}</button>
                    <button onclick={go_to(View::About)}>{"About"}</button>
                    <button onclick={go_to(View::Contact)}>{"Contact"}</button>
                </div>
                <p class="copyright">{copyright_line(year)}</p>
            </div>
        </footer>
    }
}

/// Sticky chat button for small screens.
#[function_component(FloatingContact)]
pub fn floating_contact(props: &FooterProps) -> Html {
    let onclick = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(View::Contact))
    };

    html! {
        <button class="floating-contact" {onclick} aria-label="Contact">
            <style>
                {r#"
                    .floating-contact { display: none; position: fixed; bottom: 2rem; right: 2rem; z-index: 40; background: #9333ea; color: #fff; border: none; padding: 1.25rem; border-radius: 1rem; font-size: 1.5rem; cursor: pointer; }
                    @media (max-width: 768px) { .floating-contact { display: block; } }
                "#}
            </style>
            {"💬"}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_year() {
        assert_eq!(copyright_line(2026), "© 2026 Cardiac Health Tanzania.");
    }
}
