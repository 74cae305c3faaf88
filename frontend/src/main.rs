use yew::prelude::*;
use log::info;

mod config;
mod inquiry;
mod link;
mod view;
mod pages {
    pub mod home;
    pub mod about;
    pub mod services;
    pub mod contact;
}
mod components {
    pub mod nav;
    pub mod footer;
}

use pages::{
    home::Home,
    about::About,
    services::Services,
    contact::Contact,
};
use components::{
    nav::Nav,
    footer::{Footer, FloatingContact},
};
use view::{View, ViewRouter};


fn switch(view: View, on_select: Callback<View>) -> Html {
    match view {
        View::Home => {
            info!("Rendering Home view");
            html! { <Home {on_select} /> }
        },
        View::About => {
            info!("Rendering About view");
            html! { <About {on_select} /> }
        },
        View::Services => {
            info!("Rendering Services view");
            html! { <Services /> }
        },
        View::Contact => {
            info!("Rendering Contact view");
            html! { <Contact /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    let router = use_reducer_eq(ViewRouter::default);

    let on_select = {
        let router = router.clone();
        Callback::from(move |next: View| {
            router.dispatch(next);
            view::scroll_to_top();
        })
    };

    html! {
        <div class="app-shell">
            <style>
                {r#"
                    * { box-sizing: border-box; margin: 0; }
                    body { background: #000; color: #fff; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; -webkit-font-smoothing: antialiased; }
                    ::selection { background: rgba(147, 51, 234, 0.4); }
                    .app-shell { min-height: 100vh; display: flex; flex-direction: column; overflow-x: hidden; }
                    .app-main { flex-grow: 1; }
                "#}
            </style>
            <Nav current={router.active()} on_select={on_select.clone()} />
            <main class="app-main">
                { switch(router.active(), on_select.clone()) }
            </main>
            <Footer on_select={on_select.clone()} />
            <FloatingContact {on_select} />
        </div>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
