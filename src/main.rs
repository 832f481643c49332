use log::{info, Level};
use yew::prelude::*;

mod catalog;
mod config;
mod countdown;
mod hooks;
mod icons;
mod lead;
mod components {
    pub mod contact_form;
    pub mod faq;
    pub mod modal;
    pub mod puppy_card;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    let relay = use_memo(|_| config::relay_config(), ());

    {
        let relay = relay.clone();
        use_effect_with_deps(
            move |_| {
                config::warn_on_placeholder(&relay);
                || ()
            },
            (),
        );
    }

    info!("Rendering landing page");
    html! {
        <Landing relay={(*relay).clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
