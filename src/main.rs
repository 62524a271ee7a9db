use log::info;
use yew::prelude::*;

mod config;
mod dom;
mod motion {
    pub mod anchor;
    pub mod carousel;
    pub mod cursor;
    pub mod header;
    pub mod parallax;
    pub mod particles;
    pub mod progress;
    pub mod reveal;
    pub mod scrub;
    pub mod stack;
    pub mod timeline;
    pub mod wizard;
}
mod effects {
    pub mod anchor;
    pub mod cursor;
    pub mod frame;
    pub mod page;
    pub mod parallax;
    pub mod progress;
    pub mod reveal;
    pub mod scrub;
    pub mod stack;
    pub mod viewport;
}
mod components {
    pub mod carousel;
    pub mod contact_wizard;
    pub mod cursor;
    pub mod image_stack;
    pub mod nav;
    pub mod particle_field;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::warn!("logger already initialized:", err.to_string());
    }

    info!("Starting studio site");
    yew::Renderer::<App>::new().render();
}
