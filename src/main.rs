#![allow(non_snake_case)]

use dioxus::prelude::*;
use std::rc::Rc;

// Modules
mod components;
mod config;
mod hooks;
mod services;
mod stores;

use components::RandomUser;
use config::WidgetConfig;
use services::random_user::{ProfileSource, RandomUserApi};

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting random user card");

    dioxus::launch(App);
}

/// Build the widget config, taking the card variant from `?style=` in the page URL
fn load_config() -> WidgetConfig {
    let search = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();

    let style = config::style_from_query(&search);
    log::info!("Using {} card style", style.as_str());

    WidgetConfig::default().with_style(style)
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);
    use_context_provider(move || {
        Rc::new(RandomUserApi::new(config.endpoint)) as Rc<dyn ProfileSource>
    });

    rsx! {
        RandomUser {}
    }
}
