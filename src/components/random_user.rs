use dioxus::prelude::*;
use std::rc::Rc;

use crate::components::icons::RefreshIcon;
use crate::components::loading_indicator::LoadingIndicator;
use crate::components::profile_card::ProfileCard;
use crate::config::{CardStyle, WidgetConfig};
use crate::hooks::use_acknowledgment;
use crate::services::random_user::ProfileSource;
use crate::stores::profile_widget::{request_profile, Phase, WidgetState};

/// Page-level classes for the two variants
fn page_classes(style: CardStyle) -> (&'static str, &'static str, &'static str) {
    match style {
        CardStyle::Gradient => (
            "flex flex-col items-center justify-center min-h-screen bg-gradient-to-r from-blue-500 to-purple-500 text-white p-6",
            "bg-white text-blue-600 font-semibold hover:bg-blue-600 hover:text-white transition duration-300 px-6 py-3 rounded-full mb-6 shadow-lg inline-flex items-center gap-2",
            "text-lg mb-8 text-center text-gray-200",
        ),
        CardStyle::Minimal => (
            "flex flex-col items-center justify-center min-h-screen bg-gray-50 text-gray-900 p-6",
            "bg-gray-900 text-white font-medium hover:bg-gray-700 transition duration-200 px-5 py-2 rounded-md mb-6 inline-flex items-center gap-2",
            "text-base mb-8 text-center text-gray-500",
        ),
    }
}

/// Fetches a random user profile and shows it as a card.
///
/// Expects a `WidgetConfig` and an `Rc<dyn ProfileSource>` in context.
#[component]
pub fn RandomUser() -> Element {
    let config = use_context::<WidgetConfig>();
    let source = use_context::<Rc<dyn ProfileSource>>();
    let style = config.style;

    let state = use_signal(WidgetState::default);

    // Automatic fetch, once per mount
    let mount_source = source.clone();
    use_hook(move || {
        spawn(async move {
            request_profile(state, &*mount_source).await;
        });
    });

    let fetch_new = move |_| {
        let source = source.clone();
        spawn(async move {
            request_profile(state, &*source).await;
        });
    };

    let on_appreciate =
        use_acknowledgment(state, config.acknowledge_delay, gloo_timers::future::sleep);

    let (page_class, button_class, subtitle_class) = page_classes(style);
    let (spinner_ring, footer_class) = match style {
        CardStyle::Gradient => ("border-white", "text-gray-300"),
        CardStyle::Minimal => ("border-gray-700", "text-gray-500"),
    };

    let current = state.read();
    let overlay_visible = current.is_overlay_visible();

    rsx! {
        div {
            class: "{page_class}",

            h1 {
                class: "text-4xl font-extrabold mb-6 tracking-wide text-center",
                "Random User Generator"
            }
            p {
                class: "{subtitle_class}",
                "Click the button below to fetch a random user profile."
            }
            button {
                class: "{button_class}",
                onclick: fetch_new,
                RefreshIcon { class: "w-4 h-4".to_string() }
                "Fetch New User"
            }

            match current.phase() {
                Phase::Loading => rsx! {
                    LoadingIndicator { ring_class: spinner_ring.to_string() }
                },
                Phase::Error(message) => rsx! {
                    div {
                        class: "text-red-500",
                        role: "alert",
                        "{message}"
                    }
                },
                Phase::Loaded(profile) => rsx! {
                    ProfileCard {
                        profile: profile.clone(),
                        style,
                        overlay_visible,
                        on_appreciate,
                    }
                },
                Phase::Idle => rsx! {},
            }

            if let Some(credit) = config.credit.as_deref() {
                footer {
                    class: "mt-10 text-center {footer_class}",
                    p {
                        class: "text-base",
                        "Created By "
                        span { class: "font-semibold", "{credit}" }
                    }
                }
            }
        }
    }
}
