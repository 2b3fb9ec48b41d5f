use dioxus::prelude::*;

/// Spinner shown while a profile fetch is in flight
#[component]
pub fn LoadingIndicator(
    #[props(default = "border-white".to_string())] ring_class: String,
) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-center mb-6",
            role: "status",
            aria_live: "polite",
            aria_busy: "true",

            span {
                class: "inline-block w-8 h-8 mr-2 border-4 {ring_class} border-t-transparent rounded-full animate-spin"
            }
            span { "Loading..." }
        }
    }
}
