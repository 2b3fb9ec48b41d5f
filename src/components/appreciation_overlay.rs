use dioxus::prelude::*;

/// "Thank you" layer drawn over the card after the user clicks Appreciate.
/// Unmounted entirely while hidden.
#[component]
pub fn AppreciationOverlay(visible: bool) -> Element {
    if !visible {
        return rsx! {};
    }

    rsx! {
        div {
            class: "absolute inset-0 flex items-center justify-center bg-white/90 animate-in fade-in duration-300",
            role: "alert",
            h2 {
                class: "text-3xl font-bold text-black animate-bounce",
                "❤️ Thank you ✨"
            }
        }
    }
}
