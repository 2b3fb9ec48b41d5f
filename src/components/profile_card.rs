use dioxus::prelude::*;

use crate::components::appreciation_overlay::AppreciationOverlay;
use crate::components::icons::{HeartIcon, InfoIcon, MailIcon, MapPinIcon, UserIcon};
use crate::config::CardStyle;
use crate::services::random_user::DisplayProfile;

/// CSS classes that differ between the two card variants
struct CardClasses {
    card: &'static str,
    header: &'static str,
    avatar: &'static str,
    icon: &'static str,
    button: &'static str,
}

fn card_classes(style: CardStyle) -> CardClasses {
    match style {
        CardStyle::Gradient => CardClasses {
            card: "border-0 shadow-xl rounded-xl overflow-hidden max-w-sm w-full relative bg-white text-gray-800",
            header: "h-36 bg-gradient-to-r from-green-400 to-blue-400 relative",
            avatar: "w-[100px] h-[100px] rounded-full border-4 border-white absolute bottom-0 left-1/2 -translate-x-1/2 translate-y-1/2 object-cover",
            icon: "w-5 h-5 mr-2 text-blue-600",
            button: "mt-6 inline-flex items-center gap-2 bg-blue-600 text-white hover:bg-blue-700 transition duration-300 px-4 py-2 rounded-md",
        },
        CardStyle::Minimal => CardClasses {
            card: "border border-gray-200 shadow-md rounded-lg overflow-hidden max-w-sm w-full relative bg-white text-gray-900",
            header: "h-28 bg-gray-100 relative",
            avatar: "w-24 h-24 rounded-full border-2 border-gray-300 absolute bottom-0 left-1/2 -translate-x-1/2 translate-y-1/2 object-cover",
            icon: "w-4 h-4 mr-2 text-gray-500",
            button: "mt-6 inline-flex items-center gap-2 border border-gray-300 text-gray-800 hover:bg-gray-100 transition duration-200 px-4 py-2 rounded-md",
        },
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ProfileCardProps {
    pub profile: DisplayProfile,
    #[props(default)]
    pub style: CardStyle,
    pub overlay_visible: bool,
    pub on_appreciate: EventHandler<()>,
}

#[component]
pub fn ProfileCard(props: ProfileCardProps) -> Element {
    let classes = card_classes(props.style);
    let profile = &props.profile;
    let on_appreciate = props.on_appreciate;

    rsx! {
        div {
            class: "{classes.card}",

            // Header with avatar overlapping the bottom edge
            div {
                class: "{classes.header}",
                img {
                    class: "{classes.avatar}",
                    src: "{profile.image_url}",
                    alt: "{profile.name}",
                    width: "100",
                    height: "100",
                }
            }

            div {
                class: "p-6 pt-12 text-center",

                h3 {
                    class: "text-2xl font-bold flex items-center justify-center",
                    UserIcon { class: classes.icon.to_string() }
                    "{profile.name}"
                }
                p {
                    class: "text-gray-600 flex items-center justify-center mt-2",
                    MailIcon { class: classes.icon.to_string() }
                    "{profile.email}"
                }
                div {
                    class: "text-gray-600 text-sm mt-4 flex items-center justify-center",
                    MapPinIcon { class: classes.icon.to_string() }
                    "{profile.address}"
                }
                div {
                    class: "text-gray-600 text-sm mt-4 flex items-center justify-center break-all",
                    InfoIcon { class: classes.icon.to_string() }
                    "{profile.reference_id}"
                }

                button {
                    class: "{classes.button}",
                    onclick: move |_| on_appreciate.call(()),
                    HeartIcon { class: "w-4 h-4".to_string(), filled: props.overlay_visible }
                    "Appreciate"
                }
            }

            AppreciationOverlay { visible: props.overlay_visible }
        }
    }
}
