use dioxus::prelude::*;

/// Icon size prop
#[derive(Props, Clone, PartialEq)]
pub struct IconProps {
    #[props(default = "w-5 h-5".to_string())]
    pub class: String,
    #[props(default = false)]
    pub filled: bool,
}

/// 24x24 stroked outline shared by every icon below
#[component]
fn IconFrame(
    class: String,
    #[props(default = "none".to_string())] fill: String,
    children: Element,
) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "{fill}",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {children}
        }
    }
}

#[component]
pub fn UserIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame {
            class: props.class,
            path { d: "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" }
            circle { cx: "12", cy: "7", r: "4" }
        }
    }
}

#[component]
pub fn MailIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame {
            class: props.class,
            rect { width: "20", height: "16", x: "2", y: "4", rx: "2" }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        }
    }
}

#[component]
pub fn MapPinIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame {
            class: props.class,
            path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" }
            circle { cx: "12", cy: "10", r: "3" }
        }
    }
}

#[component]
pub fn InfoIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame {
            class: props.class,
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 16v-4" }
            path { d: "M12 8h.01" }
        }
    }
}

// Used on the "Appreciate" button
#[component]
pub fn HeartIcon(props: IconProps) -> Element {
    let fill = if props.filled { "currentColor" } else { "none" };
    rsx! {
        IconFrame {
            class: props.class,
            fill: fill.to_string(),
            path { d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" }
        }
    }
}

#[component]
pub fn RefreshIcon(props: IconProps) -> Element {
    rsx! {
        IconFrame {
            class: props.class,
            path { d: "M21 2v6h-6" }
            path { d: "M3 12a9 9 0 0 1 15-6.7L21 8" }
            path { d: "M3 22v-6h6" }
            path { d: "M21 12a9 9 0 0 1-15 6.7L3 16" }
        }
    }
}
