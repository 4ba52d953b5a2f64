use dioxus::prelude::*;

#[component]
pub fn WarningIcon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            class: "{crate::styles::WARNING_ICON}",
            fill: "none",
            view_box: "0 0 24 24",
            stroke: "currentColor",
            stroke_width: "2",
            "aria-hidden": "true",
            path {
                d: "M10.29 3.86L1.82 18a2 2 0 001.71 3h16.94a2 2 0 001.71-3L13.71 3.86a2 2 0 00-3.42 0z"
            }
            path {
                d: "M12 9v4M12 17h.01"
            }
        }
    }
}
