use dioxus::prelude::*;

#[component]
pub fn ModalCloseButton(label: String, on_click: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "{crate::styles::MODAL_CLOSE}",
            aria_label: "{label}",
            title: "{label}",
            onclick: move |_| on_click.call(()),
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                class: "h-4 w-4",
                fill: "none",
                view_box: "0 0 24 24",
                stroke: "currentColor",
                stroke_width: "2",
                path {
                    d: "M6 6l12 12M18 6L6 18"
                }
            }
        }
    }
}
