use dioxus::prelude::*;

use crate::pop_overlay;

/// Plain message with a single button that dismisses it.
#[component]
pub fn NoticeRender(text: String, button_text: String) -> Element {
    let mut lines = text.lines().map(str::to_string);
    let title = lines.next().unwrap_or_default();
    let details: Vec<String> = lines.collect();

    rsx! {
        div {
            class: "{crate::styles::POPUP}",
            role: "alertdialog",
            aria_modal: "true",

            h3 {
                class: "{crate::styles::POPUP_HEADING}",
                "{title}"
            }
            for line in details {
                p {
                    class: "{crate::styles::POPUP_TEXT}",
                    "{line}"
                }
            }
            div {
                class: "{crate::styles::POPUP_ACTION}",
                button {
                    class: "{crate::styles::BLUE_BUTTON}",
                    onclick: move |_| pop_overlay(),
                    "{button_text}"
                }
            }
        }
    }
}
