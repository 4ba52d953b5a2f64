use dioxus::prelude::*;
use rewards_locale::keys;
use tracing::info;

use crate::{components::Toggle, overlays::OverlayEnum, OVERLAY, SETTINGS};

#[component]
pub fn SettingsPage() -> Element {
    let (locale, show_notice) = {
        let settings = SETTINGS.read();
        (settings.locale.clone(), settings.config.show_bap_deprecation)
    };

    let title = locale.get_string(keys::SETTINGS_TITLE);
    let section = locale.get_string(keys::REWARDS_SECTION);
    let toggle_text = locale.get_string(keys::SHOW_BAP_DEPRECATION);
    let open_text = locale.get_string(keys::OPEN_BAP_DEPRECATION);

    rsx! {
        div {
            class: "max-w-2xl mx-auto p-8",
            h1 {
                class: "text-3xl font-bold mb-6",
                "{title}"
            }

            section {
                class: "bg-white rounded-lg shadow-md p-6",
                h2 {
                    class: "text-xl font-semibold mb-4",
                    "{section}"
                }

                Toggle {
                    text: toggle_text,
                    value: show_notice,
                    on_toggle: move |new_val: bool| {
                        info!("show bap deprecation notice: {new_val}");
                        SETTINGS.write().update(|config| config.show_bap_deprecation = new_val);
                    },
                }

                button {
                    class: "{crate::styles::BLACK_BUTTON}",
                    onclick: move |_| {
                        if !OVERLAY.read().contains_bap_deprecation() {
                            OverlayEnum::new_bap_deprecation().append();
                        }
                    },
                    "{open_text}"
                }
            }
        }
    }
}
