#![allow(non_snake_case)]

use dioxus::prelude::*;
use tracing::info;

use crate::{
    config::Settings,
    overlays::{Overender, OverlayEnum, Overlays},
    pages::SettingsPage,
};

pub mod bap_deprecation;
pub mod components;
pub mod config;
pub mod overlays;
pub mod pages;

const STYLE_CSS: &str = include_str!("../public/style.css");

pub static SETTINGS: GlobalSignal<Settings> = Signal::global(initial_settings);
pub static OVERLAY: GlobalSignal<Overlays> = Signal::global(Default::default);

#[cfg(not(test))]
fn initial_settings() -> Settings {
    Settings::load_or_default()
}

#[cfg(test)]
fn initial_settings() -> Settings {
    Settings::default()
}

pub fn pop_overlay() {
    OVERLAY.write().pop();
}

pub fn append_overlay(overlay: OverlayEnum) {
    info!("showing overlay: {overlay:?}");
    OVERLAY.write().append(overlay);
}

#[component]
pub fn TheApp() -> Element {
    use_hook(|| {
        if SETTINGS.read().config.show_bap_deprecation {
            OverlayEnum::new_bap_deprecation().append();
        }
    });

    rsx! {
        style { dangerous_inner_html: "{STYLE_CSS}" }

        div {
            class: "w-screen min-h-screen bg-gray-100",
            Overender {
                root: rsx! { SettingsPage {} },
            }
        }
    }
}

pub mod styles {
    pub const BLACK_BUTTON: &str = "mt-2 inline-flex items-center text-white bg-gray-800 border-0 py-1 px-3 focus:outline-none hover:bg-gray-700 rounded text-base md:mt-0";
    pub const BLUE_BUTTON: &str = "text-center py-2 px-6 bg-blue-500 text-white font-bold rounded-lg shadow hover:bg-blue-600 transition";
    pub const BACKDROP: &str = "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50";
    pub const MODAL_CLOSE: &str = "modal-close";
    pub const WARNING_ICON: &str = "warning-icon";
    pub const POPUP: &str = "bap-deprecation-popup";
    pub const POPUP_CONTENT: &str = "bap-deprecation-content";
    pub const POPUP_HEADING: &str = "bap-deprecation-heading";
    pub const POPUP_TEXT: &str = "bap-deprecation-text";
    pub const POPUP_ACTION: &str = "bap-deprecation-action";
}
