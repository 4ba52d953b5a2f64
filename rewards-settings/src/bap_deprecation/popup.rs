use std::{fmt::Debug, sync::Arc};

use dioxus::prelude::*;
use rewards_locale::{keys, Locale};
use tracing::debug;

use crate::components::{ModalCloseButton, WarningIcon};

/// The two gestures the popup reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupAction {
    Close,
    LearnMore,
}

/// Tells the user that BAP is going away.
///
/// Both hooks are required and only ever run in response to the matching button.
/// Removing the popup after `on_close` is up to whoever shows it.
///
/// ```compile_fail
/// use rewards_locale::Locale;
/// use rewards_settings::bap_deprecation::BapDeprecationPopup;
///
/// let popup = BapDeprecationPopup::new(Locale::english(), || {});
/// ```
#[derive(Props, Clone)]
pub struct BapDeprecationPopup {
    pub locale: Locale,
    pub on_close: Arc<Box<dyn Fn()>>,
    pub on_learn_more: Arc<Box<dyn Fn()>>,
}

impl PartialEq for BapDeprecationPopup {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
            && Arc::ptr_eq(&self.on_close, &other.on_close)
            && Arc::ptr_eq(&self.on_learn_more, &other.on_learn_more)
    }
}

impl Debug for BapDeprecationPopup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BapDeprecationPopup")
            .field("language", &self.locale.language())
            .finish_non_exhaustive()
    }
}

impl BapDeprecationPopup {
    pub fn new(
        locale: Locale,
        on_close: impl Fn() + 'static,
        on_learn_more: impl Fn() + 'static,
    ) -> Self {
        Self {
            locale,
            on_close: Arc::new(Box::new(on_close)),
            on_learn_more: Arc::new(Box::new(on_learn_more)),
        }
    }

    pub fn trigger(&self, action: PopupAction) {
        debug!("bap deprecation popup: {action:?}");
        match action {
            PopupAction::Close => (self.on_close)(),
            PopupAction::LearnMore => (self.on_learn_more)(),
        }
    }
}

#[component]
pub fn BapDeprecationPopupRender(props: BapDeprecationPopup) -> Element {
    let header = props.locale.get_string(keys::BAP_DEPRECATION_HEADER);
    let text = props.locale.get_string(keys::BAP_DEPRECATION_POPUP_TEXT);
    let learn_more = props.locale.get_string(keys::BAP_DEPRECATION_LEARN_MORE);
    let close_label = props.locale.get_string(keys::MODAL_CLOSE);

    let close = props.clone();
    let learn = props.clone();

    rsx! {
        div {
            class: "{crate::styles::POPUP}",
            role: "dialog",
            aria_modal: "true",

            ModalCloseButton {
                label: close_label,
                on_click: move |_| close.trigger(PopupAction::Close),
            }

            div {
                class: "{crate::styles::POPUP_CONTENT}",
                h3 {
                    class: "{crate::styles::POPUP_HEADING}",
                    WarningIcon {}
                    span { "{header}" }
                }
                p {
                    class: "{crate::styles::POPUP_TEXT}",
                    "{text}"
                }
                div {
                    class: "{crate::styles::POPUP_ACTION}",
                    button {
                        class: "{crate::styles::BLUE_BUTTON}",
                        onclick: move |_| learn.trigger(PopupAction::LearnMore),
                        "{learn_more}"
                    }
                }
            }
        }
    }
}
