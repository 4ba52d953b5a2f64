pub mod notice;

use std::{fmt::Debug, sync::Arc};

use dioxus::prelude::*;
use notice::NoticeRender;
use rewards_locale::keys;
use tracing::{error, info};

use crate::{
    append_overlay,
    bap_deprecation::{open_learn_more, BapDeprecationPopup, BapDeprecationPopupRender},
    pop_overlay, OVERLAY, SETTINGS,
};

#[derive(Clone)]
pub enum OverlayEnum {
    BapDeprecation(BapDeprecationPopup),
    Notice { text: String, button_text: String },
}

impl OverlayEnum {
    pub fn append(self) {
        append_overlay(self);
    }

    pub fn new_notice(text: impl AsRef<str>) -> Self {
        let button_text = SETTINGS.read().locale.get_string(keys::NOTICE_OK);
        Self::Notice {
            text: text.as_ref().to_string(),
            button_text,
        }
    }

    /// Closing hides the notice on later starts, learn more opens the faq in the browser.
    pub fn new_bap_deprecation() -> Self {
        Self::bap_deprecation_with(open_learn_more)
    }

    fn bap_deprecation_with(open: fn(&str) -> eyre::Result<()>) -> Self {
        let (locale, url) = {
            let settings = SETTINGS.read();
            (settings.locale.clone(), settings.config.learn_more_url.clone())
        };
        let failed = locale.get_string(keys::LEARN_MORE_FAILED);

        let popup = BapDeprecationPopup::new(
            locale,
            || {
                info!("bap deprecation notice dismissed");
                SETTINGS
                    .write()
                    .update(|config| config.show_bap_deprecation = false);
                pop_overlay();
            },
            move || {
                if let Err(e) = open(&url) {
                    error!("{e:?}");
                    OverlayEnum::new_notice(format!("{failed}\n{e}")).append();
                }
            },
        );

        Self::BapDeprecation(popup)
    }

    pub fn is_bap_deprecation(&self) -> bool {
        matches!(self, Self::BapDeprecation(_))
    }
}

impl Debug for OverlayEnum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BapDeprecation(_) => f.debug_tuple("bap deprecation").finish(),
            Self::Notice { .. } => f.debug_tuple("notice").finish(),
        }
    }
}

/// Stack of open overlays, only the top one is shown.
#[derive(Debug, Default)]
pub struct Overlays(Vec<Arc<OverlayEnum>>);

impl Overlays {
    pub fn top(&self) -> Option<Arc<OverlayEnum>> {
        self.0.last().cloned()
    }

    pub fn append(&mut self, overlay: OverlayEnum) {
        self.0.push(Arc::new(overlay));
    }

    pub fn pop(&mut self) -> Option<Arc<OverlayEnum>> {
        self.0.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_bap_deprecation(&self) -> bool {
        self.0.iter().any(|overlay| overlay.is_bap_deprecation())
    }
}

/// Shows the page with the top overlay, if any, drawn above it.
#[component]
pub fn Overender(root: Element) -> Element {
    let Some(overlay) = OVERLAY.read().top() else {
        return root;
    };

    let content = match Arc::unwrap_or_clone(overlay) {
        OverlayEnum::BapDeprecation(popup) => rsx! {
            BapDeprecationPopupRender {
                locale: popup.locale.clone(),
                on_close: popup.on_close.clone(),
                on_learn_more: popup.on_learn_more.clone(),
            }
        },
        OverlayEnum::Notice { text, button_text } => rsx! {
            NoticeRender { text, button_text }
        },
    };

    rsx! {
        {root}
        div {
            class: "{crate::styles::BACKDROP}",
            {content}
        }
    }
}
