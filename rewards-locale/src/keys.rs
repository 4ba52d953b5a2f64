//! Identifiers of every string the settings ui asks for.

pub const BAP_DEPRECATION_HEADER: &str = "bapDeprecationHeader";
pub const BAP_DEPRECATION_POPUP_TEXT: &str = "bapDeprecationPopupText";
pub const BAP_DEPRECATION_LEARN_MORE: &str = "bapDeprecationLearnMore";
pub const MODAL_CLOSE: &str = "modalClose";

pub const SETTINGS_TITLE: &str = "settingsTitle";
pub const REWARDS_SECTION: &str = "rewardsSection";
pub const SHOW_BAP_DEPRECATION: &str = "showBapDeprecation";
pub const OPEN_BAP_DEPRECATION: &str = "openBapDeprecation";
pub const NOTICE_OK: &str = "noticeOk";
pub const LEARN_MORE_FAILED: &str = "learnMoreFailed";

/// Keys the deprecation popup and its close button resolve on every render.
pub const POPUP_KEYS: [&str; 4] = [
    BAP_DEPRECATION_HEADER,
    BAP_DEPRECATION_POPUP_TEXT,
    BAP_DEPRECATION_LEARN_MORE,
    MODAL_CLOSE,
];

pub(crate) const ENGLISH: &[(&str, &str)] = &[
    (BAP_DEPRECATION_HEADER, "Changes to BAP in Japan"),
    (
        BAP_DEPRECATION_POPUP_TEXT,
        "Due to regulatory changes, BAP (Basic Attention Points) is being discontinued. Any BAP you have earned will be converted, and Brave Rewards will continue to work with a supported custodial account.",
    ),
    (BAP_DEPRECATION_LEARN_MORE, "Learn more"),
    (MODAL_CLOSE, "Close"),
    (SETTINGS_TITLE, "Settings"),
    (REWARDS_SECTION, "Brave Rewards"),
    (SHOW_BAP_DEPRECATION, "Show BAP notice"),
    (OPEN_BAP_DEPRECATION, "View BAP notice"),
    (NOTICE_OK, "OK"),
    (LEARN_MORE_FAILED, "Could not open the browser:"),
];
