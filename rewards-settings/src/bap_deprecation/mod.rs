mod popup;

pub use popup::{BapDeprecationPopup, BapDeprecationPopupRender, PopupAction};

use eyre::{Result, WrapErr};
use tracing::info;

pub fn open_learn_more(url: &str) -> Result<()> {
    info!("opening {url}");
    opener::open_browser(url).wrap_err_with(|| format!("opening {url}"))
}
