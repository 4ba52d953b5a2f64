use std::{fs, path::PathBuf};

use eyre::{eyre, Result, WrapErr};

pub const APP_NAME: &str = "rewards-settings";
pub const LOCALES_DIR: &str = "locales";

pub fn config_dir() -> Result<PathBuf> {
    let path = dirs::config_dir()
        .ok_or_else(|| eyre!("no config directory for this platform"))?
        .join(APP_NAME);
    fs::create_dir_all(&path).wrap_err_with(|| format!("creating {}", path.display()))?;
    Ok(path)
}
