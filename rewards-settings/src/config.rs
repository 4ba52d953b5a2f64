use std::{
    fs, io,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use rewards_locale::{keys, paths, Locale};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

pub const DEFAULT_LEARN_MORE_URL: &str = "https://brave.com/faq-bap-deprecation/";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub language: String,
    pub learn_more_url: String,
    pub show_bap_deprecation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            learn_more_url: DEFAULT_LEARN_MORE_URL.to_string(),
            show_bap_deprecation: true,
        }
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        Ok(paths::config_dir()?.join("config.toml"))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string(self).wrap_err("serializing config")?;
        fs::write(path, toml).wrap_err_with(|| format!("writing {}", path.display()))
    }

    /// A missing file is created with defaults, an unreadable one is moved aside and replaced.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("no config at {}, writing defaults", path.display());
                let config = Self::default();
                config.save_to(path)?;
                return Ok(config);
            }
            Err(e) => return Err(e).wrap_err_with(|| format!("reading {}", path.display())),
        };

        match toml::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(e) => {
                let aside = path.with_extension("toml.invalid");
                warn!("invalid config, moving it to {}: {e}", aside.display());
                fs::rename(path, &aside)
                    .wrap_err_with(|| format!("moving {} aside", path.display()))?;
                let config = Self::default();
                config.save_to(path)?;
                Ok(config)
            }
        }
    }
}

/// Everything the running app reads from disk.
#[derive(Clone, Debug)]
pub struct Settings {
    pub config: Config,
    pub locale: Locale,
    /// `None` when the config dir could not be used, changes then only live in memory.
    pub config_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config: Config::default(),
            locale: Locale::english(),
            config_path: None,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        let path = Config::config_path()?;
        Self::load_from(path)
    }

    /// Locale files are read from the `locales` dir next to the config file.
    pub fn load_from(path: PathBuf) -> Result<Self> {
        let config = Config::load_from(&path)?;

        let locales = path.with_file_name(paths::LOCALES_DIR);
        let locale = match Locale::load_in(&locales, &config.language) {
            Ok(locale) => locale,
            Err(e) => {
                warn!("falling back to english: {e:?}");
                Locale::english()
            }
        };

        let missing = locale.missing_keys(&keys::POPUP_KEYS);
        if !missing.is_empty() {
            warn!("locale '{}' lacks {missing:?}", locale.language());
        }

        Ok(Self {
            config,
            locale,
            config_path: Some(path),
        })
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(settings) => settings,
            Err(e) => {
                error!("failed to load settings: {e:?}");
                Self::default()
            }
        }
    }

    pub fn update(&mut self, f: impl FnOnce(&mut Config)) {
        f(&mut self.config);
        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save_to(path) {
                error!("failed to save config: {e:?}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new() -> Self {
            let path = std::env::temp_dir()
                .join(format!("rewards-settings-{}", uuid::Uuid::new_v4().as_simple()));
            fs::create_dir_all(&path).unwrap();
            Self(path)
        }

        fn config(&self) -> PathBuf {
            self.0.join("config.toml")
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn missing_file_writes_defaults() {
        let dir = TempDir::new();
        let config = Config::load_from(&dir.config()).unwrap();

        assert_eq!(config, Config::default());
        assert!(dir.config().exists());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new();
        fs::write(dir.config(), "show_bap_deprecation = false\n").unwrap();

        let config = Config::load_from(&dir.config()).unwrap();
        assert!(!config.show_bap_deprecation);
        assert_eq!(config.language, "en");
        assert_eq!(config.learn_more_url, DEFAULT_LEARN_MORE_URL);
    }

    #[test]
    fn invalid_file_is_moved_aside() {
        let dir = TempDir::new();
        fs::write(dir.config(), "show_bap_deprecation = \"sometimes\"").unwrap();

        let config = Config::load_from(&dir.config()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.0.join("config.toml.invalid").exists());
    }

    #[test]
    fn settings_default_to_english() {
        let dir = TempDir::new();
        let settings = Settings::load_from(dir.config()).unwrap();

        assert_eq!(settings.locale, Locale::english());
        assert_eq!(settings.config_path, Some(dir.config()));
    }

    #[test]
    fn settings_fall_back_when_locale_file_is_missing() {
        let dir = TempDir::new();
        fs::write(dir.config(), "language = \"de\"\n").unwrap();

        let settings = Settings::load_from(dir.config()).unwrap();
        assert_eq!(settings.config.language, "de");
        assert_eq!(settings.locale, Locale::english());
    }

    #[test]
    fn settings_merge_locale_file_with_english() {
        let dir = TempDir::new();
        fs::write(dir.config(), "language = \"de\"\n").unwrap();
        let locales = dir.0.join(paths::LOCALES_DIR);
        fs::create_dir_all(&locales).unwrap();
        fs::write(locales.join("de.toml"), "bapDeprecationLearnMore = \"Mehr erfahren\"\n").unwrap();

        let settings = Settings::load_from(dir.config()).unwrap();
        assert_eq!(settings.locale.language(), "de");
        assert_eq!(
            settings.locale.get_string(keys::BAP_DEPRECATION_LEARN_MORE),
            "Mehr erfahren"
        );
        assert_eq!(settings.locale.get_string(keys::MODAL_CLOSE), "Close");
    }

    #[test]
    fn update_persists() {
        let dir = TempDir::new();
        let mut settings = Settings {
            config_path: Some(dir.config()),
            ..Default::default()
        };

        settings.update(|config| config.show_bap_deprecation = false);

        let reloaded = Config::load_from(&dir.config()).unwrap();
        assert!(!reloaded.show_bap_deprecation);
    }

    #[test]
    fn update_without_path_stays_in_memory() {
        let mut settings = Settings::default();
        settings.update(|config| config.learn_more_url = "https://example.com".to_string());
        assert_eq!(settings.config.learn_more_url, "https://example.com");
    }
}
