use std::{collections::BTreeMap, fs, path::Path, sync::Arc};

use eyre::{Result, WrapErr};
use tracing::{debug, warn};

pub mod keys;
pub mod paths;

/// A resolved set of ui strings for one language.
///
/// Cloning is cheap, the table itself is shared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locale {
    language: Arc<str>,
    strings: Arc<BTreeMap<String, String>>,
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl Locale {
    pub fn new(language: impl Into<String>, strings: BTreeMap<String, String>) -> Self {
        Self {
            language: Arc::from(language.into()),
            strings: Arc::new(strings),
        }
    }

    pub fn english() -> Self {
        let strings = keys::ENGLISH
            .iter()
            .map(|(key, val)| (key.to_string(), val.to_string()))
            .collect();
        Self::new("en", strings)
    }

    /// Parses a flat toml table of `key = "string"` pairs.
    pub fn from_toml_str(language: impl Into<String>, s: &str) -> Result<Self> {
        let language = language.into();
        let strings: BTreeMap<String, String> =
            toml::from_str(s).wrap_err_with(|| format!("parsing strings for '{language}'"))?;
        Ok(Self::new(language, strings))
    }

    pub fn load_from(language: impl Into<String>, path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(language, &contents)
    }

    /// Loads `<dir>/<language>.toml`, filling gaps from english.
    ///
    /// English is always built in, so asking for it without a file on disk is not an error.
    pub fn load_in(dir: &Path, language: &str) -> Result<Self> {
        let path = dir.join(format!("{language}.toml"));
        if language == "en" && !path.exists() {
            return Ok(Self::english());
        }

        debug!("loading locale from {}", path.display());
        let locale = Self::load_from(language, &path)?;
        Ok(locale.with_fallback(&Self::english()))
    }

    /// Keys missing here are taken from `other`.
    pub fn with_fallback(self, other: &Locale) -> Self {
        let mut strings = Arc::unwrap_or_clone(self.strings);
        for (key, val) in other.strings.iter() {
            strings.entry(key.clone()).or_insert_with(|| val.clone());
        }

        Self {
            language: self.language,
            strings: Arc::new(strings),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn contains(&self, key: &str) -> bool {
        self.strings.contains_key(key)
    }

    /// Unknown keys resolve to the key itself so the ui still shows something.
    pub fn get_string(&self, key: &str) -> String {
        match self.strings.get(key) {
            Some(s) => s.clone(),
            None => {
                warn!("missing string '{key}' for locale '{}'", self.language);
                key.to_string()
            }
        }
    }

    pub fn missing_keys<'a>(&self, wanted: &[&'a str]) -> Vec<&'a str> {
        wanted
            .iter()
            .copied()
            .filter(|key| !self.contains(key))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::*;

    #[test]
    fn english_has_every_popup_key() {
        let locale = Locale::english();
        assert!(locale.missing_keys(&POPUP_KEYS).is_empty());
        assert_eq!(locale.get_string(BAP_DEPRECATION_LEARN_MORE), "Learn more");
    }

    #[test]
    fn unknown_key_resolves_to_itself() {
        let locale = Locale::new("xx", BTreeMap::new());
        assert_eq!(locale.get_string("noSuchKey"), "noSuchKey");
    }

    #[test]
    fn parses_flat_table() {
        let s = r#"
bapDeprecationHeader = "Feature ending"
bapDeprecationLearnMore = "Mehr erfahren"
"#;
        let locale = Locale::from_toml_str("de", s).unwrap();
        assert_eq!(locale.language(), "de");
        assert_eq!(locale.get_string(BAP_DEPRECATION_HEADER), "Feature ending");
        assert_eq!(
            locale.missing_keys(&POPUP_KEYS),
            vec![BAP_DEPRECATION_POPUP_TEXT, MODAL_CLOSE]
        );
    }

    #[test]
    fn nested_tables_are_rejected() {
        let s = "[bap]\nheader = \"x\"\n";
        assert!(Locale::from_toml_str("de", s).is_err());
    }

    #[test]
    fn fallback_keeps_own_strings() {
        let locale = Locale::from_toml_str("de", "bapDeprecationLearnMore = \"Mehr erfahren\"")
            .unwrap()
            .with_fallback(&Locale::english());

        assert!(locale.missing_keys(&POPUP_KEYS).is_empty());
        assert_eq!(locale.get_string(BAP_DEPRECATION_LEARN_MORE), "Mehr erfahren");
        assert_eq!(locale.get_string(MODAL_CLOSE), "Close");
        assert_eq!(locale.language(), "de");
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!("{}.toml", uuid::Uuid::new_v4().as_simple()));
        fs::write(&path, "bapDeprecationHeader = \"Fin de BAP\"\n").unwrap();

        let locale = Locale::load_from("fr", &path).unwrap();
        assert_eq!(locale.get_string(BAP_DEPRECATION_HEADER), "Fin de BAP");

        fs::remove_file(&path).unwrap();
        assert!(Locale::load_from("fr", &path).is_err());
    }

    struct TempDir(std::path::PathBuf);

    impl TempDir {
        fn new() -> Self {
            let path = std::env::temp_dir()
                .join(format!("rewards-locale-{}", uuid::Uuid::new_v4().as_simple()));
            fs::create_dir_all(&path).unwrap();
            Self(path)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn english_needs_no_file() {
        let dir = TempDir::new();
        let locale = Locale::load_in(&dir.0, "en").unwrap();
        assert_eq!(locale, Locale::english());
    }

    #[test]
    fn english_file_overrides_builtin() {
        let dir = TempDir::new();
        fs::write(dir.0.join("en.toml"), "bapDeprecationLearnMore = \"Read more\"\n").unwrap();

        let locale = Locale::load_in(&dir.0, "en").unwrap();
        assert_eq!(locale.get_string(BAP_DEPRECATION_LEARN_MORE), "Read more");
        assert_eq!(locale.get_string(MODAL_CLOSE), "Close");
    }

    #[test]
    fn other_language_without_file_fails() {
        let dir = TempDir::new();
        assert!(Locale::load_in(&dir.0, "de").is_err());
    }

    #[test]
    fn other_language_is_merged_with_english() {
        let dir = TempDir::new();
        fs::write(dir.0.join("de.toml"), "bapDeprecationHeader = \"BAP endet\"\n").unwrap();

        let locale = Locale::load_in(&dir.0, "de").unwrap();
        assert_eq!(locale.language(), "de");
        assert_eq!(locale.get_string(BAP_DEPRECATION_HEADER), "BAP endet");
        assert!(locale.missing_keys(&POPUP_KEYS).is_empty());
    }
}
