//! Message localization.
//!
//! Messages are resolved by code and [`Locale`] with a fallback chain of
//! exact tag, then language only, then the source's default locale, and
//! finally the code itself.

use crate::{PortalError, PortalResult};
use serde::{Deserialize, Serialize};
use shaku::{Component, Interface};
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::path::Path;
use tracing::debug;

/// Well-known message codes.
pub mod codes {
    /// Generic failure shown to callers for any data access error.
    pub const GENERIC_OPERATION_FAILURE: &str = "error.operation.generic";
}

/// A BCP 47 style language tag such as `en` or `pt-BR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Parses a tag, accepting `_` as separator (`pt_BR`).
    ///
    /// The language subtag is lowercased and the region uppercased.
    pub fn parse(tag: &str) -> PortalResult<Self> {
        let mut parts = tag.trim().split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        if language.len() < 2 || language.len() > 3 || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PortalError::configuration(format!("Invalid locale: '{tag}'")));
        }

        let mut normalized = language.to_ascii_lowercase();
        if let Some(region) = parts.next() {
            if region.is_empty() || !region.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(PortalError::configuration(format!("Invalid locale: '{tag}'")));
            }
            normalized.push('-');
            normalized.push_str(&region.to_ascii_uppercase());
        }
        if parts.next().is_some() {
            return Err(PortalError::configuration(format!("Invalid locale: '{tag}'")));
        }

        Ok(Self(normalized))
    }

    /// English.
    #[must_use]
    pub fn english() -> Self {
        Self("en".to_string())
    }

    /// Brazilian Portuguese.
    #[must_use]
    pub fn brazilian_portuguese() -> Self {
        Self("pt-BR".to_string())
    }

    /// Returns the normalized tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the language subtag.
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Locale {
    type Error = PortalError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

/// Resolves message codes to localized text.
pub trait MessageSource: Interface + Send + Sync {
    /// Looks up a message without falling back to the code.
    fn resolve(&self, code: &str, locale: &Locale) -> Option<String>;

    /// Looks up a message, falling back to the code itself.
    fn message(&self, code: &str, locale: &Locale) -> String {
        self.resolve(code, locale).unwrap_or_else(|| code.to_string())
    }
}

/// In-memory message catalog.
#[derive(Component, Debug, Clone)]
#[shaku(interface = MessageSource)]
pub struct StaticMessageSource {
    default_locale: Locale,
    bundles: HashMap<String, HashMap<String, String>>,
}

impl Default for StaticMessageSource {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl StaticMessageSource {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new(default_locale: Locale) -> Self {
        Self {
            default_locale,
            bundles: HashMap::new(),
        }
    }

    /// Creates a catalog with the built-in English and Portuguese messages.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut source = Self::new(Locale::english());
        source.insert(
            &Locale::english(),
            codes::GENERIC_OPERATION_FAILURE,
            "An error occurred while performing the operation. Please try again later.",
        );
        source.insert(
            &Locale::brazilian_portuguese(),
            codes::GENERIC_OPERATION_FAILURE,
            "Ocorreu um erro ao executar a operação. Tente novamente mais tarde.",
        );
        source
    }

    /// Sets the locale used when no bundle matches the requested one.
    #[must_use]
    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }

    /// Returns the fallback locale.
    #[must_use]
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Adds or replaces a single message.
    pub fn insert(&mut self, locale: &Locale, code: impl Into<String>, text: impl Into<String>) {
        self.bundles
            .entry(locale.as_str().to_string())
            .or_default()
            .insert(code.into(), text.into());
    }

    /// Merges a TOML bundle of `code = "text"` pairs.
    ///
    /// Nested tables are flattened with dots, so `[error.operation]` with
    /// `generic = "..."` yields the code `error.operation.generic`.
    pub fn merge_toml(&mut self, locale: &Locale, source: &str) -> PortalResult<()> {
        let table: toml::Table = source
            .parse()
            .map_err(|e| PortalError::configuration(format!("Invalid message bundle for {locale}: {e}")))?;

        let mut flat = Vec::new();
        flatten_table(String::new(), &table, &mut flat)?;
        for (code, text) in flat {
            self.insert(locale, code, text);
        }
        Ok(())
    }

    /// Loads every `<locale>.toml` file in `dir` on top of the current catalog.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> PortalResult<()> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir)
            .map_err(|e| PortalError::configuration(format!("Cannot read {}: {e}", dir.display())))?;

        for entry in entries {
            let path = entry
                .map_err(|e| PortalError::configuration(format!("Cannot read {}: {e}", dir.display())))?
                .path();
            if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let locale = Locale::parse(stem)?;
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| PortalError::configuration(format!("Cannot read {}: {e}", path.display())))?;
            debug!("Loading message bundle {} from {}", locale, path.display());
            self.merge_toml(&locale, &contents)?;
        }
        Ok(())
    }

    fn lookup(&self, tag: &str, code: &str) -> Option<String> {
        self.bundles.get(tag).and_then(|bundle| bundle.get(code)).cloned()
    }
}

impl MessageSource for StaticMessageSource {
    fn resolve(&self, code: &str, locale: &Locale) -> Option<String> {
        self.lookup(locale.as_str(), code)
            .or_else(|| self.lookup(locale.language(), code))
            .or_else(|| self.lookup(self.default_locale.as_str(), code))
            .or_else(|| self.lookup(self.default_locale.language(), code))
    }
}

impl From<StaticMessageSource> for StaticMessageSourceParameters {
    fn from(source: StaticMessageSource) -> Self {
        Self {
            default_locale: source.default_locale,
            bundles: source.bundles,
        }
    }
}

fn flatten_table(prefix: String, table: &toml::Table, out: &mut Vec<(String, String)>) -> PortalResult<()> {
    for (key, value) in table {
        let code = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            toml::Value::String(text) => out.push((code, text.clone())),
            toml::Value::Table(nested) => flatten_table(code, nested, out)?,
            other => {
                return Err(PortalError::configuration(format!(
                    "Message '{code}' must be a string, found {}",
                    other.type_str()
                )))
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse_normalizes() {
        assert_eq!(Locale::parse("pt_br").unwrap().as_str(), "pt-BR");
        assert_eq!(Locale::parse("EN").unwrap().as_str(), "en");
        assert_eq!(Locale::parse(" es-419 ").unwrap().as_str(), "es-419");
        assert_eq!(Locale::parse("pt-BR").unwrap().language(), "pt");
    }

    #[test]
    fn test_locale_parse_rejects_garbage() {
        assert!(Locale::parse("").is_err());
        assert!(Locale::parse("e").is_err());
        assert!(Locale::parse("pt-").is_err());
        assert!(Locale::parse("en-US-x-y").is_err());
        assert!(Locale::parse("1n").is_err());
    }

    #[test]
    fn test_locale_serde_round_trip() {
        let locale: Locale = serde_json::from_str("\"pt_BR\"").unwrap();
        assert_eq!(locale, Locale::brazilian_portuguese());
        assert_eq!(serde_json::to_string(&locale).unwrap(), "\"pt-BR\"");
        assert!(serde_json::from_str::<Locale>("\"???\"").is_err());
    }

    #[test]
    fn test_resolves_exact_locale() {
        let messages = StaticMessageSource::with_defaults();
        let text = messages.message(codes::GENERIC_OPERATION_FAILURE, &Locale::brazilian_portuguese());
        assert!(text.starts_with("Ocorreu um erro"));
    }

    #[test]
    fn test_falls_back_to_language_then_default() {
        let mut messages = StaticMessageSource::with_defaults();
        messages.insert(&Locale::parse("pt").unwrap(), "greeting", "Olá");

        assert_eq!(messages.message("greeting", &Locale::parse("pt-PT").unwrap()), "Olá");

        let text = messages.message(codes::GENERIC_OPERATION_FAILURE, &Locale::parse("de-DE").unwrap());
        assert!(text.starts_with("An error occurred"));
    }

    #[test]
    fn test_unknown_code_falls_back_to_code() {
        let messages = StaticMessageSource::with_defaults();
        assert_eq!(messages.resolve("no.such.code", &Locale::english()), None);
        assert_eq!(messages.message("no.such.code", &Locale::english()), "no.such.code");
    }

    #[test]
    fn test_merge_toml_flattens_tables() {
        let mut messages = StaticMessageSource::new(Locale::english());
        messages
            .merge_toml(
                &Locale::parse("es").unwrap(),
                r#"
                [error.operation]
                generic = "Se produjo un error al realizar la operación."
                "#,
            )
            .unwrap();

        let text = messages.message(codes::GENERIC_OPERATION_FAILURE, &Locale::parse("es-AR").unwrap());
        assert_eq!(text, "Se produjo un error al realizar la operación.");
    }

    #[test]
    fn test_merge_toml_rejects_non_strings() {
        let mut messages = StaticMessageSource::new(Locale::english());
        let err = messages.merge_toml(&Locale::english(), "count = 3").unwrap_err();
        assert!(err.to_string().contains("count"));
    }

    #[test]
    fn test_load_dir_reads_bundles_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("fr.toml"),
            "\"error.operation.generic\" = \"Une erreur est survenue.\"\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("README.md"), "ignored").unwrap();

        let mut messages = StaticMessageSource::with_defaults();
        messages.load_dir(dir.path()).unwrap();

        let text = messages.message(codes::GENERIC_OPERATION_FAILURE, &Locale::parse("fr-CA").unwrap());
        assert_eq!(text, "Une erreur est survenue.");
    }
}
