//! Translation catalogs and the locale-keyed resource table.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// A failed lookup, the single failure mode of the resource table.
///
/// Reported as a typed value so callers can tell a missing translation
/// apart from an empty one. Whether to fall back to the key name (or to
/// another locale) is caller policy and is not decided here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No catalog is registered for the requested locale.
    #[error("no catalog registered for locale '{locale}'")]
    UnknownLocale {
        /// The locale tag that was requested.
        locale: String,
    },
    /// The locale is known but has no entry for the requested key.
    #[error("locale '{locale}' has no translation for key '{key}'")]
    MissingKey {
        /// The locale tag that was searched.
        locale: String,
        /// The translation key that was not found.
        key: String,
    },
}

/// Translations for a single locale.
///
/// Keys are unique; inserting a key that already exists replaces the
/// previous value (last write wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationCatalog {
    /// Locale tag, e.g. `"sv"`.
    locale: String,
    /// Translation key → translated text.
    entries: HashMap<String, String>,
}

impl TranslationCatalog {
    /// Create an empty catalog for `locale`.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self { locale: locale.into(), entries: HashMap::new() }
    }

    /// The locale tag this catalog belongs to.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Insert a translation. An existing value for `key` is replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up the translated text for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Existence check without retrieving the value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all keys in this catalog.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over all `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Merge `other` into this catalog. Colliding keys take the value
    /// from `other`, matching the last-write-wins insert contract.
    pub(crate) fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }
}

/// Read-only table of translation catalogs, keyed by locale tag.
///
/// Populated during initialization and never mutated afterwards; all
/// consumers hold shared references, so concurrent reads need no
/// synchronization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocaleResources {
    /// Locale tag → catalog.
    catalogs: HashMap<String, TranslationCatalog>,
}

impl LocaleResources {
    /// Create an empty resource table.
    #[must_use]
    pub fn new() -> Self {
        Self { catalogs: HashMap::new() }
    }

    /// Register a catalog under its own locale tag.
    ///
    /// If the locale is already registered the entries are merged,
    /// colliding keys taking the newly inserted value.
    pub fn insert_catalog(&mut self, catalog: TranslationCatalog) {
        match self.catalogs.entry(catalog.locale().to_string()) {
            Entry::Occupied(mut existing) => existing.get_mut().merge(catalog),
            Entry::Vacant(slot) => {
                slot.insert(catalog);
            }
        }
    }

    /// Look up the translated text for `key` under `locale`.
    ///
    /// # Errors
    /// - [`LookupError::UnknownLocale`] if no catalog exists for `locale`
    /// - [`LookupError::MissingKey`] if the catalog has no entry for `key`
    pub fn get(&self, locale: &str, key: &str) -> Result<&str, LookupError> {
        let catalog = self
            .catalogs
            .get(locale)
            .ok_or_else(|| LookupError::UnknownLocale { locale: locale.to_string() })?;

        catalog.get(key).ok_or_else(|| LookupError::MissingKey {
            locale: locale.to_string(),
            key: key.to_string(),
        })
    }

    /// Existence check without retrieving the value.
    #[must_use]
    pub fn has_key(&self, locale: &str, key: &str) -> bool {
        self.catalogs.get(locale).is_some_and(|catalog| catalog.contains_key(key))
    }

    /// The catalog registered for `locale`, if any.
    #[must_use]
    pub fn catalog(&self, locale: &str) -> Option<&TranslationCatalog> {
        self.catalogs.get(locale)
    }

    /// All registered locale tags, sorted for deterministic output.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.catalogs.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    fn sv_catalog() -> TranslationCatalog {
        let mut catalog = TranslationCatalog::new("sv");
        catalog.insert("close", "Stäng");
        catalog.insert("cancel", "Avbryt");
        catalog.insert("refresh", "Uppdatera");
        catalog
    }

    fn resources() -> LocaleResources {
        let mut resources = LocaleResources::new();
        resources.insert_catalog(sv_catalog());
        resources
    }

    #[googletest::test]
    fn test_catalog_insert_and_get() {
        let catalog = sv_catalog();

        expect_that!(catalog.locale(), eq("sv"));
        expect_that!(catalog.get("close"), some(eq("Stäng")));
        expect_that!(catalog.get("missing"), none());
        expect_that!(catalog.len(), eq(3));
        expect_that!(catalog.is_empty(), eq(false));
    }

    #[googletest::test]
    fn test_catalog_insert_overwrites_existing_key() {
        let mut catalog = TranslationCatalog::new("sv");
        catalog.insert("alertOkButton", "OK");
        catalog.insert("alertOkButton", "Kunde ej skicka verifieringsmail, försök igen senare");

        expect_that!(
            catalog.get("alertOkButton"),
            some(eq("Kunde ej skicka verifieringsmail, försök igen senare"))
        );
        expect_that!(catalog.len(), eq(1));
    }

    #[googletest::test]
    fn test_catalog_contains_key() {
        let catalog = sv_catalog();

        expect_that!(catalog.contains_key("cancel"), eq(true));
        expect_that!(catalog.contains_key("cancel2"), eq(false));
    }

    #[googletest::test]
    fn test_catalog_keys_and_iter() {
        let catalog = sv_catalog();

        let mut keys: Vec<&str> = catalog.keys().collect();
        keys.sort_unstable();
        assert_that!(keys, elements_are![eq("cancel"), eq("close"), eq("refresh")]);

        let mut pairs: Vec<(&str, &str)> = catalog.iter().collect();
        pairs.sort_unstable();
        assert_that!(pairs[0], eq(("cancel", "Avbryt")));
    }

    #[googletest::test]
    fn test_resources_get_known_key() {
        let resources = resources();

        assert_that!(resources.get("sv", "close"), ok(eq("Stäng")));
    }

    #[googletest::test]
    fn test_resources_get_unknown_locale() {
        let resources = resources();

        assert_that!(
            resources.get("xx", "close"),
            err(eq(&LookupError::UnknownLocale { locale: "xx".to_string() }))
        );
    }

    #[googletest::test]
    fn test_resources_get_unknown_key() {
        let resources = resources();

        assert_that!(
            resources.get("sv", "doesNotExist"),
            err(eq(&LookupError::MissingKey {
                locale: "sv".to_string(),
                key: "doesNotExist".to_string(),
            }))
        );
    }

    #[rstest]
    #[case::known_key("sv", "close", true)]
    #[case::unknown_key("sv", "close2", false)]
    #[case::unknown_locale("xx", "close", false)]
    fn test_resources_has_key(#[case] locale: &str, #[case] key: &str, #[case] expected: bool) {
        assert_eq!(resources().has_key(locale, key), expected);
    }

    #[googletest::test]
    fn test_resources_locales_sorted() {
        let mut resources = resources();
        resources.insert_catalog(TranslationCatalog::new("en"));
        resources.insert_catalog(TranslationCatalog::new("de"));

        assert_that!(resources.locales(), elements_are![eq("de"), eq("en"), eq("sv")]);
    }

    #[googletest::test]
    fn test_insert_catalog_merges_same_locale() {
        let mut resources = resources();

        let mut extra = TranslationCatalog::new("sv");
        extra.insert("close", "Stäng fönstret");
        extra.insert("help", "Hjälp");
        resources.insert_catalog(extra);

        // Colliding key takes the newer value, existing keys survive.
        assert_that!(resources.get("sv", "close"), ok(eq("Stäng fönstret")));
        assert_that!(resources.get("sv", "help"), ok(eq("Hjälp")));
        assert_that!(resources.get("sv", "cancel"), ok(eq("Avbryt")));
    }

    #[googletest::test]
    fn test_catalog_serde_round_trip() {
        let catalog = sv_catalog();

        let json = serde_json::to_string(&catalog).unwrap();
        let restored: TranslationCatalog = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, catalog);
        expect_that!(restored.get("close"), some(eq("Stäng")));
    }

    #[rstest]
    fn test_lookup_error_messages() {
        let unknown_locale = LookupError::UnknownLocale { locale: "xx".to_string() };
        let missing_key =
            LookupError::MissingKey { locale: "sv".to_string(), key: "close2".to_string() };

        assert_eq!(unknown_locale.to_string(), "no catalog registered for locale 'xx'");
        assert_eq!(missing_key.to_string(), "locale 'sv' has no translation for key 'close2'");
    }
}
