//! i18n-resources
//!
//! Static translation resources with locale-keyed lookup.
//!
//! The crate holds an immutable table mapping locale tags (e.g. `"sv"`)
//! to catalogs of translation key → translated text, plus a loader for
//! JSON catalog files. Interpolation, pluralization, and fallback-locale
//! chaining belong to the embedding i18n layer; placeholder tokens such
//! as `__PERCENTAGE__` are opaque substrings here.

pub mod catalog;
pub mod loader;
pub mod locales;

pub use catalog::{
    LocaleResources,
    LookupError,
    TranslationCatalog,
};
pub use loader::{
    LoadError,
    load_catalog_dir,
    load_catalog_file,
};
