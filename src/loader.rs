//! Loading translation catalogs from JSON files.
//!
//! One file per locale: the file stem is the locale tag
//! (`locales/sv.json` → `"sv"`). Nested objects are flattened into
//! dot-separated keys so consumers always see a flat key space.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;
use serde_json::Value;
use thiserror::Error;

use crate::catalog::TranslationCatalog;

/// Errors raised while loading catalog files.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON.
    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top level of the document is not an object.
    #[error("catalog file '{path}' must contain a top-level object")]
    NotAnObject {
        /// Offending file.
        path: PathBuf,
    },

    /// The file name does not look like a locale tag.
    #[error("cannot derive a locale tag from file name '{path}'")]
    UnknownLocaleTag {
        /// Offending file.
        path: PathBuf,
    },

    /// The discovery glob could not be built.
    #[error("invalid catalog file pattern: {0}")]
    Pattern(#[from] globset::Error),
}

/// Check whether `tag` has the shape of a locale tag.
///
/// Accepts a two- or three-letter lowercase primary subtag optionally
/// followed by script/region subtags separated by `-` or `_`:
/// `sv`, `sv-SE`, `en_US`, `az-Cyrl-AZ`.
#[must_use]
pub fn is_locale_tag(tag: &str) -> bool {
    let mut parts = tag.split(['-', '_']);

    let primary = parts.next().unwrap_or_default();
    if !(2..=3).contains(&primary.len()) || !primary.chars().all(|c| c.is_ascii_lowercase()) {
        return false;
    }

    parts.all(|part| {
        (2..=4).contains(&part.len()) && part.chars().all(|c| c.is_ascii_alphanumeric())
    })
}

/// Derive the locale tag for a catalog file from its file stem.
fn locale_from_path(path: &Path) -> Result<String, LoadError> {
    let stem = path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();

    if is_locale_tag(&stem) {
        Ok(stem)
    } else {
        Err(LoadError::UnknownLocaleTag { path: path.to_path_buf() })
    }
}

/// Load a single catalog file.
///
/// Nested objects are flattened into dot-separated keys, array elements
/// are indexed as `[i]`, and non-string scalars are stringified. Keys
/// that collide after flattening follow the catalog's last-write-wins
/// insert contract.
///
/// # Errors
/// - the file stem is not a locale tag
/// - the file cannot be read
/// - the content is not JSON, or its top level is not an object
pub fn load_catalog_file(path: &Path) -> Result<TranslationCatalog, LoadError> {
    let locale = locale_from_path(path)?;
    tracing::debug!(path = %path.display(), locale = %locale, "Loading catalog file");

    let content = std::fs::read_to_string(path)?;
    let json: Value = serde_json::from_str(&content)?;
    if !json.is_object() {
        return Err(LoadError::NotAnObject { path: path.to_path_buf() });
    }

    let mut catalog = TranslationCatalog::new(locale);
    collect_entries(&json, None, &mut catalog);
    Ok(catalog)
}

/// Recursively flatten `value` into `catalog`, joining object keys with
/// `.` and indexing array elements as `[i]`.
fn collect_entries(value: &Value, prefix: Option<&str>, catalog: &mut TranslationCatalog) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let full_key = prefix.map_or_else(|| key.clone(), |p| format!("{p}.{key}"));
                collect_entries(child, Some(&full_key), catalog);
            }
        }
        Value::Array(elements) => {
            for (index, child) in elements.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                collect_entries(child, Some(&full_key), catalog);
            }
        }
        Value::String(text) => {
            if let Some(key) = prefix {
                catalog.insert(key, text.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                catalog.insert(key, value.to_string());
            }
        }
    }
}

/// Build the glob set matching catalog files.
fn catalog_file_pattern() -> Result<GlobSet, LoadError> {
    let mut builder = GlobSetBuilder::new();
    builder.add(Glob::new("**/*.json")?);
    Ok(builder.build()?)
}

/// Load every catalog file found under `dir`.
///
/// The walk is gitignore-aware and only `*.json` files are considered.
/// Files that fail to load (unreadable, malformed, stem not a locale
/// tag) are skipped with a warning so one broken file does not take
/// down the whole scan.
///
/// # Errors
/// Returns an error only if the match pattern cannot be built.
pub fn load_catalog_dir(dir: &Path) -> Result<Vec<TranslationCatalog>, LoadError> {
    let pattern = catalog_file_pattern()?;
    let mut catalogs = Vec::new();

    for result in WalkBuilder::new(dir)
        .hidden(false)
        .git_ignore(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Ok(relative_path) = path.strip_prefix(dir) else {
            continue;
        };
        if !pattern.is_match(relative_path) {
            continue;
        }

        match load_catalog_file(path) {
            Ok(catalog) => catalogs.push(catalog),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "Skipping catalog file");
            }
        }
    }

    Ok(catalogs)
}
