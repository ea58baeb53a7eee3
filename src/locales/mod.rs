//! Built-in locale catalogs compiled into the crate.
//!
//! The table is constructed exactly once, on first access, and is never
//! mutated afterwards. Consumers only ever see a shared reference, so
//! concurrent reads from any number of threads need no synchronization.

use std::sync::LazyLock;

use crate::catalog::LocaleResources;

mod sv;

/// Built-in resource table, populated with every compiled-in catalog.
static BUILTIN: LazyLock<LocaleResources> = LazyLock::new(|| {
    let mut resources = LocaleResources::new();
    resources.insert_catalog(sv::catalog());
    tracing::debug!(locales = ?resources.locales(), "Initialized built-in locale resources");
    resources
});

/// Read-only access to the built-in locale resources.
#[must_use]
pub fn builtin() -> &'static LocaleResources {
    &BUILTIN
}
