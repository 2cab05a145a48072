//! Page identifier derivation.
//!
//! A page identifier is a store path with the version segment removed and everything from the
//! first `.` onwards dropped:
//!
//! ```rust
//! use docs_cache_core::pages::page_id;
//!
//! assert_eq!(page_id("v1/guide/intro.md").as_deref(), Some("guide/intro"));
//! ```

use crate::store::PATH_SEPARATOR;

/// Derive the page identifier for a store-relative path.
///
/// Returns `None` when nothing is left after stripping (for example `v1/.md`).
#[must_use]
pub fn page_id(path: &str) -> Option<String> {
    let without_version = path
        .split_once(PATH_SEPARATOR)
        .map_or(path, |(_, rest)| rest);
    let id = without_version
        .split_once('.')
        .map_or(without_version, |(stem, _)| stem);

    if id.is_empty() { None } else { Some(id.to_string()) }
}

/// Whether a store path names a documentation source with the given extension.
#[must_use]
pub fn is_page_source(path: &str, extension: &str) -> bool {
    path.strip_suffix(extension)
        .is_some_and(|stem| stem.ends_with('.'))
}

/// Page identifiers for every documentation source in `files`, keeping listing order.
pub fn page_ids<I, S>(files: I, extension: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    files
        .into_iter()
        .filter(|file| is_page_source(file.as_ref(), extension))
        .filter_map(|file| page_id(file.as_ref()))
        .collect()
}

/// Store-relative source path for a page.
#[must_use]
pub fn source_path(version: &str, page: &str, extension: &str) -> String {
    format!("{version}{PATH_SEPARATOR}{page}.{extension}")
}
