//! The extension allow-list.
//!
//! Only files whose extension appears here are collected into the document; the
//! mapped value is the language tag written on the opening code fence.

use std::path::Path;

/// Extension (without the dot) to fence language. Matching is case-sensitive.
pub const ALLOW_LIST: &[(&str, &str)] = &[
    ("py", "python"),
    ("html", "html"),
    ("css", "css"),
    ("js", "javascript"),
];

/// Returns the fence language for an extension, if it is allow-listed.
pub fn language_from_extension(ext: &str) -> Option<&'static str> {
    ALLOW_LIST
        .iter()
        .find(|(key, _)| *key == ext)
        .map(|(_, lang)| *lang)
}

/// Returns the fence language for a path, if its extension is allow-listed.
///
/// A leading dot does not start an extension, so `.py` on its own is not collected.
pub fn language_for_path(path: impl AsRef<Path>) -> Option<&'static str> {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .and_then(language_from_extension)
}
