//! Child path construction.

use std::ffi::{OsStr, OsString};
use std::path::{self, Path, PathBuf};

/// Join a directory path and the name of one of its entries.
///
/// A separator is inserted only when `parent` is non-empty and does not
/// already end with one. Nothing else about `parent` is normalized, so the
/// printed path is exactly the argument prefix followed by entry names.
pub fn join_entry(parent: &Path, name: &OsStr) -> PathBuf {
    let parent = parent.as_os_str();
    let mut joined = OsString::with_capacity(parent.len() + 1 + name.len());
    joined.push(parent);

    let needs_separator = parent
        .as_encoded_bytes()
        .last()
        .is_some_and(|&b| !path::is_separator(char::from(b)));
    if needs_separator {
        joined.push(path::MAIN_SEPARATOR_STR);
    }

    joined.push(name);
    PathBuf::from(joined)
}
