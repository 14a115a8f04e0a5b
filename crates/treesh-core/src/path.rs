//! Path string helpers.
//!
//! Paths are `/`-separated. A leading `/` makes a path absolute; empty
//! segments (from leading, doubled or trailing slashes) are ignored when
//! walking. `..` means the parent container. Nothing else is special.

use crate::entity::SEPARATOR;

/// Parent-directory segment.
pub const PARENT: &str = "..";

/// True if the path starts at the root.
#[inline]
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEPARATOR)
}

/// Non-empty segments of a path, in order.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR).filter(|s| !s.is_empty())
}

/// Split a path into the container part and the final name.
///
/// - `"a/b/c"` → `("a/b", "c")`
/// - `"c"` → `("", "c")`
/// - `"/c"` → `("/", "c")` (stays absolute)
/// - `"a/"` → `("a", "")` (empty name; callers reject it)
pub fn split_parent(path: &str) -> (&str, &str) {
    match path.rsplit_once(SEPARATOR) {
        Some(("", name)) => ("/", name),
        Some((parent, name)) => (parent, name),
        None => ("", path),
    }
}

/// Split like [`split_parent`], but ignore one trailing separator.
///
/// Used for lookups where `"dir/"` should still name `dir`.
pub fn split_entry(path: &str) -> (&str, &str) {
    let trimmed = match path.strip_suffix(SEPARATOR) {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };
    split_parent(trimmed)
}
