//! Path validation and normalization.
//!
//! Both functions are pure: same input, same output, no side effects.

use std::borrow::Cow;

/// Checks whether a path is already in canonical form.
///
/// # Rules
///
/// - starts with `/`
/// - no `//` and no `\`
/// - no trailing `/` (except the root `/` itself)
///
/// # Examples
///
/// ```
/// use console_router::path::is_canonical;
///
/// assert!(is_canonical("/"));
/// assert!(is_canonical("/chat/42"));
///
/// assert!(!is_canonical(""));
/// assert!(!is_canonical("chat"));
/// assert!(!is_canonical("/chat/"));
/// assert!(!is_canonical("/chat//42"));
/// ```
pub fn is_canonical(path: &str) -> bool {
    if !path.starts_with('/') {
        return false;
    }
    if path.contains("//") || path.contains('\\') {
        return false;
    }
    path == "/" || !path.ends_with('/')
}

/// Normalizes a path to canonical form.
///
/// Zero-copy for paths that are already canonical (`Cow::Borrowed`); a single
/// allocation otherwise. Collapses repeated separators, converts backslashes,
/// and strips the trailing slash.
///
/// # Examples
///
/// ```
/// use console_router::path::normalize;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize("/agents"), Cow::Borrowed("/agents")));
/// assert_eq!(normalize("/agents/"), "/agents");
/// assert_eq!(normalize("/chat//42"), "/chat/42");
/// assert_eq!(normalize(""), "/");
/// ```
pub fn normalize(path: &str) -> Cow<'_, str> {
    if is_canonical(path) {
        return Cow::Borrowed(path);
    }

    let mut rebuilt = String::with_capacity(path.len() + 1);
    for segment in path.replace('\\', "/").split('/').filter(|s| !s.is_empty()) {
        rebuilt.push('/');
        rebuilt.push_str(segment);
    }

    if rebuilt.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(rebuilt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_paths() {
        assert!(is_canonical("/"));
        assert!(is_canonical("/agents"));
        assert!(is_canonical("/chat/42"));

        assert!(!is_canonical(""));
        assert!(!is_canonical("agents"));
        assert!(!is_canonical("/agents/"));
        assert!(!is_canonical("/chat//42"));
        assert!(!is_canonical("/chat\\42"));
    }

    #[test]
    fn normalize_is_zero_copy_for_canonical_input() {
        assert!(matches!(normalize("/agents"), Cow::Borrowed("/agents")));
        assert!(matches!(normalize("/"), Cow::Borrowed("/")));
    }

    #[test]
    fn normalize_strips_trailing_slash() {
        assert_eq!(normalize("/agents/"), "/agents");
        assert_eq!(normalize("/chat/42/"), "/chat/42");
    }

    #[test]
    fn normalize_collapses_separators() {
        assert_eq!(normalize("/chat//42"), "/chat/42");
        assert_eq!(normalize("//settings///"), "/settings");
        assert_eq!(normalize("\\mcps"), "/mcps");
    }

    #[test]
    fn normalize_empty_to_root() {
        assert_eq!(normalize(""), "/");
        assert_eq!(normalize("///"), "/");
    }
}
