//! Identifier canonicalization
//!
//! This module normalizes free-text names into canonical identifier
//! segments, matching the backend's `cleanID()` rules so that names agreed
//! on here survive the actual move unchanged.

use regex::Regex;
use std::sync::LazyLock;

/// Structural separator between identifier segments.
pub const ID_SEPARATOR: &str = ":";

/// Compiled pattern for characters that cannot appear in a segment
///
/// The set is the backend's forbidden punctuation plus the structural
/// delimiters, including the path separator itself. A run of forbidden
/// characters collapses into a single placeholder.
static FORBIDDEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r##"[!"#$%§&'()+,/;<=>?@\[\]^`{|}~\\:*]+"##).unwrap());

/// Canonicalize a free-text name into an identifier segment
///
/// Replaces every run of forbidden characters with a single `_`, strips the
/// placeholder from both ends, and lower-cases the result. Pure and
/// infallible; an empty return value means the input has no usable name and
/// callers must treat it as invalid.
///
/// # Examples
///
/// ```
/// use pagemove_core::utils::canonicalize;
///
/// assert_eq!(canonicalize("Getting Started"), "getting started");
/// assert_eq!(canonicalize("a:b:c"), "a_b_c");
/// assert_eq!(canonicalize("!!!"), "");
/// ```
pub fn canonicalize(raw: &str) -> String {
    let replaced = FORBIDDEN_RE.replace_all(raw, "_");
    replaced.trim_matches('_').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(canonicalize("Sandbox"), "sandbox");
        assert_eq!(canonicalize("MiXeD CaSe"), "mixed case");
    }

    #[test]
    fn test_collapses_forbidden_runs() {
        assert_eq!(canonicalize("a//b??c"), "a_b_c");
        assert_eq!(canonicalize("one&two"), "one_two");
    }

    #[test]
    fn test_strips_placeholder_from_ends() {
        assert_eq!(canonicalize("!!hello!!"), "hello");
        assert_eq!(canonicalize("(parens)"), "parens");
    }

    #[test]
    fn test_separator_is_forbidden() {
        assert_eq!(canonicalize("ns:page"), "ns_page");
        assert_eq!(canonicalize(":leading"), "leading");
    }

    #[test]
    fn test_unicode_name_with_forbidden_char() {
        // Spaces are allowed; only the forbidden set is replaced.
        assert_eq!(canonicalize("My Página#1"), "my página_1");
    }

    #[test]
    fn test_empty_results_are_valid_output() {
        assert_eq!(canonicalize(""), "");
        assert_eq!(canonicalize("###"), "");
        assert_eq!(canonicalize("_"), "");
    }
}
