// src/checker/resolve.rs
// =============================================================================
// Turns an href value into an absolute URL.
//
// The `url` crate implements the WHATWG resolution rules browsers use, so
// `base.join(href)` already handles every shape of reference:
//   base = "https://example.com/blog/post"
//   "/docs"              -> https://example.com/docs
//   "../about"           -> https://example.com/about
//   "//cdn.example.com"  -> https://cdn.example.com/
//   "https://other.com"  -> https://other.com/
// =============================================================================

use url::Url;

// Resolves a possibly-relative reference against the page it was found on
//
// Returns None for references that are not links to another resource:
// - empty hrefs (they point back at the page itself)
// - fragment-only hrefs like "#section"
// - anything the URL parser rejects (e.g. "http://[broken")
//
// None is not an error: callers just skip the reference.
pub fn resolve_reference(base: &Url, reference: &str) -> Option<Url> {
    let reference = reference.trim();

    if reference.is_empty() || reference.starts_with('#') {
        return None;
    }

    base.join(reference).ok()
}

// Only HTTP(S) links can be probed; mailto:, tel:, javascript:, data:, ftp:
// and friends are dropped.
pub fn is_checkable(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/blog/post").unwrap()
    }

    #[test]
    fn test_resolve_absolute_reference() {
        let url = resolve_reference(&base(), "https://other.com").unwrap();
        assert_eq!(url.as_str(), "https://other.com/");
    }

    #[test]
    fn test_resolve_root_relative_reference() {
        let url = resolve_reference(&base(), "/docs").unwrap();
        assert_eq!(url.as_str(), "https://example.com/docs");
    }

    #[test]
    fn test_resolve_path_relative_reference() {
        let url = resolve_reference(&base(), "../about").unwrap();
        assert_eq!(url.as_str(), "https://example.com/about");

        let url = resolve_reference(&base(), "next").unwrap();
        assert_eq!(url.as_str(), "https://example.com/blog/next");
    }

    #[test]
    fn test_resolve_protocol_relative_reference() {
        let url = resolve_reference(&base(), "//cdn.example.org/lib.js").unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.org/lib.js");
    }

    #[test]
    fn test_skip_fragment_and_empty() {
        assert_eq!(resolve_reference(&base(), "#section"), None);
        assert_eq!(resolve_reference(&base(), ""), None);
        assert_eq!(resolve_reference(&base(), "   "), None);
    }

    #[test]
    fn test_malformed_reference() {
        assert_eq!(resolve_reference(&base(), "http://[::1"), None);
    }

    #[test]
    fn test_checkable_schemes() {
        let mailto = resolve_reference(&base(), "mailto:a@b.com").unwrap();
        let tel = resolve_reference(&base(), "tel:123").unwrap();
        let http = resolve_reference(&base(), "http://example.com").unwrap();

        assert!(!is_checkable(&mailto));
        assert!(!is_checkable(&tel));
        assert!(is_checkable(&http));
        assert!(is_checkable(&base()));
    }
}
