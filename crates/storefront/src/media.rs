//! Media URL normalization.
//!
//! Media URLs stored in the catalog come in three flavors: relative upload
//! paths, absolute URLs on external hosts, and absolute URLs baked with the
//! historical development host (`localhost:3000`). Everything funnels through
//! [`resolve_media_url`] so the storefront always renders URLs rooted at the
//! live API origin.

/// Historical development host baked into some stored media URLs.
const LEGACY_HOST: &str = "localhost:3000";

/// Derive the media origin from an API base URL by stripping the trailing
/// API path segment.
///
/// `https://shop.example/api` becomes `https://shop.example`. A base with no
/// path segment (or a trailing slash) is returned with any trailing slash
/// removed.
#[must_use]
pub fn derived_origin(base_api_url: &str) -> String {
    let trimmed = base_api_url.trim_end_matches('/');
    if let Some((head, _)) = trimmed.rsplit_once('/') {
        // Never strip into the scheme separator of "scheme://host".
        if !head.ends_with(':') && !head.ends_with('/') {
            return head.to_string();
        }
    }
    trimmed.to_string()
}

/// Normalize a stored media URL against the configured API base URL.
///
/// Pure function; the rules, in order:
///
/// 1. Empty input yields an empty string.
/// 2. An absolute URL without the legacy development host is returned
///    unchanged.
/// 3. An absolute URL containing the legacy host is rebased: the path and
///    query after the host are re-prefixed with the derived origin.
/// 4. A relative path is prefixed with the derived origin and exactly one
///    separating slash, whether or not the input had a leading slash.
///
/// The output is always an absolute, non-legacy URL (or empty), so the
/// function is idempotent.
#[must_use]
pub fn resolve_media_url(url: &str, base_api_url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    if url.contains("://") {
        if let Some((_, suffix)) = url.split_once(LEGACY_HOST) {
            return format!("{}{suffix}", derived_origin(base_api_url));
        }
        return url.to_string();
    }

    format!(
        "{}/{}",
        derived_origin(base_api_url),
        url.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::DEFAULT_API_BASE_URL;

    #[test]
    fn test_empty_input() {
        assert_eq!(resolve_media_url("", "https://shop.example/api"), "");
    }

    #[test]
    fn test_external_absolute_url_unchanged() {
        let url = "https://cdn.example.com/x.png";
        assert_eq!(resolve_media_url(url, "https://shop.example/api"), url);
    }

    #[test]
    fn test_legacy_host_rebased() {
        assert_eq!(
            resolve_media_url(
                "http://localhost:3000/uploads/img.png",
                "https://shop.example/api"
            ),
            "https://shop.example/uploads/img.png"
        );
    }

    #[test]
    fn test_legacy_host_rebased_onto_default_base() {
        // With the default base the derived origin is the legacy host itself,
        // so the rewrite is a no-op in effect.
        assert_eq!(
            resolve_media_url("http://localhost:3000/uploads/img.png", DEFAULT_API_BASE_URL),
            "http://localhost:3000/uploads/img.png"
        );
    }

    #[test]
    fn test_legacy_host_with_empty_suffix() {
        assert_eq!(
            resolve_media_url("http://localhost:3000", "https://shop.example/api"),
            "https://shop.example"
        );
    }

    #[test]
    fn test_relative_path_with_leading_slash() {
        assert_eq!(
            resolve_media_url("/uploads/img.png", "https://shop.example/api"),
            "https://shop.example/uploads/img.png"
        );
    }

    #[test]
    fn test_relative_path_without_leading_slash() {
        assert_eq!(
            resolve_media_url("uploads/img.png", "https://shop.example/api"),
            "https://shop.example/uploads/img.png"
        );
    }

    #[test]
    fn test_no_double_slash_at_join() {
        let resolved = resolve_media_url("/uploads/img.png", "https://shop.example/api/");
        assert_eq!(resolved, "https://shop.example/uploads/img.png");
        assert!(!resolved.contains("example//"));
    }

    #[test]
    fn test_idempotent() {
        for input in [
            "/uploads/img.png",
            "uploads/img.png",
            "http://localhost:3000/uploads/img.png",
            "https://cdn.example.com/x.png",
            "",
        ] {
            let once = resolve_media_url(input, "https://shop.example/api");
            let twice = resolve_media_url(&once, "https://shop.example/api");
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_derived_origin_strips_api_segment() {
        assert_eq!(
            derived_origin("https://shop.example/api"),
            "https://shop.example"
        );
        assert_eq!(derived_origin(DEFAULT_API_BASE_URL), "http://localhost:3000");
    }

    #[test]
    fn test_derived_origin_tolerates_trailing_slash() {
        assert_eq!(
            derived_origin("https://shop.example/api/"),
            "https://shop.example"
        );
    }

    #[test]
    fn test_derived_origin_without_path_segment() {
        assert_eq!(
            derived_origin("https://shop.example"),
            "https://shop.example"
        );
    }
}
