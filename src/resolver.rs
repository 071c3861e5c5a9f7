use crate::attrs::{ImageAttrs, ResolvedAttrs};
use crate::constants::{SIZES, SRCSET_WIDTHS};

use itertools::Itertools;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Standard URI component encoding: everything except alphanumerics and
/// `- _ . ! ~ * ' ( )` is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

lazy_static::lazy_static! {
    // Case-sensitive prefix test. A malformed scheme (`https:/...`) fails
    // the match and the image is treated as local.
    static ref REMOTE: regex::Regex = regex::Regex::new("^https?://").unwrap();
}

/// Resolves image URLs against a resizing proxy endpoint
#[derive(Debug, Clone)]
pub struct Resolver {
    endpoint: String,
}

impl Resolver {
    /// `endpoint` is used as given; no trailing-slash normalization
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Whether `url` should be routed through the proxy
    pub fn is_remote(url: &str) -> bool {
        REMOTE.is_match(url)
    }

    /// The proxy URL serving `url` resized to `width` pixels
    pub fn proxify(&self, url: &str, width: u32) -> String {
        format!(
            "{0}/img?url={1}&width={2}",
            self.endpoint,
            utf8_percent_encode(url, URI_COMPONENT),
            width
        )
    }

    /// Augment `attrs` with the responsive candidate list.
    /// Remote images get a width-tagged `srcset` through the proxy; local
    /// ones pass through with no `srcset`. Both get the fixed `sizes`
    /// descriptor and keep `src` verbatim.
    pub fn resolve(&self, attrs: ImageAttrs) -> ResolvedAttrs {
        let srcset = match &attrs.src {
            Some(src) if Self::is_remote(src) => Some(
                SRCSET_WIDTHS
                    .iter()
                    .map(|width| format!("{0} {1}w", self.proxify(src, *width), width))
                    .join(", "),
            ),
            _ => None,
        };

        ResolvedAttrs {
            src: attrs.src,
            srcset,
            sizes: SIZES.to_owned(),
            alt: attrs.alt,
            extra: attrs.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn resolver() -> Resolver {
        Resolver::new("https://api.test/api")
    }

    #[test]
    fn test_proxify_encodes_url_component() {
        let result = resolver().proxify("https://example.com/a.jpg", 320);
        assert_eq!(
            "https://api.test/api/img?url=https%3A%2F%2Fexample.com%2Fa.jpg&width=320",
            result
        );
    }

    #[test]
    fn test_proxify_escapes_reserved_query_characters() {
        let result = resolver().proxify("https://example.com/a.jpg?x=1&y=2#frag", 320);
        assert_eq!(
            "https://api.test/api/img?url=https%3A%2F%2Fexample.com%2Fa.jpg%3Fx%3D1%26y%3D2%23frag&width=320",
            result
        );
    }

    #[test]
    fn test_resolve_remote_builds_two_candidates() {
        let attrs = ImageAttrs::from_src("https://example.com/a.jpg");
        let result = resolver().resolve(attrs);
        assert_eq!(
            Some(
                "https://api.test/api/img?url=https%3A%2F%2Fexample.com%2Fa.jpg&width=320 320w, \
                 https://api.test/api/img?url=https%3A%2F%2Fexample.com%2Fa.jpg&width=767 767w"
                    .to_owned()
            ),
            result.srcset
        );
        assert_eq!(Some("https://example.com/a.jpg".to_owned()), result.src);
        assert_eq!("(max-width: 767px) 767px, 320px", result.sizes);
    }

    #[test]
    fn test_resolve_plain_http_is_remote() {
        let attrs = ImageAttrs::from_src("http://example.com/b.png");
        let result = resolver().resolve(attrs);
        let srcset = result.srcset.unwrap();
        assert_eq!(2, srcset.split(", ").count());
        assert!(srcset.ends_with(" 767w"));
        assert!(srcset.contains("url=http%3A%2F%2Fexample.com%2Fb.png&width=320 320w"));
    }

    #[test]
    fn test_resolve_local_passes_through() {
        let mut extra = BTreeMap::new();
        extra.insert("loading".to_owned(), "lazy".to_owned());
        let attrs = ImageAttrs {
            src: Some("/static/logo.png".to_owned()),
            alt: Some("logo".to_owned()),
            extra: extra.clone(),
        };
        let result = resolver().resolve(attrs);
        assert_eq!(None, result.srcset);
        assert_eq!(Some("/static/logo.png".to_owned()), result.src);
        assert_eq!(Some("logo".to_owned()), result.alt);
        assert_eq!(extra, result.extra);
        assert_eq!("(max-width: 767px) 767px, 320px", result.sizes);
    }

    #[test]
    fn test_resolve_absent_src_has_no_srcset() {
        let result = resolver().resolve(ImageAttrs::default());
        assert_eq!(None, result.srcset);
        assert_eq!(None, result.src);
        assert_eq!("(max-width: 767px) 767px, 320px", result.sizes);
    }

    #[test]
    fn test_resolve_empty_src_is_local() {
        let result = resolver().resolve(ImageAttrs::from_src(""));
        assert_eq!(None, result.srcset);
        assert_eq!(Some(String::new()), result.src);
    }

    #[test]
    fn test_malformed_scheme_is_local() {
        // Single slash fails the prefix test
        let result = resolver().resolve(ImageAttrs::from_src("https:/example.com/a.jpg"));
        assert_eq!(None, result.srcset);
    }

    #[test]
    fn test_scheme_match_is_case_sensitive() {
        let result = resolver().resolve(ImageAttrs::from_src("HTTPS://example.com/a.jpg"));
        assert_eq!(None, result.srcset);
    }

    #[test]
    fn test_other_schemes_are_local() {
        assert!(!Resolver::is_remote("ftp://example.com/a.jpg"));
        assert!(!Resolver::is_remote("data:image/png;base64,abcd"));
        assert!(Resolver::is_remote("https://example.com"));
        assert!(Resolver::is_remote("http://example.com"));
    }
}
