//! HTML Meta Tag Extraction
//!
//! Walks a parsed document in document order and collects one [`MetaTag`]
//! per `<meta>` element that carries both a name and a content value.
//!
//! The name comes from either the `name` or the `property` attribute. Both
//! keys write the same slot while scanning the tag's attributes, so whichever
//! appears last in the attribute list wins:
//!
//! ```rust
//! use rs_metatags::extract_meta_tags_from_str;
//!
//! let tags = extract_meta_tags_from_str(r#"<meta name="a" property="og:b" content="x">"#);
//! assert_eq!(tags[0].name(), "og:b");
//!
//! let tags = extract_meta_tags_from_str(r#"<meta property="og:b" name="a" content="x">"#);
//! assert_eq!(tags[0].name(), "a");
//! ```

use std::io::Read;

use dom_query::Document;
use tracing::debug;

use crate::dom;
use crate::error::{Error, Result};
use crate::result::MetaTag;

const META_TAG: &str = "meta";

/// Read a byte stream to the end, parse it and extract its meta tags.
///
/// # Errors
///
/// Returns [`Error::ParseFailed`] if reading the stream fails. The parser
/// itself accepts any input, so an unreadable stream is the only failure.
pub fn extract_meta_tags<R: Read>(mut reader: R) -> Result<Vec<MetaTag>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(Error::ParseFailed)?;

    let html = dom::decode_utf8(&bytes);
    Ok(extract_meta_tags_from_str(&html))
}

/// Extract meta tags from an HTML string.
#[must_use]
pub fn extract_meta_tags_from_str(html: &str) -> Vec<MetaTag> {
    let doc = dom::parse(html);
    examine_meta(&doc)
}

/// Collect meta tags from an already parsed document, in document order.
#[must_use]
pub fn examine_meta(doc: &Document) -> Vec<MetaTag> {
    let mut tags = Vec::new();
    let mut skipped = 0usize;

    dom::walk_elements(doc.root(), |node| {
        if dom::tag_name(node).as_deref() != Some(META_TAG) {
            return;
        }
        let attrs = dom::get_all_attributes(node);
        match scan_meta_attributes(attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))) {
            Some(tag) => tags.push(tag),
            None => skipped += 1,
        }
    });

    debug!(found = tags.len(), skipped, "examined meta tags");
    tags
}

/// Decide what a single `<meta>` element contributes, given its attributes
/// in attribute-list order.
///
/// `name` and `property` share one slot, `content` has its own; the last
/// matching attribute overwrites earlier ones. Returns `None` unless both
/// slots end up non-empty.
#[must_use]
pub fn scan_meta_attributes<'a, I>(attrs: I) -> Option<MetaTag>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut name = "";
    let mut content = "";

    for (key, value) in attrs {
        match key {
            "name" | "property" => name = value,
            "content" => content = value,
            _ => {}
        }
    }

    if name.is_empty() || content.is_empty() {
        return None;
    }
    Some(MetaTag::new(name.to_string(), content.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(tags: &[MetaTag]) -> Vec<(&str, &str)> {
        tags.iter().map(MetaTag::as_pair).collect()
    }

    #[test]
    fn test_name_content() {
        let tags = extract_meta_tags_from_str(r#"<meta name="description" content="A test page">"#);
        assert_eq!(pairs(&tags), vec![("description", "A test page")]);
    }

    #[test]
    fn test_property_content() {
        let tags = extract_meta_tags_from_str(r#"<meta property="og:title" content="Test">"#);
        assert_eq!(pairs(&tags), vec![("og:title", "Test")]);
    }

    #[test]
    fn test_missing_content_is_skipped() {
        assert!(extract_meta_tags_from_str(r#"<meta name="x">"#).is_empty());
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let html = r#"
            <meta name="" content="orphan">
            <meta name="keywords" content="">
            <meta property="" content="">
        "#;
        assert!(extract_meta_tags_from_str(html).is_empty());
    }

    #[test]
    fn test_charset_and_http_equiv_are_skipped() {
        let html = r#"<head>
            <meta charset="utf-8">
            <meta http-equiv="refresh" content="5">
            <meta itemprop="author" content="Jane">
        </head>"#;
        assert!(extract_meta_tags_from_str(html).is_empty());
    }

    #[test]
    fn test_document_order() {
        let html = r#"<meta name="a" content="1"><meta name="b" content="2">"#;
        let tags = extract_meta_tags_from_str(html);
        assert_eq!(pairs(&tags), vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_meta_in_body_follows_head() {
        let html = r#"<!DOCTYPE html>
        <html>
        <head><meta name="first" content="1"></head>
        <body>
            <div><meta itemprop="x" property="second" content="2"></div>
            <p>text</p>
            <meta name="third" content="3">
        </body>
        </html>"#;
        let tags = extract_meta_tags_from_str(html);
        assert_eq!(pairs(&tags), vec![("first", "1"), ("second", "2"), ("third", "3")]);
    }

    #[test]
    fn test_last_name_key_wins() {
        let tags = extract_meta_tags_from_str(
            r#"<meta name="twitter:title" property="og:title" content="T">"#,
        );
        assert_eq!(pairs(&tags), vec![("og:title", "T")]);

        let tags = extract_meta_tags_from_str(
            r#"<meta property="og:title" name="twitter:title" content="T">"#,
        );
        assert_eq!(pairs(&tags), vec![("twitter:title", "T")]);
    }

    #[test]
    fn test_empty_later_key_clears_name() {
        let tags = extract_meta_tags_from_str(r#"<meta name="a" property="" content="x">"#);
        assert!(tags.is_empty());
    }

    #[test]
    fn test_scan_duplicate_content_last_wins() {
        let tag = scan_meta_attributes([("content", "first"), ("name", "n"), ("content", "second")]);
        assert_eq!(tag.as_ref().map(MetaTag::as_pair), Some(("n", "second")));
    }

    #[test]
    fn test_scan_ignores_unknown_keys() {
        let tag = scan_meta_attributes([("lang", "en"), ("property", "p"), ("scheme", "s"), ("content", "c")]);
        assert_eq!(tag.as_ref().map(MetaTag::as_pair), Some(("p", "c")));
        assert!(scan_meta_attributes([("content", "c")]).is_none());
        assert!(scan_meta_attributes(std::iter::empty()).is_none());
    }

    #[test]
    fn test_attribute_keys_are_lowercased_by_parser() {
        let tags = extract_meta_tags_from_str(r#"<META Name="Author" CONTENT="Jane">"#);
        assert_eq!(pairs(&tags), vec![("Author", "Jane")]);
    }

    #[test]
    fn test_values_are_not_trimmed_or_lowercased() {
        let tags = extract_meta_tags_from_str(r#"<meta name=" Keywords " content=" a, b ">"#);
        assert_eq!(pairs(&tags), vec![(" Keywords ", " a, b ")]);
    }

    #[test]
    fn test_entities_are_decoded() {
        let tags = extract_meta_tags_from_str(r#"<meta name="title" content="Tom &amp; Jerry">"#);
        assert_eq!(pairs(&tags), vec![("title", "Tom & Jerry")]);
    }

    #[test]
    fn test_empty_document() {
        assert!(extract_meta_tags_from_str("").is_empty());
        assert!(extract_meta_tags_from_str("<p>no meta here</p>").is_empty());
    }

    #[test]
    fn test_idempotent() {
        let html = r#"<meta name="a" content="1"><meta property="og:b" content="2">"#;
        let doc = dom::parse(html);
        assert_eq!(examine_meta(&doc), examine_meta(&doc));
        assert_eq!(extract_meta_tags_from_str(html), extract_meta_tags_from_str(html));
    }

    #[test]
    fn test_extract_from_reader() {
        let html: &[u8] = br#"<meta property="og:type" content="article">"#;
        let tags = extract_meta_tags(html).unwrap_or_default();
        assert_eq!(pairs(&tags), vec![("og:type", "article")]);
    }

    #[test]
    fn test_reader_failure_is_parse_failed() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset"))
            }
        }

        let result = extract_meta_tags(Broken);
        assert!(matches!(result, Err(Error::ParseFailed(_))));
    }
}
