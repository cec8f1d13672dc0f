//! Result types for extraction output.

use serde::Serialize;

/// One `<meta>` declaration with a non-empty name and content.
///
/// `name` comes from the `name` or `property` attribute, whichever appeared
/// last on the tag. Values are only produced by the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MetaTag {
    name: String,
    content: String,
}

impl MetaTag {
    pub(crate) fn new(name: String, content: String) -> Self {
        debug_assert!(!name.is_empty() && !content.is_empty());
        Self { name, content }
    }

    /// Value of the `name` or `property` attribute.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the `content` attribute.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Borrow both fields as a `(name, content)` pair.
    #[must_use]
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.name, &self.content)
    }
}
