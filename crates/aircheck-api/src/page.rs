//! Continuation-token pagination cursor.

use std::fmt;

/// Opaque, server-issued cursor into a paginated listing.
///
/// A token is only meaningful when replayed against the exact query
/// parameters that produced it; reuse across different filter values is
/// undefined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuationToken(String);

impl ContinuationToken {
    /// Raw token value, for replay as the `next_token` query parameter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ContinuationToken {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ContinuationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One page of a listed resource plus its continuation token.
///
/// The cursor never prefetches; callers request the next page by re-invoking
/// the owning query operation with [`Page::next_token`].
#[derive(Debug, Clone)]
pub struct Page<T> {
    items: Vec<T>,
    next_token: Option<ContinuationToken>,
}

impl<T> Page<T> {
    /// Wraps a decoded listing and the wire `next_token` value.
    #[must_use]
    pub fn new(items: Vec<T>, next_token: Option<String>) -> Self {
        Self {
            items,
            next_token: next_token.map(ContinuationToken::from),
        }
    }

    /// Items in service-defined order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page, yielding its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Cursor for the next page, `None` on the terminal page.
    #[must_use]
    pub const fn next_token(&self) -> Option<&ContinuationToken> {
        self.next_token.as_ref()
    }

    /// Whether a further page exists.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.next_token.is_some()
    }

    /// Number of items in this page.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page carries no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_page_with_token_has_more() {
        // Arrange & Act
        let page = Page::new(vec![1, 2, 3], Some(String::from("X")));

        // Assert
        assert!(page.has_more());
        assert_eq!(page.next_token().unwrap().as_str(), "X");
        assert_eq!(page.len(), 3);
    }

    #[test]
    fn test_terminal_page_has_no_token() {
        // Arrange & Act
        let page: Page<u32> = Page::new(vec![], None);

        // Assert
        assert!(!page.has_more());
        assert!(page.next_token().is_none());
        assert!(page.is_empty());
    }

    #[test]
    fn test_into_items_preserves_order() {
        // Arrange
        let page = Page::new(vec!["a", "b", "c"], None);

        // Act
        let items = page.into_items();

        // Assert
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_token_display_matches_raw_value() {
        // Arrange
        let token = ContinuationToken::from(String::from("cursor-1"));

        // Act & Assert
        assert_eq!(token.to_string(), "cursor-1");
    }
}
