use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a block
///
/// Generated once when the block is created and never reused, so UI code can
/// hold on to it across re-renders. Operations given an id that no longer
/// exists treat it as a no-op.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
#[serde(transparent)]
pub struct BlockId(Uuid);

impl BlockId {
    /// Generate a fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single unit of text in the document, either a title or a paragraph
///
/// `visible` and `display_number` are derived state owned by
/// [`Document`](crate::editing::Document); they are only changed through its
/// operations so they never go stale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub(crate) id: BlockId,
    pub(crate) text: String,
    pub(crate) is_title: bool,
    pub(crate) visible: bool,
    pub(crate) display_number: String,
}

impl Block {
    /// Create a visible, not-yet-numbered block with a fresh id
    pub(crate) fn new(text: impl Into<String>, is_title: bool) -> Self {
        Self {
            id: BlockId::generate(),
            text: text.into(),
            is_title,
            visible: true,
            display_number: String::new(),
        }
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_title(&self) -> bool {
        self.is_title
    }

    pub fn is_paragraph(&self) -> bool {
        !self.is_title
    }

    /// False when the block sits under a collapsed title
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Label shown beside the block: `"Title N"` or `"N."`
    pub fn display_number(&self) -> &str {
        &self.display_number
    }

    /// Number of whitespace-separated words in the text
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// True when the text has no content worth saving
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_block_defaults() {
        let block = Block::new("Hello world", false);

        assert_eq!(block.text(), "Hello world");
        assert!(block.is_paragraph());
        assert!(block.visible());
        assert_eq!(block.display_number(), "");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Block::new("same", true);
        let b = Block::new("same", true);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_word_count_splits_on_any_whitespace() {
        let block = Block::new("one  two\tthree\nfour", false);
        assert_eq!(block.word_count(), 4);
        assert_eq!(Block::new("", false).word_count(), 0);
    }

    #[test]
    fn test_is_blank() {
        assert!(Block::new("   ", false).is_blank());
        assert!(!Block::new(" x ", false).is_blank());
    }

    #[test]
    fn test_block_id_display_matches_uuid() {
        let id = BlockId::generate();
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }
}
