use std::collections::HashSet;

use crate::editing::numbering::assign_numbers;
use crate::editing::{Block, BlockId};
use crate::models::outline::DEFAULT_PREVIEW_CHARS;
use crate::models::{OutlineEntry, Stats};
use crate::parsing::segment;

/// The document model for one editing session
///
/// Document owns three things:
///
/// - the **original text** last handed to [`process_original_text`](Self::process_original_text)
/// - the ordered **blocks**, where order is document order
/// - the set of **collapsed titles**
///
/// A title's children are the run of paragraphs between it and the next
/// title. There is no explicit tree; scoping is purely positional.
///
/// Display numbers and visibility are derived state. Every operation that
/// changes the structure re-runs numbering and visibility over the whole
/// sequence before returning, so callers never observe stale labels.
///
/// Unknown ids are silent no-ops everywhere: ids come from a UI that may be
/// rendering an older state.
///
/// ```rust
/// use textblocks_engine::Document;
///
/// let mut doc = Document::new();
/// doc.process_original_text("1 Intro\n\nHello there\nGeneral Kenobi");
///
/// let title = doc.blocks()[0].id();
/// assert_eq!(doc.blocks()[0].display_number(), "Title 1");
/// assert_eq!(doc.blocks()[2].display_number(), "2.");
///
/// doc.toggle_title_expansion(title);
/// assert_eq!(doc.text_for_saving(), "1 Intro");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub(crate) original_text: String,
    pub(crate) blocks: Vec<Block>,
    pub(crate) collapsed_titles: HashSet<BlockId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the document with a fresh segmentation of `text`
    ///
    /// Previous blocks and collapse state are discarded. Blank input yields
    /// an empty document; rejecting it is up to the caller.
    pub fn process_original_text(&mut self, text: &str) {
        self.original_text = text.to_string();
        self.blocks = segment(text);
        self.collapsed_titles.clear();
        assign_numbers(&mut self.blocks);
        log::debug!("segmented {} blocks", self.blocks.len());
    }

    /// Insert an empty paragraph and return its id
    ///
    /// `None`, or an index at or past the end, appends.
    pub fn add_empty_paragraph(&mut self, index: Option<usize>) -> BlockId {
        let block = Block::new(String::new(), false);
        let id = block.id;

        match index {
            Some(index) if index < self.blocks.len() => self.blocks.insert(index, block),
            _ => self.blocks.push(block),
        }

        self.refresh();
        log::debug!("added empty paragraph {id}");
        id
    }

    /// Remove a block, pruning it from the collapsed set
    pub fn delete_block(&mut self, id: BlockId) {
        let Some(position) = self.position(id) else {
            return;
        };

        self.blocks.remove(position);
        self.collapsed_titles.remove(&id);
        self.refresh();
        log::debug!("deleted block {id} at {position}");
    }

    /// Replace a block's text. Numbering is unaffected.
    pub fn update_block_text(&mut self, id: BlockId, text: impl Into<String>) {
        if let Some(block) = self.block_mut(id) {
            block.text = text.into();
        }
    }

    /// Mark a block as title or paragraph
    ///
    /// A title that becomes a paragraph loses its collapsed state, and its
    /// former children fall under whichever title now precedes them.
    pub fn toggle_title_status(&mut self, id: BlockId, is_title: bool) {
        let Some(block) = self.block_mut(id) else {
            return;
        };
        block.is_title = is_title;

        if !is_title {
            self.collapsed_titles.remove(&id);
        }
        self.refresh();
        log::debug!("block {id} is_title={is_title}");
    }

    /// Collapse an expanded title or expand a collapsed one
    ///
    /// Only the paragraphs between this title and the next one are touched.
    /// Ids that are missing or not titles are ignored.
    pub fn toggle_title_expansion(&mut self, id: BlockId) {
        let Some(position) = self.position(id) else {
            return;
        };
        if !self.blocks[position].is_title {
            return;
        }

        let visible = if self.collapsed_titles.remove(&id) {
            true
        } else {
            self.collapsed_titles.insert(id);
            false
        };

        for block in self.blocks[position + 1..]
            .iter_mut()
            .take_while(|block| !block.is_title)
        {
            block.visible = visible;
        }
        log::debug!("title {id} expanded={visible}");
    }

    pub fn expand_all(&mut self) {
        self.collapsed_titles.clear();
        for block in &mut self.blocks {
            block.visible = true;
        }
    }

    /// Collapse every title
    ///
    /// Titles stay visible. Paragraphs before the first title have no title
    /// to hide them and stay visible too.
    pub fn collapse_all(&mut self) {
        self.collapsed_titles = self
            .blocks
            .iter()
            .filter(|block| block.is_title)
            .map(|block| block.id)
            .collect();
        self.refresh_visibility();
    }

    /// Make sure a block can be seen, expanding the title that hides it
    ///
    /// For a collapsed title this expands the title itself, mirroring a click
    /// on it in the outline.
    pub fn reveal(&mut self, id: BlockId) {
        let Some(position) = self.position(id) else {
            return;
        };

        let governing = self.blocks[..=position]
            .iter()
            .rev()
            .find(|block| block.is_title)
            .map(|block| block.id);

        if let Some(title) = governing
            && self.collapsed_titles.contains(&title)
        {
            self.toggle_title_expansion(title);
        }
    }

    /// Move a block to `to`, clamped to the end of the document
    ///
    /// `to` is the block's index after the move.
    pub fn move_block(&mut self, id: BlockId, to: usize) {
        let Some(from) = self.position(id) else {
            return;
        };

        let block = self.blocks.remove(from);
        let to = to.min(self.blocks.len());
        self.blocks.insert(to, block);
        self.refresh();
        log::debug!("moved block {id} from {from} to {to}");
    }

    /// Visible, non-blank blocks joined by one blank line
    pub fn text_for_saving(&self) -> String {
        self.blocks
            .iter()
            .filter(|block| block.visible && !block.is_blank())
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn stats(&self) -> Stats {
        Stats::from_blocks(&self.blocks)
    }

    /// One entry per title, in document order
    pub fn outline(&self) -> Vec<OutlineEntry> {
        self.outline_with_preview(DEFAULT_PREVIEW_CHARS)
    }

    pub fn outline_with_preview(&self, preview_chars: usize) -> Vec<OutlineEntry> {
        self.blocks
            .iter()
            .filter(|block| block.is_title)
            .map(|block| OutlineEntry::from_block(block, self.is_collapsed(block.id), preview_chars))
            .collect()
    }

    pub fn clear_all(&mut self) {
        self.original_text.clear();
        self.blocks.clear();
        self.collapsed_titles.clear();
        log::debug!("document cleared");
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn visible_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|block| block.visible)
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == id)
    }

    /// Index of the block in document order
    pub fn position(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id == id)
    }

    pub fn is_collapsed(&self, id: BlockId) -> bool {
        self.collapsed_titles.contains(&id)
    }

    pub fn collapsed_titles(&self) -> &HashSet<BlockId> {
        &self.collapsed_titles
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    fn block_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|block| block.id == id)
    }

    /// Recompute all derived state after a structural change
    fn refresh(&mut self) {
        assign_numbers(&mut self.blocks);
        self.refresh_visibility();
    }

    /// Titles are always visible; a paragraph is hidden iff the nearest
    /// title above it is collapsed.
    fn refresh_visibility(&mut self) {
        let collapsed = &self.collapsed_titles;
        let mut hidden = false;

        for block in &mut self.blocks {
            if block.is_title {
                hidden = collapsed.contains(&block.id);
                block.visible = true;
            } else {
                block.visible = !hidden;
            }
        }
    }
}
