use serde::Serialize;

use crate::editing::Block;

/// Aggregate counts over a document
///
/// Everything except `total_blocks` only counts visible blocks, so collapsing
/// a title shrinks the numbers the same way it shrinks the saved text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_blocks: usize,
    pub visible_blocks: usize,
    /// Visible titles
    pub titles: usize,
    /// Visible paragraphs
    pub paragraphs: usize,
    /// Whitespace-separated words across visible blocks
    pub words: usize,
}

impl Stats {
    pub fn from_blocks(blocks: &[Block]) -> Self {
        let mut stats = Stats {
            total_blocks: blocks.len(),
            ..Stats::default()
        };

        for block in blocks.iter().filter(|b| b.visible()) {
            stats.visible_blocks += 1;
            if block.is_title() {
                stats.titles += 1;
            } else {
                stats.paragraphs += 1;
            }
            stats.words += block.word_count();
        }

        stats
    }
}
