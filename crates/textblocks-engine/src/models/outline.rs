use serde::Serialize;
use std::fmt;

use crate::editing::{Block, BlockId};

/// Number of characters of title text shown in an outline entry
pub const DEFAULT_PREVIEW_CHARS: usize = 30;

/// `[+]` for a collapsed title, `[-]` for an expanded one
pub fn collapse_marker(collapsed: bool) -> &'static str {
    if collapsed { "[+]" } else { "[-]" }
}

/// One title as listed in the outline panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    pub id: BlockId,
    pub display_number: String,
    /// Title text cut to the preview length, with `...` appended when cut
    pub preview: String,
    pub collapsed: bool,
}

impl OutlineEntry {
    pub fn from_block(block: &Block, collapsed: bool, preview_chars: usize) -> Self {
        Self {
            id: block.id(),
            display_number: block.display_number().to_string(),
            preview: preview(block.text(), preview_chars),
            collapsed,
        }
    }

    pub fn marker(&self) -> &'static str {
        collapse_marker(self.collapsed)
    }
}

impl fmt::Display for OutlineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            self.marker(),
            self.display_number,
            self.preview
        )
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
