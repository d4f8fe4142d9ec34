/*!
 * # Editing Core
 *
 * The in-memory model a front end drives while the user edits.
 *
 * ## Architecture Overview
 *
 * ### 1. Single Source of Truth: `Document`
 * - One owned [`Document`] per editing session, passed by `&mut`
 * - Holds the original text, the ordered blocks and the collapsed titles
 * - No global state, no I/O
 *
 * ### 2. Derived State by Full Rescan
 * - Display numbers (`"Title N"` / `"N."`) are recomputed over the whole
 *   sequence after every structural change
 * - Visibility is derived from the collapsed set the same way
 * - Callers never see a half-updated document
 *
 * ### 3. Positional Scoping
 * - A title governs the paragraphs between it and the next title
 * - One level of grouping; there is no tree
 *
 * ### 4. Stable Block IDs
 * - Every block gets a [`BlockId`] at creation that survives edits, moves
 *   and renumbering
 * - Unknown ids are silent no-ops so a stale render cannot cause a failure
 *
 * ## Module Structure
 *
 * - **`block`**: `Block` and `BlockId`
 * - **`document`**: `Document` and all mutation/query operations
 * - **`numbering`**: the display number pass
 *
 * ## Usage Pattern
 *
 * ```rust
 * use textblocks_engine::editing::*;
 *
 * let mut doc = Document::new();
 * doc.process_original_text("1 Intro\n\nSome text\n\n2 Details\n\nMore text");
 *
 * let id = doc.add_empty_paragraph(None);
 * doc.update_block_text(id, "Appended");
 * doc.collapse_all();
 *
 * assert_eq!(doc.stats().visible_blocks, 2);
 * assert_eq!(doc.text_for_saving(), "1 Intro\n\n2 Details");
 * ```
 */

pub mod block;
pub mod document;
pub(crate) mod numbering;

pub use block::{Block, BlockId};
pub use document::Document;
