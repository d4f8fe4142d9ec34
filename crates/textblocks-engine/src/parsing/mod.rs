pub mod classify;
pub mod lines;

pub use classify::TitleClassifier;
pub use lines::split_lines;

use crate::editing::Block;

/// Split raw text into blocks, one per non-blank line.
///
/// Each block holds the trimmed line, is visible, and has no display number
/// yet; numbering is left to the caller.
pub fn segment(text: &str) -> Vec<Block> {
    let lines = split_lines(text);
    let classifier = TitleClassifier::new(&lines);

    (0..classifier.len())
        .filter(|&index| !classifier.is_blank(index))
        .map(|index| {
            let is_title = classifier.is_title(index);
            log::trace!("line {index}: title={is_title}");
            Block::new(classifier.line(index), is_title)
        })
        .collect()
}
