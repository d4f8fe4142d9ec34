use super::Block;

/// Assign display numbers to every block in document order
///
/// Titles and paragraphs are counted independently, both starting at 1:
/// titles become `"Title N"` and paragraphs `"N."`. Always a full pass; there
/// is no incremental patching.
pub(crate) fn assign_numbers(blocks: &mut [Block]) {
    let mut title_number = 1;
    let mut paragraph_number = 1;

    for block in blocks {
        if block.is_title {
            block.display_number = format!("Title {title_number}");
            title_number += 1;
        } else {
            block.display_number = format!("{paragraph_number}.");
            paragraph_number += 1;
        }
    }
}
