use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::editing::{Block, BlockId, Document, numbering::assign_numbers};

mod integration;

/// Create a temporary directory for file tests
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test text file with content
pub fn create_test_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Build a numbered document from `(text, is_title)` pairs, bypassing
/// segmentation so tests can set up any shape directly
pub fn document_from(blocks: &[(&str, bool)]) -> Document {
    let mut blocks: Vec<Block> = blocks
        .iter()
        .map(|&(text, is_title)| Block::new(text, is_title))
        .collect();
    assign_numbers(&mut blocks);

    Document {
        blocks,
        ..Document::default()
    }
}

pub fn ids(doc: &Document) -> Vec<BlockId> {
    doc.blocks().iter().map(|b| b.id()).collect()
}

pub fn visibility(doc: &Document) -> Vec<bool> {
    doc.blocks().iter().map(|b| b.visible()).collect()
}
