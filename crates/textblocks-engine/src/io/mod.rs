use crate::editing::Document;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input text is empty")]
    EmptyInput,
    #[error("There is no visible text content to save")]
    NothingToSave,
}

/// Read a text file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a text file
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Reject text that has nothing but whitespace before it reaches the document
pub fn validate_input(text: &str) -> Result<&str, IoError> {
    if text.trim().is_empty() {
        return Err(IoError::EmptyInput);
    }
    Ok(text)
}

/// Load a file into the document, replacing its contents
///
/// The raw content is segmented verbatim. Returns the number of blocks
/// created. On error the document is left untouched.
pub fn open_document(document: &mut Document, path: &Path) -> Result<usize, IoError> {
    let content = read_file(path)?;
    let content = validate_input(&content)?;
    document.process_original_text(content);
    log::info!("opened {} ({} blocks)", path.display(), document.len());
    Ok(document.len())
}

/// Write the document's visible text to a file
///
/// Returns the number of bytes written.
pub fn save_document(document: &Document, path: &Path) -> Result<usize, IoError> {
    let content = document.text_for_saving();
    if content.trim().is_empty() {
        return Err(IoError::NothingToSave);
    }
    write_file(path, &content)?;
    log::info!("saved {} ({} bytes)", path.display(), content.len());
    Ok(content.len())
}
