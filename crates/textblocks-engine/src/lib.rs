pub mod editing;
pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{Block, BlockId, Document};
pub use io::*;
pub use models::{OutlineEntry, Stats};
