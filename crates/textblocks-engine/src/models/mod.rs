pub mod outline;
pub mod stats;

pub use outline::{OutlineEntry, collapse_marker};
pub use stats::Stats;
