//! PDF codec and merge orchestration module

pub mod codec;
pub mod merge;

// Re-export commonly used items
pub use codec::{LopdfCodec, PdfCodec};
pub use merge::{merge_files, merge_sources, FileSource, MergeOptions, MergeResult};
