//! PDF Binder Library
//!
//! Merges multiple PDF files into one, ordered by a number embedded in each
//! filename. This library provides functionality to:
//! - Extract an ordering key from a filename (`name (8).pdf` → 8)
//! - Sort a batch of files by key, with a configurable placement for files
//!   that carry no key
//! - Concatenate the pages of all files, in resolved order, into one PDF
//! - Memoize the last merge for hosting layers that re-render
//!
//! # Example
//!
//! ```no_run
//! use pdf_binder::pdf::{merge_files, MergeOptions};
//! use std::path::PathBuf;
//!
//! let paths = vec![
//!     PathBuf::from("handout (2).pdf"),
//!     PathBuf::from("handout (1).pdf"),
//! ];
//!
//! let result = merge_files(&paths, &MergeOptions::default())
//!     .expect("Failed to merge PDFs");
//!
//! for entry in &result.order {
//!     println!("{} -> key {:?}", entry.name, entry.key);
//! }
//! std::fs::write("merged.pdf", &result.bytes).expect("Failed to write output");
//! ```

pub mod cache;
pub mod error;
pub mod order;
pub mod pdf;

// Re-export commonly used items
pub use error::{Error, Result};
pub use order::{extract_order_key, OrderedEntry, UnkeyedPlacement};
pub use pdf::{merge_files, merge_sources, MergeOptions, MergeResult};
