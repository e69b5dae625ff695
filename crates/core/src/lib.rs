//! Core types and traits for lexrank
//!
//! This crate defines the foundational types used throughout the workspace:
//! - Tokenizable: the capability every ranked document must provide
//! - Document / Corpus: immutable, index-addressable tokenized documents
//! - RankerConfig: ranking knobs, loadable from `lexrank.toml`
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod document;
pub mod error;

// Re-export commonly used types and traits
pub use config::{check_weight, IdfFormula, RankerConfig, CONFIG_FILE_NAME};
pub use document::{Corpus, Document, Tokenizable};
pub use error::{Error, ErrorKind, Result};
