//! TF-IDF ranking for lexrank
//!
//! This crate provides:
//! - StatisticsCache: memoized per-term IDF and per-document TF
//! - Scorer trait and the TfIdfScorer default implementation
//! - Lexical coverage with bag (multiset) matching
//! - Z-score normalization
//! - Ranker: relevance/coverage blending, stable sort, top-k
//!
//! # Usage
//!
//! ```
//! use lexrank_core::Corpus;
//! use lexrank_search::Ranker;
//!
//! let split = |s: &str| s.split(' ').map(String::from).collect::<Vec<_>>();
//! let corpus = Corpus::from_token_lists(vec![
//!     split("the cat sat on the mat"),
//!     split("the cat chased the mouse"),
//! ])
//! .unwrap();
//!
//! let mut ranker = Ranker::new(corpus);
//! let best = ranker.scan(&split("cat mouse"));
//! assert_eq!(best, split("the cat chased the mouse"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coverage;
pub mod normalize;
pub mod ranker;
pub mod scorer;
pub mod stats;

// Re-export commonly used types
pub use coverage::{corpus_coverage, query_coverage};
pub use normalize::{z_score, z_score_or_raw};
pub use ranker::{Ranker, Ranking};
pub use scorer::{sentence_score, Scorer, SentenceScore, TfIdfScorer};
pub use stats::{
    document_frequency, inverse_document_frequency, term_frequency, StatisticsCache, StatsView,
};
