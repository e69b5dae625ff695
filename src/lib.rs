//! lexrank - TF-IDF relevance ranking with lexical coverage
//!
//! lexrank ranks a fixed corpus of tokenized documents against a tokenized
//! query. Relevance is the sum of TF × IDF over query tokens; it can be
//! blended with lexical coverage (the fraction of query tokens the document
//! contains) to favour documents that match more of the query.
//!
//! # Quick Start
//!
//! ```
//! use lexrank::{Corpus, Ranker};
//!
//! let split = |s: &str| s.split(' ').map(String::from).collect::<Vec<_>>();
//! let corpus = Corpus::from_token_lists(vec![
//!     split("the cat sat on the mat"),
//!     split("the dog slept on the bed"),
//!     split("the cat chased the mouse"),
//! ])?;
//!
//! let mut ranker = Ranker::new(corpus);
//! assert_eq!(ranker.scan(&split("cat chased mouse")), split("the cat chased the mouse"));
//!
//! let (docs, scores) = ranker.sorted_docs(2);
//! assert_eq!(docs.len(), 2);
//! assert!(scores[0] >= scores[1]);
//! # Ok::<(), lexrank::Error>(())
//! ```
//!
//! # Architecture
//!
//! Tokenization is left to the caller: any type implementing
//! [`Tokenizable`] can be ranked. Documents and configuration live in
//! `lexrank-core`; statistics, scoring and ranking in `lexrank-search`.

pub use lexrank_core::*;
pub use lexrank_search::*;
