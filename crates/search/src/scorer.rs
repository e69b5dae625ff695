//! Scoring infrastructure
//!
//! This module provides:
//! - SentenceScore: a (document index, score) pair
//! - Scorer trait for pluggable relevance scoring
//! - TfIdfScorer default implementation
//! - sentence_score free function for ad-hoc single-document scoring

use crate::stats::{inverse_document_frequency, term_frequency, StatisticsCache};
use lexrank_core::{Corpus, Error, Result};

// ============================================================================
// SentenceScore
// ============================================================================

/// Score of one document for one query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentenceScore {
    /// Corpus index of the document
    pub doc_index: usize,
    /// Score, higher = more relevant
    pub score: f64,
}

impl SentenceScore {
    /// Create a new SentenceScore
    pub fn new(doc_index: usize, score: f64) -> Self {
        SentenceScore { doc_index, score }
    }
}

// ============================================================================
// Scorer Trait
// ============================================================================

/// Pluggable relevance scoring interface
///
/// A scorer turns a query into one raw score per document, in corpus order.
/// It may fill the statistics cache but must not depend on anything else
/// that changes between calls.
///
/// # Thread Safety
///
/// Scorers must be Send + Sync so a ranker can be shared across threads.
pub trait Scorer: Send + Sync {
    /// Score every document in `docs` against `query`
    ///
    /// Returns exactly `docs.len()` scores, index-aligned with `docs`.
    fn score(&self, docs: &[Vec<String>], stats: &StatisticsCache, query: &[String]) -> Vec<f64>;

    /// Name for debugging and logging
    fn name(&self) -> &str;
}

// ============================================================================
// TfIdfScorer
// ============================================================================

/// Sum of TF × IDF over query tokens
///
/// For each document d:
/// score(d) = Σ over query tokens t of TF(t, d) × IDF(t)
///
/// Duplicate query tokens each contribute.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorer;

impl TfIdfScorer {
    /// Create a new TfIdfScorer
    pub fn new() -> Self {
        TfIdfScorer
    }
}

impl Scorer for TfIdfScorer {
    fn score(&self, docs: &[Vec<String>], stats: &StatisticsCache, query: &[String]) -> Vec<f64> {
        stats.ensure_all(docs, query);

        let view = stats.read();
        (0..docs.len())
            .map(|doc| query.iter().map(|term| view.weight(term, doc)).sum())
            .collect()
    }

    fn name(&self) -> &str {
        "tf-idf"
    }
}

// ============================================================================
// Free function
// ============================================================================

/// TF-IDF score of `doc` against `corpus` for `query`, without any caching
///
/// `doc` need not belong to `corpus`. IDF uses the smoothed formula.
///
/// # Errors
///
/// Returns [`Error::EmptyTokens`] if `doc` has no tokens.
pub fn sentence_score<T>(doc: &[String], corpus: &Corpus<T>, query: &[String]) -> Result<f64> {
    if doc.is_empty() {
        return Err(Error::EmptyTokens);
    }
    let mut total = 0.0;
    for term in query {
        total += term_frequency(doc, term)? * inverse_document_frequency(corpus, term);
    }
    Ok(total)
}

// ============================================================================
// Tests
// ============================================================================
