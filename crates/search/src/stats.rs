//! Memoized term statistics
//!
//! This module provides:
//! - StatisticsCache: per-term IDF and per-(term, document) TF, filled lazily
//! - StatsView: read guard used by the scorer
//! - term_frequency / inverse_document_frequency free functions
//!
//! # Architectural Rules
//!
//! - One cache per corpus. The cache never sees another document set.
//! - Entries are write-once. Nothing is evicted or recomputed while the
//!   corpus lives, so readers never observe a value change.

use lexrank_core::{Corpus, Error, IdfFormula, RankerConfig, Result};
use parking_lot::{RwLock, RwLockReadGuard};
use std::collections::HashMap;
use tracing::{debug, trace};

// ============================================================================
// Free functions
// ============================================================================

/// Fraction of `doc` made up of `term`
///
/// # Errors
///
/// Returns [`Error::EmptyTokens`] for a document with no tokens.
pub fn term_frequency(doc: &[String], term: &str) -> Result<f64> {
    if doc.is_empty() {
        return Err(Error::EmptyTokens);
    }
    Ok(raw_term_frequency(doc, term))
}

/// Smoothed IDF of `term` over the whole corpus
///
/// `ln((N + 1) / (df + 1)) + 1`, always strictly positive.
pub fn inverse_document_frequency<T>(corpus: &Corpus<T>, term: &str) -> f64 {
    IdfFormula::Smoothed.compute(corpus.len(), document_frequency(corpus.token_lists(), term))
}

/// Number of documents containing `term` at least once
pub fn document_frequency(docs: &[Vec<String>], term: &str) -> usize {
    docs.iter()
        .filter(|doc| doc.iter().any(|word| word == term))
        .count()
}

/// Caller guarantees `doc` is non-empty
fn raw_term_frequency(doc: &[String], term: &str) -> f64 {
    let count = doc.iter().filter(|word| *word == term).count();
    count as f64 / doc.len() as f64
}

// ============================================================================
// TermStatistics
// ============================================================================

/// Everything known about one term
#[derive(Debug, Clone)]
struct TermEntry {
    idf: f64,
    /// TF per document, indexed by corpus position
    tf: Vec<f64>,
}

impl TermEntry {
    fn compute(docs: &[Vec<String>], term: &str, formula: IdfFormula) -> Self {
        let tf: Vec<f64> = docs
            .iter()
            .map(|doc| raw_term_frequency(doc, term))
            .collect();
        let df = tf.iter().filter(|v| **v > 0.0).count();
        TermEntry {
            idf: formula.compute(docs.len(), df),
            tf,
        }
    }
}

// ============================================================================
// StatisticsCache
// ============================================================================

/// Lazily filled TF/IDF memo for a single corpus
///
/// # Thread Safety
///
/// Guarded by a read-mostly `RwLock`. Lookups of cached terms take the read
/// lock only; a fill takes the write lock and re-checks before computing, so
/// a term is computed at most once even when queries race on it.
#[derive(Debug)]
pub struct StatisticsCache {
    /// Corpus size the cache was built for
    num_docs: usize,
    formula: IdfFormula,
    parallel_threshold: usize,
    terms: RwLock<HashMap<String, TermEntry>>,
}

impl StatisticsCache {
    /// Create an empty cache for a corpus of `num_docs` documents
    pub fn new(num_docs: usize, formula: IdfFormula) -> Self {
        StatisticsCache {
            num_docs,
            formula,
            parallel_threshold: lexrank_core::config::DEFAULT_PARALLEL_THRESHOLD,
            terms: RwLock::new(HashMap::new()),
        }
    }

    /// Create an empty cache using the formula and thresholds from `config`
    pub fn with_config(num_docs: usize, config: &RankerConfig) -> Self {
        let mut cache = Self::new(num_docs, config.idf);
        cache.parallel_threshold = config.parallel_threshold;
        cache
    }

    /// IDF formula in use
    pub fn formula(&self) -> IdfFormula {
        self.formula
    }

    /// Uncached terms needed before a fill fans out to rayon workers
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Number of cached terms
    pub fn len(&self) -> usize {
        self.terms.read().len()
    }

    /// Check if no term has been cached yet
    pub fn is_empty(&self) -> bool {
        self.terms.read().is_empty()
    }

    /// Check if `term` is cached
    pub fn contains(&self, term: &str) -> bool {
        self.terms.read().contains_key(term)
    }

    /// Cached IDF for `term`
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.terms.read().get(term).map(|e| e.idf)
    }

    /// Cached TF for `term` in document `doc`
    pub fn tf(&self, term: &str, doc: usize) -> Option<f64> {
        self.terms
            .read()
            .get(term)
            .and_then(|e| e.tf.get(doc).copied())
    }

    /// Compute and memoize statistics for `term` if absent
    ///
    /// Returns true if this call filled the entry, false if it was cached.
    pub fn ensure(&self, docs: &[Vec<String>], term: &str) -> bool {
        debug_assert_eq!(docs.len(), self.num_docs, "cache used with a foreign corpus");

        if self.terms.read().contains_key(term) {
            return false;
        }

        let mut terms = self.terms.write();
        if terms.contains_key(term) {
            return false;
        }
        let entry = TermEntry::compute(docs, term, self.formula);
        trace!(target: "lexrank::stats", term, idf = entry.idf, "Term cached");
        terms.insert(term.to_string(), entry);
        true
    }

    /// Ensure every distinct term of `query` is cached
    ///
    /// Returns the number of terms filled by this call.
    pub fn ensure_all(&self, docs: &[Vec<String>], query: &[String]) -> usize {
        let missing = self.missing_terms(query);
        if missing.is_empty() {
            return 0;
        }

        let filled = self.fill(docs, missing);
        debug!(
            target: "lexrank::stats",
            filled,
            cached = self.len(),
            "Statistics cache filled"
        );
        filled
    }

    /// Distinct uncached terms, in first-seen order
    fn missing_terms<'q>(&self, query: &'q [String]) -> Vec<&'q str> {
        let terms = self.terms.read();
        let mut missing: Vec<&str> = Vec::new();
        for term in query {
            if !terms.contains_key(term.as_str()) && !missing.contains(&term.as_str()) {
                missing.push(term);
            }
        }
        missing
    }

    #[cfg(not(feature = "parallel"))]
    fn fill(&self, docs: &[Vec<String>], missing: Vec<&str>) -> usize {
        missing
            .into_iter()
            .filter(|term| self.ensure(docs, term))
            .count()
    }

    #[cfg(feature = "parallel")]
    fn fill(&self, docs: &[Vec<String>], missing: Vec<&str>) -> usize {
        use rayon::prelude::*;

        if missing.len() < self.parallel_threshold {
            return missing
                .into_iter()
                .filter(|term| self.ensure(docs, term))
                .count();
        }

        // Compute outside the lock, then insert under a single write.
        let computed: Vec<(&str, TermEntry)> = missing
            .par_iter()
            .map(|term| (*term, TermEntry::compute(docs, term, self.formula)))
            .collect();

        let mut terms = self.terms.write();
        let mut filled = 0;
        for (term, entry) in computed {
            if !terms.contains_key(term) {
                terms.insert(term.to_string(), entry);
                filled += 1;
            }
        }
        filled
    }

    /// Lock the cache for a batch of lookups
    pub fn read(&self) -> StatsView<'_> {
        StatsView {
            terms: self.terms.read(),
        }
    }
}

// ============================================================================
// StatsView
// ============================================================================

/// Read-locked view of the cache
///
/// Holding a view blocks fills; keep it short-lived.
pub struct StatsView<'a> {
    terms: RwLockReadGuard<'a, HashMap<String, TermEntry>>,
}

impl StatsView<'_> {
    /// TF × IDF of `term` in document `doc`, 0 for uncached terms
    pub fn weight(&self, term: &str, doc: usize) -> f64 {
        self.terms
            .get(term)
            .and_then(|e| e.tf.get(doc).map(|tf| tf * e.idf))
            .unwrap_or(0.0)
    }

    /// Cached IDF for `term`
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.terms.get(term).map(|e| e.idf)
    }
}

// ============================================================================
// Tests
// ============================================================================
