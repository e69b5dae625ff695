//! Documents and the corpus they live in
//!
//! This module provides:
//! - Tokenizable: the one capability the engine needs from a document
//! - Document: a plain owned token list
//! - Corpus: an immutable, index-addressable collection of documents
//!
//! Tokenization itself is the caller's job. A document only has to hand back
//! the ordered tokens it is made of.

use crate::error::{Error, Result};
use tracing::{debug, warn};

// ============================================================================
// Tokenizable
// ============================================================================

/// Anything that can produce its ordered token sequence
///
/// Implementations must be deterministic: the corpus snapshots the tokens
/// once at build time and never asks again.
pub trait Tokenizable {
    /// Ordered tokens this document is composed of
    fn tokens(&self) -> Vec<String>;
}

impl Tokenizable for Vec<String> {
    fn tokens(&self) -> Vec<String> {
        self.clone()
    }
}

impl<T: Tokenizable + ?Sized> Tokenizable for &T {
    fn tokens(&self) -> Vec<String> {
        (**self).tokens()
    }
}

// ============================================================================
// Document
// ============================================================================

/// Pre-tokenized document
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    /// Tokens in document order
    pub items: Vec<String>,
}

impl Document {
    /// Create a document from tokens
    pub fn new(items: Vec<String>) -> Self {
        Document { items }
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the document has no tokens
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Document {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Document::new(iter.into_iter().map(Into::into).collect())
    }
}

impl Tokenizable for Document {
    fn tokens(&self) -> Vec<String> {
        self.items.clone()
    }
}

// ============================================================================
// Corpus
// ============================================================================

/// Immutable ordered collection of documents
///
/// The position of a document is its identity for the lifetime of the
/// corpus. Nothing can be added or removed after construction; a changed
/// document set means a new corpus and a new statistics cache.
///
/// # Invariant
///
/// Every document has at least one token. Empty documents are rejected by
/// [`Corpus::new`] since term frequency divides by document length.
#[derive(Debug, Clone)]
pub struct Corpus<T> {
    docs: Vec<T>,
    /// Token snapshot per document, taken once at build time
    tokens: Vec<Vec<String>>,
}

impl<T: Tokenizable> Corpus<T> {
    /// Build a corpus, snapshotting every document's tokens
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDocument`] for the first document with no tokens.
    pub fn new(docs: Vec<T>) -> Result<Self> {
        let mut tokens = Vec::with_capacity(docs.len());
        for (index, doc) in docs.iter().enumerate() {
            let words = doc.tokens();
            if words.is_empty() {
                warn!(target: "lexrank::corpus", index, "Rejecting empty document");
                return Err(Error::EmptyDocument { index });
            }
            tokens.push(words);
        }

        debug!(
            target: "lexrank::corpus",
            docs = docs.len(),
            tokens = tokens.iter().map(Vec::len).sum::<usize>(),
            "Corpus built"
        );
        Ok(Corpus { docs, tokens })
    }
}

impl<T> Corpus<T> {
    /// Number of documents
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Check if the corpus holds no documents
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Document at `index`
    pub fn get(&self, index: usize) -> Option<&T> {
        self.docs.get(index)
    }

    /// Snapshotted tokens of the document at `index`
    pub fn tokens(&self, index: usize) -> Option<&[String]> {
        self.tokens.get(index).map(Vec::as_slice)
    }

    /// All documents in index order
    pub fn documents(&self) -> &[T] {
        &self.docs
    }

    /// All token snapshots in index order
    pub fn token_lists(&self) -> &[Vec<String>] {
        &self.tokens
    }
}

impl Corpus<Document> {
    /// Build a corpus straight from token lists
    pub fn from_token_lists(lists: Vec<Vec<String>>) -> Result<Self> {
        Corpus::new(lists.into_iter().map(Document::new).collect())
    }
}

// ============================================================================
// Tests
// ============================================================================
