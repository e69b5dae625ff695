//! Lexical coverage of a query by a document
//!
//! Coverage is the fraction of query tokens that find a partner token in the
//! document. Matching is bag-based: every document token can pair with at
//! most one query token, so `[a, a, a]` against `[a, a]` covers 2/3.

use lexrank_core::{Corpus, Error, Result};
use std::collections::HashMap;

/// Fraction of `query` matched by `target`, each target token used once
///
/// # Errors
///
/// Returns [`Error::EmptyQuery`] if `query` has no tokens.
pub fn query_coverage(query: &[String], target: &[String]) -> Result<f64> {
    if query.is_empty() {
        return Err(Error::EmptyQuery);
    }

    let mut remaining: HashMap<&str, usize> = HashMap::new();
    for word in target {
        *remaining.entry(word.as_str()).or_insert(0) += 1;
    }

    let mut matched = 0usize;
    for word in query {
        if let Some(count) = remaining.get_mut(word.as_str()) {
            if *count > 0 {
                *count -= 1;
                matched += 1;
            }
        }
    }

    Ok(matched as f64 / query.len() as f64)
}

/// Coverage of `query` by every document, in corpus order
pub fn corpus_coverage<T>(query: &[String], corpus: &Corpus<T>) -> Result<Vec<f64>> {
    if query.is_empty() {
        return Err(Error::EmptyQuery);
    }
    corpus
        .token_lists()
        .iter()
        .map(|doc| query_coverage(query, doc))
        .collect()
}
