//! Ranking: relevance, coverage blending, sort and top-k
//!
//! This module provides:
//! - Ranking: the full, sorted result of one query
//! - Ranker: the engine owning a corpus, its statistics cache and the last
//!   ranking it computed
//!
//! # Blending
//!
//! With weight `w`, each document's final score is
//! `relevance × (1 − w) + z(coverage) × w`. At `w = 0` coverage is never
//! computed and the final score is the raw relevance.
//!
//! # Ordering
//!
//! Documents are sorted by final score, best first. Equal scores keep
//! ascending corpus order, so results are deterministic. A NaN score from a
//! plugged-in scorer ranks below every real score.

use crate::coverage::corpus_coverage;
use crate::normalize::{z_score, z_score_or_raw};
use crate::scorer::{Scorer, SentenceScore, TfIdfScorer};
use crate::stats::StatisticsCache;
use lexrank_core::{check_weight, Corpus, Error, RankerConfig, Result, Tokenizable};
use tracing::{debug, warn};

// ============================================================================
// Ranking
// ============================================================================

/// Result of ranking the whole corpus for one query
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    query: Vec<String>,
    weight: f64,
    /// Raw relevance per document, corpus order
    relevance: Vec<f64>,
    /// Raw coverage per document, corpus order; only when blended
    coverage: Option<Vec<f64>>,
    /// Final scores, best first
    scores: Vec<SentenceScore>,
}

impl Ranking {
    /// Query this ranking answers
    pub fn query(&self) -> &[String] {
        &self.query
    }

    /// Blend weight used
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Raw TF-IDF relevance per document, in corpus order
    pub fn relevance(&self) -> &[f64] {
        &self.relevance
    }

    /// Unnormalized coverage per document, if the ranking was blended
    pub fn coverage(&self) -> Option<&[f64]> {
        self.coverage.as_deref()
    }

    /// All final scores, best first
    pub fn scores(&self) -> &[SentenceScore] {
        &self.scores
    }

    /// First `min(k, len)` scores
    pub fn top_k(&self, k: usize) -> &[SentenceScore] {
        &self.scores[..k.min(self.scores.len())]
    }

    /// Best score, None for an empty corpus
    pub fn top(&self) -> Option<&SentenceScore> {
        self.scores.first()
    }

    /// Number of ranked documents
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if nothing was ranked
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Z-score the final scores in place
    ///
    /// Order is unchanged. Leaves scores untouched if they cannot be
    /// normalized.
    pub fn normalize(&mut self) {
        let raw: Vec<f64> = self.scores.iter().map(|s| s.score).collect();
        if let Ok(normalized) = z_score(&raw) {
            for (entry, score) in self.scores.iter_mut().zip(normalized) {
                entry.score = score;
            }
        }
    }
}

/// Sort best first; ties keep ascending corpus index
fn sort_scores(scores: &mut [SentenceScore]) {
    scores.sort_by(|a, b| {
        sort_key(b.score)
            .total_cmp(&sort_key(a.score))
            .then(a.doc_index.cmp(&b.doc_index))
    });
}

/// NaN sorts as the lowest score
fn sort_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score
    }
}

// ============================================================================
// Ranker
// ============================================================================

/// TF-IDF ranking engine over one immutable corpus
///
/// The statistics cache lives as long as the ranker and is never shared with
/// another one. [`Ranker::rank`] is a pure per-call computation and may run
/// from many threads at once; the `scan*` methods additionally keep the
/// result as the ranker's single last ranking, replacing any previous one.
pub struct Ranker<T> {
    corpus: Corpus<T>,
    stats: StatisticsCache,
    config: RankerConfig,
    scorer: Box<dyn Scorer>,
    last: Option<Ranking>,
}

impl<T: Tokenizable> Ranker<T> {
    /// Build the corpus from `docs` and wrap it in a ranker
    ///
    /// # Errors
    ///
    /// Returns [`lexrank_core::Error::EmptyDocument`] if any document has no
    /// tokens.
    pub fn from_documents(docs: Vec<T>) -> Result<Self> {
        Ok(Self::new(Corpus::new(docs)?))
    }
}

impl<T> Ranker<T> {
    /// Create a ranker with the default configuration
    pub fn new(corpus: Corpus<T>) -> Self {
        let config = RankerConfig::default();
        let stats = StatisticsCache::with_config(corpus.len(), &config);
        Ranker {
            corpus,
            stats,
            config,
            scorer: Box::new(TfIdfScorer::new()),
            last: None,
        }
    }

    /// Create a ranker with an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation.
    pub fn with_config(corpus: Corpus<T>, config: RankerConfig) -> Result<Self> {
        config.validate()?;
        let stats = StatisticsCache::with_config(corpus.len(), &config);
        Ok(Ranker {
            corpus,
            stats,
            config,
            scorer: Box::new(TfIdfScorer::new()),
            last: None,
        })
    }

    /// Builder: replace the relevance scorer
    pub fn with_scorer(mut self, scorer: Box<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// The corpus being ranked
    pub fn corpus(&self) -> &Corpus<T> {
        &self.corpus
    }

    /// The statistics cache
    pub fn stats(&self) -> &StatisticsCache {
        &self.stats
    }

    /// Active configuration
    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Name of the relevance scorer
    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    /// Most recent ranking stored by a scan
    pub fn last(&self) -> Option<&Ranking> {
        self.last.as_ref()
    }

    // ========================================================================
    // Stateless operations
    // ========================================================================

    /// Fill the statistics cache for `query` without ranking
    ///
    /// Returns the number of terms that were computed.
    pub fn prepare(&self, query: &[String]) -> usize {
        self.stats.ensure_all(self.corpus.token_lists(), query)
    }

    /// Raw relevance per document, corpus order
    pub fn relevance(&self, query: &[String]) -> Vec<f64> {
        self.scorer
            .score(self.corpus.token_lists(), &self.stats, query)
    }

    /// Coverage of `query` by each document, corpus order
    ///
    /// Stateless: the last ranking is left as it was. Only the `scan*`
    /// methods replace it.
    ///
    /// # Errors
    ///
    /// Returns [`lexrank_core::Error::EmptyQuery`] for an empty query.
    pub fn query_coverage(&self, query: &[String]) -> Result<Vec<f64>> {
        corpus_coverage(query, &self.corpus)
    }

    /// Rank every document for `query` with coverage weight `weight`
    ///
    /// # Errors
    ///
    /// - [`lexrank_core::Error::InvalidWeight`] if `weight` is outside `[0, 1]`
    /// - [`lexrank_core::Error::EmptyQuery`] if blending an empty query
    /// - [`lexrank_core::Error::ScoreCountMismatch`] if the scorer does not
    ///   return one score per document
    pub fn rank(&self, query: &[String], weight: f64) -> Result<Ranking> {
        check_weight(weight)?;

        let relevance = self.relevance(query);
        if relevance.len() != self.corpus.len() {
            warn!(
                target: "lexrank::rank",
                scorer = self.scorer.name(),
                expected = self.corpus.len(),
                actual = relevance.len(),
                "Scorer output does not match corpus size"
            );
            return Err(Error::ScoreCountMismatch {
                scorer: self.scorer.name().to_string(),
                expected: self.corpus.len(),
                actual: relevance.len(),
            });
        }
        let (finals, coverage) = if weight > 0.0 {
            let coverage = self.query_coverage(query)?;
            let blended_relevance = if self.config.normalize_relevance {
                z_score_or_raw(relevance.clone())
            } else {
                relevance.clone()
            };
            let normalized = z_score_or_raw(coverage.clone());
            let finals: Vec<f64> = blended_relevance
                .iter()
                .zip(&normalized)
                .map(|(r, c)| r * (1.0 - weight) + c * weight)
                .collect();
            (finals, Some(coverage))
        } else {
            (relevance.clone(), None)
        };

        let mut scores: Vec<SentenceScore> = finals
            .into_iter()
            .enumerate()
            .map(|(i, score)| SentenceScore::new(i, score))
            .collect();
        sort_scores(&mut scores);

        debug!(
            target: "lexrank::rank",
            scorer = self.scorer.name(),
            docs = scores.len(),
            query_len = query.len(),
            weight,
            "Ranking computed"
        );

        Ok(Ranking {
            query: query.to_vec(),
            weight,
            relevance,
            coverage,
            scores,
        })
    }

    // ========================================================================
    // Scans (replace the last ranking)
    // ========================================================================

    /// Best document's tokens by pure relevance
    ///
    /// Empty when the corpus is empty, or when the scorer's output cannot be
    /// ranked; the previous ranking is kept in that case.
    pub fn scan(&mut self, query: &[String]) -> Vec<String> {
        // Weight 0 never computes coverage, so only the scorer can fail.
        match self.rank(query, 0.0) {
            Ok(ranking) => self.store(ranking),
            Err(_) => Vec::new(),
        }
    }

    /// Best document's tokens by relevance blended with coverage
    ///
    /// # Errors
    ///
    /// Same as [`Ranker::rank`]. On error the previous ranking is kept.
    pub fn scan_with_coverage(&mut self, query: &[String], weight: f64) -> Result<Vec<String>> {
        let ranking = self.rank(query, weight)?;
        Ok(self.store(ranking))
    }

    /// Scan using the configured blend weight
    pub fn scan_configured(&mut self, query: &[String]) -> Result<Vec<String>> {
        let weight = self.config.blend_weight;
        self.scan_with_coverage(query, weight)
    }

    fn store(&mut self, ranking: Ranking) -> Vec<String> {
        let best = ranking
            .top()
            .and_then(|s| self.corpus.tokens(s.doc_index))
            .map(<[String]>::to_vec)
            .unwrap_or_default();
        self.last = Some(ranking);
        best
    }

    // ========================================================================
    // Last ranking accessors
    // ========================================================================

    /// Top-k documents of the last ranking with their scores, best first
    ///
    /// Empty before the first scan.
    pub fn sorted_docs(&self, k: usize) -> (Vec<&T>, Vec<f64>) {
        let top = self.last.as_ref().map(|r| r.top_k(k)).unwrap_or(&[]);
        top.iter()
            .filter_map(|s| self.corpus.get(s.doc_index).map(|doc| (doc, s.score)))
            .unzip()
    }

    /// Best document of the last ranking
    pub fn top(&self) -> Option<&T> {
        self.last
            .as_ref()
            .and_then(Ranking::top)
            .and_then(|s| self.corpus.get(s.doc_index))
    }

    /// Z-score the final scores of the last ranking in place
    ///
    /// No-op before the first scan or when scores cannot be normalized.
    pub fn normalize_scores(&mut self) {
        if let Some(ranking) = self.last.as_mut() {
            ranking.normalize();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use lexrank_core::{Document, IdfFormula};

    fn words(text: &str) -> Vec<String> {
        text.split(' ').map(String::from).collect()
    }

    fn ranker() -> Ranker<Document> {
        let corpus = Corpus::from_token_lists(vec![
            words("the cat sat on the mat"),
            words("the dog slept on the bed"),
            words("the cat chased the mouse"),
        ])
        .unwrap();
        Ranker::new(corpus)
    }

    /// Gives every document the same score
    struct FlatScorer;

    /// Every third document scores NaN
    struct NanScorer;

    impl Scorer for NanScorer {
        fn score(&self, docs: &[Vec<String>], _: &StatisticsCache, _: &[String]) -> Vec<f64> {
            (0..docs.len())
                .map(|i| if i % 3 == 0 { f64::NAN } else { i as f64 })
                .collect()
        }

        fn name(&self) -> &str {
            "nan"
        }
    }

    /// Drops the last document
    struct ShortScorer;

    impl Scorer for ShortScorer {
        fn score(&self, docs: &[Vec<String>], _: &StatisticsCache, _: &[String]) -> Vec<f64> {
            vec![1.0; docs.len().saturating_sub(1)]
        }

        fn name(&self) -> &str {
            "short"
        }
    }

    impl Scorer for FlatScorer {
        fn score(&self, docs: &[Vec<String>], _: &StatisticsCache, _: &[String]) -> Vec<f64> {
            vec![1.0; docs.len()]
        }

        fn name(&self) -> &str {
            "flat"
        }
    }

    // ========================================
    // Ranking Tests
    // ========================================

    #[test]
    fn test_sort_scores_stable_ties() {
        let mut scores = vec![
            SentenceScore::new(0, 1.0),
            SentenceScore::new(1, 2.0),
            SentenceScore::new(2, 1.0),
            SentenceScore::new(3, 2.0),
        ];
        sort_scores(&mut scores);
        let order: Vec<usize> = scores.iter().map(|s| s.doc_index).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_sort_scores_nan_ranks_last() {
        let mut scores = vec![
            SentenceScore::new(0, f64::NAN),
            SentenceScore::new(1, 2.0),
            SentenceScore::new(2, f64::NEG_INFINITY),
            SentenceScore::new(3, f64::NAN),
            SentenceScore::new(4, -1.0),
        ];
        sort_scores(&mut scores);
        let order: Vec<usize> = scores.iter().map(|s| s.doc_index).collect();
        assert_eq!(order, vec![1, 4, 0, 2, 3]);
    }

    #[test]
    fn test_ranking_top_k_clamps() {
        let ranking = ranker().rank(&words("cat"), 0.0).unwrap();
        assert_eq!(ranking.top_k(0).len(), 0);
        assert_eq!(ranking.top_k(2).len(), 2);
        assert_eq!(ranking.top_k(10).len(), 3);
    }

    #[test]
    fn test_ranking_normalize_keeps_order() {
        let mut ranking = ranker().rank(&words("cat chased mouse"), 0.0).unwrap();
        let before: Vec<usize> = ranking.scores().iter().map(|s| s.doc_index).collect();
        ranking.normalize();
        let after: Vec<usize> = ranking.scores().iter().map(|s| s.doc_index).collect();
        assert_eq!(before, after);

        let mean = ranking.scores().iter().map(|s| s.score).sum::<f64>() / 3.0;
        assert!(mean.abs() < 1e-12);
    }

    // ========================================
    // Ranker Tests
    // ========================================

    #[test]
    fn test_scan_pure_relevance() {
        let mut ranker = ranker();
        let best = ranker.scan(&words("cat chased mouse"));
        assert_eq!(best, words("the cat chased the mouse"));

        let last = ranker.last().unwrap();
        assert_eq!(last.len(), 3);
        assert_eq!(last.weight(), 0.0);
        assert!(last.coverage().is_none());
        assert_eq!(last.query(), words("cat chased mouse").as_slice());
    }

    #[test]
    fn test_scan_matches_sorted_docs() {
        let mut ranker = ranker();
        let best = ranker.scan(&words("dog bed"));
        let (docs, scores) = ranker.sorted_docs(1);
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].items, best);
        assert_eq!(scores[0], ranker.last().unwrap().scores()[0].score);
        assert_eq!(ranker.top().unwrap().items, best);
    }

    #[test]
    fn test_sorted_docs_before_scan_is_empty() {
        let ranker = ranker();
        let (docs, scores) = ranker.sorted_docs(5);
        assert!(docs.is_empty());
        assert!(scores.is_empty());
        assert!(ranker.top().is_none());
    }

    #[test]
    fn test_scan_with_coverage_blends() {
        let mut ranker = ranker();
        let best = ranker
            .scan_with_coverage(&words("cat chased mouse"), 0.5)
            .unwrap();
        assert_eq!(best, words("the cat chased the mouse"));

        let last = ranker.last().unwrap();
        let relevance = last.relevance().to_vec();
        let coverage = last.coverage().unwrap().to_vec();
        let z = z_score(&coverage).unwrap();
        for s in last.scores() {
            let expected = relevance[s.doc_index] * 0.5 + z[s.doc_index] * 0.5;
            assert!((s.score - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_scan_with_coverage_full_weight_is_coverage_order() {
        let mut ranker = ranker();
        ranker.scan_with_coverage(&words("the on"), 1.0).unwrap();
        let order: Vec<usize> = ranker
            .last()
            .unwrap()
            .scores()
            .iter()
            .map(|s| s.doc_index)
            .collect();
        // Docs 0 and 1 fully cover "the on"; doc 2 covers half
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_coverage_fallback_on_zero_variance() {
        let mut ranker = ranker();
        // Every doc contains "the" exactly; coverage is [1, 1, 1]
        ranker.scan_with_coverage(&words("the"), 0.5).unwrap();
        let last = ranker.last().unwrap();
        for s in last.scores() {
            let expected = last.relevance()[s.doc_index] * 0.5 + 1.0 * 0.5;
            assert!((s.score - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_scan_with_coverage_rejects_bad_weight() {
        let mut ranker = ranker();
        ranker.scan(&words("cat"));
        let before = ranker.last().cloned();

        let err = ranker.scan_with_coverage(&words("cat"), 1.5).unwrap_err();
        assert!(matches!(err, Error::InvalidWeight(_)));
        assert_eq!(ranker.last().cloned(), before);
    }

    #[test]
    fn test_scan_with_coverage_rejects_empty_query() {
        let mut ranker = ranker();
        let err = ranker.scan_with_coverage(&[], 0.3).unwrap_err();
        assert!(matches!(err, Error::EmptyQuery));
        assert!(ranker.last().is_none());
    }

    #[test]
    fn test_scan_replaces_last_ranking() {
        let mut ranker = ranker();
        ranker.scan_with_coverage(&words("cat"), 0.2).unwrap();
        ranker.scan(&words("dog"));
        let last = ranker.last().unwrap();
        assert_eq!(last.query(), words("dog").as_slice());
        assert!(last.coverage().is_none());
    }

    #[test]
    fn test_scan_empty_corpus() {
        let mut ranker = Ranker::new(Corpus::<Document>::new(vec![]).unwrap());
        assert!(ranker.scan(&words("cat")).is_empty());
        assert!(ranker.last().unwrap().is_empty());
        assert!(ranker.top().is_none());
        assert!(ranker
            .scan_with_coverage(&words("cat"), 0.5)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_scan_configured_uses_blend_weight() {
        let corpus = ranker().corpus().clone();
        let config = RankerConfig::default().with_blend_weight(0.4);
        let mut ranker = Ranker::with_config(corpus, config).unwrap();
        ranker.scan_configured(&words("cat mouse")).unwrap();
        assert_eq!(ranker.last().unwrap().weight(), 0.4);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let corpus = ranker().corpus().clone();
        let config = RankerConfig::default().with_blend_weight(-1.0);
        assert!(Ranker::with_config(corpus, config).is_err());
    }

    #[test]
    fn test_with_config_legacy_idf() {
        let corpus = ranker().corpus().clone();
        let config = RankerConfig::default().with_idf(IdfFormula::Legacy);
        let ranker = Ranker::with_config(corpus, config).unwrap();
        // "the" is in every doc, so legacy IDF zeroes it out
        assert_eq!(ranker.relevance(&words("the")), vec![0.0; 3]);
    }

    #[test]
    fn test_normalize_relevance_before_blending() {
        let corpus = ranker().corpus().clone();
        let config = RankerConfig::default().with_normalize_relevance(true);
        let ranker = Ranker::with_config(corpus, config).unwrap();

        let query = words("cat chased mouse");
        let ranking = ranker.rank(&query, 0.5).unwrap();
        let rel = z_score(ranking.relevance()).unwrap();
        let cov = z_score(ranking.coverage().unwrap()).unwrap();
        for s in ranking.scores() {
            let expected = rel[s.doc_index] * 0.5 + cov[s.doc_index] * 0.5;
            assert!((s.score - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_query_coverage() {
        let ranker = ranker();
        let cov = ranker.query_coverage(&words("cat chased mouse")).unwrap();
        assert!((cov[0] - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(cov[1], 0.0);
        assert_eq!(cov[2], 1.0);
    }

    #[test]
    fn test_prepare_warms_cache() {
        let ranker = ranker();
        assert_eq!(ranker.prepare(&words("cat mouse cat")), 2);
        assert_eq!(ranker.prepare(&words("cat")), 0);
        assert_eq!(ranker.stats().len(), 2);
    }

    #[test]
    fn test_custom_scorer_ties_stay_in_corpus_order() {
        let mut ranker = ranker().with_scorer(Box::new(FlatScorer));
        assert_eq!(ranker.scorer_name(), "flat");

        let best = ranker.scan(&words("anything"));
        assert_eq!(best, words("the cat sat on the mat"));
        let order: Vec<usize> = ranker
            .last()
            .unwrap()
            .scores()
            .iter()
            .map(|s| s.doc_index)
            .collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_nan_scorer_does_not_panic() {
        let lists: Vec<Vec<String>> = (0..200).map(|i| vec![format!("w{}", i)]).collect();
        let corpus = Corpus::from_token_lists(lists).unwrap();
        let mut ranker = Ranker::new(corpus).with_scorer(Box::new(NanScorer));

        let best = ranker.scan(&words("w1"));
        assert_eq!(best, vec!["w199".to_string()]);

        let scores = ranker.last().unwrap().scores();
        assert_eq!(scores.len(), 200);
        let first_nan = scores.iter().position(|s| s.score.is_nan()).unwrap();
        assert!(scores[first_nan..].iter().all(|s| s.score.is_nan()));
        assert!(scores[..first_nan].iter().all(|s| !s.score.is_nan()));
        for pair in scores[first_nan..].windows(2) {
            assert!(pair[0].doc_index < pair[1].doc_index);
        }
    }

    #[test]
    fn test_short_scorer_is_rejected() {
        let mut ranker = ranker().with_scorer(Box::new(ShortScorer));
        let err = ranker.rank(&words("cat"), 0.0).unwrap_err();
        assert!(matches!(
            err,
            Error::ScoreCountMismatch {
                expected: 3,
                actual: 2,
                ..
            }
        ));

        assert!(ranker.scan(&words("cat")).is_empty());
        assert!(ranker.last().is_none());
        assert!(ranker.scan_with_coverage(&words("cat"), 0.5).is_err());
    }

    #[test]
    fn test_query_coverage_keeps_last_ranking() {
        let mut ranker = ranker();
        ranker.scan(&words("dog"));
        let before = ranker.last().cloned();
        ranker.query_coverage(&words("cat chased mouse")).unwrap();
        assert_eq!(ranker.last().cloned(), before);
    }

    #[test]
    fn test_normalize_scores() {
        let mut ranker = ranker();
        ranker.normalize_scores();
        assert!(ranker.last().is_none());

        ranker.scan(&words("cat chased mouse"));
        ranker.normalize_scores();
        let (_, scores) = ranker.sorted_docs(3);
        let mean = scores.iter().sum::<f64>() / 3.0;
        assert!(mean.abs() < 1e-12);
        assert!(scores[0] > scores[1] && scores[1] > scores[2]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_fill_ranks_like_sequential() {
        let corpus = ranker().corpus().clone();
        let mut config = RankerConfig::default();
        config.parallel_threshold = 1;
        let par = Ranker::with_config(corpus, config).unwrap();
        let seq = ranker();

        let query = words("cat chased mouse the on");
        assert_eq!(par.relevance(&query), seq.relevance(&query));
        assert_eq!(par.rank(&query, 0.3).unwrap(), seq.rank(&query, 0.3).unwrap());
        assert_eq!(par.stats().len(), seq.stats().len());
    }

    #[test]
    fn test_ranker_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Ranker<Document>>();
    }
}
