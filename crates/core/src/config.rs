//! Ranking configuration via `lexrank.toml`
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! stock ranker: smoothed IDF, pure relevance, no score normalization.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name conventionally placed next to the corpus.
pub const CONFIG_FILE_NAME: &str = "lexrank.toml";

/// Default number of missing terms before the cache fill goes parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// IDF formula used by the statistics cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdfFormula {
    /// `ln((N + 1) / (df + 1)) + 1`, strictly positive for every term
    #[default]
    Smoothed,
    /// `ln(N / df)`, zero when the term is in no document
    Legacy,
}

impl IdfFormula {
    /// Compute IDF for a term found in `df` of `n` documents
    pub fn compute(self, n: usize, df: usize) -> f64 {
        match self {
            IdfFormula::Smoothed => ((n as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0,
            IdfFormula::Legacy => {
                if df == 0 {
                    0.0
                } else {
                    (n as f64 / df as f64).ln()
                }
            }
        }
    }
}

/// Ranker configuration loaded from `lexrank.toml`.
///
/// # Example
///
/// ```toml
/// blend_weight = 0.3
/// idf = "smoothed"
/// normalize_relevance = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankerConfig {
    /// Coverage weight in `[0, 1]` used by configured scans.
    #[serde(default)]
    pub blend_weight: f64,
    /// IDF formula: `"smoothed"` or `"legacy"`.
    #[serde(default)]
    pub idf: IdfFormula,
    /// Z-score relevance scores before blending them with coverage.
    #[serde(default)]
    pub normalize_relevance: bool,
    /// Minimum number of uncached terms before filling the cache in parallel.
    /// Only consulted when built with the `parallel` feature.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            blend_weight: 0.0,
            idf: IdfFormula::Smoothed,
            normalize_relevance: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl RankerConfig {
    /// Builder: set the blend weight
    pub fn with_blend_weight(mut self, weight: f64) -> Self {
        self.blend_weight = weight;
        self
    }

    /// Builder: set the IDF formula
    pub fn with_idf(mut self, idf: IdfFormula) -> Self {
        self.idf = idf;
        self
    }

    /// Builder: enable or disable relevance normalization
    pub fn with_normalize_relevance(mut self, enabled: bool) -> Self {
        self.normalize_relevance = enabled;
        self
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] if the blend weight is outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        check_weight(self.blend_weight)
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RankerConfig = toml::from_str(content)
            .map_err(|e| Error::InvalidConfig(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# lexrank ranking configuration
#
# Weight of lexical coverage against TF-IDF relevance, within [0, 1].
#   0.0 = pure relevance (default)
#   1.0 = pure coverage
blend_weight = 0.0

# IDF formula: "smoothed" (default) or "legacy"
#   "smoothed" = ln((N + 1) / (df + 1)) + 1, always positive
#   "legacy"   = ln(N / df), zero for terms absent from the corpus
idf = "smoothed"

# Z-score relevance scores before blending (default: false)
normalize_relevance = false

# Uncached query terms needed before the cache fill runs on rayon workers.
# Only used when built with the "parallel" feature.
# parallel_threshold = 64
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::InvalidConfig(msg) => {
                Error::InvalidConfig(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Reject blend weights outside `[0, 1]`, NaN included.
pub fn check_weight(weight: f64) -> Result<()> {
    if (0.0..=1.0).contains(&weight) {
        Ok(())
    } else {
        Err(Error::InvalidWeight(weight))
    }
}
