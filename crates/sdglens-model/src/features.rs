//! TF-IDF feature extraction

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Sparse feature vector with a fixed dimension
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    dim: usize,
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build a vector from `(index, value)` pairs; indices must be below `dim`
    pub fn new(dim: usize, entries: impl IntoIterator<Item = (usize, f64)>) -> Result<Self, ModelError> {
        let mut sorted: BTreeMap<usize, f64> = BTreeMap::new();
        for (index, value) in entries {
            if index >= dim {
                return Err(ModelError::Inference(format!(
                    "feature index {} out of range for dimension {}",
                    index, dim
                )));
            }
            *sorted.entry(index).or_insert(0.0) += value;
        }
        Ok(Self {
            dim,
            entries: sorted.into_iter().filter(|(_, v)| *v != 0.0).collect(),
        })
    }

    /// Vector dimension
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Non-zero entries in index order
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Number of non-zero entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Dot product with a dense row of length `dim`
    pub fn dot(&self, dense: &[f64]) -> f64 {
        self.entries
            .iter()
            .map(|&(i, v)| dense.get(i).copied().unwrap_or(0.0) * v)
            .sum()
    }

    fn l2_normalize(&mut self) {
        let norm = self.entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, v) in &mut self.entries {
                *v /= norm;
            }
        }
    }
}

/// Row normalization applied after weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    /// Scale rows to unit Euclidean length
    #[default]
    L2,
    /// Leave rows unscaled
    None,
}

/// TF-IDF vectorizer over normalized text
///
/// Tokens are whitespace-separated words of at least two characters; n-grams
/// join consecutive tokens with a single space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Term to feature index
    pub vocabulary: HashMap<String, usize>,

    /// Inverse document frequency per feature index
    pub idf: Vec<f64>,

    /// Inclusive n-gram range
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),

    /// Use `1 + ln(tf)` instead of raw counts
    #[serde(default)]
    pub sublinear_tf: bool,

    /// Row normalization
    #[serde(default)]
    pub norm: Norm,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

impl TfidfVectorizer {
    /// Number of features produced
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Check internal consistency
    pub fn validate(&self) -> Result<(), ModelError> {
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(ModelError::Shape(format!(
                "invalid ngram_range ({}, {})",
                min_n, max_n
            )));
        }
        if self.idf.len() != self.vocabulary.len() {
            return Err(ModelError::Shape(format!(
                "vocabulary has {} terms but idf has {} weights",
                self.vocabulary.len(),
                self.idf.len()
            )));
        }
        if let Some((term, index)) = self.vocabulary.iter().find(|(_, &i)| i >= self.idf.len()) {
            return Err(ModelError::Shape(format!(
                "term '{}' maps to index {} beyond {} features",
                term,
                index,
                self.idf.len()
            )));
        }
        Ok(())
    }

    /// Vectorize normalized text
    pub fn transform(&self, text: &str) -> Result<SparseVector, ModelError> {
        let tokens: Vec<&str> = text.split_whitespace().filter(|t| t.len() >= 2).collect();
        let (min_n, max_n) = self.ngram_range;

        let mut counts: HashMap<usize, f64> = HashMap::new();
        for n in min_n..=max_n {
            for window in tokens.windows(n) {
                let term = window.join(" ");
                if let Some(&index) = self.vocabulary.get(&term) {
                    *counts.entry(index).or_insert(0.0) += 1.0;
                }
            }
        }

        let weighted = counts.into_iter().map(|(index, tf)| {
            let tf = if self.sublinear_tf { 1.0 + tf.ln() } else { tf };
            let idf = self.idf.get(index).copied().unwrap_or(1.0);
            (index, tf * idf)
        });

        let mut features = SparseVector::new(self.n_features(), weighted)?;
        if self.norm == Norm::L2 {
            features.l2_normalize();
        }
        Ok(features)
    }
}
