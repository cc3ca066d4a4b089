//! Linear classifier over sparse features

use crate::error::ModelError;
use crate::features::SparseVector;
use sdglens_domain::SDG_COUNT;
use serde::{Deserialize, Serialize};

/// Link function turning logits into probabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    /// Mutually exclusive classes; probabilities sum to one
    #[default]
    Softmax,
    /// Independent per-class probabilities (one-vs-rest)
    Sigmoid,
}

/// One weight row and intercept per goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    /// `SDG_COUNT` rows of `n_features` weights
    pub coefficients: Vec<Vec<f64>>,

    /// `SDG_COUNT` intercepts
    pub intercepts: Vec<f64>,

    /// Link function
    #[serde(default)]
    pub activation: Activation,
}

impl LinearClassifier {
    /// Number of classes
    pub fn n_classes(&self) -> usize {
        self.coefficients.len()
    }

    /// Check that the classifier covers all 17 goals over `n_features` inputs
    pub fn validate(&self, n_features: usize) -> Result<(), ModelError> {
        if self.coefficients.len() != SDG_COUNT {
            return Err(ModelError::Shape(format!(
                "expected {} coefficient rows, found {}",
                SDG_COUNT,
                self.coefficients.len()
            )));
        }
        if self.intercepts.len() != SDG_COUNT {
            return Err(ModelError::Shape(format!(
                "expected {} intercepts, found {}",
                SDG_COUNT,
                self.intercepts.len()
            )));
        }
        if let Some((row, weights)) = self
            .coefficients
            .iter()
            .enumerate()
            .find(|(_, w)| w.len() != n_features)
        {
            return Err(ModelError::Shape(format!(
                "coefficient row {} has {} weights, expected {}",
                row,
                weights.len(),
                n_features
            )));
        }
        Ok(())
    }

    /// Class probabilities for a feature vector
    pub fn predict_proba(&self, features: &SparseVector) -> Result<Vec<f64>, ModelError> {
        let width = self.coefficients.first().map(Vec::len).unwrap_or(0);
        if features.dim() != width {
            return Err(ModelError::Inference(format!(
                "feature dimension {} does not match classifier width {}",
                features.dim(),
                width
            )));
        }

        let logits: Vec<f64> = self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(weights, bias)| features.dot(weights) + bias)
            .collect();

        let probs = match self.activation {
            Activation::Softmax => softmax(&logits),
            Activation::Sigmoid => logits.iter().map(|&z| sigmoid(z)).collect(),
        };

        if probs.iter().any(|p| !p.is_finite()) {
            return Err(ModelError::Inference("non-finite probability".to_string()));
        }
        Ok(probs)
    }
}

fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|&z| (z - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
