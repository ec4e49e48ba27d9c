//! Pairwise similarity matrix over a batch of descriptions
//!
//! Descriptions are read-only once built, so rows are scored in parallel.

use crate::score::score;
use propx_core::Result;
use propx_extract::PropertyDescription;
use rayon::prelude::*;
use std::path::Path;

/// N x N similarity scores with the input labels they belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    labels: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Score every pair of descriptions, keeping the given order.
    ///
    /// Labels are typically the input file base names without extension.
    pub fn build(descriptions: &[(String, PropertyDescription)]) -> Self {
        let labels = descriptions.iter().map(|(name, _)| name.clone()).collect();
        let rows = descriptions
            .par_iter()
            .map(|(_, a)| {
                descriptions
                    .iter()
                    .map(|(_, b)| score(a, b))
                    .collect::<Vec<f64>>()
            })
            .collect();
        Self { labels, rows }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Whitespace-separated values with 3 decimal digits, one row per line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let rendered: Vec<String> = row.iter().map(|v| format!("{v:.3}")).collect();
            out.push_str(&rendered.join(" "));
            out.push('\n');
        }
        out
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_text())?;
        Ok(())
    }
}
