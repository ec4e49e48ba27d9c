//! Pairwise description similarity
//!
//! A deliberately simple hand-coded score: matching garden presence and
//! similar room counts are rewarded, and missing numeric data on either
//! side suppresses that term rather than penalizing it.

use propx_core::word_to_number;
use propx_extract::{FeatureMap, PropertyDescription};

/// The score of two identical descriptions; no pair scores higher.
pub const MAX_SIMILARITY: f64 = 2.0;

const GARDEN: &str = "garden";
const COUNTED_FEATURES: [&str; 2] = ["bathroom", "bedroom"];

/// Compare two feature maps.
///
/// Starts at [`MAX_SIMILARITY`] and subtracts:
/// - 1.0 when exactly one side has any "garden" group (presence XOR);
/// - per counted feature (bathroom, bedroom), `0.5 * |a - b|` over the
///   maximum numeral found in each side's groups - only when both sides
///   have one.
///
/// Unbounded below, never above 2.0, symmetric.
pub fn similarity(a: &FeatureMap, b: &FeatureMap) -> f64 {
    let mut score = MAX_SIMILARITY;

    if has_feature(a, GARDEN) != has_feature(b, GARDEN) {
        score -= 1.0;
    }

    for name in COUNTED_FEATURES {
        if let (Some(count_a), Some(count_b)) = (max_numeral(a, name), max_numeral(b, name)) {
            score -= 0.5 * (count_a - count_b).abs() as f64;
        }
    }

    score
}

/// Compare two descriptions by their feature maps.
pub fn score(a: &PropertyDescription, b: &PropertyDescription) -> f64 {
    similarity(a.features(), b.features())
}

fn has_feature(features: &FeatureMap, name: &str) -> bool {
    features.get(name).is_some_and(|groups| !groups.is_empty())
}

/// Largest cardinal number among the words of `name`'s groups, if any.
///
/// Non-numeral words are expected and skipped.
fn max_numeral(features: &FeatureMap, name: &str) -> Option<i64> {
    features
        .get(name)?
        .iter()
        .flatten()
        .filter_map(|word| word_to_number(word).ok())
        .max()
}
