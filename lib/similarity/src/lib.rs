//! # propx Similarity
//!
//! Similarity scoring over extracted property features.
//!
//! - [`similarity`] / [`score`] - compare two descriptions: garden presence
//!   XOR and room-count differences, starting from [`MAX_SIMILARITY`]
//! - [`SimilarityMatrix`] - all-pairs scores for a batch of descriptions,
//!   rendered as a 3-decimal text matrix

pub mod matrix;
pub mod score;

pub use matrix::SimilarityMatrix;
pub use score::{score, similarity, MAX_SIMILARITY};
