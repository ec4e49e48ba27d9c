//! # propx
//!
//! Feature extraction and similarity scoring for property descriptions.
//!
//! propx takes dependency-parsed real-estate descriptions, pulls out the
//! descriptive features of nouns of interest (room counts, compound phrases
//! like "ground floor", qualifying adjectives) and scores pairs of
//! descriptions for similarity.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! propx extract --dict features_dict.json --input data/properties --out data/features
//! propx matrix --dict features_dict.json --input data/properties --out data/sim_matrix.txt
//! ```
//!
//! Inputs are `*.conllu` files - the output of any Universal Dependencies
//! parser run over the description texts.
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use propx::prelude::*;
//!
//! let extractor = FeatureExtractor::builder()
//!     .dict_path("features_dict.json")
//!     .build()
//!     .unwrap();
//!
//! let parser = ConlluParser::new();
//! let a = PropertyDescription::builder(&extractor)
//!     .path("flat_01.conllu")
//!     .build(&parser)
//!     .unwrap();
//! let b = PropertyDescription::builder(&extractor)
//!     .path("flat_02.conllu")
//!     .build(&parser)
//!     .unwrap();
//!
//! println!("similarity: {}", score(&a, &b));
//! ```
//!
//! ## Crate Structure
//!
//! propx is composed of several crates:
//!
//! - [`propx-core`](https://docs.rs/propx-core) - document model, CoNLL-U reading, phrase matching, numeral words
//! - [`propx-extract`](https://docs.rs/propx-extract) - the dependency-tree feature walk and `PropertyDescription`
//! - [`propx-similarity`](https://docs.rs/propx-similarity) - pairwise scores and the similarity matrix

// Re-export core types
pub use propx_core::{
    normalize_whitespace, word_to_number, ConlluParser, Doc, DocBuilder, Error, FeatureDict,
    Match, Parser, PhraseMatcher, Result, Token,
};

// Re-export extraction
pub use propx_extract::{FeatureExtractor, FeatureMap, ModifierGroup, PropertyDescription};

// Re-export similarity
pub use propx_similarity::{score, similarity, SimilarityMatrix, MAX_SIMILARITY};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        score, similarity, word_to_number, ConlluParser, Doc, DocBuilder, Error, FeatureDict,
        FeatureExtractor, FeatureMap, Match, Parser, PhraseMatcher, PropertyDescription, Result,
        SimilarityMatrix, Token, MAX_SIMILARITY,
    };
}
