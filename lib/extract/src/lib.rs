//! # propx Extract
//!
//! Feature extraction for property descriptions.
//!
//! Given a dependency-parsed document and a noun dictionary, the
//! [`FeatureExtractor`] walks the parse tree around every matched noun of
//! interest and collects its modifier words - adjectives, numerals, past
//! participles, compound-noun chains - into ordered lowercase groups. A
//! [`PropertyDescription`] bundles one parsed text with its extracted
//! [`FeatureMap`].
//!
//! ## Example
//!
//! ```rust
//! use propx_core::{ConlluParser, FeatureDict};
//! use propx_extract::{FeatureExtractor, PropertyDescription};
//! use std::collections::BTreeMap;
//!
//! let mut map = BTreeMap::new();
//! map.insert("bedroom".to_string(), vec!["bedroom".to_string()]);
//! let extractor = FeatureExtractor::builder()
//!     .dict(FeatureDict::new(map).unwrap())
//!     .build()
//!     .unwrap();
//!
//! let conllu = "1\ttwo\ttwo\tNUM\tCD\t_\t2\tnummod\t_\t_\n\
//!               2\tbedrooms\tbedroom\tNOUN\tNNS\t_\t0\tROOT\t_\t_\n";
//! let description = PropertyDescription::builder(&extractor)
//!     .text(conllu)
//!     .build(&ConlluParser::new())
//!     .unwrap();
//! assert_eq!(description.features()["bedroom"], vec![vec!["two".to_string()]]);
//! ```

pub mod description;
pub mod extractor;

pub use description::{DescriptionBuilder, PropertyDescription};
pub use extractor::{FeatureExtractor, FeatureExtractorBuilder, FeatureMap, ModifierGroup};
