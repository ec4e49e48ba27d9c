//! # propx Core
//!
//! Core library for the propx property-description pipeline.
//!
//! This crate provides the pieces everything else builds on:
//!
//! - [`Token`] / [`Doc`] - the dependency-parsed document model
//! - [`Parser`] / [`ConlluParser`] - the external-parser seam (CoNLL-U in)
//! - [`FeatureDict`] / [`PhraseMatcher`] - the noun-of-interest dictionary
//!   and lemma-based phrase matching
//! - [`word_to_number`] - cardinal numeral words ("two" -> 2)
//!
//! ## Example
//!
//! ```rust
//! use propx_core::{ConlluParser, FeatureDict, Parser, PhraseMatcher};
//! use std::collections::BTreeMap;
//!
//! let conllu = "1\ttwo\ttwo\tNUM\tCD\t_\t2\tnummod\t_\t_\n\
//!               2\tbedrooms\tbedroom\tNOUN\tNNS\t_\t0\tROOT\t_\t_\n";
//! let doc = ConlluParser::new().parse(conllu).unwrap();
//!
//! let mut map = BTreeMap::new();
//! map.insert("bedroom".to_string(), vec!["bedroom".to_string()]);
//! let dict = FeatureDict::new(map).unwrap();
//!
//! let matches = PhraseMatcher::new(&dict).find(&doc);
//! assert_eq!(matches[0].name, "bedroom");
//! ```

pub mod conllu;
pub mod doc;
pub mod error;
pub mod matcher;
pub mod numword;
pub mod token;

pub use conllu::{ConlluParser, Parser};
pub use doc::{normalize_whitespace, Doc, DocBuilder};
pub use error::{Error, Result};
pub use matcher::{FeatureDict, Match, PhraseMatcher};
pub use numword::word_to_number;
pub use token::Token;
