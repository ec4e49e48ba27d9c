//! Property descriptions
//!
//! A [`PropertyDescription`] wraps one parsed description text together with
//! the features extracted from it. Instances are built once and never
//! mutated afterwards.

use crate::extractor::{FeatureExtractor, FeatureMap};
use propx_core::{normalize_whitespace, Doc, Error, Parser, Result};
use std::path::PathBuf;

/// One real-estate description: the parsed document plus its feature map.
#[derive(Debug, Clone)]
pub struct PropertyDescription {
    doc: Doc,
    features: FeatureMap,
}

impl PropertyDescription {
    /// Start building a description; the extractor supplies the dictionary.
    pub fn builder(extractor: &FeatureExtractor) -> DescriptionBuilder<'_> {
        DescriptionBuilder {
            extractor,
            path: None,
            text: None,
        }
    }

    pub fn doc(&self) -> &Doc {
        &self.doc
    }

    pub fn features(&self) -> &FeatureMap {
        &self.features
    }

    /// Features as JSON: keys sorted alphabetically, 2-space indentation.
    pub fn features_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.features)?)
    }
}

/// Builder for [`PropertyDescription`].
///
/// The description comes from exactly one source: a file path or the text
/// itself. Giving both is an error, as is giving neither.
#[derive(Debug)]
pub struct DescriptionBuilder<'a> {
    extractor: &'a FeatureExtractor,
    path: Option<PathBuf>,
    text: Option<String>,
}

impl DescriptionBuilder<'_> {
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Read the source, normalize whitespace, parse and extract.
    pub fn build<P: Parser>(self, parser: &P) -> Result<PropertyDescription> {
        let text = match (self.text, self.path) {
            (Some(_), Some(_)) => {
                return Err(Error::ConflictingArguments {
                    first: "text",
                    second: "path",
                })
            }
            (None, None) => return Err(Error::MissingArgument("text, path")),
            (Some(text), None) => text,
            (None, Some(path)) => std::fs::read_to_string(path)?,
        };
        let doc = parser.parse(&normalize_whitespace(&text))?;
        let features = self.extractor.extract(&doc);
        Ok(PropertyDescription { doc, features })
    }
}
