//! The dependency-tree feature walk
//!
//! For every dictionary phrase matched in a document, the extractor walks
//! the parse tree around the match's head token and collects the words that
//! qualify it: adjectives, numerals, past participles, compound-noun chains
//! and nominal modifiers. Each walk emits ordered groups of lowercase words
//! reading left-to-right as in the source sentence.

use propx_core::{Doc, Error, FeatureDict, Match, PhraseMatcher, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// One ordered group of lowercase modifier words. Never empty.
pub type ModifierGroup = Vec<String>;

/// Feature name -> modifier groups, in discovery order per name.
///
/// A name is present iff at least one group was emitted for it. BTreeMap
/// keeps serialized keys alphabetical.
pub type FeatureMap = BTreeMap<String, Vec<ModifierGroup>>;

/// Tags a child may carry to qualify as a modifier on its own: adjective,
/// cardinal number, past-participle verb, proper noun.
const MODIFIER_TAGS: [&str; 4] = ["JJ", "CD", "VBN", "NNP"];

/// Dependency labels that attach modifiers to a noun.
const MODIFIER_DEPS: [&str; 4] = ["nummod", "amod", "advmod", "npadvmod"];

/// Tags admitted only under an already modifier-shaped head: adverb and
/// common noun.
const WEAK_MODIFIER_TAGS: [&str; 2] = ["RB", "NN"];

fn is_modifier_tag(tag: &str) -> bool {
    MODIFIER_TAGS.contains(&tag)
}

/// Extracts features for nouns of interest from parsed documents.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    dict: FeatureDict,
    matcher: PhraseMatcher,
}

impl FeatureExtractor {
    pub fn builder() -> FeatureExtractorBuilder {
        FeatureExtractorBuilder::default()
    }

    pub fn dict(&self) -> &FeatureDict {
        &self.dict
    }

    /// Run the extraction over a parsed document.
    ///
    /// Matches are processed in document-scan order; every group a match
    /// yields is appended under the match's feature name. Duplicate groups
    /// from ambiguous structure are preserved, not deduplicated.
    pub fn extract(&self, doc: &Doc) -> FeatureMap {
        let mut features = FeatureMap::new();
        for m in self.matcher.find(doc) {
            let mut groups = Vec::new();
            collect_features(doc, m.end - 1, &m, false, &mut groups);
            if !groups.is_empty() {
                features.entry(m.name.clone()).or_default().extend(groups);
            }
        }
        features
    }
}

/// The recursive walk for one anchor token.
///
/// Emits the token's own modifier group (if any), then descends into `nmod`
/// children treating each as a new anchor that includes itself. When the
/// anchor itself hangs off its head as `nmod` and found nothing, it borrows
/// the governing token's modifiers instead; that branch does not recurse.
fn collect_features(
    doc: &Doc,
    token: usize,
    m: &Match,
    include_token: bool,
    out: &mut Vec<ModifierGroup>,
) {
    let mut modifiers = gather_modifiers(doc, token);
    modifiers.extend(gather_compound_chain(doc, token, m));
    if include_token {
        modifiers.push(token);
    }
    modifiers.sort_unstable();

    let emitted = !modifiers.is_empty();
    if emitted {
        out.push(to_group(doc, &modifiers));
    }

    for &child in doc.children(token) {
        if doc.token(child).dep == "nmod" {
            collect_features(doc, child, m, true, out);
        }
    }

    if doc.token(token).dep == "nmod" && !emitted {
        let fallback = gather_modifiers(doc, doc.token(token).head);
        if !fallback.is_empty() {
            out.push(to_group(doc, &fallback));
        }
    }
}

/// Modifier descendants of `token` reachable through qualifying edges.
///
/// A child counts iff its dependency label is a modifier label and either
/// its tag is modifier-shaped, or its tag is a weak one (adverb, common
/// noun) while `token` itself is modifier-shaped. Qualifying children are
/// searched recursively.
fn gather_modifiers(doc: &Doc, token: usize) -> Vec<usize> {
    let token_is_modifier_shaped = is_modifier_tag(&doc.token(token).tag);
    let mut out = Vec::new();
    for &child in doc.children(token) {
        let t = doc.token(child);
        let qualifies = MODIFIER_DEPS.contains(&t.dep.as_str())
            && (is_modifier_tag(&t.tag)
                || (WEAK_MODIFIER_TAGS.contains(&t.tag.as_str()) && token_is_modifier_shaped));
        if qualifies {
            out.push(child);
            out.extend(gather_modifiers(doc, child));
        }
    }
    out
}

/// Compound-noun chain hanging off `token`.
///
/// Compound children inside the matched span are part of the phrase itself
/// and are skipped, but the walk continues through them so a chain reaching
/// further left is still picked up.
fn gather_compound_chain(doc: &Doc, token: usize, m: &Match) -> Vec<usize> {
    let mut out = Vec::new();
    for &child in doc.children(token) {
        if doc.token(child).dep == "compound" {
            if child < m.start || child >= m.end {
                out.push(child);
                out.extend(gather_modifiers(doc, child));
            }
            out.extend(gather_compound_chain(doc, child, m));
        }
    }
    out
}

fn to_group(doc: &Doc, indices: &[usize]) -> ModifierGroup {
    indices
        .iter()
        .map(|&i| doc.token(i).text.to_lowercase())
        .collect()
}

/// Builder for [`FeatureExtractor`].
///
/// The dictionary comes from exactly one source: an in-memory
/// [`FeatureDict`] or a JSON file path. Giving both is an error, as is
/// giving neither.
#[derive(Debug, Default)]
pub struct FeatureExtractorBuilder {
    dict: Option<FeatureDict>,
    dict_path: Option<PathBuf>,
}

impl FeatureExtractorBuilder {
    pub fn dict(mut self, dict: FeatureDict) -> Self {
        self.dict = Some(dict);
        self
    }

    pub fn dict_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dict_path = Some(path.into());
        self
    }

    pub fn build(self) -> Result<FeatureExtractor> {
        let dict = match (self.dict, self.dict_path) {
            (Some(_), Some(_)) => {
                return Err(Error::ConflictingArguments {
                    first: "dict",
                    second: "dict_path",
                })
            }
            (None, None) => return Err(Error::MissingArgument("dict, dict_path")),
            (Some(dict), None) => dict,
            (None, Some(path)) => FeatureDict::from_path(path)?,
        };
        let matcher = PhraseMatcher::new(&dict);
        Ok(FeatureExtractor { dict, matcher })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use propx_core::DocBuilder;
    use std::collections::BTreeMap;
    use std::io::Write;

    fn test_dict() -> FeatureDict {
        let mut map = BTreeMap::new();
        map.insert(
            "property".to_string(),
            vec![
                "property".to_string(),
                "apartment".to_string(),
                "flat".to_string(),
            ],
        );
        map.insert("bedroom".to_string(), vec!["bedroom".to_string()]);
        map.insert("bathroom".to_string(), vec!["bathroom".to_string()]);
        map.insert("garden".to_string(), vec!["garden".to_string()]);
        FeatureDict::new(map).unwrap()
    }

    fn extractor() -> FeatureExtractor {
        FeatureExtractor::builder().dict(test_dict()).build().unwrap()
    }

    /// Parse of: "A spacious and rather elegant raised ground floor two
    /// bedroom apartment with two bathrooms (one en-suite) on this historic
    /// garden square, set within this wonderful stucco fronted property."
    fn listing_doc() -> Doc {
        DocBuilder::new()
            .token("A", "a", "DT", "det", 10)
            .token("spacious", "spacious", "JJ", "dep", 10)
            .token("and", "and", "CC", "cc", 1)
            .token("rather", "rather", "RB", "advmod", 4)
            .token("elegant", "elegant", "JJ", "conj", 1)
            .token("raised", "raise", "VBN", "amod", 7)
            .token("ground", "ground", "NN", "compound", 7)
            .token("floor", "floor", "NN", "nmod", 10)
            .token("two", "two", "CD", "nummod", 9)
            .token("bedroom", "bedroom", "NN", "compound", 10)
            .root("apartment", "apartment", "NN")
            .token("with", "with", "IN", "prep", 10)
            .token("two", "two", "CD", "nummod", 13)
            .token("bathrooms", "bathroom", "NNS", "pobj", 11)
            .token("(", "(", "-LRB-", "punct", 16)
            .token("one", "one", "CD", "nummod", 16)
            .token("en-suite", "en-suite", "NN", "appos", 13)
            .token(")", ")", "-RRB-", "punct", 16)
            .token("on", "on", "IN", "prep", 10)
            .token("this", "this", "DT", "det", 22)
            .token("historic", "historic", "JJ", "amod", 22)
            .token("garden", "garden", "NN", "compound", 22)
            .token("square", "square", "NN", "pobj", 18)
            .token(",", ",", ",", "punct", 10)
            .token("set", "set", "VBN", "acl", 10)
            .token("within", "within", "IN", "prep", 24)
            .token("this", "this", "DT", "det", 30)
            .token("wonderful", "wonderful", "JJ", "amod", 29)
            .token("stucco", "stucco", "NN", "compound", 29)
            .token("fronted", "front", "VBN", "acl", 30)
            .token("property", "property", "NN", "pobj", 25)
            .token(".", ".", ".", "punct", 10)
            .build()
            .unwrap()
    }

    #[test]
    fn test_listing_property_groups() {
        let features = extractor().extract(&listing_doc());
        let groups = &features["property"];
        assert_eq!(
            groups,
            &vec![
                vec!["two".to_string(), "bedroom".to_string()],
                vec!["raised".to_string(), "ground".to_string(), "floor".to_string()],
            ]
        );
    }

    #[test]
    fn test_listing_never_picks_up_elegant() {
        let features = extractor().extract(&listing_doc());
        for group in &features["property"] {
            assert!(
                !group.iter().any(|w| w == "elegant"),
                "`elegant` leaked into {group:?}"
            );
        }
    }

    #[test]
    fn test_listing_room_counts() {
        let features = extractor().extract(&listing_doc());
        assert_eq!(features["bedroom"], vec![vec!["two".to_string()]]);
        assert_eq!(features["bathroom"], vec![vec!["two".to_string()]]);
    }

    #[test]
    fn test_matched_noun_without_modifiers_stays_absent() {
        // "garden" matches inside "garden square" but carries no modifiers
        // of its own, so no entry may appear for it.
        let features = extractor().extract(&listing_doc());
        assert!(!features.contains_key("garden"));
    }

    #[test]
    fn test_groups_are_never_empty() {
        let features = extractor().extract(&listing_doc());
        for groups in features.values() {
            assert!(!groups.is_empty());
            for group in groups {
                assert!(!group.is_empty());
            }
        }
    }

    #[test]
    fn test_nmod_anchor_borrows_governor_modifiers() {
        // "a charming apartment garden": the matched token hangs off its
        // governor as nmod and has no modifiers itself, so it borrows the
        // governor's.
        let doc = DocBuilder::new()
            .token("a", "a", "DT", "det", 2)
            .token("charming", "charming", "JJ", "amod", 2)
            .root("apartment", "apartment", "NN")
            .token("garden", "garden", "NN", "nmod", 2)
            .build()
            .unwrap();
        let features = extractor().extract(&doc);
        assert_eq!(features["garden"], vec![vec!["charming".to_string()]]);
    }

    #[test]
    fn test_nmod_fallback_with_bare_governor_emits_nothing() {
        let doc = DocBuilder::new()
            .root("apartment", "apartment", "NN")
            .token("garden", "garden", "NN", "nmod", 0)
            .build()
            .unwrap();
        let features = extractor().extract(&doc);
        assert!(!features.contains_key("garden"));
    }

    #[test]
    fn test_weak_tags_need_modifier_shaped_head() {
        // "very large garden": "very" (RB) hangs off "large" (JJ), which is
        // modifier-shaped, so it is admitted. A bare RB under the noun
        // itself would not be.
        let doc = DocBuilder::new()
            .token("very", "very", "RB", "advmod", 1)
            .token("large", "large", "JJ", "amod", 2)
            .root("garden", "garden", "NN")
            .build()
            .unwrap();
        let features = extractor().extract(&doc);
        assert_eq!(
            features["garden"],
            vec![vec!["very".to_string(), "large".to_string()]]
        );

        let doc = DocBuilder::new()
            .token("really", "really", "RB", "advmod", 1)
            .root("garden", "garden", "NN")
            .build()
            .unwrap();
        let features = extractor().extract(&doc);
        assert!(!features.contains_key("garden"));
    }

    #[test]
    fn test_compound_inside_match_span_is_walked_through() {
        // Phrase "garden flat" matches [1, 3); "garden" sits inside the
        // span so it is not itself a feature, but the chain continues
        // through it to "roof".
        let mut map = BTreeMap::new();
        map.insert("property".to_string(), vec!["garden flat".to_string()]);
        let dict = FeatureDict::new(map).unwrap();
        let extractor = FeatureExtractor::builder().dict(dict).build().unwrap();

        let doc = DocBuilder::new()
            .token("roof", "roof", "NN", "compound", 1)
            .token("garden", "garden", "NN", "compound", 2)
            .root("flat", "flat", "NN")
            .build()
            .unwrap();
        let features = extractor.extract(&doc);
        assert_eq!(features["property"], vec![vec!["roof".to_string()]]);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let doc = listing_doc();
        let extractor = extractor();
        assert_eq!(extractor.extract(&doc), extractor.extract(&doc));
    }

    #[test]
    fn test_builder_rejects_both_sources() {
        let result = FeatureExtractor::builder()
            .dict(test_dict())
            .dict_path("/tmp/does-not-matter.json")
            .build();
        assert!(matches!(result, Err(Error::ConflictingArguments { .. })));
    }

    #[test]
    fn test_builder_rejects_no_source() {
        let result = FeatureExtractor::builder().build();
        assert!(matches!(result, Err(Error::MissingArgument(_))));
    }

    #[test]
    fn test_builder_loads_dictionary_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"garden": ["garden"]}}"#).unwrap();
        let extractor = FeatureExtractor::builder()
            .dict_path(file.path())
            .build()
            .unwrap();
        assert_eq!(extractor.dict().len(), 1);
    }
}
