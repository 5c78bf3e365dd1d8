use std::collections::hash_map::Iter;
use std::collections::HashMap;

use smallvec::SmallVec;
use tracing::debug;

use crate::parser::Graph;
use crate::TermId;

/// The MONDO terms that are mapped to a single external identifier
///
/// Most external identifiers map to a single term, some to a few.
pub type MappedTerms = SmallVec<[TermId; 2]>;

/// Maps external disease identifiers (e.g. `DOID:14330`) to MONDO terms
///
/// The index is built from the annotations of the MONDO nodes
/// (`basicPropertyValues` and `xrefs`). Every value that starts with the
/// given prefix is recorded for the term. An external identifier can map
/// to multiple terms and a term can have multiple external identifiers.
///
/// The [`TermId`]s of each identifier are unique and sorted.
///
/// # Examples
///
/// ```
/// use mondo::parser::GraphDocument;
/// use mondo::{TermId, XrefIndex};
///
/// let document = GraphDocument::from_file("tests/small_mondo.json").unwrap();
/// let index = XrefIndex::from_graph(document.graph().unwrap(), "DOID:");
///
/// assert_eq!(
///     index.get("DOID:14330"),
///     &[TermId::from(5u32), TermId::from(6u32)]
/// );
/// assert!(index.get("DOID:0000000").is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct XrefIndex {
    prefix: String,
    map: HashMap<String, MappedTerms>,
}

impl XrefIndex {
    /// Builds the index from all MONDO nodes of the graph
    ///
    /// Nodes outside of the MONDO namespace are ignored
    pub fn from_graph(graph: &Graph, prefix: &str) -> Self {
        let mut index = XrefIndex {
            prefix: prefix.to_string(),
            map: HashMap::new(),
        };
        for node in &graph.nodes {
            let Some(id) = TermId::from_iri(&node.id) else {
                continue;
            };
            for value in node.annotation_values() {
                index.insert(value, id);
            }
        }
        debug!(
            "Indexed {} external identifiers with prefix {}",
            index.len(),
            index.prefix
        );
        index
    }

    /// Records that `external_id` maps to the term `id`
    ///
    /// Returns `false` if `external_id` does not start with the prefix
    /// of the index or if the mapping was present already.
    pub fn insert(&mut self, external_id: &str, id: TermId) -> bool {
        if !external_id.starts_with(&self.prefix) {
            return false;
        }
        let terms = self.map.entry(external_id.to_string()).or_default();
        match terms.binary_search(&id) {
            Ok(_) => false,
            Err(idx) => {
                terms.insert(idx, id);
                true
            }
        }
    }

    /// Returns the MONDO terms for the external identifier
    ///
    /// Unknown identifiers return an empty slice
    pub fn get(&self, external_id: &str) -> &[TermId] {
        self.map
            .get(external_id)
            .map(SmallVec::as_slice)
            .unwrap_or_default()
    }

    /// Returns `true` if the external identifier maps to at least one term
    pub fn contains(&self, external_id: &str) -> bool {
        self.map.contains_key(external_id)
    }

    /// The prefix of all external identifiers in the index
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the number of external identifiers
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the index does not contain any identifiers
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns an iterator of all identifiers with their terms, in arbitrary order
    pub fn iter(&self) -> Iter<'_, String, MappedTerms> {
        self.map.iter()
    }
}
