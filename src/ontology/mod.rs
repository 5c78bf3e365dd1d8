//! The [`Ontology`] registry of all MONDO terms and the [`XrefIndex`]
//! of external disease identifiers.

use core::fmt::Debug;
use std::path::Path;

use crate::parser::{Graph, GraphDocument};
use crate::term::internal::TermInternal;
use crate::term::{Closure, MondoTerm, TermGroup};
use crate::{MondoError, MondoResult, TermId};

mod builder;
mod termarena;
mod xref;

pub use builder::{AllTerms, Builder, DropReason, EdgeOutcome, LooseCollection, NodeOutcome};
pub use xref::{MappedTerms, XrefIndex};

use termarena::Arena;

#[cfg_attr(doc, aquamarine::aquamarine)]
/// `Ontology` is the main interface of the `mondo` crate and contains all terms
///
/// The [`Ontology`] holds every [`MondoTerm`] and their `is_a` relationships.
/// It is built once and is never modified afterwards, so it can be shared
/// freely between threads.
///
/// # Examples
///
/// ```
/// use mondo::{Ontology, TermId};
///
/// let ontology = Ontology::from_json_file("tests/small_mondo.json").unwrap();
///
/// let absent_term = TermId::try_from("MONDO:9999999").unwrap();
/// assert!(ontology.term(absent_term).is_none());
///
/// let root = ontology.term(1u32).unwrap();
/// assert_eq!(root.label(), Some("disease"));
/// assert!(root.is_root());
///
/// for term in &ontology {
///     println!("{}\t{}", term.id(), term.label().unwrap_or("-"));
/// }
/// ```
///
/// # Layout
///
/// Terms are connected in a directed relationship. Every term has
/// zero or more parents. Terms without parents are the roots of the Ontology.
/// Parent and child links are always mirrored.
///
/// ```mermaid
/// erDiagram
///     ONTOLOGY ||--|{ TERM : contains
///     TERM ||--o{ TERM : is_a
///     XREFINDEX }o--|{ TERM : maps_to
///     TERM {
///         TermId id
///         str label
///         TermGroup parents
///         TermGroup children
///     }
///     XREFINDEX {
///         str external_id
///         TermIds terms
///     }
/// ```
pub struct Ontology {
    terms: Arena,
    roots: TermGroup,
}

impl Debug for Ontology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ontology with {} terms", self.terms.len())
    }
}

impl Default for Ontology {
    fn default() -> Self {
        Builder::new().terms_complete().build()
    }
}

/// Public API of the Ontology
impl Ontology {
    /// Builds the Ontology from an OBO-Graphs graph
    ///
    /// Only MONDO nodes and `is_a` edges between them are used. All other
    /// nodes and edges are ignored.
    ///
    /// # Errors
    ///
    /// [`MondoError::EmptyGraph`] if the graph does not contain any nodes
    pub fn from_graph(graph: &Graph) -> MondoResult<Self> {
        if graph.nodes.is_empty() {
            return Err(MondoError::EmptyGraph);
        }
        let mut builder = Builder::new();
        for node in &graph.nodes {
            builder.add_node(node);
        }
        let mut builder = builder.terms_complete();
        for edge in &graph.edges {
            builder.add_edge(edge);
        }
        Ok(builder.build())
    }

    /// Reads a `mondo.json` file and builds the Ontology
    ///
    /// # Errors
    ///
    /// - [`MondoError::CannotOpenFile`] if the file cannot be read
    /// - [`MondoError::InvalidJson`] if the file is not valid OBO-Graphs JSON
    /// - [`MondoError::MissingGraph`] if the document does not contain a graph
    /// - [`MondoError::EmptyGraph`] if the graph does not contain any nodes
    pub fn from_json_file<P: AsRef<Path>>(filename: P) -> MondoResult<Self> {
        let document = GraphDocument::from_file(filename)?;
        Self::from_graph(document.graph()?)
    }

    /// Returns the number of terms in the Ontology
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the Ontology does not contain any terms
    ///
    /// # Examples
    ///
    /// ```
    /// use mondo::Ontology;
    /// let ontology = Ontology::default();
    /// assert!(ontology.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the [`MondoTerm`] of the provided [`TermId`]
    ///
    /// If no such term is present in the Ontology, `None` is returned
    pub fn term<I: Into<TermId>>(&self, term_id: I) -> Option<MondoTerm<'_>> {
        self.get(term_id.into())
            .map(|term| MondoTerm::new(self, term))
    }

    /// Returns an Iterator of all [`MondoTerm`]s, ordered by [`TermId`]
    pub fn terms(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Returns the [`TermId`]s of all terms without parents
    pub fn roots(&self) -> &TermGroup {
        &self.roots
    }

    /// Returns the labels of the ancestors of a term `max_depth` generations up
    ///
    /// Only the final generation is reported (see [`Closure::Frontier`]).
    /// An unknown term returns an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use mondo::Ontology;
    ///
    /// let ontology = Ontology::from_json_file("tests/small_mondo.json").unwrap();
    /// assert_eq!(ontology.ancestor_labels(6u32, 1), vec!["Parkinson disease", "hereditary disease"]);
    /// assert_eq!(ontology.ancestor_labels(6u32, 3), vec!["nervous system disorder"]);
    /// assert!(ontology.ancestor_labels(6u32, 4).is_empty());
    /// assert!(ontology.ancestor_labels(4711u32, 3).is_empty());
    /// ```
    pub fn ancestor_labels<I: Into<TermId>>(&self, term_id: I, max_depth: usize) -> Vec<&str> {
        self.term(term_id)
            .map(|term| term.ancestor_labels(max_depth, Closure::Frontier))
            .unwrap_or_default()
    }
}

/// Crate-only functions
impl Ontology {
    pub(crate) fn new(terms: Arena, roots: TermGroup) -> Self {
        Self { terms, roots }
    }

    pub(crate) fn get(&self, term_id: TermId) -> Option<&TermInternal> {
        self.terms.get(term_id)
    }
}

/// Iterates the Ontology and yields [`MondoTerm`]s
pub struct Iter<'a> {
    ids: std::vec::IntoIter<TermId>,
    ontology: &'a Ontology,
}

impl<'a> Iterator for Iter<'a> {
    type Item = MondoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        let ontology = self.ontology;
        self.ids
            .by_ref()
            .find_map(|id| ontology.get(id))
            .map(|term| MondoTerm::new(ontology, term))
    }
}

impl<'a> IntoIterator for &'a Ontology {
    type Item = MondoTerm<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            ids: self.terms.keys().into_iter(),
            ontology: self,
        }
    }
}
