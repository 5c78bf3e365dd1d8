use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::ontology::termarena::Arena;
use crate::parser::{Edge, Node};
use crate::term::internal::TermInternal;
use crate::term::TermGroup;
use crate::{Ontology, TermId, IS_A};

/// State of the [`Builder`] while terms are added
pub struct LooseCollection;
/// State of the [`Builder`] after all terms are added, while edges are added
pub struct AllTerms;

/// The reason why a node or an edge did not end up in the Ontology
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// The IRI is not part of the MONDO namespace
    ForeignNamespace,
    /// The IRI has the MONDO prefix, but no numerical ID
    InvalidId,
    /// The edge is not an `is_a` edge
    OtherPredicate,
    /// The subject of the edge was never added as a term
    UnknownSubject,
    /// The object of the edge was never added as a term
    UnknownObject,
}

/// The result of adding a node to the [`Builder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeOutcome {
    /// The node was added as a new term
    Registered(TermId),
    /// The node replaced a term with the same ID
    Replaced(TermId),
    /// The node was ignored
    Dropped(DropReason),
}

/// The result of adding an edge to the [`Builder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeOutcome {
    /// `child` is now linked to `parent`, in both directions
    Linked {
        /// The subject of the edge
        child: TermId,
        /// The object of the edge
        parent: TermId,
    },
    /// The edge was ignored
    Dropped(DropReason),
}

#[derive(Debug, Default, Clone, Copy)]
struct Summary {
    terms: usize,
    replaced_terms: usize,
    dropped_nodes: usize,
    links: usize,
    dropped_edges: usize,
}

/// Builds an [`Ontology`] step by step
///
/// 1. Add all terms (nodes) [`Builder::add_node`] or [`Builder::add_term`]
/// 2. Transition to the next state [`Builder::terms_complete`]
/// 3. Link terms to their parents [`Builder::add_edge`] or [`Builder::add_parent`]
/// 4. [`Builder::build`] the Ontology
///
/// Edges can only be added once all terms are present, so the order
/// of nodes and edges in the source data does not matter.
///
/// # Examples
///
/// ```
/// use mondo::ontology::{Builder, EdgeOutcome};
///
/// let mut builder = Builder::new();
/// builder.add_term(1u32.into(), Some("disease"));
/// builder.add_term(2u32.into(), Some("cancer"));
///
/// let mut builder = builder.terms_complete();
/// assert_eq!(
///     builder.add_parent(1u32.into(), 2u32.into()),
///     EdgeOutcome::Linked { child: 2u32.into(), parent: 1u32.into() }
/// );
///
/// let ontology = builder.build();
/// assert_eq!(ontology.len(), 2);
/// assert!(ontology.term(1u32).unwrap().is_root());
/// ```
pub struct Builder<T> {
    terms: Arena,
    summary: Summary,
    state: PhantomData<T>,
}

fn transition_state<TX, TY>(builder: Builder<TX>) -> Builder<TY> {
    Builder::<TY> {
        terms: builder.terms,
        summary: builder.summary,
        state: PhantomData,
    }
}

impl Builder<LooseCollection> {
    /// Constructs a new, empty `Builder`
    pub fn new() -> Builder<LooseCollection> {
        Builder::<LooseCollection> {
            terms: Arena::default(),
            summary: Summary::default(),
            state: PhantomData,
        }
    }

    /// Adds a graph node as a term
    ///
    /// Nodes that are not part of the MONDO namespace are dropped.
    pub fn add_node(&mut self, node: &Node) -> NodeOutcome {
        match parse_iri(&node.id) {
            Ok(id) => self.add_term(id, node.lbl.as_deref()),
            Err(reason) => {
                trace!("Ignoring node {}: {:?}", node.id, reason);
                self.summary.dropped_nodes += 1;
                NodeOutcome::Dropped(reason)
            }
        }
    }

    /// Adds a term to the ontology
    ///
    /// If a term with the same ID exists already, it is replaced
    pub fn add_term(&mut self, id: TermId, label: Option<&str>) -> NodeOutcome {
        let term = TermInternal::new(id, label.map(str::to_string));
        if self.terms.insert(term).is_some() {
            debug!("Replacing duplicated term {}", id);
            self.summary.replaced_terms += 1;
            NodeOutcome::Replaced(id)
        } else {
            self.summary.terms += 1;
            NodeOutcome::Registered(id)
        }
    }

    /// Finishes adding terms, parents can be added afterwards
    #[must_use]
    pub fn terms_complete(self) -> Builder<AllTerms> {
        transition_state(self)
    }
}

impl Default for Builder<LooseCollection> {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder<AllTerms> {
    /// Adds a graph edge
    ///
    /// Only `is_a` edges between two known terms are added. All other
    /// edges are dropped.
    pub fn add_edge(&mut self, edge: &Edge) -> EdgeOutcome {
        if edge.pred != IS_A {
            self.summary.dropped_edges += 1;
            return EdgeOutcome::Dropped(DropReason::OtherPredicate);
        }
        let ids = parse_iri(&edge.sub).and_then(|child| Ok((child, parse_iri(&edge.obj)?)));
        match ids {
            Ok((child, parent)) => self.add_parent(parent, child),
            Err(reason) => {
                trace!("Ignoring edge {} -> {}: {:?}", edge.sub, edge.obj, reason);
                self.summary.dropped_edges += 1;
                EdgeOutcome::Dropped(reason)
            }
        }
    }

    /// Add a connection from a term to its parent
    ///
    /// The child is added to the children of the parent and the parent is
    /// added to the parents of the child. If either term is unknown, nothing
    /// is changed.
    pub fn add_parent(&mut self, parent_id: TermId, child_id: TermId) -> EdgeOutcome {
        if !self.terms.contains(child_id) {
            self.summary.dropped_edges += 1;
            return EdgeOutcome::Dropped(DropReason::UnknownSubject);
        }
        let Some(parent) = self.terms.get_mut(parent_id) else {
            self.summary.dropped_edges += 1;
            return EdgeOutcome::Dropped(DropReason::UnknownObject);
        };
        parent.add_child(child_id);

        if let Some(child) = self.terms.get_mut(child_id) {
            child.add_parent(parent_id);
        }
        self.summary.links += 1;
        EdgeOutcome::Linked {
            child: child_id,
            parent: parent_id,
        }
    }

    /// Builds the final [`Ontology`] and identifies all root terms
    pub fn build(self) -> Ontology {
        let roots: TermGroup = self
            .terms
            .values()
            .filter(|term| term.parents().is_empty())
            .map(|term| *term.id())
            .collect();
        let summary = self.summary;
        debug!(
            "Built ontology: {} terms ({} replaced), {} links, {} roots, dropped {} nodes and {} edges",
            summary.terms,
            summary.replaced_terms,
            summary.links,
            roots.len(),
            summary.dropped_nodes,
            summary.dropped_edges
        );
        Ontology::new(self.terms, roots)
    }
}

fn parse_iri(iri: &str) -> Result<TermId, DropReason> {
    if !iri.starts_with(crate::MONDO_PREFIX) {
        return Err(DropReason::ForeignNamespace);
    }
    TermId::from_iri(iri).ok_or(DropReason::InvalidId)
}
