//! Maps external disease identifiers to MONDO category labels
//!
//! The [`CategoryResolver`] combines the [`XrefIndex`] with the ancestor
//! traversal of the [`Ontology`]: an external identifier is mapped to all
//! of its MONDO terms, the ancestors of each term are collected and their
//! labels are the categories of the identifier.

use std::collections::BTreeSet;

use tracing::trace;

use crate::term::{labels, Closure};
use crate::{Ontology, TermGroup, XrefIndex, DEFAULT_MAX_DEPTH};

/// The categories of an external identifier
pub type Categories<'a> = BTreeSet<&'a str>;

/// The result of resolving an external identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The identifier resolved to at least one category
    Linked(Categories<'a>),
    /// The identifier is not in the index
    Unknown,
    /// The identifier maps to MONDO terms, but none of their
    /// ancestors has a label
    NoCategories,
}

impl<'a> Resolution<'a> {
    /// Returns the categories, an empty set if the identifier did not resolve
    pub fn into_categories(self) -> Categories<'a> {
        match self {
            Resolution::Linked(categories) => categories,
            Resolution::Unknown | Resolution::NoCategories => Categories::new(),
        }
    }

    /// Returns `true` if the identifier resolved to at least one category
    pub fn is_linked(&self) -> bool {
        matches!(self, Resolution::Linked(_))
    }
}

/// Resolves external disease identifiers to category labels
///
/// The resolver only holds references to the [`Ontology`] and the
/// [`XrefIndex`] and never modifies them.
///
/// # Examples
///
/// ```
/// use mondo::parser::load;
/// use mondo::{CategoryResolver, Closure};
///
/// let (ontology, xrefs) = load("tests/small_mondo.json", "DOID:").unwrap();
/// let resolver = CategoryResolver::new(&ontology, &xrefs);
///
/// // DOID:14330 maps to two MONDO terms with different ancestors
/// let categories: Vec<&str> = resolver.categories_for("DOID:14330").into_iter().collect();
/// assert_eq!(categories, vec!["disease", "nervous system disorder"]);
///
/// assert!(resolver.categories_for("DOID:0000000").is_empty());
///
/// let resolver = resolver.max_depth(1);
/// let categories: Vec<&str> = resolver.categories_for("DOID:12930").into_iter().collect();
/// assert_eq!(categories, vec!["cardiomyopathy"]);
///
/// let resolver = resolver.max_depth(3).closure(Closure::Cumulative);
/// assert_eq!(resolver.categories_for("DOID:12930").len(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CategoryResolver<'a> {
    ontology: &'a Ontology,
    xrefs: &'a XrefIndex,
    max_depth: usize,
    closure: Closure,
}

impl<'a> CategoryResolver<'a> {
    /// Constructs a new resolver with the default depth and [`Closure::Frontier`]
    pub fn new(ontology: &'a Ontology, xrefs: &'a XrefIndex) -> Self {
        Self {
            ontology,
            xrefs,
            max_depth: DEFAULT_MAX_DEPTH,
            closure: Closure::default(),
        }
    }

    /// Sets the number of generations to traverse
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets which generations contribute to the categories
    #[must_use]
    pub fn closure(mut self, closure: Closure) -> Self {
        self.closure = closure;
        self
    }

    /// Returns the underlying [`Ontology`]
    pub fn ontology(&self) -> &'a Ontology {
        self.ontology
    }

    /// Returns the underlying [`XrefIndex`]
    pub fn xrefs(&self) -> &'a XrefIndex {
        self.xrefs
    }

    /// Returns the ancestor terms of all MONDO terms of the external identifier
    pub fn category_terms(&self, external_id: &str) -> TermGroup {
        self.xrefs
            .get(external_id)
            .iter()
            .filter_map(|id| self.ontology.term(*id))
            .fold(TermGroup::new(), |all, term| {
                &all | &term.ancestors(self.max_depth, self.closure)
            })
    }

    /// Resolves the external identifier to its categories
    ///
    /// The categories of all MONDO terms of the identifier are merged.
    pub fn resolve(&self, external_id: &str) -> Resolution<'a> {
        if !self.xrefs.contains(external_id) {
            trace!("{} is not mapped to MONDO", external_id);
            return Resolution::Unknown;
        }
        let categories = labels(self.ontology, &self.category_terms(external_id));
        if categories.is_empty() {
            trace!("{} does not have any categories", external_id);
            Resolution::NoCategories
        } else {
            Resolution::Linked(categories)
        }
    }

    /// Returns the union of the category labels of all MONDO terms of the identifier
    ///
    /// Unknown identifiers return an empty set
    pub fn categories_for(&self, external_id: &str) -> Categories<'a> {
        self.resolve(external_id).into_categories()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::parser::Graph;

    fn setup() -> (Ontology, XrefIndex) {
        // 1 <- 2 <- 3
        // 4 <- 5
        let graph = Graph::from_parts(
            &[
                (1, Some("root A")),
                (2, Some("middle A")),
                (3, Some("leaf A")),
                (4, Some("root B")),
                (5, Some("leaf B")),
            ],
            &[(2, 1), (3, 2), (5, 4)],
        );
        let ontology = Ontology::from_graph(&graph).unwrap();
        let mut xrefs = XrefIndex::default();
        for (xref, id) in [("EXT:1", 3u32), ("EXT:2", 3), ("EXT:2", 5), ("EXT:3", 1)] {
            assert!(xrefs.insert(xref, id.into()));
        }
        (ontology, xrefs)
    }

    #[test]
    fn union_of_all_mappings() {
        let (ontology, xrefs) = setup();
        let resolver = CategoryResolver::new(&ontology, &xrefs).max_depth(1);
        assert_eq!(
            resolver.categories_for("EXT:2"),
            ["middle A", "root B"].into_iter().collect()
        );
    }

    #[test]
    fn unknown_identifier() {
        let (ontology, xrefs) = setup();
        let resolver = CategoryResolver::new(&ontology, &xrefs);
        assert_eq!(resolver.resolve("EXT:99"), Resolution::Unknown);
        assert!(resolver.categories_for("EXT:99").is_empty());
    }

    #[test]
    fn mapped_without_categories() {
        let (ontology, xrefs) = setup();
        let resolver = CategoryResolver::new(&ontology, &xrefs);
        // EXT:3 is a root term, the first generation is empty already
        assert_eq!(resolver.resolve("EXT:3"), Resolution::NoCategories);
        // The chain of EXT:1 ends after 2 generations
        assert_eq!(resolver.resolve("EXT:1"), Resolution::NoCategories);
    }

    #[test]
    fn depth_and_closure() {
        let (ontology, xrefs) = setup();
        let resolver = CategoryResolver::new(&ontology, &xrefs).max_depth(2);
        assert_eq!(
            resolver.resolve("EXT:1"),
            Resolution::Linked(["root A"].into_iter().collect())
        );
        // leaf B reaches root B in one step, the second generation is empty
        assert!(resolver.resolve("EXT:2").is_linked());
        assert_eq!(
            resolver.categories_for("EXT:2"),
            ["root A"].into_iter().collect()
        );

        let resolver = resolver.closure(Closure::Cumulative);
        assert_eq!(
            resolver.categories_for("EXT:2"),
            ["middle A", "root A", "root B"].into_iter().collect()
        );
    }
}
