//! [`MondoTerm`]s are the main building block of the Ontology.
//!
//! Each term is a single disease concept with a unique [`TermId`], an
//! optional label and `is_a` links to its parents and children.
//!
//! Terms are only ever handed out as read-only views on the [`Ontology`]:
//! the `Ontology` owns the data and a `MondoTerm` borrows from it.

use std::collections::BTreeSet;

use crate::{MondoError, MondoResult, Ontology};

mod generations;
mod group;
pub(crate) mod internal;
mod termid;

pub use generations::Generations;
pub use group::{TermGroup, TermIds};
pub use termid::TermId;

use internal::TermInternal;

/// Defines which generations of an ancestor traversal contribute to the result
///
/// # Note
///
/// [`Closure::Frontier`] is the behaviour used for the category analysis.
/// It only reports the last generation reached, which is empty if the
/// ontology root was reached before `max_depth` generations.
/// [`Closure::Cumulative`] reports every generation that was traversed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Closure {
    /// Only the terms of the final generation
    #[default]
    Frontier,
    /// The union of all generations, excluding the start term
    Cumulative,
}

/// The `MondoTerm` represents a single term from the MONDO Ontology
///
/// # Examples
///
/// ```
/// use mondo::{Closure, Ontology};
///
/// let ontology = Ontology::from_json_file("tests/small_mondo.json").unwrap();
/// let term = ontology.term(9u32).unwrap();
///
/// assert_eq!(term.label(), Some("dilated cardiomyopathy"));
/// assert_eq!(term.parents().next().unwrap().label(), Some("cardiomyopathy"));
///
/// assert_eq!(term.ancestor_labels(3, Closure::Frontier), vec!["disease"]);
/// assert_eq!(
///     term.ancestor_labels(3, Closure::Cumulative),
///     vec!["cardiomyopathy", "cardiovascular disorder", "disease"]
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MondoTerm<'a> {
    id: &'a TermId,
    label: Option<&'a str>,
    parents: &'a TermGroup,
    children: &'a TermGroup,
    ontology: &'a Ontology,
}

impl<'a> MondoTerm<'a> {
    /// Constructs a new [`MondoTerm`]
    ///
    /// # Errors
    ///
    /// If the given [`TermId`] does not match an existing term
    /// it returns [`MondoError::InvalidTermId`]
    pub fn try_new(ontology: &'a Ontology, term: TermId) -> MondoResult<MondoTerm<'a>> {
        let term = ontology
            .get(term)
            .ok_or_else(|| MondoError::InvalidTermId(term.to_string()))?;
        Ok(MondoTerm::new(ontology, term))
    }

    /// Constructs a new [`MondoTerm`] from a `TermInternal`
    pub(crate) fn new(ontology: &'a Ontology, term: &'a TermInternal) -> MondoTerm<'a> {
        MondoTerm {
            id: term.id(),
            label: term.label(),
            parents: term.parents(),
            children: term.children(),
            ontology,
        }
    }

    /// Returns the [`TermId`] of the term
    ///
    /// e.g.: `MONDO:0005071`
    pub fn id(&self) -> TermId {
        *self.id
    }

    /// Returns the label of the term, if present
    ///
    /// e.g.: `nervous system disorder`
    pub fn label(&self) -> Option<&'a str> {
        self.label
    }

    /// Returns the [`TermId`]s of the direct parents
    pub fn parent_ids(&self) -> &'a TermGroup {
        self.parents
    }

    /// Returns the [`TermId`]s of the direct children
    pub fn children_ids(&self) -> &'a TermGroup {
        self.children
    }

    /// Returns an iterator of the direct parents of the term
    pub fn parents(&self) -> Terms<'a> {
        Terms::new(self.parents, self.ontology)
    }

    /// Returns an iterator of the direct children of the term
    pub fn children(&self) -> Terms<'a> {
        Terms::new(self.children, self.ontology)
    }

    /// Returns `true` if the term does not have any parents
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// Returns an iterator of the ancestor generations of the term
    ///
    /// See [`Generations`] for details
    pub fn generations(&self) -> Generations<'a> {
        Generations::new(self.ontology, *self.id)
    }

    /// Returns the ancestors reached within `max_depth` generations
    ///
    /// With [`Closure::Frontier`] only the final generation is returned. The
    /// traversal stops early when a generation does not discover any new
    /// terms, in which case the result is empty. A `max_depth` of `0`
    /// returns the term itself.
    ///
    /// With [`Closure::Cumulative`] all generations up to `max_depth` are returned.
    pub fn ancestors(&self, max_depth: usize, closure: Closure) -> TermGroup {
        let generations = self.generations().take(max_depth);
        match closure {
            Closure::Frontier => generations.last().unwrap_or_else(|| {
                let mut group = TermGroup::new();
                group.insert(*self.id);
                group
            }),
            Closure::Cumulative => generations.fold(TermGroup::new(), |all, gen| &all | &gen),
        }
    }

    /// Returns the labels of the [`MondoTerm::ancestors`]
    ///
    /// Terms without label are skipped. The labels are unique and sorted.
    pub fn ancestor_labels(&self, max_depth: usize, closure: Closure) -> Vec<&'a str> {
        labels(self.ontology, &self.ancestors(max_depth, closure))
            .into_iter()
            .collect()
    }
}

impl PartialEq for MondoTerm<'_> {
    fn eq(&self, other: &MondoTerm) -> bool {
        self.id == other.id
    }
}

impl Eq for MondoTerm<'_> {}

/// Returns the sorted, unique labels of all terms in the group
pub(crate) fn labels<'a>(ontology: &'a Ontology, group: &TermGroup) -> BTreeSet<&'a str> {
    group
        .iter()
        .filter_map(|id| ontology.get(id).and_then(TermInternal::label))
        .collect()
}

/// Iterates [`MondoTerm`]s of a [`TermGroup`]
pub struct Terms<'a> {
    ids: TermIds<'a>,
    ontology: &'a Ontology,
}

impl<'a> Terms<'a> {
    pub(crate) fn new(group: &'a TermGroup, ontology: &'a Ontology) -> Self {
        Terms {
            ids: group.iter(),
            ontology,
        }
    }
}

impl<'a> Iterator for Terms<'a> {
    type Item = MondoTerm<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        let ontology = self.ontology;
        self.ids
            .by_ref()
            .find_map(|id| ontology.get(id))
            .map(|term| MondoTerm::new(ontology, term))
    }
}

impl std::fmt::Debug for Terms<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Terms")
    }
}

#[cfg(test)]
mod test {
    use crate::parser::Graph;
    use crate::{Closure, Ontology, TermGroup, TermId};

    const ROOT: u32 = 1;
    const MID: u32 = 2;
    const LEAF: u32 = 3;

    fn chain() -> Ontology {
        let graph = Graph::from_parts(
            &[(ROOT, None), (MID, Some("Mid Disease")), (LEAF, Some("Leaf Disease"))],
            &[(MID, ROOT), (LEAF, MID)],
        );
        Ontology::from_graph(&graph).unwrap()
    }

    #[test]
    fn frontier_depends_on_depth() {
        let ont = chain();
        let leaf = ont.term(LEAF).unwrap();
        assert_eq!(leaf.ancestor_labels(0, Closure::Frontier), vec!["Leaf Disease"]);
        assert_eq!(leaf.ancestor_labels(1, Closure::Frontier), vec!["Mid Disease"]);
        // ROOT is reached, but does not have a label
        assert!(leaf.ancestor_labels(2, Closure::Frontier).is_empty());
        assert_eq!(
            leaf.ancestors(2, Closure::Frontier),
            [TermId::from(ROOT)].into_iter().collect::<TermGroup>()
        );
        // The chain ends before the third generation
        assert!(leaf.ancestors(3, Closure::Frontier).is_empty());
    }

    #[test]
    fn cumulative_collects_every_generation() {
        let ont = chain();
        let leaf = ont.term(LEAF).unwrap();
        assert!(leaf.ancestor_labels(0, Closure::Cumulative).is_empty());
        assert_eq!(leaf.ancestor_labels(3, Closure::Cumulative), vec!["Mid Disease"]);
        assert_eq!(leaf.ancestors(3, Closure::Cumulative).len(), 2);
    }

    #[test]
    fn root_has_no_ancestors() {
        let ont = chain();
        let root = ont.term(ROOT).unwrap();
        assert!(root.is_root());
        assert!(root.ancestors(1, Closure::Frontier).is_empty());
        assert_eq!(
            root.ancestors(0, Closure::Frontier).iter().next(),
            Some(TermId::from(ROOT))
        );
    }

    #[test]
    fn cycle_terminates() {
        let graph = Graph::from_parts(
            &[(1, Some("A")), (2, Some("B")), (3, Some("C"))],
            &[(1, 2), (2, 3), (3, 1)],
        );
        let ont = Ontology::from_graph(&graph).unwrap();
        let a = ont.term(1u32).unwrap();

        assert_eq!(a.generations().count(), 3);
        assert_eq!(a.ancestor_labels(1, Closure::Frontier), vec!["B"]);
        assert_eq!(a.ancestor_labels(2, Closure::Frontier), vec!["C"]);
        // A is already visited, so the third generation is empty
        assert!(a.ancestor_labels(3, Closure::Frontier).is_empty());
        assert!(a.ancestor_labels(100, Closure::Frontier).is_empty());
        assert_eq!(a.ancestor_labels(100, Closure::Cumulative), vec!["B", "C"]);
    }

    #[test]
    fn diamond_visits_once() {
        // 4 -> 2 -> 1
        // 4 -> 3 -> 1
        let graph = Graph::from_parts(
            &[(1, Some("top")), (2, Some("left")), (3, Some("right")), (4, Some("bottom"))],
            &[(2, 1), (3, 1), (4, 2), (4, 3)],
        );
        let ont = Ontology::from_graph(&graph).unwrap();
        let bottom = ont.term(4u32).unwrap();
        let sizes: Vec<usize> = bottom.generations().map(|gen| gen.len()).collect();
        assert_eq!(sizes, vec![2, 1, 0]);
        assert_eq!(bottom.ancestor_labels(1, Closure::Frontier), vec!["left", "right"]);
        assert_eq!(bottom.ancestor_labels(2, Closure::Frontier), vec!["top"]);
    }

    #[test]
    fn duplicate_labels_are_merged() {
        let graph = Graph::from_parts(
            &[(1, Some("same")), (2, Some("same")), (3, Some("leaf"))],
            &[(3, 1), (3, 2)],
        );
        let ont = Ontology::from_graph(&graph).unwrap();
        assert_eq!(
            ont.term(3u32).unwrap().ancestor_labels(1, Closure::Frontier),
            vec!["same"]
        );
    }

    #[test]
    fn parents_and_children_iterators() {
        let ont = chain();
        let mid = ont.term(MID).unwrap();
        let parents: Vec<TermId> = mid.parents().map(|t| t.id()).collect();
        let children: Vec<TermId> = mid.children().map(|t| t.id()).collect();
        assert_eq!(parents, vec![TermId::from(ROOT)]);
        assert_eq!(children, vec![TermId::from(LEAF)]);
    }
}
