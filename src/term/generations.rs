use std::collections::HashSet;

use crate::term::TermGroup;
use crate::{Ontology, TermId};

/// Iterates the ancestors of a term, one generation at a time
///
/// Every call to `next` expands the current frontier by one step along
/// the `is_a` (parent) links and returns the newly discovered terms.
/// A term that was discovered before, including the start term, is never
/// returned again, so cycles in the ontology cannot cause an endless loop.
///
/// The last generation that is returned is empty: it signals that the
/// previous generation had no (unvisited) parents. After that, the
/// iterator is exhausted.
///
/// # Examples
///
/// ```
/// use mondo::Ontology;
///
/// let ontology = Ontology::from_json_file("tests/small_mondo.json").unwrap();
/// let term = ontology.term(5u32).unwrap();
///
/// let sizes: Vec<usize> = term.generations().map(|gen| gen.len()).collect();
/// assert_eq!(sizes, vec![1, 1, 1, 0]);
/// ```
pub struct Generations<'a> {
    ontology: &'a Ontology,
    frontier: TermGroup,
    visited: HashSet<TermId>,
}

impl<'a> Generations<'a> {
    pub(crate) fn new(ontology: &'a Ontology, start: TermId) -> Self {
        let mut frontier = TermGroup::new();
        frontier.insert(start);
        let mut visited = HashSet::new();
        visited.insert(start);
        Self {
            ontology,
            frontier,
            visited,
        }
    }
}

impl Iterator for Generations<'_> {
    type Item = TermGroup;
    fn next(&mut self) -> Option<TermGroup> {
        if self.frontier.is_empty() {
            return None;
        }
        let mut next = TermGroup::new();
        for id in &self.frontier {
            let Some(term) = self.ontology.get(id) else {
                continue;
            };
            for parent in term.parents() {
                if self.visited.insert(parent) {
                    next.insert(parent);
                }
            }
        }
        self.frontier = next.clone();
        Some(next)
    }
}

impl std::iter::FusedIterator for Generations<'_> {}
