use std::collections::btree_map::Iter;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use tracing::debug;

use crate::resolver::Resolution;
use crate::{AnnotationRecord, CategoryResolver, GeneId};

/// The qualifiers and categories of all annotations of a single gene
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GeneProfile {
    qualifiers: BTreeSet<String>,
    categories: BTreeSet<String>,
}

impl GeneProfile {
    /// The unique qualifiers of the gene's annotations
    pub fn qualifiers(&self) -> &BTreeSet<String> {
        &self.qualifiers
    }

    /// The unique categories of the gene's annotated diseases
    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    /// Returns `true` if the gene has at least one annotation with the qualifier
    pub fn has_qualifier(&self, qualifier: &str) -> bool {
        self.qualifiers.contains(qualifier)
    }

    /// Returns `true` if at least one annotated disease belongs to the category
    pub fn in_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }
}

/// The [`GeneProfile`]s of all annotated genes
///
/// Every gene with at least one annotation is part of the profiles, even if
/// none of its diseases resolved to a category. The genes are sorted by
/// their [`GeneId`].
#[derive(Debug, Default, Clone)]
pub struct GeneProfiles {
    genes: BTreeMap<GeneId, GeneProfile>,
    unresolved: usize,
}

impl GeneProfiles {
    /// Builds the profiles of all genes of the annotation records
    ///
    /// The qualifier of a record is always added to the gene. The categories
    /// of the disease are added if the disease ID resolves. Each disease ID
    /// is resolved only once.
    pub fn build(records: &[AnnotationRecord], resolver: &CategoryResolver) -> Self {
        let mut cache: HashMap<&str, Resolution> = HashMap::new();
        let mut profiles = GeneProfiles::default();

        for record in records {
            let resolution = cache
                .entry(record.disease_id())
                .or_insert_with(|| resolver.resolve(record.disease_id()));
            let categories = match resolution {
                Resolution::Linked(categories) => Some(categories.iter().copied()),
                Resolution::Unknown | Resolution::NoCategories => {
                    profiles.unresolved += 1;
                    None
                }
            };
            profiles.add(record.gene(), record.qualifier(), categories.into_iter().flatten());
        }
        debug!(
            "Built {} gene profiles from {} records ({} distinct diseases, {} rows without categories)",
            profiles.len(),
            records.len(),
            cache.len(),
            profiles.unresolved
        );
        profiles
    }

    /// Adds a qualifier and the categories of one annotation to the gene
    pub fn add<'c, I: IntoIterator<Item = &'c str>>(
        &mut self,
        gene: &GeneId,
        qualifier: &str,
        categories: I,
    ) {
        let profile = self.genes.entry(gene.clone()).or_default();
        profile.qualifiers.insert(qualifier.to_string());
        profile
            .categories
            .extend(categories.into_iter().map(str::to_string));
    }

    /// Merges the profiles of `other` into `self`
    pub fn merge(&mut self, other: GeneProfiles) {
        for (gene, profile) in other.genes {
            let own = self.genes.entry(gene).or_default();
            own.qualifiers.extend(profile.qualifiers);
            own.categories.extend(profile.categories);
        }
        self.unresolved += other.unresolved;
    }

    /// The number of genes
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if there are no genes
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Returns the profile of the gene
    pub fn get(&self, gene: &GeneId) -> Option<&GeneProfile> {
        self.genes.get(gene)
    }

    /// Iterates all genes and their profiles, sorted by [`GeneId`]
    pub fn iter(&self) -> Iter<'_, GeneId, GeneProfile> {
        self.genes.iter()
    }

    /// All qualifiers of all genes, sorted
    pub fn qualifiers(&self) -> BTreeSet<&str> {
        self.genes
            .values()
            .flat_map(|profile| profile.qualifiers.iter().map(String::as_str))
            .collect()
    }

    /// All categories of all genes, sorted
    pub fn categories(&self) -> BTreeSet<&str> {
        self.genes
            .values()
            .flat_map(|profile| profile.categories.iter().map(String::as_str))
            .collect()
    }

    /// The number of records whose disease ID did not resolve to any category
    pub fn unresolved_rows(&self) -> usize {
        self.unresolved
    }
}

impl<'a> IntoIterator for &'a GeneProfiles {
    type Item = (&'a GeneId, &'a GeneProfile);
    type IntoIter = Iter<'a, GeneId, GeneProfile>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
