//! Enrichment of annotation qualifiers within MONDO categories
//!
//! For each category and qualifier, all genes of the [`GeneProfiles`] are
//! counted into a [`ContingencyTable`]:
//!
//! - `a`: genes in the category with the qualifier
//! - `b`: genes in the category without the qualifier
//! - `c`: genes outside the category with the qualifier
//! - `d`: genes outside the category without the qualifier
//!
//! The table is tested with [`fisher_exact`].

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::stats::correction::Adjusted;
use crate::stats::fisher::fisher_exact;
use crate::stats::{ContingencyTable, GeneProfiles};
use crate::MondoResult;

/// The enrichment of one qualifier within one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryEnrichment {
    category: String,
    qualifier: String,
    table: ContingencyTable,
    odds_ratio: f64,
    pvalue: f64,
    correction: Option<Adjusted>,
}

impl CategoryEnrichment {
    /// The category label
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The annotation qualifier
    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    /// The underlying gene counts
    pub fn table(&self) -> &ContingencyTable {
        &self.table
    }

    /// The number of genes in the category with the qualifier
    pub fn count(&self) -> u64 {
        self.table.a()
    }

    /// The sample odds ratio of the table
    pub fn odds_ratio(&self) -> f64 {
        self.odds_ratio
    }

    /// The raw p-value of Fisher's exact test
    pub fn pvalue(&self) -> f64 {
        self.pvalue
    }

    /// The expected number of genes in the category with the qualifier
    pub fn expected(&self) -> f64 {
        self.table.expected_a()
    }

    /// Observed over expected number of genes in the category with the qualifier
    pub fn fold_change(&self) -> f64 {
        self.table.fold_change()
    }

    /// The p-value after multiple-testing correction
    ///
    /// `None` until a [`Correction`](crate::stats::Correction) was applied
    pub fn corrected_pvalue(&self) -> Option<f64> {
        self.correction.map(|adj| adj.pvalue())
    }

    /// Returns `true` if the corrected p-value is significant
    ///
    /// Always `false` until a [`Correction`](crate::stats::Correction) was applied
    pub fn reject(&self) -> bool {
        self.correction.is_some_and(|adj| adj.reject())
    }

    pub(crate) fn set_correction(&mut self, correction: Adjusted) {
        self.correction = Some(correction);
    }
}

/// Counts the genes of the [`GeneProfiles`] into a [`ContingencyTable`]
///
/// The sum of all cells is always the number of genes.
pub fn contingency_table(
    profiles: &GeneProfiles,
    category: &str,
    qualifier: &str,
) -> ContingencyTable {
    let (mut a, mut b, mut c, mut d) = (0, 0, 0, 0);
    for (_, profile) in profiles {
        match (profile.in_category(category), profile.has_qualifier(qualifier)) {
            (true, true) => a += 1,
            (true, false) => b += 1,
            (false, true) => c += 1,
            (false, false) => d += 1,
        }
    }
    ContingencyTable::new(a, b, c, d)
}

/// Tests every combination of category and qualifier
///
/// Combinations without any gene in the category are skipped. The results
/// are sorted by category, then qualifier.
///
/// # Errors
///
/// [`MondoError::InvalidTable`](crate::MondoError::InvalidTable) if Fisher's
/// exact test fails for a table
pub fn category_enrichment(profiles: &GeneProfiles) -> MondoResult<Vec<CategoryEnrichment>> {
    let categories = profiles.categories();
    let qualifiers = profiles.qualifiers();
    debug!(
        "Testing {} categories x {} qualifiers for {} genes",
        categories.len(),
        qualifiers.len(),
        profiles.len()
    );

    let mut results = Vec::with_capacity(categories.len() * qualifiers.len());
    for category in &categories {
        for qualifier in &qualifiers {
            let table = contingency_table(profiles, category, qualifier);
            if table.a() + table.b() == 0 {
                trace!("No genes in {}, skipping", category);
                continue;
            }
            let fisher = fisher_exact(&table)?;
            results.push(CategoryEnrichment {
                category: (*category).to_string(),
                qualifier: (*qualifier).to_string(),
                table,
                odds_ratio: fisher.odds_ratio(),
                pvalue: fisher.pvalue(),
                correction: None,
            });
        }
    }
    Ok(results)
}

/// Returns the `n` results with the lowest raw p-values
///
/// Results with equal p-values keep their order
pub fn top(results: &[CategoryEnrichment], n: usize) -> Vec<&CategoryEnrichment> {
    let mut sorted: Vec<&CategoryEnrichment> = results.iter().collect();
    sorted.sort_by(|a, b| cmp_pvalue(a, b));
    sorted.truncate(n);
    sorted
}

/// Returns all results that are significant after correction
pub fn significant(results: &[CategoryEnrichment]) -> Vec<&CategoryEnrichment> {
    results.iter().filter(|result| result.reject()).collect()
}

fn cmp_pvalue(a: &CategoryEnrichment, b: &CategoryEnrichment) -> Ordering {
    a.pvalue.total_cmp(&b.pvalue)
}
