//! Statistical analyses of gene annotations across MONDO categories
//!
//! Every gene is summarised by a [`GeneProfile`]: the qualifiers of its
//! annotations and the MONDO categories of the annotated diseases. For every
//! combination of category and qualifier, the genes are split into a 2x2
//! [`ContingencyTable`] and tested with Fisher's exact test ([`fisher`]).
//! The p-values of all tests are then adjusted for multiple testing
//! ([`correction`]).
//!
//! # Examples
//!
//! ```
//! use mondo::annotations::flybase;
//! use mondo::parser::load;
//! use mondo::stats::{category_enrichment, Correction, GeneProfiles};
//! use mondo::CategoryResolver;
//!
//! let (ontology, xrefs) = load("tests/small_mondo.json", "DOID:").unwrap();
//! let resolver = CategoryResolver::new(&ontology, &xrefs);
//! let records = flybase::read_file("tests/small_annotations.tsv").unwrap();
//!
//! let profiles = GeneProfiles::build(&records, &resolver);
//! let mut results = category_enrichment(&profiles).unwrap();
//! Correction::BenjaminiHochberg.apply(&mut results, 0.05);
//!
//! for result in mondo::stats::top(&results, 3) {
//!     println!(
//!         "{}\t{}\t{:e}\t{}",
//!         result.category(),
//!         result.qualifier(),
//!         result.pvalue(),
//!         result.odds_ratio()
//!     );
//! }
//! ```

pub mod correction;
pub mod enrichment;
pub mod fisher;
mod profile;

pub use correction::{Adjusted, Correction};
pub use enrichment::{category_enrichment, contingency_table, significant, top, CategoryEnrichment};
pub use fisher::{fisher_exact, FisherResult};
pub use profile::{GeneProfile, GeneProfiles};

/// A 2x2 table of gene counts
///
/// |                  | has qualifier | lacks qualifier |
/// | ---              | ---           | ---             |
/// | in category      | `a`           | `b`             |
/// | not in category  | `c`           | `d`             |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContingencyTable {
    a: u64,
    b: u64,
    c: u64,
    d: u64,
}

impl ContingencyTable {
    /// Constructs a new table from its four cells
    pub fn new(a: u64, b: u64, c: u64, d: u64) -> Self {
        Self { a, b, c, d }
    }

    /// Constructs a new table from two rows
    pub fn from_rows(rows: [[u64; 2]; 2]) -> Self {
        let [[a, b], [c, d]] = rows;
        Self { a, b, c, d }
    }

    /// Genes in the category and with the qualifier
    pub fn a(&self) -> u64 {
        self.a
    }

    /// Genes in the category, without the qualifier
    pub fn b(&self) -> u64 {
        self.b
    }

    /// Genes outside the category, with the qualifier
    pub fn c(&self) -> u64 {
        self.c
    }

    /// Genes outside the category and without the qualifier
    pub fn d(&self) -> u64 {
        self.d
    }

    /// Returns the table as rows `[[a, b], [c, d]]`
    pub fn rows(&self) -> [[u64; 2]; 2] {
        [[self.a, self.b], [self.c, self.d]]
    }

    /// Returns the sum of all cells
    pub fn total(&self) -> u64 {
        self.a + self.b + self.c + self.d
    }

    /// Expected value of `a` if category and qualifier are independent
    ///
    /// Returns `0.0` for an empty table
    pub fn expected_a(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64_from_u64(self.a + self.b) * f64_from_u64(self.a + self.c) / f64_from_u64(total)
    }

    /// Ratio of the observed over the expected value of `a`
    ///
    /// Returns infinity if the expected value is `0`
    pub fn fold_change(&self) -> f64 {
        let expected = self.expected_a();
        if expected > 0.0 {
            f64_from_u64(self.a) / expected
        } else {
            f64::INFINITY
        }
    }
}

/// We have to frequently do divisions starting with u64 values
/// and need to return f64 values. To ensure some kind of safety
/// we use this method to panic in case of overflows.
pub(crate) fn f64_from_u64(n: u64) -> f64 {
    let intermediate: u32 = n
        .try_into()
        .expect("cannot safely create f64 from large u64");
    intermediate.into()
}
