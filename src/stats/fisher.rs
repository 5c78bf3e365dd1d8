//! Two-sided Fisher's exact test of a [`ContingencyTable`]
//!
//! Under the null hypothesis, with fixed row and column sums, the value of
//! `a` follows the hypergeometric distribution. The two-sided p-value is the
//! sum of the probabilities of all tables that are at most as likely as the
//! observed one.

use statrs::distribution::{Discrete, Hypergeometric};
use tracing::trace;

use crate::stats::{f64_from_u64, ContingencyTable};
use crate::{MondoError, MondoResult};

/// Relative tolerance when comparing the probabilities of two tables
const RELATIVE_TOLERANCE: f64 = 1e-7;

/// The sample odds ratio and two-sided p-value of a table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FisherResult {
    odds_ratio: f64,
    pvalue: f64,
}

impl FisherResult {
    /// The sample odds ratio `(a * d) / (b * c)`
    ///
    /// It is infinite if `b * c` is `0` and `NaN` if a row or column sum is `0`
    pub fn odds_ratio(&self) -> f64 {
        self.odds_ratio
    }

    /// The two-sided p-value, in the range `[0, 1]`
    pub fn pvalue(&self) -> f64 {
        self.pvalue
    }
}

/// Calculates the two-sided Fisher's exact test
///
/// # Errors
///
/// [`MondoError::InvalidTable`] if the hypergeometric distribution of the
/// table cannot be constructed
///
/// # Examples
///
/// ```
/// use mondo::stats::{fisher_exact, ContingencyTable};
///
/// let result = fisher_exact(&ContingencyTable::from_rows([[1, 0], [0, 1]])).unwrap();
/// assert!((result.pvalue() - 1.0).abs() < 1e-12);
/// assert!(result.odds_ratio().is_infinite());
///
/// let result = fisher_exact(&ContingencyTable::from_rows([[8, 2], [1, 5]])).unwrap();
/// assert!((result.pvalue() - 0.034_965_034_965).abs() < 1e-9);
/// assert!((result.odds_ratio() - 20.0).abs() < 1e-12);
/// ```
pub fn fisher_exact(table: &ContingencyTable) -> MondoResult<FisherResult> {
    let row_1 = table.a() + table.b();
    let row_2 = table.c() + table.d();
    let col_1 = table.a() + table.c();
    let col_2 = table.b() + table.d();

    if row_1 == 0 || row_2 == 0 || col_1 == 0 || col_2 == 0 {
        return Ok(FisherResult {
            odds_ratio: f64::NAN,
            pvalue: 1.0,
        });
    }

    let odds_ratio = if table.b() * table.c() > 0 {
        (f64_from_u64(table.a()) * f64_from_u64(table.d()))
            / (f64_from_u64(table.b()) * f64_from_u64(table.c()))
    } else {
        f64::INFINITY
    };

    let total = table.total();
    let hyper = Hypergeometric::new(
        // ==> population
        total,
        // ==> successes
        col_1,
        // ==> draws
        row_1,
    )
    .map_err(|err| MondoError::InvalidTable(err.to_string()))?;

    let min = (row_1 + col_1).saturating_sub(total);
    let max = row_1.min(col_1);
    // The binomial coefficients overflow for larger populations,
    // so all probabilities are compared in log space
    let observed = hyper.ln_pmf(table.a()) + RELATIVE_TOLERANCE.ln_1p();

    let pvalue: f64 = (min..=max)
        .map(|x| hyper.ln_pmf(x))
        .filter(|ln_p| *ln_p <= observed)
        .map(f64::exp)
        .sum();

    trace!(
        "Fisher {:?}: population {}, successes {}, draws {} => p = {}",
        table.rows(),
        total,
        col_1,
        row_1,
        pvalue
    );

    // an empty float sum is `-0.0`
    let pvalue = if pvalue > 0.0 { pvalue.min(1.0) } else { 0.0 };

    Ok(FisherResult { odds_ratio, pvalue })
}
