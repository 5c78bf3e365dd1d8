//! Multiple-testing correction of p-values
//!
//! The adjusted p-values are calculated with [`adjustp`]. A hypothesis is
//! rejected if its adjusted p-value is at most `alpha`.

use std::fmt::Display;
use std::str::FromStr;

use adjustp::{adjust, Procedure};
use tracing::debug;

use crate::stats::CategoryEnrichment;
use crate::MondoError;

/// Method to adjust p-values for multiple testing
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// Family-wise error rate, Bonferroni
    Bonferroni,
    /// False discovery rate, Benjamini-Hochberg
    #[default]
    BenjaminiHochberg,
    /// False discovery rate under dependency, Benjamini-Yekutieli
    BenjaminiYekutieli,
}

/// An adjusted p-value and the decision at the chosen significance level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjusted {
    pvalue: f64,
    reject: bool,
}

impl Adjusted {
    /// The adjusted p-value
    pub fn pvalue(&self) -> f64 {
        self.pvalue
    }

    /// `true` if the null hypothesis is rejected
    pub fn reject(&self) -> bool {
        self.reject
    }
}

impl Correction {
    fn procedure(self) -> Procedure {
        match self {
            Correction::Bonferroni => Procedure::Bonferroni,
            Correction::BenjaminiHochberg => Procedure::BenjaminiHochberg,
            Correction::BenjaminiYekutieli => Procedure::BenjaminiYekutieli,
        }
    }

    /// Adjusts the p-values
    ///
    /// The result has the same order and length as `pvalues`
    ///
    /// # Examples
    ///
    /// ```
    /// use mondo::stats::Correction;
    ///
    /// let adjusted = Correction::BenjaminiHochberg.adjust(&[0.01, 0.04, 0.03], 0.05);
    /// assert!((adjusted[0].pvalue() - 0.03).abs() < 1e-12);
    /// assert!((adjusted[1].pvalue() - 0.04).abs() < 1e-12);
    /// assert!(adjusted.iter().all(|adj| adj.reject()));
    ///
    /// let adjusted = Correction::Bonferroni.adjust(&[0.01, 0.04, 0.03], 0.05);
    /// assert!(adjusted[0].reject());
    /// assert!(!adjusted[1].reject());
    /// ```
    pub fn adjust(&self, pvalues: &[f64], alpha: f64) -> Vec<Adjusted> {
        if pvalues.is_empty() {
            return Vec::new();
        }
        adjust(pvalues, self.procedure())
            .into_iter()
            .map(|pvalue| {
                let pvalue = pvalue.min(1.0);
                Adjusted {
                    pvalue,
                    reject: pvalue <= alpha,
                }
            })
            .collect()
    }

    /// Adjusts the p-values of all enrichment results in place
    pub fn apply(&self, results: &mut [CategoryEnrichment], alpha: f64) {
        let pvalues: Vec<f64> = results.iter().map(CategoryEnrichment::pvalue).collect();
        let adjusted = self.adjust(&pvalues, alpha);
        let mut rejected = 0usize;
        for (result, adj) in results.iter_mut().zip(adjusted) {
            if adj.reject {
                rejected += 1;
            }
            result.set_correction(adj);
        }
        debug!(
            "{}: {} of {} tests rejected at alpha {}",
            self,
            rejected,
            results.len(),
            alpha
        );
    }
}

impl FromStr for Correction {
    type Err = MondoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bonferroni" => Ok(Correction::Bonferroni),
            "fdr_bh" | "bh" => Ok(Correction::BenjaminiHochberg),
            "fdr_by" | "by" => Ok(Correction::BenjaminiYekutieli),
            _ => Err(MondoError::InvalidCorrection(s.to_string())),
        }
    }
}

impl Display for Correction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Correction::Bonferroni => "bonferroni",
            Correction::BenjaminiHochberg => "fdr_bh",
            Correction::BenjaminiYekutieli => "fdr_by",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_method() {
        assert_eq!("fdr_bh".parse(), Ok(Correction::BenjaminiHochberg));
        assert_eq!("Bonferroni".parse(), Ok(Correction::Bonferroni));
        assert_eq!("fdr_by".parse(), Ok(Correction::BenjaminiYekutieli));
        assert_eq!(
            "holm".parse::<Correction>(),
            Err(MondoError::InvalidCorrection("holm".to_string()))
        );
        for method in [
            Correction::Bonferroni,
            Correction::BenjaminiHochberg,
            Correction::BenjaminiYekutieli,
        ] {
            assert_eq!(method.to_string().parse(), Ok(method));
        }
    }

    #[test]
    fn empty_input() {
        assert!(Correction::default().adjust(&[], 0.05).is_empty());
    }

    #[test]
    fn identical_pvalues() {
        let adjusted = Correction::BenjaminiHochberg.adjust(&[0.02; 4], 0.05);
        assert_eq!(adjusted.len(), 4);
        for adj in &adjusted {
            assert!((adj.pvalue() - 0.02).abs() < 1e-12);
            assert!(adj.reject());
        }
    }

    #[test]
    fn adjusted_not_below_raw() {
        let raw = [0.001, 0.2, 0.03, 0.5, 0.04];
        for method in [
            Correction::Bonferroni,
            Correction::BenjaminiHochberg,
            Correction::BenjaminiYekutieli,
        ] {
            let adjusted = method.adjust(&raw, 0.05);
            for (p, adj) in raw.iter().zip(&adjusted) {
                assert!(adj.pvalue() >= *p - 1e-12);
                assert!(adj.pvalue() <= 1.0);
                assert_eq!(adj.reject(), adj.pvalue() <= 0.05);
            }
        }
    }
}
