//! Gene - disease annotations
//!
//! Each [`AnnotationRecord`] links a gene to an external disease identifier,
//! together with a qualifier that describes the nature of the link
//! (e.g. `model of`, `is not model of`, `ameliorates`).
//!
//! The records are read from the FlyBase `disease_model_annotations` file
//! with [`flybase::read_file`].

use core::fmt::Debug;
use std::fmt::Display;

pub mod flybase;

/// A unique identifier for a gene, e.g. the FlyBase gene ID `FBgn0000008`
#[derive(Clone, Default, Debug, Hash, PartialEq, PartialOrd, Eq, Ord)]
pub struct GeneId {
    inner: String,
}

impl GeneId {
    /// Returns the identifier as `str`
    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl From<&str> for GeneId {
    fn from(value: &str) -> Self {
        GeneId {
            inner: value.to_string(),
        }
    }
}

impl From<String> for GeneId {
    fn from(inner: String) -> Self {
        GeneId { inner }
    }
}

impl Display for GeneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// A single gene - disease annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRecord {
    gene: GeneId,
    qualifier: String,
    disease_id: String,
    disease_term: Option<String>,
}

impl AnnotationRecord {
    /// Constructs a new record
    ///
    /// # Examples
    ///
    /// ```
    /// use mondo::AnnotationRecord;
    ///
    /// let record = AnnotationRecord::new("FBgn0000008", "model of", "DOID:14330", None);
    /// assert_eq!(record.gene().as_str(), "FBgn0000008");
    /// assert_eq!(record.qualifier(), "model of");
    /// assert_eq!(record.disease_id(), "DOID:14330");
    /// assert!(record.disease_term().is_none());
    /// ```
    pub fn new(gene: &str, qualifier: &str, disease_id: &str, disease_term: Option<&str>) -> Self {
        Self {
            gene: gene.into(),
            qualifier: qualifier.to_string(),
            disease_id: disease_id.to_string(),
            disease_term: disease_term.map(str::to_string),
        }
    }

    /// The annotated gene
    pub fn gene(&self) -> &GeneId {
        &self.gene
    }

    /// The nature of the gene - disease link
    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }

    /// The external disease identifier, e.g. `DOID:14330`
    pub fn disease_id(&self) -> &str {
        &self.disease_id
    }

    /// The name of the disease, if present
    pub fn disease_term(&self) -> Option<&str> {
        self.disease_term.as_deref()
    }
}
