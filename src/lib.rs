#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use std::num::ParseIntError;
use thiserror::Error;

pub mod annotations;
pub mod ontology;
pub mod parser;
pub mod resolver;
pub mod stats;
pub mod term;

pub use annotations::{AnnotationRecord, GeneId};
pub use ontology::{Ontology, XrefIndex};
pub use resolver::{CategoryResolver, Resolution};
pub use term::{Closure, MondoTerm, TermGroup, TermId};

/// IRI prefix of all MONDO terms in the OBO-Graphs JSON release
pub const MONDO_PREFIX: &str = "http://purl.obolibrary.org/obo/MONDO_";

/// The only edge predicate that links a term to its parent
pub const IS_A: &str = "is_a";

/// Prefix of the cross-references that are used to map diseases onto MONDO
pub const DEFAULT_XREF_PREFIX: &str = "DOID:";

/// Number of generations to walk up the ontology to reach the categories
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// Significance level for multiple-testing correction
pub const DEFAULT_ALPHA: f64 = 0.05;

const DEFAULT_NUM_PARENTS: usize = 4;
const DEFAULT_NUM_TERMS: usize = 30_000;

/// Main Error type for this crate
#[derive(Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum MondoError {
    /// The ontology source does not contain a single node
    #[error("the ontology graph does not contain any nodes")]
    EmptyGraph,
    /// The ontology document has no entry in `graphs`
    #[error("the ontology document does not contain a graph")]
    MissingGraph,
    /// Failed to open or read a file
    #[error("unable to open file {0}")]
    CannotOpenFile(String),
    /// The ontology source is not valid OBO-Graphs JSON
    #[error("invalid ontology document: {0}")]
    InvalidJson(String),
    /// Failed to parse a MONDO term ID
    #[error("invalid MONDO term ID {0}")]
    InvalidTermId(String),
    /// Failed to parse an integer
    #[error("unable to parse Integer")]
    ParseIntError,
    /// The input data does not have the expected format
    #[error("invalid data: {0}")]
    InvalidInput(String),
    /// Unknown method for multiple-testing correction
    #[error("unknown correction method {0}")]
    InvalidCorrection(String),
    /// The contingency table cannot be evaluated
    #[error("invalid contingency table: {0}")]
    InvalidTable(String),
}

impl From<ParseIntError> for MondoError {
    fn from(_: ParseIntError) -> Self {
        MondoError::ParseIntError
    }
}

impl From<serde_json::Error> for MondoError {
    fn from(err: serde_json::Error) -> Self {
        MondoError::InvalidJson(err.to_string())
    }
}

/// Shortcut for `Result<T, MondoError>`
pub type MondoResult<T> = Result<T, MondoError>;
