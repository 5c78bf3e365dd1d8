//! Parse the FlyBase `disease_model_annotations` file
//!
//! ```text
//! ## FBgn_ID	Gene_symbol	HGNC_ID	DO_qualifier	DO_ID	DO_term	Allele_used_in_model (symbol) ...
//! FBgn0000008	a		model of	DOID:14330	Parkinson's disease	a[1] ...
//! ```
//!
//! Lines starting with `##` are comments. Lines with too few columns or
//! without gene, qualifier or disease ID are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::{AnnotationRecord, MondoError, MondoResult};

const COMMENT: &str = "##";
const COL_GENE: usize = 0;
const COL_QUALIFIER: usize = 3;
const COL_DISEASE_ID: usize = 4;
const COL_DISEASE_TERM: usize = 5;

/// The reason why a line did not produce a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The line is empty
    Empty,
    /// The line is a comment or header
    Comment,
    /// The line has fewer columns than required
    TooFewColumns,
    /// Gene, qualifier or disease ID is empty
    MissingValue,
}

/// The result of parsing a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line contains a valid record
    Record(AnnotationRecord),
    /// The line was skipped
    Skipped(SkipReason),
}

/// Parses a single line of the annotation file
///
/// All values are trimmed. An empty disease term is stored as `None`.
///
/// # Examples
///
/// ```
/// use mondo::annotations::flybase::{parse_line, LineOutcome, SkipReason};
///
/// let line = "FBgn0000008\ta\t\tmodel of\tDOID:14330\tParkinson's disease\ta[1]";
/// let LineOutcome::Record(record) = parse_line(line) else {
///     panic!("valid line");
/// };
/// assert_eq!(record.gene().as_str(), "FBgn0000008");
/// assert_eq!(record.disease_term(), Some("Parkinson's disease"));
///
/// assert_eq!(parse_line("## FBgn_ID\tGene_symbol"), LineOutcome::Skipped(SkipReason::Comment));
/// ```
pub fn parse_line(line: &str) -> LineOutcome {
    if line.trim().is_empty() {
        return LineOutcome::Skipped(SkipReason::Empty);
    }
    if line.starts_with(COMMENT) {
        return LineOutcome::Skipped(SkipReason::Comment);
    }
    let cols: Vec<&str> = line.split('\t').map(str::trim).collect();
    if cols.len() <= COL_DISEASE_TERM {
        return LineOutcome::Skipped(SkipReason::TooFewColumns);
    }
    let gene = cols[COL_GENE];
    let qualifier = cols[COL_QUALIFIER];
    let disease_id = cols[COL_DISEASE_ID];
    if gene.is_empty() || qualifier.is_empty() || disease_id.is_empty() {
        return LineOutcome::Skipped(SkipReason::MissingValue);
    }
    let term = Some(cols[COL_DISEASE_TERM]).filter(|term| !term.is_empty());
    LineOutcome::Record(AnnotationRecord::new(gene, qualifier, disease_id, term))
}

/// Reads all records from an annotation file
///
/// # Errors
///
/// [`MondoError::CannotOpenFile`] if the file cannot be opened or read
///
/// # Examples
///
/// ```
/// use mondo::annotations::flybase::read_file;
///
/// let records = read_file("tests/small_annotations.tsv").unwrap();
/// assert_eq!(records.len(), 6);
/// ```
pub fn read_file<P: AsRef<Path>>(filename: P) -> MondoResult<Vec<AnnotationRecord>> {
    let filename = filename.as_ref();
    let file = File::open(filename)
        .map_err(|_| MondoError::CannotOpenFile(filename.display().to_string()))?;
    read(BufReader::new(file))
        .map_err(|_| MondoError::CannotOpenFile(filename.display().to_string()))
}

/// Reads all records from any buffered reader
///
/// # Errors
///
/// Returns the underlying IO error if reading fails
pub fn read<R: BufRead>(reader: R) -> std::io::Result<Vec<AnnotationRecord>> {
    let mut records = Vec::new();
    let mut skipped = 0usize;
    for line in reader.lines() {
        match parse_line(&line?) {
            LineOutcome::Record(record) => records.push(record),
            LineOutcome::Skipped(reason) => {
                trace!("Skipping line: {:?}", reason);
                skipped += 1;
            }
        }
    }
    debug!("Parsed {} annotations, skipped {} lines", records.len(), skipped);
    Ok(records)
}
