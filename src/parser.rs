//! Parsing the MONDO release in OBO-Graphs JSON format
//!
//! The MONDO ontology is published as `mondo.json`, a JSON document with
//! a `graphs` collection. Only the first graph is used. Of every node, only
//! the `id`, the label (`lbl`) and the `meta.basicPropertyValues` and
//! `meta.xrefs` values are kept. Edges are kept with their predicate,
//! subject and object.
//!
//! ```text
//! {
//!   "graphs": [{
//!     "nodes": [{
//!       "id": "http://purl.obolibrary.org/obo/MONDO_0005071",
//!       "lbl": "nervous system disorder",
//!       "meta": {
//!         "xrefs": [{"val": "DOID:863"}],
//!         "basicPropertyValues": [{"pred": "...", "val": "..."}]
//!       }
//!     }],
//!     "edges": [{
//!       "sub": "http://purl.obolibrary.org/obo/MONDO_0005071",
//!       "pred": "is_a",
//!       "obj": "http://purl.obolibrary.org/obo/MONDO_0000001"
//!     }]
//!   }]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::{MondoError, MondoResult, Ontology, XrefIndex, IS_A, MONDO_PREFIX};

/// The full OBO-Graphs document
#[derive(Debug, Default, Deserialize)]
pub struct GraphDocument {
    /// All graphs of the document, MONDO ships a single one
    pub graphs: Vec<Graph>,
}

impl GraphDocument {
    /// Parses a document from a JSON string
    ///
    /// # Errors
    ///
    /// [`MondoError::InvalidJson`] if the JSON is invalid or the `graphs` key is missing
    pub fn from_json(json: &str) -> MondoResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a document from a file
    ///
    /// # Errors
    ///
    /// - [`MondoError::CannotOpenFile`] if the file cannot be read
    /// - [`MondoError::InvalidJson`] if the file is not a valid document
    pub fn from_file<P: AsRef<Path>>(filename: P) -> MondoResult<Self> {
        let filename = filename.as_ref();
        let json = fs::read_to_string(filename)
            .map_err(|_| MondoError::CannotOpenFile(filename.display().to_string()))?;
        debug!("Read {} bytes from {}", json.len(), filename.display());
        Self::from_json(&json)
    }

    /// Returns the first graph of the document
    ///
    /// # Errors
    ///
    /// [`MondoError::MissingGraph`] if the document does not contain any graph
    pub fn graph(&self) -> MondoResult<&Graph> {
        self.graphs.first().ok_or(MondoError::MissingGraph)
    }
}

/// A single graph with nodes and edges
#[derive(Debug, Default, Deserialize)]
pub struct Graph {
    /// All nodes, including those from imported ontologies
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// All edges, of any predicate
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Constructs a graph of MONDO terms and `is_a` edges
    ///
    /// `nodes` contains the numerical part of the MONDO ID and the label,
    /// `edges` contains `(child, parent)` pairs.
    ///
    /// This is mostly useful for tests and examples.
    ///
    /// # Examples
    ///
    /// ```
    /// use mondo::parser::Graph;
    /// use mondo::Ontology;
    ///
    /// let graph = Graph::from_parts(
    ///     &[(1, Some("disease")), (2, Some("cancer"))],
    ///     &[(2, 1)],
    /// );
    /// let ontology = Ontology::from_graph(&graph).unwrap();
    /// assert_eq!(ontology.len(), 2);
    /// assert_eq!(ontology.roots().len(), 1);
    /// ```
    pub fn from_parts(nodes: &[(u32, Option<&str>)], edges: &[(u32, u32)]) -> Self {
        let iri = |id: &u32| format!("{MONDO_PREFIX}{id:07}");
        Graph {
            nodes: nodes
                .iter()
                .map(|(id, label)| Node {
                    id: iri(id),
                    lbl: label.map(str::to_string),
                    meta: None,
                })
                .collect(),
            edges: edges
                .iter()
                .map(|(child, parent)| Edge {
                    sub: iri(child),
                    pred: IS_A.to_string(),
                    obj: iri(parent),
                })
                .collect(),
        }
    }
}

/// A node of the graph
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Node {
    /// The IRI of the node
    #[serde(default)]
    pub id: String,
    /// The label
    #[serde(default)]
    pub lbl: Option<String>,
    /// Annotations of the node
    #[serde(default)]
    pub meta: Option<Meta>,
}

impl Node {
    /// Returns all annotation values of the node
    ///
    /// The values of `basicPropertyValues` come first, then the `xrefs`
    pub fn annotation_values(&self) -> impl Iterator<Item = &str> {
        self.meta
            .iter()
            .flat_map(|meta| meta.basic_property_values.iter().chain(meta.xrefs.iter()))
            .map(|property| property.val.as_str())
    }
}

/// Annotations of a [`Node`]
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Meta {
    /// Generic key/value annotations
    #[serde(default, rename = "basicPropertyValues")]
    pub basic_property_values: Vec<PropertyValue>,
    /// Database cross-references
    #[serde(default)]
    pub xrefs: Vec<PropertyValue>,
}

/// A single annotation value
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PropertyValue {
    /// The annotation predicate, not present for xrefs
    #[serde(default)]
    pub pred: Option<String>,
    /// The value
    #[serde(default)]
    pub val: String,
}

/// An edge of the graph
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Edge {
    /// The subject (child for `is_a` edges)
    #[serde(default)]
    pub sub: String,
    /// The predicate, e.g. `is_a`
    #[serde(default)]
    pub pred: String,
    /// The object (parent for `is_a` edges)
    #[serde(default)]
    pub obj: String,
}

/// Loads the [`Ontology`] and the [`XrefIndex`] from a `mondo.json` file
///
/// `xref_prefix` selects the external identifiers of the index, e.g. `DOID:`
///
/// # Errors
///
/// - [`MondoError::CannotOpenFile`] if the file cannot be read
/// - [`MondoError::InvalidJson`] if the file is not a valid document
/// - [`MondoError::MissingGraph`] if the document does not contain a graph
/// - [`MondoError::EmptyGraph`] if the graph does not contain any node
///
/// # Examples
///
/// ```
/// use mondo::parser::load;
///
/// let (ontology, xrefs) = load("tests/small_mondo.json", "DOID:").unwrap();
/// assert_eq!(ontology.len(), 10);
/// assert_eq!(xrefs.get("DOID:14330").len(), 2);
/// ```
pub fn load<P: AsRef<Path>>(filename: P, xref_prefix: &str) -> MondoResult<(Ontology, XrefIndex)> {
    let document = GraphDocument::from_file(filename)?;
    let graph = document.graph()?;
    let ontology = Ontology::from_graph(graph)?;
    let xrefs = XrefIndex::from_graph(graph, xref_prefix);
    Ok((ontology, xrefs))
}
