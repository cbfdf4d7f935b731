//! TerraDCAT-AP data model exporter.
//!
//! The `dm-exporter` crate reads an OWL ontology serialized as Turtle and
//! derives one JSON Schema (draft-07) document per requested class. A class's
//! properties are the `owl:equivalentClass` restrictions attached to it: each
//! restriction names a property through `owl:onProperty`, and a restriction
//! with `owl:cardinality 1` marks that property as required.
//!
//! # Entry Point
//!
//! ```
//! use dm_exporter::{extract, OntologyGraph};
//!
//! let ttl = r#"
//!     @prefix owl:  <http://www.w3.org/2002/07/owl#> .
//!     @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//!     @prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
//!     @prefix ex:   <http://example.org/> .
//!     @prefix tdm:  <http://datamodel.terra.bio/TerraDCAT_ap#> .
//!
//!     tdm:Foo rdfs:label "Foo" ;
//!         owl:equivalentClass [ owl:onProperty ex:bar ; owl:cardinality 1 ] .
//!     ex:bar rdfs:range xsd:string .
//! "#;
//!
//! let graph = OntologyGraph::from_turtle(ttl).unwrap();
//! let schema = extract(&graph, "Foo").unwrap();
//! assert_eq!(schema.required, ["id", "describedBy", "ex:bar"]);
//! ```
//!
//! # Export
//!
//! [`export`] drives a whole run: it loads the graph once, extracts every
//! class, then writes `<class>.json` files through a [`SchemaWriter`].

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod extractor;
pub mod graph;
pub mod prefix;
pub mod report;
pub mod schema;
pub mod selection;
pub mod vocab;
pub mod writer;

use std::path::Path;

use indexmap::IndexSet;

pub use error::{ExportError, Result};
pub use extractor::{extract, PropertyEntry};
pub use graph::{Literal, Node, OntologyGraph, Triple};
pub use prefix::PrefixMap;
pub use report::{ExportReport, FileAction, FileOutcome};
pub use schema::{PropertySchema, SchemaDocument};
pub use selection::ClassSelection;
pub use writer::{AlwaysOverwrite, OverwritePrompt, SchemaWriter, StdinPrompt};

/// Exports one JSON Schema file per class from the Turtle file at `ttl_path`.
///
/// The graph is loaded once. Repeated class names are exported once, in the
/// order they first appear. Every class is extracted before anything is
/// written, so a data error in any class aborts the run with no output files.
///
/// # Errors
///
/// Returns the first [`ExportError`] raised while loading the graph,
/// extracting a class, or writing a schema file.
pub fn export<P: OverwritePrompt>(
    ttl_path: &Path,
    classes: &[String],
    writer: &mut SchemaWriter<P>,
) -> Result<ExportReport> {
    let graph = OntologyGraph::load(ttl_path)?;
    tracing::info!(
        "Loaded {} triples from {}",
        graph.len(),
        ttl_path.display()
    );

    let unique: IndexSet<&str> = classes.iter().map(String::as_str).collect();
    let schemas = unique
        .into_iter()
        .map(|class_name| extract(&graph, class_name).map(|doc| (class_name, doc)))
        .collect::<Result<Vec<_>>>()?;

    let mut report = ExportReport::new();
    for (class_name, schema) in &schemas {
        report.push(writer.write(class_name, schema)?);
    }
    Ok(report)
}
