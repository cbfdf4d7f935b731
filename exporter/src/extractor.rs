//! Schema extraction: one ontology class to one JSON Schema document.

use tracing::debug;

use crate::error::{ExportError, Result};
use crate::graph::{Node, OntologyGraph};
use crate::schema::SchemaDocument;
use crate::vocab;

/// A property restriction read from an `owl:equivalentClass` container node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyEntry {
    /// Full IRI named by `owl:onProperty`.
    pub on_property: Option<String>,
    /// Integer value of `owl:cardinality`.
    pub cardinality: Option<i64>,
    /// Full IRI of the property's `rdfs:range`.
    pub range: Option<String>,
}

impl PropertyEntry {
    /// Reads the restriction held by `container`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidProperty`] if `owl:onProperty` is present
    /// but is not an IRI.
    pub fn read(graph: &OntologyGraph, class_name: &str, container: &Node) -> Result<Self> {
        let cardinality = graph
            .value(container, vocab::OWL_CARDINALITY)
            .and_then(Node::as_literal)
            .and_then(|lit| lit.as_integer());

        let on_property = match graph.value(container, vocab::OWL_ON_PROPERTY) {
            None => None,
            Some(Node::Iri(iri)) => Some(iri.clone()),
            Some(other) => {
                return Err(ExportError::InvalidProperty {
                    class: class_name.to_owned(),
                    container: container.to_string(),
                    value: other.to_string(),
                })
            }
        };

        let range = on_property.as_ref().and_then(|iri| {
            graph
                .value(&Node::iri(iri.as_str()), vocab::RDFS_RANGE)
                .and_then(Node::as_iri)
                .map(str::to_owned)
        });

        Ok(Self {
            on_property,
            cardinality,
            range,
        })
    }

    /// Returns true if the restriction demands exactly one value.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.cardinality == Some(1)
    }
}

/// Builds the JSON Schema document for `class_name`.
///
/// # Errors
///
/// - [`ExportError::UnknownClass`] if the class IRI has no triples.
/// - [`ExportError::MissingOnProperty`] if an `owl:equivalentClass` node has
///   no `owl:onProperty`.
/// - [`ExportError::InvalidProperty`] if `owl:onProperty` is not an IRI.
pub fn extract(graph: &OntologyGraph, class_name: &str) -> Result<SchemaDocument> {
    let class_iri = vocab::class_iri(class_name);
    let class = Node::iri(class_iri.as_str());
    if !graph.contains_subject(&class) {
        return Err(ExportError::UnknownClass {
            class: class_name.to_owned(),
            iri: class_iri,
        });
    }

    let mut doc = SchemaDocument::scaffold(&class_iri);

    for triple in graph.triples_with_subject(&class) {
        if triple.predicate != vocab::OWL_EQUIVALENT_CLASS {
            continue;
        }
        let container = &triple.object;
        let entry = PropertyEntry::read(graph, class_name, container)?;
        let Some(property) = entry.on_property.as_deref() else {
            return Err(ExportError::MissingOnProperty {
                class: class_name.to_owned(),
                container: container.to_string(),
            });
        };

        let key = graph.compact(property);
        let reference = entry.range.as_deref().map(|range| graph.compact(range));
        debug!(
            "{class_name}: {key} cardinality={:?} range={:?}",
            entry.cardinality, reference
        );
        doc.insert_property(&key, reference);
        if entry.is_required() {
            doc.require(&key);
        }
    }

    doc.title = graph
        .value(&class, vocab::RDFS_LABEL)
        .map(|label| label.text().to_owned());
    doc.description = graph
        .value(&class, vocab::PROV_DEFINITION)
        .map(|definition| definition.text().to_owned());

    Ok(doc)
}
