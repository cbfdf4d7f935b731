//! Error type shared by every stage of an export.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading an ontology or exporting its classes.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The ontology is not valid Turtle.
    #[error("Turtle parse error: {0}")]
    Turtle(String),

    /// The requested class IRI is not the subject of any triple.
    #[error("class {class} ({iri}) not found in the ontology")]
    UnknownClass {
        /// Class name as requested.
        class: String,
        /// Resolved class IRI.
        iri: String,
    },

    /// An `owl:equivalentClass` container lacks `owl:onProperty`.
    #[error("class {class}: equivalentClass node {container} has no owl:onProperty")]
    MissingOnProperty {
        /// Class name being exported.
        class: String,
        /// Display form of the container node.
        container: String,
    },

    /// `owl:onProperty` points at something other than an IRI.
    #[error("class {class}: owl:onProperty of {container} is not an IRI: {value}")]
    InvalidProperty {
        /// Class name being exported.
        class: String,
        /// Display form of the container node.
        container: String,
        /// Display form of the offending value.
        value: String,
    },

    /// The class selection resolved to an empty list.
    #[error("no class names supplied")]
    NoClasses,

    /// A schema document could not be serialized.
    #[error("failed to serialize schema for {class}: {source}")]
    Serialize {
        /// Class name being serialized.
        class: String,
        /// The underlying serializer error.
        #[source]
        source: serde_json::Error,
    },
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for exporter operations.
pub type Result<T> = std::result::Result<T, ExportError>;
