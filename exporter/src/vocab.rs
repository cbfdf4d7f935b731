//! Fixed vocabulary: namespace IRIs and the predicates the extractor walks.

/// Base namespace of the TerraDCAT-AP data model. Class names resolve here.
pub const TERRA: &str = "http://datamodel.terra.bio/TerraDCAT_ap#";

/// W3C PROV namespace. Only `prov:definition` is read from it.
pub const PROV: &str = "http://www.w3.org/ns/prov#";

/// OWL 2 namespace.
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";

/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// RDF Schema namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// XML Schema datatypes namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// XML namespace.
pub const XML: &str = "http://www.w3.org/XML/1998/namespace";

/// `owl:equivalentClass`
pub const OWL_EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";
/// `owl:onProperty`
pub const OWL_ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
/// `owl:cardinality`
pub const OWL_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#cardinality";
/// `rdfs:label`
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
/// `rdfs:range`
pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
/// `prov:definition`
pub const PROV_DEFINITION: &str = "http://www.w3.org/ns/prov#definition";

/// Prefix bindings available before any document declarations are applied.
pub const DEFAULT_BINDINGS: &[(&str, &str)] = &[
    ("owl", OWL),
    ("rdf", RDF),
    ("rdfs", RDFS),
    ("xsd", XSD),
    ("xml", XML),
];

/// XSD datatypes whose lexical forms are integers.
pub const XSD_INTEGER_TYPES: &[&str] = &[
    "integer",
    "nonNegativeInteger",
    "positiveInteger",
    "nonPositiveInteger",
    "negativeInteger",
    "long",
    "int",
    "short",
    "byte",
    "unsignedLong",
    "unsignedInt",
    "unsignedShort",
    "unsignedByte",
];

/// Resolves a class name against the [`TERRA`] base namespace.
#[must_use]
pub fn class_iri(class_name: &str) -> String {
    format!("{TERRA}{class_name}")
}

/// Returns true if `datatype` is one of the XSD integer datatypes.
#[must_use]
pub fn is_integer_datatype(datatype: &str) -> bool {
    datatype
        .strip_prefix(XSD)
        .is_some_and(|local| XSD_INTEGER_TYPES.contains(&local))
}

/// Returns true if `datatype` is `xsd:decimal`, `xsd:double` or `xsd:float`.
#[must_use]
pub fn is_decimal_datatype(datatype: &str) -> bool {
    datatype
        .strip_prefix(XSD)
        .is_some_and(|local| matches!(local, "decimal" | "double" | "float"))
}
