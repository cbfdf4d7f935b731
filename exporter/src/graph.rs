//! In-memory RDF graph loaded from Turtle.
//!
//! Parsing is delegated to `sophia_turtle`. Each parsed term is copied into an
//! owned [`Node`] so the graph outlives the source text. Triples keep document
//! order and duplicates are dropped, so iteration is deterministic. Namespace
//! bindings are taken from the parser once the document has been read, so they
//! reflect `@base` resolution and ignore directive-like text inside literals.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use sophia_api::source::TripleSource;
use sophia_api::term::{Term, TermKind};
use sophia_api::triple::Triple as _;
use sophia_turtle::parser::turtle;

use crate::error::{ExportError, Result};
use crate::prefix::PrefixMap;
use crate::vocab;

/// A literal value: lexical form plus optional datatype or language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    /// Lexical form.
    pub lexical: String,
    /// Full datatype IRI, if the parser reported one.
    pub datatype: Option<String>,
    /// Language tag of a language-tagged string.
    pub language: Option<String>,
}

impl Literal {
    /// Returns the integer value of a numeric literal.
    ///
    /// XSD integer datatypes parse directly. `xsd:decimal`, `xsd:double` and
    /// `xsd:float` count only when the value has no fractional part, so `1.0`
    /// and `1e0` both read as `1`.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        let datatype = self.datatype.as_deref()?;
        let lexical = self.lexical.trim();
        if vocab::is_integer_datatype(datatype) {
            return lexical.parse().ok();
        }
        if !vocab::is_decimal_datatype(datatype) {
            return None;
        }
        let value: f64 = lexical.parse().ok()?;
        if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
            Some(value as i64)
        } else {
            None
        }
    }
}

/// An RDF term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// Named node, by full IRI.
    Iri(String),
    /// Blank node, by parser-assigned identifier.
    Blank(String),
    /// Literal.
    Literal(Literal),
}

impl Node {
    /// Creates an IRI node.
    pub fn iri(iri: impl Into<String>) -> Self {
        Node::Iri(iri.into())
    }

    /// Returns the IRI if this is a named node.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal if this is a literal node.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Text value of the node: the IRI, the blank node id, or the lexical form.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Node::Iri(iri) => iri,
            Node::Blank(id) => id,
            Node::Literal(lit) => &lit.lexical,
        }
    }

    fn from_term<T: Term>(term: T) -> Option<Self> {
        match term.kind() {
            TermKind::Iri => term.iri().map(|iri| Node::Iri(iri.as_str().to_owned())),
            TermKind::BlankNode => term
                .bnode_id()
                .map(|id| Node::Blank(id.as_str().to_owned())),
            TermKind::Literal => {
                let lexical = term.lexical_form()?.to_string();
                Some(Node::Literal(Literal {
                    lexical,
                    datatype: term.datatype().map(|dt| dt.as_str().to_owned()),
                    language: term.language_tag().map(|tag| tag.as_str().to_owned()),
                }))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => write!(f, "<{iri}>"),
            Node::Blank(id) => write!(f, "_:{id}"),
            Node::Literal(lit) => {
                write!(f, "{:?}", lit.lexical)?;
                if let Some(lang) = &lit.language {
                    write!(f, "@{lang}")
                } else if let Some(dt) = &lit.datatype {
                    write!(f, "^^<{dt}>")
                } else {
                    Ok(())
                }
            }
        }
    }
}

/// A subject-predicate-object statement. Predicates are always IRIs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject (IRI or blank node).
    pub subject: Node,
    /// Predicate IRI.
    pub predicate: String,
    /// Object.
    pub object: Node,
}

/// An immutable graph plus the namespace bindings of its source document.
#[derive(Debug, Clone)]
pub struct OntologyGraph {
    triples: Vec<Triple>,
    prefixes: PrefixMap,
}

impl OntologyGraph {
    /// Parses a Turtle document.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Turtle`] if the text is not valid Turtle.
    pub fn from_turtle(text: &str) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut triples = Vec::new();
        let mut source = turtle::parse_str(text);
        source
            .for_each_triple(|t| {
                let (Some(subject), Some(predicate), Some(object)) = (
                    Node::from_term(t.s()),
                    t.p().iri().map(|iri| iri.as_str().to_owned()),
                    Node::from_term(t.o()),
                ) else {
                    return;
                };
                let triple = Triple {
                    subject,
                    predicate,
                    object,
                };
                if seen.insert(triple.clone()) {
                    triples.push(triple);
                }
            })
            .map_err(|e| ExportError::Turtle(e.to_string()))?;

        let mut declared: Vec<(&str, &str)> = source
            .0
            .prefixes()
            .iter()
            .map(|(prefix, namespace)| (prefix.as_str(), namespace.as_str()))
            .collect();
        // Bound in descending order so that, among prefixes sharing a
        // namespace, the alphabetically first one is bound last.
        declared.sort_unstable_by(|a, b| b.cmp(a));

        Ok(Self {
            triples,
            prefixes: PrefixMap::with_declarations(declared),
        })
    }

    /// Reads and parses the Turtle file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if the file cannot be read and
    /// [`ExportError::Turtle`] if it is not valid Turtle.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
        Self::from_turtle(&text)
    }

    /// All triples in document order.
    #[must_use]
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Triples matching the given pattern; `None` matches anything.
    pub fn triples_matching<'a>(
        &'a self,
        subject: Option<&'a Node>,
        predicate: Option<&'a str>,
        object: Option<&'a Node>,
    ) -> impl Iterator<Item = &'a Triple> + 'a {
        self.triples.iter().filter(move |t| {
            subject.map_or(true, |s| &t.subject == s)
                && predicate.map_or(true, |p| t.predicate == p)
                && object.map_or(true, |o| &t.object == o)
        })
    }

    /// Triples whose subject is `subject`.
    pub fn triples_with_subject<'a>(
        &'a self,
        subject: &'a Node,
    ) -> impl Iterator<Item = &'a Triple> + 'a {
        self.triples_matching(Some(subject), None, None)
    }

    /// First object of `(subject, predicate, ?)`, if any.
    #[must_use]
    pub fn value(&self, subject: &Node, predicate: &str) -> Option<&Node> {
        self.triples
            .iter()
            .find(|t| &t.subject == subject && t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// Returns true if `subject` is the subject of at least one triple.
    #[must_use]
    pub fn contains_subject(&self, subject: &Node) -> bool {
        self.triples_with_subject(subject).next().is_some()
    }

    /// Namespace bindings in effect for this graph.
    #[must_use]
    pub fn prefixes(&self) -> &PrefixMap {
        &self.prefixes
    }

    /// Compact form of `iri` under this graph's bindings.
    #[must_use]
    pub fn compact(&self, iri: &str) -> String {
        self.prefixes.compact(iri)
    }

    /// Number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph has no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        @prefix owl:  <http://www.w3.org/2002/07/owl#> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        @prefix ex:   <http://example.org/> .

        ex:Thing rdfs:label "Thing"@en ;
            owl:equivalentClass [ owl:onProperty ex:name ; owl:cardinality 1 ] .
        ex:Thing rdfs:label "Thing"@en .
    "#;

    #[test]
    fn parses_triples_and_drops_duplicates() {
        let graph = OntologyGraph::from_turtle(SAMPLE).unwrap();
        // label, equivalentClass, onProperty, cardinality
        assert_eq!(graph.len(), 4);
    }

    #[test]
    fn value_lookup_and_blank_containers() {
        let graph = OntologyGraph::from_turtle(SAMPLE).unwrap();
        let thing = Node::iri("http://example.org/Thing");

        let label = graph.value(&thing, vocab::RDFS_LABEL).unwrap();
        let lit = label.as_literal().unwrap();
        assert_eq!(lit.lexical, "Thing");
        assert_eq!(lit.language.as_deref(), Some("en"));

        let container = graph.value(&thing, vocab::OWL_EQUIVALENT_CLASS).unwrap();
        assert!(matches!(container, Node::Blank(_)));
        let cardinality = graph.value(container, vocab::OWL_CARDINALITY).unwrap();
        assert_eq!(cardinality.as_literal().unwrap().as_integer(), Some(1));
        assert_eq!(
            graph.value(container, vocab::OWL_ON_PROPERTY),
            Some(&Node::iri("http://example.org/name"))
        );
    }

    #[test]
    fn pattern_matching_by_predicate() {
        let graph = OntologyGraph::from_turtle(SAMPLE).unwrap();
        let hits = graph
            .triples_matching(None, Some(vocab::OWL_ON_PROPERTY), None)
            .count();
        assert_eq!(hits, 1);
        assert!(!graph.contains_subject(&Node::iri("http://example.org/name")));
    }

    #[test]
    fn compacts_with_document_prefixes() {
        let graph = OntologyGraph::from_turtle(SAMPLE).unwrap();
        assert_eq!(graph.compact("http://example.org/name"), "ex:name");
        assert_eq!(graph.prefixes().namespace("ex"), Some("http://example.org/"));
    }

    #[test]
    fn invalid_turtle_is_rejected() {
        let err = OntologyGraph::from_turtle("ex:a ex:b").unwrap_err();
        assert!(matches!(err, ExportError::Turtle(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = OntologyGraph::load(Path::new("/nonexistent/model.ttl")).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }

    #[test]
    fn directive_text_inside_literals_binds_nothing() {
        let graph = OntologyGraph::from_turtle(
            r#"
            @prefix ex:   <http://example.org/> .
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            ex:Thing rdfs:comment "Use this. @prefix zz: <http://example.org/> ." .
            "#,
        )
        .unwrap();
        assert_eq!(graph.prefixes().namespace("zz"), None);
        assert_eq!(graph.compact("http://example.org/bar"), "ex:bar");
    }

    #[test]
    fn relative_prefixes_resolve_against_base() {
        let graph = OntologyGraph::from_turtle(
            r#"
            @base <http://example.org/> .
            @prefix ex: <vocab#> .
            ex:Thing ex:bar ex:baz .
            "#,
        )
        .unwrap();
        assert_eq!(
            graph.prefixes().namespace("ex"),
            Some("http://example.org/vocab#")
        );
        assert_eq!(graph.compact("http://example.org/vocab#bar"), "ex:bar");
    }

    #[test]
    fn shared_namespace_compacts_with_alphabetically_first_prefix() {
        let graph = OntologyGraph::from_turtle(
            r#"
            @prefix zz: <http://example.org/> .
            @prefix ex: <http://example.org/> .
            ex:Thing ex:bar ex:baz .
            "#,
        )
        .unwrap();
        assert_eq!(graph.compact("http://example.org/bar"), "ex:bar");
    }

    #[test]
    fn whole_decimals_read_as_integers() {
        let graph = OntologyGraph::from_turtle(
            r#"
            @prefix ex:  <http://example.org/> .
            @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
            ex:a ex:n 1.0 .
            ex:b ex:n 1e0 .
            ex:c ex:n 1.5 .
            ex:d ex:n "2"^^xsd:float .
            "#,
        )
        .unwrap();
        let n = |s: &str| {
            graph
                .value(&Node::iri(format!("http://example.org/{s}")), "http://example.org/n")
                .and_then(Node::as_literal)
                .and_then(Literal::as_integer)
        };
        assert_eq!(n("a"), Some(1));
        assert_eq!(n("b"), Some(1));
        assert_eq!(n("c"), None);
        assert_eq!(n("d"), Some(2));
    }

    #[test]
    fn string_literals_are_not_integers() {
        let lit = Literal {
            lexical: "1".to_owned(),
            datatype: Some(format!("{}string", vocab::XSD)),
            language: None,
        };
        assert_eq!(lit.as_integer(), None);
    }
}
