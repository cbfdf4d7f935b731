//! Namespace bindings and compact (prefixed) IRI rendering.

use crate::vocab::DEFAULT_BINDINGS;

/// Ordered prefix-to-namespace bindings.
///
/// Later bindings shadow earlier ones: redeclaring a prefix replaces its
/// namespace, and when two prefixes bind the same namespace the one bound last
/// is used for compaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMap {
    bindings: Vec<(String, String)>,
}

impl PrefixMap {
    /// Creates a map holding only the default bindings (`owl`, `rdf`, `rdfs`,
    /// `xsd`, `xml`).
    #[must_use]
    pub fn new() -> Self {
        let mut map = Self {
            bindings: Vec::new(),
        };
        for (prefix, namespace) in DEFAULT_BINDINGS {
            map.bind(prefix, namespace);
        }
        map
    }

    /// Creates the default map extended with `declarations`, bound in order.
    #[must_use]
    pub fn with_declarations<'a>(
        declarations: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let mut map = Self::new();
        for (prefix, namespace) in declarations {
            map.bind(prefix, namespace);
        }
        map
    }

    /// Binds `prefix` to `namespace`, replacing any previous binding of `prefix`.
    pub fn bind(&mut self, prefix: &str, namespace: &str) {
        self.bindings.retain(|(p, _)| p != prefix);
        self.bindings.push((prefix.to_owned(), namespace.to_owned()));
    }

    /// Returns the namespace bound to `prefix`, if any.
    #[must_use]
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, ns)| ns.as_str())
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if there are no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Renders `iri` as `prefix:local` using the longest matching namespace,
    /// or as `<iri>` when no binding applies.
    #[must_use]
    pub fn compact(&self, iri: &str) -> String {
        let mut best: Option<(&str, &str)> = None;
        for (prefix, namespace) in &self.bindings {
            let Some(local) = iri.strip_prefix(namespace.as_str()) else {
                continue;
            };
            if !is_local_name(local) {
                continue;
            }
            match best {
                Some((_, ns)) if ns.len() > namespace.len() => {}
                _ => best = Some((prefix.as_str(), namespace.as_str())),
            }
        }
        match best {
            Some((prefix, namespace)) => format!("{prefix}:{}", &iri[namespace.len()..]),
            None => format!("<{iri}>"),
        }
    }
}

impl Default for PrefixMap {
    fn default() -> Self {
        Self::new()
    }
}

fn is_local_name(local: &str) -> bool {
    !local.is_empty()
        && !local
            .chars()
            .any(|c| matches!(c, '/' | '#' | '?') || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_compact_standard_vocabularies() {
        let map = PrefixMap::new();
        assert_eq!(
            map.compact("http://www.w3.org/2001/XMLSchema#string"),
            "xsd:string"
        );
        assert_eq!(
            map.compact("http://www.w3.org/2000/01/rdf-schema#label"),
            "rdfs:label"
        );
        assert_eq!(map.len(), 5);
    }

    #[test]
    fn unknown_namespace_renders_angle_brackets() {
        let map = PrefixMap::new();
        assert_eq!(
            map.compact("http://example.org/thing"),
            "<http://example.org/thing>"
        );
    }

    #[test]
    fn declarations_extend_defaults() {
        let map = PrefixMap::with_declarations([
            ("ex", "http://example.org/"),
            ("dct", "http://purl.org/dc/terms/"),
            ("", "http://default.example/ns#"),
        ]);
        assert_eq!(map.len(), 8);
        assert_eq!(map.namespace("dct"), Some("http://purl.org/dc/terms/"));
        assert_eq!(map.compact("http://purl.org/dc/terms/title"), "dct:title");
        assert_eq!(map.compact("http://default.example/ns#Thing"), ":Thing");
    }

    #[test]
    fn declaration_overrides_default() {
        let map = PrefixMap::with_declarations([("xsd", "http://example.org/types#")]);
        assert_eq!(map.namespace("xsd"), Some("http://example.org/types#"));
        assert_eq!(
            map.compact("http://www.w3.org/2001/XMLSchema#string"),
            "<http://www.w3.org/2001/XMLSchema#string>"
        );
    }

    #[test]
    fn longest_namespace_wins() {
        let mut map = PrefixMap::new();
        map.bind("ex", "http://example.org/");
        map.bind("exv", "http://example.org/vocab/");
        assert_eq!(map.compact("http://example.org/vocab/term"), "exv:term");
        assert_eq!(map.compact("http://example.org/other"), "ex:other");
    }

    #[test]
    fn local_name_may_not_span_path_segments() {
        let mut map = PrefixMap::new();
        map.bind("ex", "http://example.org/");
        assert_eq!(
            map.compact("http://example.org/a/b"),
            "<http://example.org/a/b>"
        );
        assert_eq!(map.compact("http://example.org/"), "<http://example.org/>");
    }
}
