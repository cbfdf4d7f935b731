//! JSON Schema document types emitted for each exported class.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Dialect identifier written to `$schema`.
pub const SCHEMA_DIALECT: &str = "http://json-schema.org/draft-07/schema#/";

/// Key of the fixed schema-reference property.
pub const DESCRIBED_BY: &str = "describedBy";

/// Key of the fixed identifier property.
pub const ID: &str = "id";

const DESCRIBED_BY_DESCRIPTION: &str =
    "The URL reference to the JSON Schema that defines this object.";
const ID_DESCRIPTION: &str = "UUID for this entity.";

/// A single entry of a schema's `properties` map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertySchema {
    /// Plain typed field, used for the fixed `describedBy` and `id` entries.
    Field {
        /// Human-readable description.
        description: String,
        /// JSON type name.
        #[serde(rename = "type")]
        kind: String,
    },
    /// Property discovered in the ontology. `$ref` is the compact form of its
    /// `rdfs:range`, serialized as `null` when the range is unknown.
    Reference {
        /// Compact form of the property IRI.
        description: String,
        /// Compact form of the property's range.
        #[serde(rename = "$ref")]
        reference: Option<String>,
    },
}

impl PropertySchema {
    /// Creates a `string`-typed field descriptor.
    pub fn string_field(description: impl Into<String>) -> Self {
        PropertySchema::Field {
            description: description.into(),
            kind: "string".to_owned(),
        }
    }

    /// Returns the `$ref` target of a reference entry.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        match self {
            PropertySchema::Reference { reference, .. } => reference.as_deref(),
            PropertySchema::Field { .. } => None,
        }
    }

    /// Returns the description of either variant.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            PropertySchema::Field { description, .. }
            | PropertySchema::Reference { description, .. } => description,
        }
    }
}

/// A JSON Schema (draft-07) document describing one ontology class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Full IRI of the class.
    #[serde(rename = "$id")]
    pub id: String,
    /// Schema dialect, always [`SCHEMA_DIALECT`].
    #[serde(rename = "$schema")]
    pub schema: String,
    /// `rdfs:label` of the class.
    pub title: Option<String>,
    /// `prov:definition` of the class.
    pub description: Option<String>,
    /// Always empty.
    pub definitions: BTreeMap<String, serde_json::Value>,
    /// Always `"object"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Always `true`.
    #[serde(rename = "additionalProperties")]
    pub additional_properties: bool,
    /// Property entries keyed by compact property name, in insertion order.
    pub properties: IndexMap<String, PropertySchema>,
    /// Keys of required properties.
    pub required: Vec<String>,
}

impl SchemaDocument {
    /// Creates a document for `class_iri` holding only the fixed scaffolding:
    /// the `describedBy` and `id` properties, both required.
    #[must_use]
    pub fn scaffold(class_iri: &str) -> Self {
        let mut properties = IndexMap::new();
        properties.insert(
            DESCRIBED_BY.to_owned(),
            PropertySchema::string_field(DESCRIBED_BY_DESCRIPTION),
        );
        properties.insert(ID.to_owned(), PropertySchema::string_field(ID_DESCRIPTION));

        Self {
            id: class_iri.to_owned(),
            schema: SCHEMA_DIALECT.to_owned(),
            title: None,
            description: None,
            definitions: BTreeMap::new(),
            kind: "object".to_owned(),
            additional_properties: true,
            properties,
            required: vec![ID.to_owned(), DESCRIBED_BY.to_owned()],
        }
    }

    /// Inserts a discovered property. A repeated key replaces the earlier entry.
    pub fn insert_property(&mut self, key: &str, reference: Option<String>) {
        self.properties.insert(
            key.to_owned(),
            PropertySchema::Reference {
                description: key.to_owned(),
                reference,
            },
        );
    }

    /// Marks `key` as required.
    pub fn require(&mut self, key: &str) {
        self.required.push(key.to_owned());
    }

    /// Serializes the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scaffold_has_fixed_entries() {
        let doc = SchemaDocument::scaffold("http://example.org/Foo");
        assert_eq!(
            doc.properties.keys().collect::<Vec<_>>(),
            [DESCRIBED_BY, ID]
        );
        assert_eq!(doc.required, [ID, DESCRIBED_BY]);
        assert_eq!(doc.schema, SCHEMA_DIALECT);
    }

    #[test]
    fn serializes_with_json_schema_keywords() {
        let mut doc = SchemaDocument::scaffold("http://example.org/Foo");
        doc.title = Some("Foo".to_owned());
        doc.insert_property("ex:bar", Some("xsd:string".to_owned()));
        doc.insert_property("ex:baz", None);

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["$id"], "http://example.org/Foo");
        assert_eq!(value["$schema"], SCHEMA_DIALECT);
        assert_eq!(value["type"], "object");
        assert_eq!(value["additionalProperties"], true);
        assert_eq!(value["definitions"], json!({}));
        assert_eq!(value["description"], serde_json::Value::Null);
        assert_eq!(
            value["properties"]["ex:bar"],
            json!({ "description": "ex:bar", "$ref": "xsd:string" })
        );
        assert_eq!(
            value["properties"]["ex:baz"],
            json!({ "description": "ex:baz", "$ref": null })
        );
        assert_eq!(
            value["properties"]["id"],
            json!({ "description": "UUID for this entity.", "type": "string" })
        );
    }

    #[test]
    fn parses_back_to_the_same_document() {
        let mut doc = SchemaDocument::scaffold("http://example.org/Foo");
        doc.description = Some("A foo.".to_owned());
        doc.insert_property("ex:bar", Some("xsd:string".to_owned()));
        doc.insert_property("ex:baz", None);
        doc.require("ex:bar");

        let text = doc.to_json_pretty().unwrap();
        let parsed: SchemaDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, doc);
        assert!(matches!(
            parsed.properties["describedBy"],
            PropertySchema::Field { .. }
        ));
        assert_eq!(parsed.properties["ex:baz"].reference(), None);
    }

    #[test]
    fn repeated_key_keeps_last_value_and_first_position() {
        let mut doc = SchemaDocument::scaffold("http://example.org/Foo");
        doc.insert_property("ex:bar", Some("xsd:string".to_owned()));
        doc.insert_property("ex:qux", None);
        doc.insert_property("ex:bar", Some("xsd:integer".to_owned()));

        assert_eq!(doc.properties.len(), 4);
        assert_eq!(doc.properties.get_index_of("ex:bar"), Some(2));
        assert_eq!(doc.properties["ex:bar"].reference(), Some("xsd:integer"));
    }
}
