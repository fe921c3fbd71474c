//! Response schema for structured generation
//!
//! Mirrors the OpenAPI subset accepted by the generation service:
//! upper-case type names, `items` for arrays, `properties`/`required` for
//! objects, and `propertyOrdering` to keep fields in a stable order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    String,
    Number,
    Array,
    Object,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSchema {
    #[serde(rename = "type")]
    pub kind: SchemaType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ResponseSchema>>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, ResponseSchema>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(
        rename = "propertyOrdering",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub property_ordering: Vec<String>,
}

impl ResponseSchema {
    fn scalar(kind: SchemaType) -> Self {
        Self {
            kind,
            items: None,
            properties: BTreeMap::new(),
            required: Vec::new(),
            property_ordering: Vec::new(),
        }
    }

    pub fn string() -> Self {
        Self::scalar(SchemaType::String)
    }

    pub fn number() -> Self {
        Self::scalar(SchemaType::Number)
    }

    pub fn array_of(items: ResponseSchema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::scalar(SchemaType::Array)
        }
    }

    /// Object whose fields are all required, in the given order
    pub fn object_required<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, ResponseSchema)>,
        S: Into<String>,
    {
        let mut schema = Self::scalar(SchemaType::Object);
        for (name, field) in fields {
            let name = name.into();
            schema.required.push(name.clone());
            schema.property_ordering.push(name.clone());
            schema.properties.insert(name, field);
        }
        schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_of_required_objects_serializes_to_service_shape() {
        let schema = ResponseSchema::array_of(ResponseSchema::object_required([
            ("name", ResponseSchema::string()),
            ("price", ResponseSchema::number()),
        ]));

        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "price": { "type": "NUMBER" }
                    },
                    "required": ["name", "price"],
                    "propertyOrdering": ["name", "price"]
                }
            })
        );
    }
}
