//! Ordered field list a form is built from

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use super::error::Result;
use super::field::{FieldDescriptor, RawFieldDescriptor};

/// A validated, ordered list of field descriptors.
///
/// Names are state keys and ids are render identities; neither is required
/// to be unique, but repeats are reported when the definition is built.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormDefinition {
    fields: Vec<FieldDescriptor>,
}

impl FormDefinition {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        let definition = Self { fields };
        for name in definition.duplicate_names() {
            warn!(name = %name, "Duplicate field name; later changes overwrite earlier ones");
        }
        for id in definition.duplicate_ids() {
            warn!(id = %id, "Duplicate field id");
        }
        definition
    }

    /// Build from wire descriptors, failing on the first unsupported kind
    pub fn from_raw(raw: Vec<RawFieldDescriptor>) -> Result<Self> {
        let fields = raw
            .into_iter()
            .map(FieldDescriptor::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(fields))
    }

    /// Parse a JSON array of descriptors
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<RawFieldDescriptor> = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let raw: Vec<RawFieldDescriptor> = serde_json::from_value(value)?;
        Self::from_raw(raw)
    }

    /// Parse a YAML sequence of descriptors
    #[cfg(feature = "native")]
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let raw: Vec<RawFieldDescriptor> = serde_yaml::from_str(yaml)?;
        Self::from_raw(raw)
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// First field with the given id
    pub fn field(&self, id: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Last field rendered under the given name
    pub fn field_by_name(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().rev().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names used by more than one field, in first-appearance order
    pub fn duplicate_names(&self) -> Vec<&str> {
        repeated(self.fields.iter().map(|f| f.name.as_str()))
    }

    /// Ids used by more than one field, in first-appearance order
    pub fn duplicate_ids(&self) -> Vec<&str> {
        repeated(self.fields.iter().map(|f| f.id.as_str()))
    }
}

fn repeated<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();
    for key in keys {
        let count = counts.entry(key).or_insert(0);
        *count += 1;
        if *count == 2 {
            order.push(key);
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::error::FormError;
    use crate::forms::registry::FieldKindTag;

    const DEMO: &str = r#"[
        { "id": "1", "name": "message", "componentType": "input", "label": "Message" },
        { "id": "2", "name": "name", "componentType": "input", "label": "Name" },
        {
            "id": "3", "name": "City", "componentType": "select", "label": "City",
            "options": [
                { "value": "bishkek", "label": "Bishkek" },
                { "value": "almaty", "label": "Almaty" }
            ]
        },
        { "id": "4", "name": "City", "componentType": "select", "label": "Empty" }
    ]"#;

    #[test]
    fn test_from_json_keeps_order() {
        let definition = FormDefinition::from_json(DEMO).unwrap();
        let ids: Vec<&str> = definition.fields().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        assert_eq!(definition.fields()[2].kind_tag(), FieldKindTag::Select);
    }

    #[test]
    fn test_duplicate_names_reported() {
        let definition = FormDefinition::from_json(DEMO).unwrap();
        assert_eq!(definition.duplicate_names(), vec!["City"]);
        assert!(definition.duplicate_ids().is_empty());
    }

    #[test]
    fn test_field_lookup() {
        let definition = FormDefinition::from_json(DEMO).unwrap();
        assert_eq!(definition.field("2").map(|f| f.name.as_str()), Some("name"));
        assert_eq!(definition.field_by_name("City").map(|f| f.id.as_str()), Some("4"));
        assert!(definition.field("9").is_none());
    }

    #[test]
    fn test_unsupported_kind_fails_construction() {
        let err = FormDefinition::from_json(
            r#"[
                { "id": "1", "name": "message", "componentType": "input", "label": "Message" },
                { "id": "2", "name": "bio", "componentType": "textarea", "label": "Bio" }
            ]"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            FormError::UnsupportedFieldType { ref received, .. } if received == "textarea"
        ));
    }

    #[test]
    fn test_missing_label_is_invalid_definition() {
        let err = FormDefinition::from_json(
            r#"[{ "id": "1", "name": "message", "componentType": "input" }]"#,
        )
        .unwrap_err();
        assert!(matches!(err, FormError::InvalidDefinition(_)));
    }

    #[test]
    fn test_empty_definition() {
        let definition = FormDefinition::from_json("[]").unwrap();
        assert!(definition.is_empty());
    }

    #[cfg(feature = "native")]
    #[test]
    fn test_from_yaml() {
        let definition = FormDefinition::from_yaml(
            r#"
- id: "1"
  name: email
  label: Email
  componentType: input
  type: email
- id: "2"
  name: plan
  label: Plan
  componentType: select
  options:
    - { value: 1, label: Basic }
    - { value: 2, label: Pro, isDisabled: true }
"#,
        )
        .unwrap();

        assert_eq!(definition.len(), 2);
        assert_eq!(definition.fields()[1].kind_tag(), FieldKindTag::Select);
    }
}
