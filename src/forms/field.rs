//! Field descriptors
//!
//! A descriptor is written as a JSON-shaped object with a `componentType`
//! tag. It is read through [`RawFieldDescriptor`] and converted into the
//! typed [`FieldDescriptor`], whose [`FieldKind`] can only be one of the
//! registered kinds.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::error::{FormError, Result};
use super::registry::FieldKindTag;
use super::state::{ChangeEvent, FormState};

// ============================================================================
// Options
// ============================================================================

/// Value of a select option; written as a string or a number
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Text(s) => f.write_str(s),
            // integral floats print without a fraction, so `1.0` reads as `1`
            OptionValue::Number(n) => match n.as_f64() {
                Some(x) if n.is_f64() && x.fract() == 0.0 && x.abs() < 1e15 => {
                    write!(f, "{}", x as i64)
                }
                _ => write!(f, "{}", n),
            },
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Number(n.into())
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        OptionValue::Number(n.into())
    }
}

/// One choice of a select field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOption {
    pub value: OptionValue,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_disabled: bool,
}

impl FieldOption {
    pub fn new(value: impl Into<OptionValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            key: None,
            is_disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.is_disabled = true;
        self
    }

    /// Identity used when rendering the option list: the explicit key, or the
    /// value's string form
    pub fn render_key(&self) -> String {
        self.key.clone().unwrap_or_else(|| self.value.to_string())
    }
}

// ============================================================================
// Field Kinds
// ============================================================================

/// Text input settings
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputField {
    /// Native input type; `text` when absent
    pub input_type: Option<String>,
}

impl InputField {
    pub fn input_type(&self) -> &str {
        self.input_type_or("text")
    }

    /// Native input type, or `fallback` when the descriptor names none
    pub fn input_type_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.input_type.as_deref().unwrap_or(fallback)
    }
}

/// Choice list settings
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectField {
    pub options: Vec<FieldOption>,
}

impl SelectField {
    /// Options in the order they were declared; empty when none were given
    pub fn choices(&self) -> &[FieldOption] {
        &self.options
    }
}

/// The renderer a descriptor is dispatched to, with the settings only that
/// renderer reads
#[derive(Clone, Debug, PartialEq)]
pub enum FieldKind {
    Input(InputField),
    Select(SelectField),
}

impl FieldKind {
    pub fn tag(&self) -> FieldKindTag {
        match self {
            FieldKind::Input(_) => FieldKindTag::Input,
            FieldKind::Select(_) => FieldKindTag::Select,
        }
    }
}

// ============================================================================
// Descriptor
// ============================================================================

/// Declarative description of one form field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFieldDescriptor", into = "RawFieldDescriptor")]
pub struct FieldDescriptor {
    /// Render identity, unique within one form
    pub id: String,
    /// State key the field's value is recorded under
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub hint: Option<String>,
    pub help_text: Option<String>,
    pub error_message: Option<String>,
    pub hide_label: bool,
}

impl FieldDescriptor {
    pub fn input(id: impl Into<String>, name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::with_kind(id, name, label, FieldKind::Input(InputField::default()))
    }

    pub fn select(
        id: impl Into<String>,
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<FieldOption>,
    ) -> Self {
        Self::with_kind(id, name, label, FieldKind::Select(SelectField { options }))
    }

    fn with_kind(
        id: impl Into<String>,
        name: impl Into<String>,
        label: impl Into<String>,
        kind: FieldKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            label: label.into(),
            kind,
            hint: None,
            help_text: None,
            error_message: None,
            hide_label: false,
        }
    }

    pub fn kind_tag(&self) -> FieldKindTag {
        self.kind.tag()
    }

    /// Run this field's change handler against `state`
    pub fn handle_change(&self, state: &FormState, event: &ChangeEvent) -> FormState {
        (self.kind_tag().change_handler())(state, event)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    pub fn with_error_message(mut self, error_message: impl Into<String>) -> Self {
        self.error_message = Some(error_message.into());
        self
    }

    pub fn with_hidden_label(mut self) -> Self {
        self.hide_label = true;
        self
    }
}

/// Wire form of a descriptor, with the kind still an unchecked string
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFieldDescriptor {
    pub id: String,
    pub name: String,
    pub label: String,
    pub component_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hide_label: bool,
}

impl TryFrom<RawFieldDescriptor> for FieldDescriptor {
    type Error = FormError;

    fn try_from(raw: RawFieldDescriptor) -> Result<Self> {
        let tag: FieldKindTag = raw.component_type.parse()?;

        // `type` on a select and `options` on an input are ignored
        let kind = match tag {
            FieldKindTag::Input => FieldKind::Input(InputField {
                input_type: raw.input_type,
            }),
            FieldKindTag::Select => {
                let options = raw.options.unwrap_or_default();
                check_unique_options(&raw.name, &options)?;
                FieldKind::Select(SelectField { options })
            }
        };

        Ok(Self {
            id: raw.id,
            name: raw.name,
            label: raw.label,
            kind,
            hint: raw.hint,
            help_text: raw.help_text,
            error_message: raw.error_message,
            hide_label: raw.hide_label,
        })
    }
}

impl From<FieldDescriptor> for RawFieldDescriptor {
    fn from(field: FieldDescriptor) -> Self {
        let component_type = field.kind_tag().as_str().to_string();
        let (options, input_type) = match field.kind {
            FieldKind::Input(input) => (None, input.input_type),
            FieldKind::Select(select) => (Some(select.options), None),
        };

        Self {
            id: field.id,
            name: field.name,
            label: field.label,
            component_type,
            options,
            input_type,
            hint: field.hint,
            help_text: field.help_text,
            error_message: field.error_message,
            hide_label: field.hide_label,
        }
    }
}

/// Values are submitted and render keys identify rendered rows; both must
/// be unique within one select
fn check_unique_options(field: &str, options: &[FieldOption]) -> Result<()> {
    let mut values = HashSet::new();
    let mut keys = HashSet::new();
    for option in options {
        let value = option.value.to_string();
        if !values.insert(value.clone()) {
            return Err(FormError::DuplicateOptionValue {
                field: field.to_string(),
                value,
            });
        }
        let key = option.render_key();
        if !keys.insert(key.clone()) {
            return Err(FormError::DuplicateOptionKey {
                field: field.to_string(),
                key,
            });
        }
    }
    Ok(())
}
