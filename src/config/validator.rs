use std::collections::HashMap;
use thiserror::Error;

use crate::config::{NamedForm, Settings};
use crate::controls::ControlDefaults;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Duplicate entry: {0}")]
    Duplicate(String),
}

pub struct SettingsValidator;

impl SettingsValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_defaults(&settings.defaults) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_forms(&settings.forms) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_defaults(defaults: &ControlDefaults) -> Result<(), Vec<ValidationError>> {
        if defaults.input_type.trim().is_empty() {
            return Err(vec![ValidationError::InvalidValue {
                field: "defaults.input_type".to_string(),
                reason: "Input type must not be empty".to_string(),
            }]);
        }
        Ok(())
    }

    fn validate_forms(forms: &[NamedForm]) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut seen_names = HashMap::new();

        for (idx, form) in forms.iter().enumerate() {
            // forms/signup.json and forms/signup.yaml would both be "signup"
            if let Some(prev_idx) = seen_names.insert(&form.name, idx) {
                errors.push(ValidationError::Duplicate(format!(
                    "Form name '{}' appears at indices {} and {}",
                    form.name, prev_idx, idx
                )));
            }

            for (field_idx, field) in form.definition.fields().iter().enumerate() {
                if field.id.is_empty() {
                    errors.push(ValidationError::MissingField(format!(
                        "forms.{}[{}].id",
                        form.name, field_idx
                    )));
                }

                if field.name.is_empty() {
                    errors.push(ValidationError::MissingField(format!(
                        "forms.{}[{}].name",
                        form.name, field_idx
                    )));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{FieldDescriptor, FormDefinition};

    fn named(name: &str, fields: Vec<FieldDescriptor>) -> NamedForm {
        NamedForm {
            name: name.to_string(),
            definition: FormDefinition::new(fields),
        }
    }

    #[test]
    fn test_valid_settings() {
        let settings = Settings {
            defaults: ControlDefaults::default(),
            forms: vec![named("contact", vec![FieldDescriptor::input("1", "name", "Name")])],
        };
        assert!(SettingsValidator::validate(&settings).is_ok());
    }

    #[test]
    fn test_empty_id_and_name() {
        let settings = Settings {
            defaults: ControlDefaults::default(),
            forms: vec![named("contact", vec![FieldDescriptor::input("", "", "Name")])],
        };
        let errors = SettingsValidator::validate(&settings).unwrap_err();
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        assert_eq!(
            messages,
            vec![
                "Missing required field: forms.contact[0].id",
                "Missing required field: forms.contact[0].name",
            ]
        );
    }

    #[test]
    fn test_duplicate_form_names() {
        let settings = Settings {
            defaults: ControlDefaults::default(),
            forms: vec![named("signup", vec![]), named("signup", vec![])],
        };
        let errors = SettingsValidator::validate(&settings).unwrap_err();
        assert!(matches!(errors[0], ValidationError::Duplicate(_)));
    }

    #[test]
    fn test_blank_input_type() {
        let settings = Settings {
            defaults: ControlDefaults {
                input_type: " ".to_string(),
                ..Default::default()
            },
            forms: vec![],
        };
        assert!(SettingsValidator::validate(&settings).is_err());
    }
}
