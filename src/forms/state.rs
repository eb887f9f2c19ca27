//! Form state and its transition

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Values handed to a form's submit callback: field name to last value
pub type FormValues = BTreeMap<String, String>;

/// A change reported by a rendered control: the control's `name` and its
/// current `value`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub name: String,
    pub value: String,
}

impl ChangeEvent {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Current values of one form, keyed by field name.
///
/// Never mutated in place: every transition returns a new state, so a
/// snapshot taken before an update keeps its contents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState {
    values: FormValues,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(state, name, value) -> state'`: `name` is set to `value`, every
    /// other key is carried over unchanged
    pub fn with_value(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = self.values.clone();
        values.insert(name.into(), value.into());
        Self { values }
    }

    /// Transition for a reported change event
    pub fn apply(&self, event: &ChangeEvent) -> Self {
        self.with_value(event.name.clone(), event.value.clone())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy of the current values, as handed to a submit callback
    pub fn snapshot(&self) -> FormValues {
        self.values.clone()
    }
}

impl From<FormValues> for FormState {
    fn from(values: FormValues) -> Self {
        Self { values }
    }
}
