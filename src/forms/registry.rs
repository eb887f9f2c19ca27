//! Field kind registry
//!
//! The set of renderable field kinds is closed: a descriptor's
//! `componentType` tag resolves to one [`FieldKindTag`] or construction fails.
//! Each tag also selects the change handler its renderer is wired to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::FormError;
use super::state::{ChangeEvent, FormState};

/// Kind tag of a field, as written in a descriptor's `componentType`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKindTag {
    /// Single-line text input
    Input,
    /// Choice list
    Select,
}

/// State transition run when a rendered field reports a change
pub type ChangeHandler = fn(&FormState, &ChangeEvent) -> FormState;

impl FieldKindTag {
    /// Every tag the registry accepts, in declaration order
    pub const ALLOWED: [FieldKindTag; 2] = [FieldKindTag::Input, FieldKindTag::Select];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKindTag::Input => "input",
            FieldKindTag::Select => "select",
        }
    }

    /// Tag names accepted by [`FieldKindTag::from_str`]
    pub fn allowed_names() -> Vec<&'static str> {
        Self::ALLOWED.iter().map(|tag| tag.as_str()).collect()
    }

    /// Handler bound to fields of this kind.
    ///
    /// Both kinds record `name -> value` from the event; they stay separate
    /// entries so a new kind can bring its own transition.
    pub fn change_handler(&self) -> ChangeHandler {
        match self {
            FieldKindTag::Input => record_input,
            FieldKindTag::Select => record_selection,
        }
    }
}

fn record_input(state: &FormState, event: &ChangeEvent) -> FormState {
    state.apply(event)
}

fn record_selection(state: &FormState, event: &ChangeEvent) -> FormState {
    state.apply(event)
}

impl FromStr for FieldKindTag {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALLOWED
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| FormError::UnsupportedFieldType {
                received: s.to_string(),
                allowed: Self::allowed_names(),
            })
    }
}

impl fmt::Display for FieldKindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
