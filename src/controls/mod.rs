//! Prop contracts of the form controls
//!
//! Derived class names and accessibility attributes for Button, Input and
//! Select, independent of the view layer that renders them.

use serde::{Deserialize, Serialize};

pub mod button;
pub mod describe;
pub mod input;
pub mod select;

pub use button::{ButtonOptions, ButtonSize, ButtonType, ButtonVariant};
pub use describe::Descriptions;
pub use input::{IconSide, IconSlot, InputAppearance, InputOptions};
pub use select::{SelectAppearance, SelectOptions};

/// Defaults applied when a control is rendered without the matching prop
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlDefaults {
    #[serde(default)]
    pub button_variant: ButtonVariant,
    #[serde(default)]
    pub button_size: ButtonSize,
    #[serde(default = "default_input_type")]
    pub input_type: String,
}

fn default_input_type() -> String {
    "text".to_string()
}

impl Default for ControlDefaults {
    fn default() -> Self {
        Self {
            button_variant: ButtonVariant::default(),
            button_size: ButtonSize::default(),
            input_type: default_input_type(),
        }
    }
}
