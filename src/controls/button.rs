//! Button appearance and interactivity

use serde::{Deserialize, Serialize};

use super::ControlDefaults;
use crate::classes::ClassList;

/// Pixel size of leading/trailing button icons
pub const ICON_SIZE: u32 = 16;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Tertiary,
    Danger,
}

impl ButtonVariant {
    fn classes(&self, disabled: bool) -> &'static str {
        match (self, disabled) {
            (ButtonVariant::Primary, false) => {
                "bg-primary border-transparent text-primary-contrast hover:bg-primary-hover"
            }
            (ButtonVariant::Primary, true) => {
                "bg-gray-100 border-transparent text-gray-500 cursor-default"
            }
            (ButtonVariant::Secondary, false) => {
                "bg-white border-primary text-primary-contrast hover:bg-primary"
            }
            (ButtonVariant::Tertiary, false) => {
                "bg-white border-gray-300 text-gray-700 hover:bg-gray-100"
            }
            (ButtonVariant::Secondary | ButtonVariant::Tertiary, true) => {
                "border-gray-100 text-gray-300 cursor-default"
            }
            (ButtonVariant::Danger, false) => {
                "bg-white border-error text-error hover:bg-error-light"
            }
            (ButtonVariant::Danger, true) => {
                "bg-white border-gray-100 text-gray-300 cursor-default"
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    Md,
    #[default]
    Lg,
}

impl ButtonSize {
    fn classes(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-2 py-1.5 space-x-2 text-xs",
            ButtonSize::Md => "px-4 py-2 space-x-2 text-sm",
            ButtonSize::Lg => "px-6 py-3 space-x-2 text-base",
        }
    }
}

/// Native `type` of a button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonOptions {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    pub full_width: bool,
    pub class: Option<String>,
}

impl ButtonOptions {
    /// Options carrying the configured variant and size
    pub fn with_defaults(defaults: &ControlDefaults) -> Self {
        Self {
            variant: defaults.button_variant,
            size: defaults.button_size,
            ..Default::default()
        }
    }
}

pub fn button_classes(options: &ButtonOptions) -> String {
    ClassList::new()
        .add_opt(options.class.as_deref())
        .add("inline-flex items-center justify-center border rounded shadow-sm")
        .add(options.size.classes())
        .add(options.variant.classes(options.disabled))
        .add_if(options.full_width, "w-full")
        .build()
}

pub fn icon_classes() -> &'static str {
    "flex-shrink-0"
}

pub fn label_classes() -> &'static str {
    "truncate"
}

/// A button is interactive when something handles its click or when its
/// type gives it native behaviour (submit, reset)
pub fn is_interactive(has_click_handler: bool, button_type: ButtonType) -> bool {
    has_click_handler || button_type != ButtonType::Button
}

/// Non-interactive buttons leave the tab order unless a tab index was given
pub fn tab_index(explicit: Option<i32>, interactive: bool) -> Option<i32> {
    explicit.or(if interactive { None } else { Some(-1) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_large_primary() {
        let classes = button_classes(&ButtonOptions::default());
        assert!(classes.contains("px-6 py-3"));
        assert!(classes.contains("bg-primary"));
        assert!(!classes.contains("w-full"));
    }

    #[test]
    fn test_disabled_variant_treatment() {
        let classes = button_classes(&ButtonOptions {
            variant: ButtonVariant::Danger,
            disabled: true,
            ..Default::default()
        });
        assert!(classes.contains("cursor-default"));
        assert!(!classes.contains("border-error"));
    }

    #[test]
    fn test_full_width_small_secondary() {
        let classes = button_classes(&ButtonOptions {
            variant: ButtonVariant::Secondary,
            size: ButtonSize::Sm,
            full_width: true,
            class: Some("mt-4".to_string()),
            ..Default::default()
        });
        assert!(classes.starts_with("mt-4 inline-flex"));
        assert!(classes.contains("text-xs"));
        assert!(classes.contains("border-primary"));
        assert!(classes.ends_with("w-full"));
    }

    #[test]
    fn test_interactivity() {
        assert!(!is_interactive(false, ButtonType::Button));
        assert!(is_interactive(true, ButtonType::Button));
        assert!(is_interactive(false, ButtonType::Submit));
        assert!(is_interactive(false, ButtonType::Reset));
    }

    #[test]
    fn test_tab_index() {
        assert_eq!(tab_index(None, false), Some(-1));
        assert_eq!(tab_index(None, true), None);
        assert_eq!(tab_index(Some(3), false), Some(3));
    }

    #[test]
    fn test_configured_defaults_apply() {
        let defaults = ControlDefaults {
            button_variant: ButtonVariant::Tertiary,
            button_size: ButtonSize::Sm,
            ..Default::default()
        };
        let options = ButtonOptions::with_defaults(&defaults);
        assert_eq!(options.variant, ButtonVariant::Tertiary);
        assert!(!options.disabled);

        let classes = button_classes(&options);
        assert!(classes.contains("border-gray-300"));
        assert!(classes.contains("text-xs"));
    }
}
