//! Label, hint and description wiring shared by the text-like controls

use crate::classes::{cn, ClassList};

/// Element ids a control's help text and error message are rendered under
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Descriptions {
    pub help_id: Option<String>,
    pub error_id: Option<String>,
}

impl Descriptions {
    /// `{id}-help` when there is help text, `{id}-error` when there is an
    /// error message
    pub fn new(id: &str, has_help_text: bool, has_error: bool) -> Self {
        Self {
            help_id: has_help_text.then(|| format!("{}-help", id)),
            error_id: has_error.then(|| format!("{}-error", id)),
        }
    }

    /// `aria-describedby` value; absent when the control has no descriptions
    pub fn described_by(&self) -> Option<String> {
        let ids: Vec<&str> = [self.help_id.as_deref(), self.error_id.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        (!ids.is_empty()).then(|| ids.join(" "))
    }

    /// `aria-invalid` value
    pub fn invalid(&self) -> bool {
        self.error_id.is_some()
    }
}

pub fn hint_classes() -> String {
    cn(["text-sm", "text-gray-500"])
}

pub fn help_text_classes() -> String {
    cn(["mt-2", "text-sm", "text-gray-700"])
}

pub fn error_message_classes() -> String {
    cn(["mt-2", "text-sm", "text-error"])
}

/// Icon colour follows the error state
pub fn icon_classes(has_error: bool) -> String {
    ClassList::new()
        .add("h-5 w-5")
        .add_if(!has_error, "text-gray-400")
        .add_if(has_error, "text-error")
        .build()
}

/// Shared styling of the native control in its error and disabled states
pub(crate) fn state_classes(list: ClassList, has_error: bool, disabled: bool) -> ClassList {
    list.add_if(has_error, "border-2 border-error bg-error-light")
        .add_if(disabled, "bg-gray-100 text-gray-700")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_descriptions() {
        let d = Descriptions::new("email", false, false);
        assert_eq!(d.described_by(), None);
        assert!(!d.invalid());
    }

    #[test]
    fn test_help_only() {
        let d = Descriptions::new("email", true, false);
        assert_eq!(d.described_by().as_deref(), Some("email-help"));
        assert!(!d.invalid());
    }

    #[test]
    fn test_error_only_lists_just_the_error_id() {
        let d = Descriptions::new("email", false, true);
        assert_eq!(d.described_by().as_deref(), Some("email-error"));
        assert!(d.invalid());
    }

    #[test]
    fn test_help_and_error() {
        let d = Descriptions::new("email", true, true);
        assert_eq!(d.described_by().as_deref(), Some("email-help email-error"));
    }

    #[test]
    fn test_icon_colour() {
        assert_eq!(icon_classes(false), "h-5 w-5 text-gray-400");
        assert_eq!(icon_classes(true), "h-5 w-5 text-error");
    }
}
