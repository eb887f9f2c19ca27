//! Text input appearance

use crate::classes::{cn, ClassList};

use super::describe::{
    error_message_classes, help_text_classes, hint_classes, icon_classes, state_classes,
};

/// Side of the input an icon sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconSide {
    Leading,
    Trailing,
}

/// An icon decoration; with an action it renders as a clickable button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IconSlot {
    pub actionable: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputOptions {
    pub has_error: bool,
    pub disabled: bool,
    pub read_only: bool,
    pub hide_label: bool,
    pub leading_icon: Option<IconSlot>,
    pub trailing_icon: Option<IconSlot>,
}

/// Class names of every element the input renders
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputAppearance {
    pub label_container: String,
    pub label: String,
    pub hint: String,
    pub container: String,
    pub control: String,
    pub leading_icon_wrapper: Option<String>,
    pub trailing_icon_wrapper: Option<String>,
    pub icon: String,
    pub help_text: String,
    pub error_message: String,
}

impl InputAppearance {
    pub fn new(options: &InputOptions) -> Self {
        let control = ClassList::new().add(
            "block w-full shadow-sm sm:text-sm rounded-md focus:ring-gray-900 focus:border-gray-900 border-gray-300 p-2",
        );
        let control = state_classes(
            control,
            options.has_error,
            options.disabled || options.read_only,
        )
        .add_if(options.trailing_icon.is_some(), "pr-10")
        .add_if(options.leading_icon.is_some(), "pl-10")
        .build();

        Self {
            label_container: cn(["flex", "justify-between"]),
            label: ClassList::new()
                .add("block text-sm text-gray-700")
                .add_if(options.hide_label, "sr-only")
                .build(),
            hint: hint_classes(),
            container: cn(["mt-1", "relative", "rounded-md", "shadow-sm"]),
            control,
            leading_icon_wrapper: options
                .leading_icon
                .map(|slot| icon_wrapper_classes(IconSide::Leading, slot.actionable)),
            trailing_icon_wrapper: options
                .trailing_icon
                .map(|slot| icon_wrapper_classes(IconSide::Trailing, slot.actionable)),
            icon: icon_classes(options.has_error),
            help_text: help_text_classes(),
            error_message: error_message_classes(),
        }
    }
}

/// Wrapper of a leading or trailing icon; only an actionable icon takes
/// pointer events
pub fn icon_wrapper_classes(side: IconSide, actionable: bool) -> String {
    ClassList::new()
        .add("px-3 absolute inset-y-0 flex items-center")
        .add(if actionable { "cursor-pointer" } else { "pointer-events-none" })
        .add(match side {
            IconSide::Leading => "left-0",
            IconSide::Trailing => "right-0",
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_input() {
        let look = InputAppearance::new(&InputOptions::default());
        assert!(!look.control.contains("border-error"));
        assert!(!look.control.contains("pl-10"));
        assert!(!look.label.contains("sr-only"));
        assert!(look.leading_icon_wrapper.is_none());
        assert!(look.trailing_icon_wrapper.is_none());
    }

    #[test]
    fn test_error_and_read_only_styling() {
        let look = InputAppearance::new(&InputOptions {
            has_error: true,
            read_only: true,
            ..Default::default()
        });
        assert!(look.control.contains("border-error"));
        assert!(look.control.contains("bg-gray-100"));
        assert_eq!(look.icon, "h-5 w-5 text-error");
    }

    #[test]
    fn test_hidden_label() {
        let look = InputAppearance::new(&InputOptions {
            hide_label: true,
            ..Default::default()
        });
        assert!(look.label.split(' ').any(|c| c == "sr-only"));
    }

    #[test]
    fn test_icons_pad_the_control() {
        let look = InputAppearance::new(&InputOptions {
            leading_icon: Some(IconSlot { actionable: true }),
            trailing_icon: Some(IconSlot::default()),
            ..Default::default()
        });
        assert!(look.control.contains("pl-10"));
        assert!(look.control.contains("pr-10"));

        let leading = look.leading_icon_wrapper.unwrap();
        assert!(leading.contains("cursor-pointer"));
        assert!(leading.ends_with("left-0"));

        let trailing = look.trailing_icon_wrapper.unwrap();
        assert!(trailing.contains("pointer-events-none"));
        assert!(trailing.ends_with("right-0"));
    }
}
