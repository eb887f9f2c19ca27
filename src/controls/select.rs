//! Select appearance

use crate::classes::{cn, ClassList};

use super::describe::{
    error_message_classes, help_text_classes, hint_classes, icon_classes, state_classes,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectOptions {
    pub has_error: bool,
    pub disabled: bool,
    pub hide_label: bool,
    pub full_width: bool,
    /// Extra classes for the outer container
    pub class: Option<String>,
}

/// Class names of every element the select renders
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectAppearance {
    pub container: String,
    pub label_container: String,
    pub label: String,
    pub hint: String,
    pub control_container: String,
    pub control: String,
    pub icon_wrapper: String,
    pub icon: String,
    pub help_text: String,
    pub error_message: String,
}

impl SelectAppearance {
    pub fn new(options: &SelectOptions) -> Self {
        let control = ClassList::new().add(
            "appearance-none bg-none border block w-full shadow-sm sm:text-sm rounded-md focus:ring-gray-900 focus:border-gray-900 border-gray-300 pr-10 p-2",
        );

        Self {
            container: ClassList::new()
                .add_opt(options.class.as_deref())
                .add_if(options.full_width, "w-full")
                .build(),
            label_container: ClassList::new()
                .add("flex justify-between")
                .add_if(options.hide_label, "sr-only")
                .build(),
            label: cn(["block", "text-sm", "text-gray-700", "mb-1"]),
            hint: hint_classes(),
            control_container: cn(["relative", "rounded-md", "shadow-sm"]),
            control: state_classes(control, options.has_error, options.disabled).build(),
            icon_wrapper: cn([
                "absolute",
                "inset-y-0",
                "flex",
                "items-center",
                "pointer-events-none",
                "right-0",
                "pr-3",
            ]),
            icon: icon_classes(options.has_error),
            help_text: help_text_classes(),
            error_message: error_message_classes(),
        }
    }
}
