//! Dynamic Form Builder
//!
//! Renders a [`FormDefinition`] field by field, dispatching on the field's
//! kind, and keeps the values the user entered in one `FormState` signal.
//! Each change replaces the state with the result of the kind's change
//! handler; submitting hands a snapshot to `submit`.

use forma::controls::{ButtonType, ControlDefaults};
use forma::forms::{ChangeEvent, FieldDescriptor, FieldKind, FormDefinition, FormState, FormValues};
use leptos::prelude::*;

use super::button::Button;
use super::input::Input;
use super::select::Select;

#[component]
pub fn FormBuilder(
    /// Fields to render, in order
    definition: FormDefinition,
    /// Called once per submission with the values entered so far
    #[prop(into)]
    submit: Callback<FormValues>,
    #[prop(default = "Submit".to_string(), into)] submit_label: String,
) -> impl IntoView {
    let state = RwSignal::new(FormState::new());
    let defaults = use_context::<ControlDefaults>().unwrap_or_default();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let values = state.with_untracked(FormState::snapshot);
        log::debug!("Submitting {} field values", values.len());
        submit.run(values);
    };

    let fields = definition
        .fields()
        .iter()
        .cloned()
        .map(|field| render_field(field, state, &defaults))
        .collect_view();

    view! {
        <form on:submit=on_submit class="space-y-4">
            {fields}
            <Button id="submit-button" button_type=ButtonType::Submit>
                {submit_label}
            </Button>
        </form>
    }
}

/// Dispatch one descriptor to its renderer, wired to its kind's handler
fn render_field(
    field: FieldDescriptor,
    state: RwSignal<FormState>,
    defaults: &ControlDefaults,
) -> AnyView {
    let dispatch = field.clone();
    let on_change = Callback::new(move |event: ChangeEvent| {
        state.update(|current| *current = dispatch.handle_change(current, &event));
    });

    let FieldDescriptor {
        id,
        name,
        label,
        kind,
        hint,
        help_text,
        error_message,
        hide_label,
    } = field;

    match kind {
        FieldKind::Input(input) => view! {
            <Input
                id=id
                name=Some(name)
                label=label
                input_type=input.input_type_or(&defaults.input_type).to_string()
                hint=hint
                help_text=help_text
                error_message=error_message
                hide_label=hide_label
                on_change=on_change
            />
        }
        .into_any(),
        FieldKind::Select(select) => view! {
            <Select
                id=id
                name=name
                label=label
                options=select.options
                hint=hint
                help_text=help_text
                error_message=error_message
                hide_label=hide_label
                on_change=on_change
            />
        }
        .into_any(),
    }
}
