//! Text Input
//!
//! Label row with optional hint, the native input with optional leading and
//! trailing icons, then help text and error message. The input is described
//! by whichever of the two texts exist.

use forma::controls::{ControlDefaults, Descriptions, IconSlot, InputAppearance, InputOptions};
use forma::forms::ChangeEvent;
use leptos::prelude::*;
use leptos::web_sys;

#[component]
pub fn Input(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(optional_no_strip)] name: Option<String>,
    /// Falls back to the `ControlDefaults` in context
    #[prop(optional, into)]
    input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional_no_strip)] hint: Option<String>,
    #[prop(optional_no_strip)] help_text: Option<String>,
    #[prop(optional_no_strip)] error_message: Option<String>,
    #[prop(optional, into)] leading_icon: Option<ViewFn>,
    #[prop(optional)] leading_action: Option<Callback<()>>,
    #[prop(optional, into)] trailing_icon: Option<ViewFn>,
    #[prop(optional)] trailing_action: Option<Callback<()>>,
    #[prop(optional)] hide_label: bool,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] read_only: bool,
    #[prop(optional, into)] class: Option<String>,
    /// Receives the input's `name` and value on every keystroke
    #[prop(optional)] on_change: Option<Callback<ChangeEvent>>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| {
        use_context::<ControlDefaults>()
            .unwrap_or_default()
            .input_type
    });
    let descriptions = Descriptions::new(&id, help_text.is_some(), error_message.is_some());
    let look = InputAppearance::new(&InputOptions {
        has_error: descriptions.invalid(),
        disabled,
        read_only,
        hide_label,
        leading_icon: leading_icon.as_ref().map(|_| IconSlot {
            actionable: leading_action.is_some(),
        }),
        trailing_icon: trailing_icon.as_ref().map(|_| IconSlot {
            actionable: trailing_action.is_some(),
        }),
    });

    let on_input = move |ev: leptos::ev::Event| {
        if let Some(cb) = on_change {
            let target: web_sys::HtmlInputElement = event_target(&ev);
            cb.run(ChangeEvent::new(target.name(), target.value()));
        }
    };

    let icon_class = look.icon.clone();
    let leading = leading_icon.zip(look.leading_icon_wrapper.clone()).map(|(icon, wrapper)| {
        view! { <IconDecoration icon=icon wrapper=wrapper icon_class=icon_class.clone() action=leading_action /> }
    });
    let trailing = trailing_icon.zip(look.trailing_icon_wrapper.clone()).map(|(icon, wrapper)| {
        view! { <IconDecoration icon=icon wrapper=wrapper icon_class=icon_class.clone() action=trailing_action /> }
    });

    view! {
        <div class=class>
            <div class=look.label_container>
                <label for=id.clone() class=look.label>{label}</label>
                {hint.map(|hint| view! { <span class=look.hint>{hint}</span> })}
            </div>

            <div class=look.container>
                {leading}
                <input
                    id=id
                    name=name
                    type=input_type
                    placeholder=placeholder
                    class=look.control
                    disabled=disabled
                    readonly=read_only
                    aria-invalid=if descriptions.invalid() { "true" } else { "false" }
                    aria-describedby=descriptions.described_by()
                    on:input=on_input
                />
                {trailing}
            </div>

            {descriptions.help_id.clone().zip(help_text).map(|(help_id, text)| view! {
                <p class=look.help_text id=help_id>{text}</p>
            })}
            {descriptions.error_id.clone().zip(error_message).map(|(error_id, text)| view! {
                <p class=look.error_message id=error_id>{text}</p>
            })}
        </div>
    }
}

/// Leading or trailing icon; clickable only when it has an action
#[component]
fn IconDecoration(
    icon: ViewFn,
    wrapper: String,
    icon_class: String,
    action: Option<Callback<()>>,
) -> impl IntoView {
    let content = view! { <span class=icon_class>{icon.run()}</span> };
    match action {
        Some(action) => view! {
            <button type="button" class=wrapper on:click=move |_| action.run(())>
                {content}
            </button>
        }
        .into_any(),
        None => view! { <div class=wrapper>{content}</div> }.into_any(),
    }
}
