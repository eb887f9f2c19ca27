//! Select

use forma::controls::{Descriptions, SelectAppearance, SelectOptions};
use forma::forms::{ChangeEvent, FieldOption};
use leptos::prelude::*;
use leptos::web_sys;

use super::icons::ChevronDown;

#[component]
pub fn Select(
    #[prop(into)] id: String,
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    /// Choices in display order; none renders an empty list
    #[prop(optional)] options: Vec<FieldOption>,
    #[prop(optional_no_strip)] hint: Option<String>,
    #[prop(optional_no_strip)] help_text: Option<String>,
    #[prop(optional_no_strip)] error_message: Option<String>,
    #[prop(optional)] hide_label: bool,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] disabled: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_change: Option<Callback<ChangeEvent>>,
) -> impl IntoView {
    let descriptions = Descriptions::new(&id, help_text.is_some(), error_message.is_some());
    let look = SelectAppearance::new(&SelectOptions {
        has_error: descriptions.invalid(),
        disabled,
        hide_label,
        full_width,
        class,
    });

    let on_select = move |ev: leptos::ev::Event| {
        if let Some(cb) = on_change {
            let target: web_sys::HtmlSelectElement = event_target(&ev);
            cb.run(ChangeEvent::new(target.name(), target.value()));
        }
    };

    view! {
        <div class=look.container>
            <div class=look.label_container>
                <label for=id.clone() class=look.label>{label}</label>
                {hint.map(|hint| view! { <span class=look.hint>{hint}</span> })}
            </div>

            <div class=look.control_container>
                <select
                    id=id
                    name=name
                    class=look.control
                    disabled=disabled
                    aria-invalid=if descriptions.invalid() { "true" } else { "false" }
                    aria-describedby=descriptions.described_by()
                    on:change=on_select
                >
                    <For
                        each=move || options.clone()
                        key=|option| option.render_key()
                        children=|option: FieldOption| {
                            view! {
                                <option value=option.value.to_string() disabled=option.is_disabled>
                                    {option.label}
                                </option>
                            }
                        }
                    />
                </select>

                <div class=look.icon_wrapper>
                    <ChevronDown class=look.icon />
                </div>
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
