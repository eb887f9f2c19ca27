//! Button
//!
//! Renders a native `<button>` when something can happen on click (a click
//! handler, or a submit/reset type); otherwise a static container with the
//! same look that stays out of the tab order.

use forma::controls::button::{
    button_classes, icon_classes, is_interactive, label_classes, tab_index as resolve_tab_index,
    ICON_SIZE,
};
use forma::controls::{ButtonOptions, ButtonSize, ButtonType, ButtonVariant, ControlDefaults};
use leptos::prelude::*;

#[component]
pub fn Button(
    #[prop(into)] id: String,
    /// Falls back to the `ControlDefaults` in context
    #[prop(optional, into)]
    variant: Option<ButtonVariant>,
    #[prop(optional, into)] size: Option<ButtonSize>,
    #[prop(optional)] button_type: ButtonType,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] disabled: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] tab_index: Option<i32>,
    #[prop(optional, into)] leading_icon: Option<ViewFn>,
    #[prop(optional, into)] trailing_icon: Option<ViewFn>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let configured = use_context::<ControlDefaults>().unwrap_or_default();
    let defaults = ButtonOptions::with_defaults(&configured);
    let classes = button_classes(&ButtonOptions {
        variant: variant.unwrap_or(defaults.variant),
        size: size.unwrap_or(defaults.size),
        disabled,
        full_width,
        class,
    });
    let interactive = is_interactive(on_click.is_some(), button_type);
    let tab_index = resolve_tab_index(tab_index, interactive).map(|i| i.to_string());

    let icon_style = format!("width: {0}px; height: {0}px", ICON_SIZE);
    let render_icon = move |icon: ViewFn| {
        view! { <span class=icon_classes() style=icon_style.clone()>{icon.run()}</span> }
    };

    let leading = leading_icon.map(render_icon.clone());
    let trailing = trailing_icon.map(render_icon);
    let label = view! { <span class=label_classes()>{children()}</span> };

    if !interactive {
        return view! {
            <div id=id class=classes tabindex=tab_index>
                {leading}
                {label}
                {trailing}
            </div>
        }
        .into_any();
    }

    view! {
        <button
            id=id
            type=button_type.as_str()
            class=classes
            tabindex=tab_index
            disabled=disabled
            data-testid="button"
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.run(ev);
                }
            }
        >
            {leading}
            {label}
            {trailing}
        </button>
    }
    .into_any()
}
