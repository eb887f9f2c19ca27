//! Leptos components for forma: Button, Input, Select and the dynamic
//! FormBuilder, plus the demo page mounted at wasm start.

use forma::controls::{ButtonVariant, ControlDefaults};
use forma::forms::{FieldOption, FormDefinition, FormValues};
use leptos::prelude::*;

pub mod components;

use components::icons::Signpost;
pub use components::{Button, FormBuilder, Input, Select};

const DEMO_FORM: &str = r#"[
    { "id": "1", "name": "message", "componentType": "input", "label": "Message" },
    { "id": "2", "name": "name", "componentType": "input", "label": "Name" },
    {
        "id": "3", "name": "City", "componentType": "select", "label": "City",
        "options": [
            { "value": "bishkek", "label": "Bishkek" },
            { "value": "almaty", "label": "Almaty" }
        ]
    },
    { "id": "4", "name": "City", "componentType": "select", "label": "Empty" }
]"#;

#[component]
pub fn App() -> impl IntoView {
    provide_context(ControlDefaults::default());
    let (submitted, set_submitted) = signal(Option::<FormValues>::None);

    view! {
        <div class="max-w-xl mx-auto p-6 space-y-6">
            <Input
                id="name-input"
                label="name"
                placeholder="type..."
                leading_icon=|| view! { <Signpost /> }
                hint=Some("hint".to_string())
                help_text=Some("help".to_string())
            />

            <Select
                id="select"
                name="select"
                label="select"
                options=vec![
                    FieldOption::new(1, "option 1"),
                    FieldOption::new(2, "option 2"),
                    FieldOption::new(3, "option 3"),
                ]
                hint=Some("hint".to_string())
                help_text=Some("help".to_string())
            />

            <Button
                id="button"
                full_width=true
                variant=ButtonVariant::Secondary
                on_click=Callback::new(|_: leptos::ev::MouseEvent| log::info!("Button clicked"))
            >
                "Button"
            </Button>

            <ErrorBoundary fallback=|errors| view! {
                <div class="text-sm text-error">
                    {move || errors.get()
                        .into_iter()
                        .map(|(_, e)| view! { <p>{e.to_string()}</p> })
                        .collect_view()}
                </div>
            }>
                {FormDefinition::from_json(DEMO_FORM).map(|definition| view! {
                    <FormBuilder
                        definition=definition
                        submit=move |values: FormValues| set_submitted.set(Some(values))
                    />
                })}
            </ErrorBoundary>

            {move || submitted.get().map(|values| view! {
                <pre class="text-sm bg-gray-100 rounded-md p-2">
                    {serde_json::to_string_pretty(&values).unwrap_or_default()}
                </pre>
            })}
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
