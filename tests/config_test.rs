use forma::config::Settings;
use forma::controls::button::button_classes;
use forma::controls::{ButtonOptions, ButtonSize, ButtonVariant};
use forma::forms::{FieldKind, FieldKindTag};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_forms_from_dir() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::create_dir_all(root.join("forms"))?;

    let forma_toml = r#"
[defaults]
button_variant = "secondary"
button_size = "md"
"#;
    fs::write(root.join("forma.toml"), forma_toml)?;

    let contact_json = r#"
[
    { "id": "1", "name": "message", "componentType": "input", "label": "Message" },
    {
        "id": "3", "name": "City", "componentType": "select", "label": "City",
        "options": [
            { "value": "bishkek", "label": "Bishkek" },
            { "value": "almaty", "label": "Almaty" }
        ]
    }
]
"#;
    fs::write(root.join("forms/contact.json"), contact_json)?;

    let signup_yaml = r#"
- id: email
  name: email
  label: Email
  componentType: input
  type: email
  helpText: We never share it
"#;
    fs::write(root.join("forms/signup.yaml"), signup_yaml)?;

    fs::write(root.join("forms/README.md"), "not a form")?;

    let settings = Settings::from_root(root)?;

    assert_eq!(settings.defaults.button_variant, ButtonVariant::Secondary);
    assert_eq!(settings.defaults.button_size, ButtonSize::Md);
    assert_eq!(settings.defaults.input_type, "text");
    assert_eq!(settings.forms.len(), 2);

    let contact = settings.form("contact").expect("contact form loaded");
    assert_eq!(contact.len(), 2);
    assert_eq!(contact.fields()[1].kind_tag(), FieldKindTag::Select);

    let signup = settings.form("signup").expect("signup form loaded");
    assert_eq!(signup.fields()[0].help_text.as_deref(), Some("We never share it"));

    Ok(())
}

#[test]
fn test_configured_defaults_reach_controls() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::create_dir_all(root.join("forms"))?;
    fs::write(
        root.join("forma.toml"),
        "[defaults]\nbutton_variant = \"secondary\"\nbutton_size = \"md\"\ninput_type = \"email\"\n",
    )?;
    fs::write(
        root.join("forms/login.json"),
        r#"[
            { "id": "1", "name": "login", "componentType": "input", "label": "Login" },
            { "id": "2", "name": "pin", "componentType": "input", "label": "PIN", "type": "password" }
        ]"#,
    )?;

    let settings = Settings::from_root(root)?;
    let login = settings.form("login").expect("login form loaded");

    let types: Vec<&str> = login
        .fields()
        .iter()
        .filter_map(|field| match &field.kind {
            FieldKind::Input(input) => Some(input.input_type_or(&settings.defaults.input_type)),
            FieldKind::Select(_) => None,
        })
        .collect();
    assert_eq!(types, vec!["email", "password"]);

    let classes = button_classes(&ButtonOptions::with_defaults(&settings.defaults));
    assert!(classes.contains("border-primary"));
    assert!(classes.contains("text-sm"));

    Ok(())
}

#[test]
fn test_missing_config_uses_defaults() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;

    let settings = Settings::from_root(temp_dir.path())?;

    assert_eq!(settings.defaults.button_variant, ButtonVariant::Primary);
    assert_eq!(settings.defaults.button_size, ButtonSize::Lg);
    assert!(settings.forms.is_empty());
    Ok(())
}

#[test]
fn test_unsupported_field_type_fails_load() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    fs::create_dir_all(root.join("forms"))?;

    fs::write(
        root.join("forms/profile.json"),
        r#"[{ "id": "1", "name": "bio", "componentType": "textarea", "label": "Bio" }]"#,
    )?;

    let err = Settings::from_root(root).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("profile.json"));
    assert!(message.contains("Unsupported field type 'textarea'"));
    Ok(())
}

#[test]
fn test_same_stem_twice_is_rejected() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    fs::create_dir_all(root.join("forms"))?;

    let field = r#"[{ "id": "1", "name": "name", "componentType": "input", "label": "Name" }]"#;
    fs::write(root.join("forms/signup.json"), field)?;
    fs::write(
        root.join("forms/signup.yml"),
        "- { id: '1', name: name, componentType: input, label: Name }\n",
    )?;

    let err = Settings::from_root(root).unwrap_err();
    assert!(err.to_string().contains("Form name 'signup'"));
    Ok(())
}
