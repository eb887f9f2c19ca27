//! # Forma - form primitives and a declarative form builder
//!
//! The renderer-agnostic half of the library. The Leptos components live in
//! the `forma-ui` crate and are built on what this crate exposes.
//!
//! ## Features
//!
//! - **Field descriptors**: JSON-shaped field lists with a closed set of kinds
//!   (`input`, `select`); unknown kinds fail when the form is built
//! - **Form state**: immutable `name -> value` transitions, one per change
//! - **Form session**: applies change events and hands the values to a
//!   submit callback
//! - **Controls**: class names and accessibility attributes of Button, Input
//!   and Select
//! - **Config**: control defaults and on-disk form definitions (`native`)
//!
//! ## Quick Start
//!
//! ```rust
//! use forma::forms::{ChangeEvent, FormDefinition, FormSession};
//!
//! # fn main() -> forma::forms::Result<()> {
//! let definition = FormDefinition::from_json(r#"[
//!     { "id": "1", "name": "name", "label": "Name", "componentType": "input" }
//! ]"#)?;
//!
//! let mut session = FormSession::new(definition, |values| {
//!     assert_eq!(values.get("name").map(String::as_str), Some("Aida"));
//! });
//! session.handle_change(&ChangeEvent::new("name", "Aida"));
//! session.submit();
//! # Ok(())
//! # }
//! ```

pub mod classes;
pub mod controls;
pub mod forms;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod telemetry;

pub use forms::{FieldDescriptor, FormDefinition, FormError, FormSession, FormState, FormValues};
