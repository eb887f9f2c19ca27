//! Declarative form building
//!
//! - Field descriptors and their closed set of kinds
//! - The kind registry and its change handlers
//! - Immutable form state
//! - A session that applies change events and submits

pub mod definition;
pub mod error;
pub mod field;
pub mod registry;
pub mod session;
pub mod state;

pub use definition::FormDefinition;
pub use error::{FormError, Result};
pub use field::{FieldDescriptor, FieldKind, FieldOption, InputField, OptionValue, RawFieldDescriptor, SelectField};
pub use registry::{ChangeHandler, FieldKindTag};
pub use session::FormSession;
pub use state::{ChangeEvent, FormState, FormValues};
