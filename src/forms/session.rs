//! Renderer-agnostic form session
//!
//! Owns a definition, the form state built from change events, and the
//! callback that receives the values on submit. The Leptos form builder runs
//! the same transitions through a signal; this type drives them directly so
//! they can be exercised without a DOM.

use std::fmt;
use tracing::{debug, info};

use super::definition::FormDefinition;
use super::state::{ChangeEvent, FormState, FormValues};

/// Callback receiving the submitted values
pub type SubmitFn = Box<dyn FnMut(FormValues)>;

pub struct FormSession {
    definition: FormDefinition,
    state: FormState,
    submit: SubmitFn,
}

impl FormSession {
    pub fn new(definition: FormDefinition, submit: impl FnMut(FormValues) + 'static) -> Self {
        Self {
            definition,
            state: FormState::new(),
            submit: Box::new(submit),
        }
    }

    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Run the change handler of the field the event came from and replace
    /// the state with its result.
    ///
    /// Events are applied in call order; each sees the state left by the
    /// previous one. A name no field renders is still recorded.
    pub fn handle_change(&mut self, event: &ChangeEvent) -> &FormState {
        let next = match self.definition.field_by_name(&event.name) {
            Some(field) => field.handle_change(&self.state, event),
            None => {
                debug!(name = %event.name, "Change for a name no field renders");
                self.state.apply(event)
            }
        };
        debug!(name = %event.name, "Field changed");
        self.state = next;
        &self.state
    }

    /// Hand the current values to the submit callback, once per call.
    /// Fields never changed are absent from the values. The values stay
    /// recorded afterwards (see "State after submit" in DESIGN.md); call
    /// [`FormSession::reset`] to discard them.
    pub fn submit(&mut self) {
        let values = self.state.snapshot();
        info!(fields = values.len(), "Form submitted");
        (self.submit)(values);
    }

    /// Discard all recorded values
    pub fn reset(&mut self) {
        self.state = FormState::new();
    }
}

impl fmt::Debug for FormSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormSession")
            .field("definition", &self.definition)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
