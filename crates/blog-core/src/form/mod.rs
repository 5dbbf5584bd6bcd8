//! Blog form: field values and the submission state machine.

mod state_machine;
mod values;

pub use state_machine::{FormAction, FormEvent, FormMode, FormState, FormStateMachine};
pub use values::{BlogFormValues, FormField};
