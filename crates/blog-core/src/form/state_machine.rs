//! Form submission state machine.
//!
//! Defines a pure state transition function for the add/edit blog form.

use crate::ids::BlogId;

/// Fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit { id: BlogId },
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit { .. })
    }

    pub fn heading(&self) -> &'static str {
        match self {
            FormMode::Add => "Add Blog",
            FormMode::Edit { .. } => "Edit Blog",
        }
    }

    pub fn submit_label(&self, submitting: bool) -> &'static str {
        match (self, submitting) {
            (FormMode::Add, false) => "Create Blog",
            (FormMode::Add, true) => "Creating...",
            (FormMode::Edit { .. }, false) => "Update Blog",
            (FormMode::Edit { .. }, true) => "Updating...",
        }
    }
}

/// Observable form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// Inputs enabled. Carries the error of the last failed submission.
    Editing { last_error: Option<String> },
    /// A create/update call is in flight; inputs and submit are disabled.
    Submitting,
    /// Saved; navigation to the list view was requested.
    Succeeded,
}

impl Default for FormState {
    fn default() -> Self {
        FormState::Editing { last_error: None }
    }
}

impl FormState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormState::Submitting)
    }

    pub fn accepts_input(&self) -> bool {
        matches!(self, FormState::Editing { .. })
    }

    pub fn last_error(&self) -> Option<&str> {
        match self {
            FormState::Editing { last_error } => last_error.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    SubmitSucceeded,
    SubmitFailed { message: String },
    Cancel,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    CreateBlog,
    UpdateBlog { id: BlogId },
    NavigateToList,
}

/// Pure form state machine: no side effects.
pub struct FormStateMachine;

impl FormStateMachine {
    pub fn transition(
        mode: &FormMode,
        state: FormState,
        event: FormEvent,
    ) -> (FormState, Vec<FormAction>) {
        match (state, event) {
            (FormState::Editing { .. }, FormEvent::Submit) => {
                let persist = match mode {
                    FormMode::Add => FormAction::CreateBlog,
                    FormMode::Edit { id } => FormAction::UpdateBlog { id: id.clone() },
                };
                (FormState::Submitting, vec![persist])
            }
            (FormState::Submitting, FormEvent::SubmitSucceeded) => {
                (FormState::Succeeded, vec![FormAction::NavigateToList])
            }
            (FormState::Submitting, FormEvent::SubmitFailed { message }) => (
                FormState::Editing {
                    last_error: Some(message),
                },
                Vec::new(),
            ),
            (FormState::Editing { last_error }, FormEvent::Cancel) => (
                FormState::Editing { last_error },
                vec![FormAction::NavigateToList],
            ),
            (state, _event) => (state, Vec::new()),
        }
    }
}
