use log::debug;

use crate::error::AppError;
use crate::form::{FieldValues, FormState};
use crate::models::enums::DialogState;

pub type SaveCallback = Box<dyn FnMut(&FieldValues) -> Result<(), AppError>>;

/// What a confirm or cancel did to the dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogOutcome {
    /// The callback accepted the values; the dialog is now closed.
    Saved,
    /// The callback rejected the values; the dialog stays open with this message.
    Rejected(String),
    Cancelled,
    /// The dialog was already closed; nothing happened.
    Ignored,
}

/// Modal edit session: title, pre-filled inputs and a save callback.
pub struct EditDialog {
    title: String,
    form: FormState,
    on_save: SaveCallback,
    state: DialogState,
    error: Option<String>,
}

impl std::fmt::Debug for EditDialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditDialog")
            .field("title", &self.title)
            .field("form", &self.form)
            .field("state", &self.state)
            .field("error", &self.error)
            .finish()
    }
}

impl EditDialog {
    /// Open a dialog whose inputs are pre-filled positionally from `values`.
    pub fn open<L, V, F>(title: impl Into<String>, labels: &[L], values: &[V], on_save: F) -> Self
    where
        L: AsRef<str>,
        V: AsRef<str>,
        F: FnMut(&FieldValues) -> Result<(), AppError> + 'static,
    {
        let mut form = FormState::build(labels);
        form.prefill(values);
        Self {
            title: title.into(),
            form,
            on_save: Box::new(on_save),
            state: DialogState::Open,
            error: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    /// Saved or cancelled; the modal should be dismissed.
    pub fn is_closed(&self) -> bool {
        matches!(self.state, DialogState::Closed | DialogState::Cancelled)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// User pressed Save.
    pub fn confirm(&mut self) -> DialogOutcome {
        if self.state != DialogState::Open {
            return DialogOutcome::Ignored;
        }
        self.state = DialogState::Saving;
        let values = self.form.values();
        match (self.on_save)(&values) {
            Ok(()) => {
                debug!("'{}' saved", self.title);
                self.error = None;
                self.state = DialogState::Closed;
                DialogOutcome::Saved
            }
            Err(e) => {
                let message = e.to_string();
                debug!("'{}' rejected: {}", self.title, message);
                self.error = Some(message.clone());
                self.state = DialogState::Open;
                DialogOutcome::Rejected(message)
            }
        }
    }

    /// User pressed Cancel or dismissed the window. The callback is not run.
    pub fn cancel(&mut self) -> DialogOutcome {
        if self.state != DialogState::Open {
            return DialogOutcome::Ignored;
        }
        self.state = DialogState::Cancelled;
        DialogOutcome::Cancelled
    }
}
