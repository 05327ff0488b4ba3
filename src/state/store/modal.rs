//! Modal visibility state.
//!
//! At most one modal is visible. The add-contact modal carries its own form
//! so label editing goes through the store like every other change.

use super::{Action, Reducer};

/// Form backing the add-contact modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddContactForm {
    /// Address being saved; fixed when the modal opens.
    pub address: String,
    /// Contact name typed by the user.
    pub label: String,
}

impl AddContactForm {
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            label: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    AddContact(AddContactForm),
    ConfirmQuit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    Show(Modal),
    Hide,
    /// Appends a character to the open form's text field.
    Input(char),
    /// Deletes the last character of the open form's text field.
    Backspace,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalState {
    modal: Option<Modal>,
}

impl ModalState {
    #[must_use]
    pub const fn current(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.modal.is_some()
    }

    fn form_mut(&mut self) -> Option<&mut AddContactForm> {
        match &mut self.modal {
            Some(Modal::AddContact(form)) => Some(form),
            _ => None,
        }
    }
}

impl Reducer for ModalState {
    fn reduce(&mut self, action: &Action) {
        let Action::Modal(action) = action else {
            return;
        };

        match action {
            ModalAction::Show(modal) => self.modal = Some(modal.clone()),
            ModalAction::Hide => self.modal = None,
            ModalAction::Input(c) => {
                if let Some(form) = self.form_mut() {
                    form.label.push(*c);
                }
            }
            ModalAction::Backspace => {
                if let Some(form) = self.form_mut() {
                    form.label.pop();
                }
            }
        }
    }
}
