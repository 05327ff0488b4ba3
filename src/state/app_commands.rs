//! Command execution for the App.
//!
//! Every [`AppCommand`] lands here. Row-level commands read the selected
//! row's requests and perform the side effect through the platform handles.

use crate::commands::AppCommand;

use super::store::{Action, AddContactForm, Modal, ModalAction, NotificationAction};
use super::App;

impl App {
    /// Executes a command.
    pub fn execute_command(&mut self, command: &AppCommand) {
        match command {
            AppCommand::RequestQuit => {
                self.store.dispatch(ModalAction::Show(Modal::ConfirmQuit));
            }
            AppCommand::Quit => self.exit = true,
            AppCommand::Reload => self.reload_history(),
            AppCommand::MoveUp => self.list.select_previous(self.rows.len(), self.visible_rows),
            AppCommand::MoveDown => self.list.select_next(self.rows.len(), self.visible_rows),
            AppCommand::ViewInExplorer => self.view_selected(),
            AppCommand::AddContact => self.request_add_contact(),
            AppCommand::CopyAddress => self.copy_selected_address(),
            AppCommand::Dismiss => self.dismiss(),
            AppCommand::TypeChar(c) => self.store.dispatch(ModalAction::Input(*c)),
            AppCommand::Backspace => self.store.dispatch(ModalAction::Backspace),
            AppCommand::SubmitContact => self.submit_contact(),
            AppCommand::Noop => {}
        }
    }

    /// Closes the open modal, or hides the toast on screen.
    fn dismiss(&mut self) {
        let state = self.store.state();
        let action: Action = if state.modal.is_open() {
            ModalAction::Hide.into()
        } else if let Some(latest) = state.notifications.latest().filter(|n| n.dismissible) {
            NotificationAction::Hide(latest.id).into()
        } else {
            return;
        };
        self.store.dispatch(action);
    }

    // ========================================================================
    // Row Actions
    // ========================================================================

    fn view_selected(&mut self) {
        let Some(request) = self.selected_row().map(|row| row.view_request()) else {
            return;
        };

        let notification =
            match self
                .opener
                .open_tx(request.network, request.explorer, &request.txid)
            {
                Ok(_) => NotificationAction::success(format!("Opened in {}", request.explorer)),
                Err(err) => {
                    tracing::warn!("Failed to open explorer: {err}");
                    NotificationAction::error(format!("Failed to open browser: {err}"))
                }
            };
        self.store.dispatch(notification);
    }

    fn request_add_contact(&mut self) {
        let Some(row) = self.selected_row() else {
            return;
        };

        let action: Action = match row.add_contact_request() {
            Some(address) => {
                ModalAction::Show(Modal::AddContact(AddContactForm::new(address))).into()
            }
            None if row.has_add_control() => {
                NotificationAction::info("Address is already a contact").into()
            }
            None => NotificationAction::info("Nothing to add for this transaction").into(),
        };
        self.store.dispatch(action);
    }

    fn copy_selected_address(&mut self) {
        let Some(text) = self
            .selected_row()
            .and_then(|row| row.copy_text())
            .map(str::to_string)
        else {
            self.store
                .dispatch(NotificationAction::info("Nothing to copy for this transaction"));
            return;
        };

        let notification = match self.clipboard.copy_text(&text) {
            Ok(()) => NotificationAction::success("Address copied to clipboard"),
            Err(err) => NotificationAction::error(err.to_string()),
        };
        self.store.dispatch(notification);
    }

    // ========================================================================
    // Contacts
    // ========================================================================

    fn submit_contact(&mut self) {
        let Some(Modal::AddContact(form)) = self.store.state().modal.current().cloned() else {
            return;
        };

        if let Err(err) = self.contacts.upsert(&form.address, &form.label) {
            self.store.dispatch(NotificationAction::error(err.to_string()));
            return;
        }

        if let Some(path) = &self.contacts_path
            && let Err(err) = self.contacts.save_to(path)
        {
            tracing::error!("Failed to save contacts: {err}");
            self.store
                .dispatch(NotificationAction::error(format!("Failed to save contacts: {err}")));
        } else {
            self.store.dispatch(NotificationAction::success(format!(
                "Saved contact {}",
                form.label.trim()
            )));
        }

        self.store.dispatch(ModalAction::Hide);
        self.refresh_rows();
    }
}
