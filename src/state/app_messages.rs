//! Background history loading and message processing.

use super::history::load_history;
use super::store::{HISTORY_REQUEST, NotificationAction, RequestAction};
use super::{App, AppMessage};
use crate::domain::transactions_from_records;

impl App {
    /// Starts loading the configured history file on a background task.
    ///
    /// A load already in flight is not restarted.
    pub fn reload_history(&mut self) {
        if self
            .store
            .state()
            .requests
            .status(HISTORY_REQUEST)
            .is_loading()
        {
            return;
        }

        let Some(path) = self.config.history_file.clone() else {
            self.store
                .dispatch(RequestAction::Reset(HISTORY_REQUEST.to_string()));
            self.store.dispatch(NotificationAction::warning(
                "No history file configured (start with --history FILE)",
            ));
            return;
        };

        // Results of the previous load no longer apply.
        self.store.dispatch(NotificationAction::HideAll {
            dismissible_only: true,
        });
        self.store
            .dispatch(RequestAction::Started(HISTORY_REQUEST.to_string()));

        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = load_history(&path).await;
            let _ = message_tx.send(AppMessage::HistoryLoaded(result));
        });
    }

    /// Drains pending background messages.
    pub fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.handle_message(message);
        }
    }

    pub(crate) fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::HistoryLoaded(Ok(records)) => {
                let total = records.len();
                self.transactions = transactions_from_records(records);
                self.refresh_rows();

                self.store
                    .dispatch(RequestAction::Succeeded(HISTORY_REQUEST.to_string()));

                let skipped = total - self.transactions.len();
                if skipped > 0 {
                    self.store.dispatch(NotificationAction::warning(format!(
                        "Loaded {} transactions, skipped {skipped}",
                        self.transactions.len()
                    )));
                } else {
                    self.store.dispatch(NotificationAction::info(format!(
                        "Loaded {} transactions",
                        self.transactions.len()
                    )));
                }
            }
            AppMessage::HistoryLoaded(Err(err)) => {
                tracing::error!("History load failed: {err}");
                self.store.dispatch(RequestAction::Failed(
                    HISTORY_REQUEST.to_string(),
                    err.to_string(),
                ));
                self.store.dispatch(NotificationAction::error(format!(
                    "Failed to load history: {err}"
                )));
            }
        }
    }
}
