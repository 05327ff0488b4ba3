//! User notifications shown as toasts.
//!
//! Notifications age by one tick per [`Action::Tick`] and disappear when
//! their remaining ticks reach zero. The newest notification is the one
//! rendered.

use super::{Action, Reducer};
use crate::constants::NOTIFICATION_TICKS;

/// Severity of a notification; decides its toast color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
    /// Whether a bulk "dismiss" may hide it.
    pub dismissible: bool,
    pub ticks_remaining: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationAction {
    Show {
        level: NotificationLevel,
        message: String,
        dismissible: bool,
        ticks: u16,
    },
    Hide(u64),
    HideAll { dismissible_only: bool },
}

impl NotificationAction {
    fn show(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self::Show {
            level,
            message: message.into(),
            dismissible: true,
            ticks: NOTIFICATION_TICKS,
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::show(NotificationLevel::Success, message)
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::show(NotificationLevel::Info, message)
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::show(NotificationLevel::Warning, message)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::show(NotificationLevel::Error, message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationState {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationState {
    /// The most recently shown notification.
    #[must_use]
    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }

    fn tick(&mut self) {
        for item in &mut self.items {
            item.ticks_remaining = item.ticks_remaining.saturating_sub(1);
        }
        self.items.retain(|item| item.ticks_remaining > 0);
    }
}

#[cfg(test)]
impl NotificationState {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }
}

impl Reducer for NotificationState {
    fn reduce(&mut self, action: &Action) {
        match action {
            Action::Tick => self.tick(),
            Action::Notifications(NotificationAction::Show {
                level,
                message,
                dismissible,
                ticks,
            }) => {
                if *ticks == 0 {
                    return;
                }
                self.next_id += 1;
                self.items.push(Notification {
                    id: self.next_id,
                    level: *level,
                    message: message.clone(),
                    dismissible: *dismissible,
                    ticks_remaining: *ticks,
                });
            }
            Action::Notifications(NotificationAction::Hide(id)) => {
                self.items.retain(|item| item.id != *id);
            }
            Action::Notifications(NotificationAction::HideAll { dismissible_only }) => {
                if *dismissible_only {
                    self.items.retain(|item| !item.dismissible);
                } else {
                    self.items.clear();
                }
            }
            _ => {}
        }
    }
}
