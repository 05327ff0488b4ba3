//! Lifecycle tracking for background requests.

use std::collections::HashMap;

use super::{Action, Reducer};

/// Request id for loading the transaction history file.
pub const HISTORY_REQUEST: &str = "history";

/// Where a request is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl RequestStatus {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
impl RequestStatus {
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestAction {
    Started(String),
    Succeeded(String),
    Failed(String, String),
    Reset(String),
}

/// Status per request id. Unknown ids are idle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestState {
    statuses: HashMap<String, RequestStatus>,
}

impl RequestState {
    #[must_use]
    pub fn status(&self, id: &str) -> &RequestStatus {
        static IDLE: RequestStatus = RequestStatus::Idle;
        self.statuses.get(id).unwrap_or(&IDLE)
    }
}

impl Reducer for RequestState {
    fn reduce(&mut self, action: &Action) {
        let Action::Requests(action) = action else {
            return;
        };

        match action {
            RequestAction::Started(id) => {
                self.statuses.insert(id.clone(), RequestStatus::Loading);
            }
            RequestAction::Succeeded(id) => {
                self.statuses.insert(id.clone(), RequestStatus::Loaded);
            }
            RequestAction::Failed(id, message) => {
                self.statuses
                    .insert(id.clone(), RequestStatus::Failed(message.clone()));
            }
            RequestAction::Reset(id) => {
                self.statuses.remove(id);
            }
        }
    }
}
