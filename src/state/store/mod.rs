//! Root store composed from independent state slices.
//!
//! Each slice owns one top-level key of [`RootState`] and its own transition
//! rules. Dispatching an [`Action`] offers it to every slice in declaration
//! order; a slice ignores actions outside its namespace.
//!
//! ```text
//! ┌──────────────────────────── RootState ────────────────────────────┐
//! │ requests │ generate_wallet │ claim │ notifications │    modal     │
//! └──────────┴─────────────────┴───────┴───────────────┴──────────────┘
//!                    ▲ every Action is offered to every slice
//! ```

mod claim;
mod generate_wallet;
mod modal;
mod notifications;
mod requests;

pub use claim::{ClaimAction, ClaimState};
pub use generate_wallet::{GenerateWalletAction, GenerateWalletState};
pub use modal::{AddContactForm, Modal, ModalAction, ModalState};
pub use notifications::{Notification, NotificationAction, NotificationLevel, NotificationState};
pub use requests::{HISTORY_REQUEST, RequestAction, RequestState, RequestStatus};

// ============================================================================
// Actions
// ============================================================================

/// Everything that can change the root store, namespaced by slice.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Requests(RequestAction),
    GenerateWallet(GenerateWalletAction),
    Claim(ClaimAction),
    Notifications(NotificationAction),
    Modal(ModalAction),
    /// One UI tick elapsed.
    Tick,
}

impl From<RequestAction> for Action {
    fn from(action: RequestAction) -> Self {
        Self::Requests(action)
    }
}

impl From<GenerateWalletAction> for Action {
    fn from(action: GenerateWalletAction) -> Self {
        Self::GenerateWallet(action)
    }
}

impl From<ClaimAction> for Action {
    fn from(action: ClaimAction) -> Self {
        Self::Claim(action)
    }
}

impl From<NotificationAction> for Action {
    fn from(action: NotificationAction) -> Self {
        Self::Notifications(action)
    }
}

impl From<ModalAction> for Action {
    fn from(action: ModalAction) -> Self {
        Self::Modal(action)
    }
}

// ============================================================================
// Reducer
// ============================================================================

/// A state slice's transition function.
pub trait Reducer {
    /// Applies `action` if it belongs to this slice.
    fn reduce(&mut self, action: &Action);
}

// ============================================================================
// RootState
// ============================================================================

/// The whole application state, one field per slice.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RootState {
    /// Request lifecycle tracking for background loads.
    pub requests: RequestState,
    /// Output of the wallet generation flow.
    pub generate_wallet: GenerateWalletState,
    /// GAS claim flow flags.
    pub claim: ClaimState,
    /// Pending user notifications.
    pub notifications: NotificationState,
    /// The visible modal, if any.
    pub modal: ModalState,
}

impl Reducer for RootState {
    fn reduce(&mut self, action: &Action) {
        self.requests.reduce(action);
        self.generate_wallet.reduce(action);
        self.claim.reduce(action);
        self.notifications.reduce(action);
        self.modal.reduce(action);
    }
}

// ============================================================================
// Store
// ============================================================================

/// Owns the [`RootState`] and is the only way to change it.
#[derive(Debug, Default)]
pub struct Store {
    state: RootState,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the current state.
    #[must_use]
    pub const fn state(&self) -> &RootState {
        &self.state
    }

    /// Runs `action` through every slice.
    pub fn dispatch(&mut self, action: impl Into<Action>) {
        let action = action.into();
        if !matches!(action, Action::Tick) {
            tracing::trace!(?action, "dispatch");
        }
        self.state.reduce(&action);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use super::generate_wallet::GeneratedWallet;

    #[test]
    fn test_default_state_is_empty() {
        let store = Store::new();
        let state = store.state();
        assert!(state.requests.status(HISTORY_REQUEST).is_idle());
        assert!(state.generate_wallet.wallet.is_none());
        assert!(!state.claim.claim_requested);
        assert!(state.notifications.is_empty());
        assert!(state.modal.current().is_none());
    }

    #[test]
    fn test_action_only_changes_its_own_slice() {
        let mut store = Store::new();
        let before = store.state().clone();

        store.dispatch(ClaimAction::DisableClaimButton(true));

        let after = store.state();
        assert!(after.claim.disable_claim_button);
        assert_eq!(after.requests, before.requests);
        assert_eq!(after.generate_wallet, before.generate_wallet);
        assert_eq!(after.notifications, before.notifications);
        assert_eq!(after.modal, before.modal);
    }

    #[test]
    fn test_each_slice_receives_its_namespace() {
        let mut store = Store::new();

        store.dispatch(RequestAction::Started(HISTORY_REQUEST.to_string()));
        store.dispatch(GenerateWalletAction::NewWallet(GeneratedWallet {
            address: "AWALLET".to_string(),
            encrypted_key: "6PYKEY".to_string(),
        }));
        store.dispatch(NotificationAction::info("hello"));
        store.dispatch(ModalAction::Show(Modal::ConfirmQuit));

        let state = store.state();
        assert!(state.requests.status(HISTORY_REQUEST).is_loading());
        assert_eq!(
            state.generate_wallet.wallet.as_ref().map(|w| w.address.as_str()),
            Some("AWALLET")
        );
        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.modal.current(), Some(&Modal::ConfirmQuit));
    }

    #[test]
    fn test_tick_reaches_notifications() {
        let mut store = Store::new();
        store.dispatch(NotificationAction::Show {
            level: NotificationLevel::Info,
            message: "short".to_string(),
            dismissible: true,
            ticks: 1,
        });
        store.dispatch(Action::Tick);
        assert!(store.state().notifications.is_empty());
    }
}
