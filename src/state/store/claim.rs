//! GAS claim flow state.

use super::{Action, Reducer};

#[allow(dead_code)] // No screen dispatches claim actions yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimAction {
    /// A claim was requested (or the request finished).
    SetClaimRequest(bool),
    /// Greys out the claim button while a claim is in flight.
    DisableClaimButton(bool),
}

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClaimState {
    pub claim_requested: bool,
    pub disable_claim_button: bool,
}

impl Reducer for ClaimState {
    fn reduce(&mut self, action: &Action) {
        let Action::Claim(action) = action else {
            return;
        };

        match *action {
            ClaimAction::SetClaimRequest(requested) => self.claim_requested = requested,
            ClaimAction::DisableClaimButton(disabled) => self.disable_claim_button = disabled,
        }
    }
}
