//! Wallet generation flow state.

use super::{Action, Reducer};

/// Summary of a freshly generated account.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedWallet {
    pub address: String,
    /// NEP-2 encrypted private key.
    pub encrypted_key: String,
}

#[allow(dead_code)] // No screen dispatches wallet generation yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateWalletAction {
    NewWallet(GeneratedWallet),
    ResetKey,
}

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerateWalletState {
    pub wallet: Option<GeneratedWallet>,
}

impl Reducer for GenerateWalletState {
    fn reduce(&mut self, action: &Action) {
        match action {
            Action::GenerateWallet(GenerateWalletAction::NewWallet(wallet)) => {
                self.wallet = Some(wallet.clone());
            }
            Action::GenerateWallet(GenerateWalletAction::ResetKey) => {
                self.wallet = None;
            }
            _ => {}
        }
    }
}
