//! The transaction history list.
//!
//! - [`TransactionListWidget`]: Stacks history rows with selection highlighting
//! - [`TransactionListState`]: Selection and scroll state

mod state;
mod txn_list;

pub use state::TransactionListState;
pub use txn_list::TransactionListWidget;
