//! Reusable widgets for the LazyNeo TUI.
//!
//! # Module Structure
//!
//! - [`helpers`]: Address truncation, column padding, and kind icons
//! - [`common`]: Small shared widgets (address display)
//! - [`txn_row`]: One history row and its display model
//! - [`list`]: The scrollable history list

pub mod common;
pub mod helpers;
pub mod list;
pub mod txn_row;

pub use list::{TransactionListState, TransactionListWidget};
pub use txn_row::{RowContext, TransactionRow};
