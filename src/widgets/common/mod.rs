//! Common reusable widgets shared by list rows and popups.

pub mod address;

pub use address::AddressDisplay;
