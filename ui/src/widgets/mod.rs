pub mod accounts;
mod version_label;

pub use accounts::{AccountTableState, accounts_panel};
pub use version_label::version_label;
