//! Domain layer for the GymDesk admin frontend.
//!
//! Holds the account wire types, the account-to-row projection used by the
//! accounts table, the role catalog, and business configuration. This crate
//! performs no IO; network calls and rendering live in `gymdesk-ui`.

pub mod accounts;
mod config;

pub use accounts::{
    Account, CurrentUser, ListAccountsResponse, ROLE_ADMIN, ROLE_STAFF, RoleOption, RowRecord,
    display_birth_date, project, role_option_for, role_options,
};
pub use config::BusinessConfig;
