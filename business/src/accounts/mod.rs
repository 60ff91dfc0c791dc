//! Account domain types and the table-row projection.

mod model;
mod projector;

pub use model::{
    Account, CurrentUser, ListAccountsResponse, ROLE_ADMIN, ROLE_STAFF, RoleOption,
    role_option_for, role_options,
};
pub use projector::{RowRecord, display_birth_date, project};
