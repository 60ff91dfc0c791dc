//! Pages module for the application.
//!
//! The app currently has a single page, the accounts administration table.

mod accounts_page;

pub use accounts_page::{accounts_page, poll_accounts_responses, poll_session_responses};
