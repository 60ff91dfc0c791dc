//! Account administration widgets.
//!
//! - `state`: table view state and its reducer
//! - `table`: column catalog and cell/row/header rendering
//! - `api`: fire-and-forget remote calls
//! - `notice`: the blocking notification modal
//! - `panel`: the composed panel

pub mod api;
mod notice;
mod panel;
mod state;
mod table;

pub use panel::{accounts_panel, poll_action_notices};
pub use state::{AccountTableState, PAGE_SIZE, TableAction};
