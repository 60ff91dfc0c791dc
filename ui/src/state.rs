use chrono::{DateTime, Utc};
use gymdesk_business::{Account, BusinessConfig, CurrentUser};

use crate::widgets::accounts::AccountTableState;

/// The main application state.
#[derive(Default)]
pub struct State {
    /// Remote API configuration.
    pub config: BusinessConfig,
    /// The logged-in administrator, fetched once from `/api/me`.
    pub session: SessionState,
    /// The account list as last supplied by the backend.
    pub accounts: AccountListState,
    /// View state of the accounts table.
    pub table: AccountTableState,
}

impl State {
    pub fn test(base_url: String) -> Self {
        Self {
            config: BusinessConfig::new(base_url),
            ..Default::default()
        }
    }
}

/// Session state: who is performing admin actions.
#[derive(Default)]
pub struct SessionState {
    pub(crate) current_user: Option<CurrentUser>,
    pub(crate) is_fetching: bool,
    pub(crate) error: Option<String>,
}

impl SessionState {
    /// True until the user has been fetched (or the fetch failed).
    pub fn should_fetch(&self) -> bool {
        self.current_user.is_none() && !self.is_fetching && self.error.is_none()
    }

    pub fn set_fetching(&mut self) {
        self.is_fetching = true;
        self.error = None;
    }

    pub fn update_user(&mut self, user: CurrentUser) {
        self.current_user = Some(user);
        self.is_fetching = false;
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.is_fetching = false;
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.current_user.as_ref()
    }
}

/// The upstream account list.
///
/// Every successful install bumps `revision`; the table reconciles its rows
/// whenever it sees a revision it has not projected yet.
#[derive(Default)]
pub struct AccountListState {
    pub(crate) items: Vec<Account>,
    pub(crate) revision: u64,
    pub(crate) is_fetching: bool,
    pub(crate) error: Option<String>,
    /// Last fetch timestamp (using DateTime<Utc> for WASM compatibility and test mockability).
    pub(crate) last_fetch: Option<DateTime<Utc>>,
}

impl AccountListState {
    /// True until an initial list has been fetched (or the fetch failed).
    pub fn should_fetch(&self) -> bool {
        self.last_fetch.is_none() && !self.is_fetching && self.error.is_none()
    }

    pub fn set_fetching(&mut self) {
        self.is_fetching = true;
        self.error = None;
    }

    /// Installs a freshly fetched list.
    ///
    /// Takes `now` as a parameter to allow test mockability.
    pub fn update_accounts(&mut self, items: Vec<Account>, now: DateTime<Utc>) {
        self.items = items;
        self.revision += 1;
        self.is_fetching = false;
        self.error = None;
        self.last_fetch = Some(now);
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.is_fetching = false;
    }

    pub fn items(&self) -> &[Account] {
        &self.items
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_fetch(&self) -> Option<DateTime<Utc>> {
        self.last_fetch
    }
}
