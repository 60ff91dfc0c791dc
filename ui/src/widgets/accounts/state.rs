//! View state for the accounts table.

use gymdesk_business::{Account, RowRecord, project};

/// Rows shown per page, pagination at the bottom of the table.
pub const PAGE_SIZE: usize = 10;

/// User-driven view actions, all funneled through [`AccountTableState::dispatch`].
///
/// Row actions (reset, active toggle, role change) are remote mutations and
/// go through the API handlers instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// Replace the search text. Dispatched on every keystroke.
    Search(String),
    /// Jump to a 0-based page.
    SetPage(usize),
}

/// The renderable state of the accounts table.
///
/// `data` is always a projection of the latest upstream account list;
/// [`AccountTableState::sync_accounts`] replaces it synchronously whenever
/// the list revision changes. Only reconciliation and the reducer mutate
/// this state (single writer).
#[derive(Default)]
pub struct AccountTableState {
    pub(crate) search_text: String,
    pub(crate) data: Vec<RowRecord>,
    pub(crate) loading: bool,
    pub(crate) page_index: usize,
    pub(crate) source_revision: Option<u64>,
    /// Pending notification, shown as a blocking modal until dismissed.
    pub(crate) notice: Option<String>,
}

impl AccountTableState {
    /// Reconciles `data` against the upstream account list.
    ///
    /// A revision the table has not seen yet replaces the rows with a fresh
    /// projection in the same call; stale rows are never left visible.
    pub fn sync_accounts(&mut self, accounts: &[Account], revision: u64) {
        if self.source_revision == Some(revision) {
            return;
        }
        self.data = project(accounts);
        self.source_revision = Some(revision);
        // Raised on every reconciliation; nothing ever clears it (see
        // DESIGN.md).
        self.loading = true;
    }

    /// The single reducer for view actions.
    pub fn dispatch(&mut self, action: TableAction) {
        match action {
            TableAction::Search(text) => self.search_text = text,
            TableAction::SetPage(page) => self.page_index = page,
        }
    }

    /// Rows matching the current search text, in list order.
    ///
    /// The filter is a case-insensitive full-text match across every visible
    /// column.
    pub fn filtered_rows(&self) -> Vec<&RowRecord> {
        if self.search_text.is_empty() {
            return self.data.iter().collect();
        }
        let needle = self.search_text.to_lowercase();
        self.data
            .iter()
            .filter(|row| {
                [
                    row.order.as_str(),
                    row.username.as_str(),
                    row.id_code.as_str(),
                    row.name.as_str(),
                    row.birth_date.as_str(),
                    row.role.as_str(),
                ]
                .iter()
                .any(|cell| cell.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn page_count(&self) -> usize {
        self.filtered_rows().len().div_ceil(PAGE_SIZE).max(1)
    }

    /// The page actually rendered; an out-of-range index clamps to the last
    /// page rather than showing an empty one.
    pub fn current_page(&self) -> usize {
        self.page_index.min(self.page_count() - 1)
    }

    /// The rows of the current page, after search filtering.
    pub fn visible_rows(&self) -> Vec<RowRecord> {
        let filtered = self.filtered_rows();
        filtered
            .iter()
            .skip(self.current_page() * PAGE_SIZE)
            .take(PAGE_SIZE)
            .map(|row| (*row).clone())
            .collect()
    }

    /// Flips the displayed active state of one row.
    ///
    /// Called before the remote status update resolves; a failed update does
    /// not flip it back (see DESIGN.md).
    pub fn set_row_active(&mut self, account_id: i64, active: bool) {
        if let Some(row) = self.data.iter_mut().find(|row| row.id == account_id) {
            row.active = active;
        }
    }

    pub fn rows(&self) -> &[RowRecord] {
        &self.data
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: i64, username: &str, active: bool) -> Account {
        Account {
            id,
            username: username.to_string(),
            id_code: format!("0251{id:05}"),
            first_name: Some("Anh".to_string()),
            last_name: Some("Trần".to_string()),
            birth_date: "1990-01-01".to_string(),
            role_name: "Staff".to_string(),
            role: "staff".to_string(),
            active,
        }
    }

    fn accounts(count: usize) -> Vec<Account> {
        (1..=count as i64)
            .map(|id| account(id, &format!("user{id:02}"), false))
            .collect()
    }

    #[test]
    fn test_new_revision_replaces_rows_synchronously() {
        let mut state = AccountTableState::default();

        state.sync_accounts(&accounts(3), 1);
        assert_eq!(state.rows().len(), 3);

        // Same contents, new revision: rows are reprojected in place.
        let mut next = accounts(2);
        next[0].username = "renamed".to_string();
        state.sync_accounts(&next, 2);

        assert_eq!(state.rows().len(), 2);
        assert_eq!(state.rows()[0].username, "renamed");
        assert_eq!(state.rows()[0].order, "1");
    }

    #[test]
    fn test_same_revision_keeps_local_row_state() {
        let mut state = AccountTableState::default();
        let list = accounts(2);

        state.sync_accounts(&list, 1);
        state.set_row_active(1, true);

        // No new revision: the optimistic flip survives further syncs.
        state.sync_accounts(&list, 1);
        assert!(state.rows()[0].active);

        // A new revision re-derives the row from the source list.
        state.sync_accounts(&list, 2);
        assert!(!state.rows()[0].active);
    }

    #[test]
    fn test_reconciliation_raises_loading_flag_and_nothing_clears_it() {
        let mut state = AccountTableState::default();
        assert!(!state.loading());

        state.sync_accounts(&accounts(1), 1);
        assert!(state.loading());

        state.dispatch(TableAction::Search("user".to_string()));
        state.dispatch(TableAction::SetPage(0));
        assert!(state.loading());
    }

    #[test]
    fn test_search_dispatch_applies_immediately() {
        let mut state = AccountTableState::default();
        state.sync_accounts(&accounts(3), 1);

        // One dispatch per keystroke, each applied synchronously.
        for text in ["u", "us", "user02"] {
            state.dispatch(TableAction::Search(text.to_string()));
            assert_eq!(state.search_text(), text);
        }
        assert_eq!(state.filtered_rows().len(), 1);
        assert_eq!(state.filtered_rows()[0].username, "user02");
    }

    #[test]
    fn test_search_matches_across_columns_case_insensitively() {
        let mut state = AccountTableState::default();
        state.sync_accounts(&accounts(3), 1);

        state.dispatch(TableAction::Search("TRẦN".to_string()));
        assert_eq!(state.filtered_rows().len(), 3);

        state.dispatch(TableAction::Search("025100002".to_string()));
        assert_eq!(state.filtered_rows().len(), 1);

        state.dispatch(TableAction::Search("no such".to_string()));
        assert!(state.filtered_rows().is_empty());
    }

    #[test]
    fn test_pagination_slices_pages_of_ten() {
        let mut state = AccountTableState::default();
        state.sync_accounts(&accounts(15), 1);

        assert_eq!(state.page_count(), 2);
        assert_eq!(state.visible_rows().len(), 10);
        assert_eq!(state.visible_rows()[0].username, "user01");

        state.dispatch(TableAction::SetPage(1));
        let page = state.visible_rows();
        assert_eq!(page.len(), 5);
        assert_eq!(page[0].username, "user11");
    }

    #[test]
    fn test_out_of_range_page_clamps_to_last() {
        let mut state = AccountTableState::default();
        state.sync_accounts(&accounts(15), 1);

        state.dispatch(TableAction::SetPage(7));
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.visible_rows().len(), 5);

        // Narrowing the filter shrinks the page count and the clamp follows.
        state.dispatch(TableAction::Search("user03".to_string()));
        assert_eq!(state.page_count(), 1);
        assert_eq!(state.visible_rows().len(), 1);
    }

    #[test]
    fn test_set_row_active_targets_by_id() {
        let mut state = AccountTableState::default();
        state.sync_accounts(&accounts(3), 1);

        state.set_row_active(2, true);
        assert!(!state.rows()[0].active);
        assert!(state.rows()[1].active);

        // Unknown ids are ignored.
        state.set_row_active(42, true);
    }

    #[test]
    fn test_empty_list_has_one_empty_page() {
        let state = AccountTableState::default();
        assert_eq!(state.page_count(), 1);
        assert!(state.visible_rows().is_empty());
    }
}
