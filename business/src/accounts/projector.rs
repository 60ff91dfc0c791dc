//! Projection of raw accounts into display rows for the accounts table.

use super::model::Account;

/// A display-oriented projection of one [`Account`].
///
/// Recomputed in full whenever the account list changes. `id` is the join
/// key back to the source account; `order` is the 1-based list position and
/// is not stable across reorders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRecord {
    pub order: String,
    pub username: String,
    pub id_code: String,
    pub name: String,
    pub birth_date: String,
    /// Role display name, not the role key.
    pub role: String,
    pub active: bool,
    pub id: i64,
}

/// Maps accounts to table rows, one per account, order-preserving.
///
/// Pure: no validation, no side effects. Malformed fields pass through
/// as-is; a missing name fragment becomes a blank piece.
pub fn project(accounts: &[Account]) -> Vec<RowRecord> {
    accounts
        .iter()
        .enumerate()
        .map(|(index, account)| RowRecord {
            order: (index + 1).to_string(),
            username: account.username.clone(),
            id_code: account.id_code.clone(),
            name: display_name(account),
            birth_date: account.birth_date.clone(),
            role: account.role_name.clone(),
            active: account.active,
            id: account.id,
        })
        .collect()
}

/// Formats an ISO `YYYY-MM-DD` birth date as `dd/mm/yyyy` (en-GB).
///
/// Anything that does not parse passes through untouched.
pub fn display_birth_date(raw: &str) -> String {
    match chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

// The double space between the fragments is intentional; the search filter
// matches against the name exactly as rendered.
fn display_name(account: &Account) -> String {
    format!(
        "{}  {}",
        account.first_name.as_deref().unwrap_or(""),
        account.last_name.as_deref().unwrap_or("")
    )
}
