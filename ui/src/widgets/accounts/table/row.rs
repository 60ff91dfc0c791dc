//! Row rendering for the accounts table.

use egui_extras::TableRow;
use gymdesk_business::RowRecord;

use super::cells::{
    render_active_button, render_birth_date_cell, render_order_cell, render_reset_button,
    render_role_select, render_text_cell,
};
use super::columns::{COLUMNS, ColumnKey};

/// A remote mutation requested from a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    /// Reset the account's password.
    ResetPassword { account_id: i64 },
    /// Flip the account's active state to `new_active`.
    ToggleActive { account_id: i64, new_active: bool },
    /// Assign a role from the closed role set.
    ChangeRole {
        account_id: i64,
        role_id: &'static str,
    },
}

/// Renders one account row, one cell per catalog column.
///
/// Returns the action to perform if an interactive cell was clicked.
#[inline]
pub fn render_account_row(row: &mut TableRow<'_, '_>, record: &RowRecord) -> Option<RowAction> {
    let mut action = None;

    for spec in &COLUMNS {
        row.col(|ui| match spec.key {
            ColumnKey::Order => render_order_cell(ui, &record.order),
            ColumnKey::Username => render_text_cell(ui, &record.username),
            ColumnKey::IdCode => render_text_cell(ui, &record.id_code),
            ColumnKey::Name => render_text_cell(ui, &record.name),
            ColumnKey::BirthDate => render_birth_date_cell(ui, &record.birth_date),
            ColumnKey::Role => {
                if let Some(option) = render_role_select(ui, record) {
                    action = Some(RowAction::ChangeRole {
                        account_id: record.id,
                        role_id: option.value,
                    });
                }
            }
            ColumnKey::Reset => {
                if render_reset_button(ui) {
                    action = Some(RowAction::ResetPassword {
                        account_id: record.id,
                    });
                }
            }
            ColumnKey::Active => {
                if render_active_button(ui, record.active) {
                    action = Some(RowAction::ToggleActive {
                        account_id: record.id,
                        new_active: !record.active,
                    });
                }
            }
        });
    }

    action
}
