//! Cell rendering functions for the accounts table.
//!
//! Each function renders one kind of cell content with centered alignment.
//! Interactive cells report clicks back to the row so the panel can issue
//! the matching remote call.

use egui::{RichText, Ui};
use gymdesk_business::{RoleOption, RowRecord, display_birth_date, role_option_for, role_options};

/// Renders the 1-based display order.
#[inline]
pub fn render_order_cell(ui: &mut Ui, order: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(RichText::new(order).monospace());
    });
}

/// Renders a plain text cell.
#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(text);
    });
}

/// Renders the birth date, `dd/mm/yyyy` when it parses as an ISO date.
#[inline]
pub fn render_birth_date_cell(ui: &mut Ui, raw: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(display_birth_date(raw));
    });
}

/// Renders the password-reset button.
///
/// Returns `true` if the button was clicked.
#[inline]
pub fn render_reset_button(ui: &mut Ui) -> bool {
    ui.centered_and_justified(|ui| ui.button("🔄").on_hover_text("Reset password").clicked())
        .inner
}

/// Renders the active toggle button, highlighted while the account is active.
///
/// Returns `true` if the button was clicked.
#[inline]
pub fn render_active_button(ui: &mut Ui, active: bool) -> bool {
    let label = if active { "đang hđ" } else { "không hđ" };
    ui.centered_and_justified(|ui| ui.selectable_label(active, label).clicked())
        .inner
}

/// Renders the role dropdown over the closed role set.
///
/// Returns the picked option, if any. The displayed selection stays derived
/// from the row; it only changes once the upstream account list refreshes.
#[inline]
pub fn render_role_select(ui: &mut Ui, record: &RowRecord) -> Option<&'static RoleOption> {
    let current = role_option_for(&record.role);
    let mut picked = None;

    egui::ComboBox::from_id_salt(("account_role", record.id))
        .selected_text(record.role.clone())
        .show_ui(ui, |ui| {
            for option in role_options() {
                let is_current = current.is_some_and(|c| c.value == option.value);
                if ui.selectable_label(is_current, option.text).clicked() && !is_current {
                    picked = Some(option);
                }
            }
        });

    picked
}
