//! The accounts table panel.
//!
//! Composes the search box, the table, bottom pagination and the
//! notification modal. The caller supplies the account list, its revision
//! counter and the acting administrator explicitly; this panel holds no
//! global state.

use egui::{Id, Response, TextEdit, Ui};
use egui_extras::TableBuilder;
use gymdesk_business::{Account, CurrentUser};

use super::api;
use super::notice::show_notice_modal;
use super::state::{AccountTableState, TableAction};
use super::table::columns::{HEADER_HEIGHT, MAX_TABLE_HEIGHT, ROW_HEIGHT, table_columns};
use super::table::header::render_table_header;
use super::table::row::{RowAction, render_account_row};

/// Renders the accounts table for the given account list.
///
/// `revision` must change whenever `accounts` is a newly supplied list; the
/// panel reprojects its rows synchronously when it does. `user` is the
/// administrator recorded as the actor of password resets.
pub fn accounts_panel(
    state: &mut AccountTableState,
    accounts: &[Account],
    revision: u64,
    user: &CurrentUser,
    api_base_url: &str,
    ui: &mut Ui,
) -> Response {
    poll_action_notices(state, ui.ctx());
    state.sync_accounts(accounts, revision);

    let response = ui.vertical(|ui| {
        // Search box. Every keystroke goes through the reducer, no debounce.
        ui.horizontal(|ui| {
            let mut search_text = state.search_text().to_string();
            let search_response = ui.add(TextEdit::singleline(&mut search_text).hint_text("tìm kiếm"));
            if search_response.changed() {
                state.dispatch(TableAction::Search(search_text));
            }
            if state.loading() {
                ui.spinner();
            }
        });

        ui.add_space(8.0);

        let visible = state.visible_rows();
        let mut row_action: Option<RowAction> = None;

        let mut table = TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(MAX_TABLE_HEIGHT);
        for column in table_columns() {
            table = table.column(column);
        }
        table
            .header(HEADER_HEIGHT, |mut header| {
                render_table_header(&mut header);
            })
            .body(|mut body| {
                for record in &visible {
                    body.row(ROW_HEIGHT, |mut row| {
                        if let Some(action) = render_account_row(&mut row, record) {
                            row_action = Some(action);
                        }
                    });
                }
            });

        if visible.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No Data Found");
            });
        }

        // Bottom pagination, active page highlighted.
        let page_count = state.page_count();
        if page_count > 1 {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                for page in 0..page_count {
                    let selected = page == state.current_page();
                    if ui.selectable_label(selected, (page + 1).to_string()).clicked() {
                        state.dispatch(TableAction::SetPage(page));
                    }
                }
            });
        }

        if let Some(action) = row_action {
            apply_row_action(state, action, user, api_base_url, ui.ctx());
        }
    });

    show_notice_modal(&mut state.notice, ui.ctx());

    response.response
}

fn apply_row_action(
    state: &mut AccountTableState,
    action: RowAction,
    user: &CurrentUser,
    api_base_url: &str,
    ctx: &egui::Context,
) {
    match action {
        RowAction::ResetPassword { account_id } => {
            log::info!("password reset requested for account {account_id} by {}", user.id);
            api::reset_password(api_base_url, account_id, user.id, ctx.clone());
        }
        RowAction::ToggleActive {
            account_id,
            new_active,
        } => {
            // The display state flips before the remote call resolves and is
            // not flipped back on failure (see DESIGN.md).
            state.set_row_active(account_id, new_active);
            api::set_active_state(api_base_url, new_active, account_id, ctx.clone());
        }
        RowAction::ChangeRole {
            account_id,
            role_id,
        } => {
            api::change_role(api_base_url, role_id, account_id, ctx.clone());
        }
    }
}

/// Moves action outcomes from egui temp memory into the panel state.
/// Called at the top of every panel frame.
pub fn poll_action_notices(state: &mut AccountTableState, ctx: &egui::Context) {
    if let Some(notice) = ctx.memory(|mem| mem.data.get_temp::<String>(Id::new("account_notice"))) {
        state.notice = Some(notice);
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(Id::new("account_notice"));
        });
    }
}
