//! Accounts administration page.
//!
//! Owns the account list and the session user, fetches both from the remote
//! API and hands them to the accounts panel as explicit inputs.

use chrono::Utc;
use egui::{Color32, Id, Response, Ui};
use gymdesk_business::{Account, CurrentUser};

use crate::state::{AccountListState, SessionState, State};
use crate::widgets::accounts::{accounts_panel, api};

/// Renders the accounts page: toolbar, fetch status and the table panel.
pub fn accounts_page(state: &mut State, ui: &mut Ui) -> Response {
    let api_base_url = state.config.api_url().to_string();

    poll_session_responses(&mut state.session, ui.ctx());
    poll_accounts_responses(&mut state.accounts, ui.ctx());

    if state.session.should_fetch() {
        state.session.set_fetching();
        api::fetch_current_user(&api_base_url, ui.ctx().clone());
    }
    if state.accounts.should_fetch() {
        state.accounts.set_fetching();
        api::fetch_accounts(&api_base_url, ui.ctx().clone());
    }

    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            if ui.button("🔄 Refresh").clicked() && !state.accounts.is_fetching {
                state.accounts.set_fetching();
                api::fetch_accounts(&api_base_url, ui.ctx().clone());
            }
            if state.accounts.is_fetching || state.session.is_fetching {
                ui.spinner();
                ui.label("Loading...");
            }
        });

        if let Some(error) = &state.accounts.error {
            ui.colored_label(Color32::RED, format!("Error: {error}"));
        }
        if let Some(error) = &state.session.error {
            ui.colored_label(Color32::RED, format!("Error: {error}"));
        }

        ui.add_space(8.0);

        // The panel only renders once the acting administrator is known; a
        // password reset needs that identity for its audit record.
        if let Some(user) = state.session.current_user.clone() {
            accounts_panel(
                &mut state.table,
                &state.accounts.items,
                state.accounts.revision,
                &user,
                &api_base_url,
                ui,
            );
        }
    })
    .response
}

/// Moves fetched account lists (or fetch errors) into the page state.
pub fn poll_accounts_responses(accounts: &mut AccountListState, ctx: &egui::Context) {
    if let Some(items) =
        ctx.memory(|mem| mem.data.get_temp::<Vec<Account>>(Id::new("accounts_response")))
    {
        log::info!("installed {} accounts from the API", items.len());
        accounts.update_accounts(items, Utc::now());
        ctx.memory_mut(|mem| {
            mem.data.remove::<Vec<Account>>(Id::new("accounts_response"));
        });
    }

    if let Some(error) = ctx.memory(|mem| mem.data.get_temp::<String>(Id::new("accounts_error"))) {
        log::warn!("account list fetch failed: {error}");
        accounts.set_error(error);
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(Id::new("accounts_error"));
        });
    }
}

/// Moves the fetched session user (or fetch error) into the page state.
pub fn poll_session_responses(session: &mut SessionState, ctx: &egui::Context) {
    if let Some(user) =
        ctx.memory(|mem| mem.data.get_temp::<CurrentUser>(Id::new("session_response")))
    {
        session.update_user(user);
        ctx.memory_mut(|mem| {
            mem.data.remove::<CurrentUser>(Id::new("session_response"));
        });
    }

    if let Some(error) = ctx.memory(|mem| mem.data.get_temp::<String>(Id::new("session_error"))) {
        log::warn!("session fetch failed: {error}");
        session.set_error(error);
        ctx.memory_mut(|mem| {
            mem.data.remove::<String>(Id::new("session_error"));
        });
    }
}
