//! Remote calls for the accounts panel.
//!
//! Every call is fire-and-forget: the request runs in the background and the
//! callback publishes its outcome into egui temp memory, where the per-frame
//! poll functions pick it up. The result never drives anything beyond a
//! notification, so there is no in-flight bookkeeping: a second click while
//! a call is pending simply issues another call, and the last response to
//! land wins.

use egui::Id;
use gymdesk_business::{CurrentUser, ListAccountsResponse};

/// Success notice for a password reset ("reset successful").
pub const RESET_OK_NOTICE: &str = "Đặt lại thành công";
/// Success notice for active/role updates ("change successful").
pub const CHANGE_OK_NOTICE: &str = "Thay đổi thành công";

/// Fetch the account list: `GET {api}/accounts`.
pub fn fetch_accounts(api_base_url: &str, ctx: egui::Context) {
    let url = format!("{api_base_url}/accounts");
    let request = ehttp::Request::get(&url);

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        match result {
            Ok(response) => {
                if response.status == 200 {
                    match serde_json::from_slice::<ListAccountsResponse>(&response.bytes) {
                        Ok(list_response) => {
                            ctx.memory_mut(|mem| {
                                mem.data.insert_temp(
                                    Id::new("accounts_response"),
                                    list_response.accounts,
                                );
                            });
                        }
                        Err(err) => {
                            log::warn!("account list payload did not parse: {err}");
                            ctx.memory_mut(|mem| {
                                mem.data.insert_temp(
                                    Id::new("accounts_error"),
                                    format!("Failed to parse ListAccountsResponse: {err}"),
                                );
                            });
                        }
                    }
                } else {
                    ctx.memory_mut(|mem| {
                        mem.data.insert_temp(
                            Id::new("accounts_error"),
                            format!("API returned status: {}", response.status),
                        );
                    });
                }
            }
            Err(err) => {
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(Id::new("accounts_error"), err);
                });
            }
        }
    });
}

/// Fetch the logged-in administrator: `GET {api}/me`.
pub fn fetch_current_user(api_base_url: &str, ctx: egui::Context) {
    let url = format!("{api_base_url}/me");
    let request = ehttp::Request::get(&url);

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        match result {
            Ok(response) => {
                if response.status == 200 {
                    match serde_json::from_slice::<CurrentUser>(&response.bytes) {
                        Ok(user) => {
                            ctx.memory_mut(|mem| {
                                mem.data.insert_temp(Id::new("session_response"), user);
                            });
                        }
                        Err(err) => {
                            ctx.memory_mut(|mem| {
                                mem.data.insert_temp(
                                    Id::new("session_error"),
                                    format!("Failed to parse CurrentUser: {err}"),
                                );
                            });
                        }
                    }
                } else {
                    ctx.memory_mut(|mem| {
                        mem.data.insert_temp(
                            Id::new("session_error"),
                            format!("API returned status: {}", response.status),
                        );
                    });
                }
            }
            Err(err) => {
                ctx.memory_mut(|mem| {
                    mem.data.insert_temp(Id::new("session_error"), err);
                });
            }
        }
    });
}

/// Reset an account's password: `POST {api}/accounts/{id}/reset-password`.
///
/// `acting_user_id` identifies the administrator performing the reset, for
/// the backend's audit record. One-way and non-idempotent; the UI does not
/// debounce it.
pub fn reset_password(api_base_url: &str, account_id: i64, acting_user_id: i64, ctx: egui::Context) {
    let url = format!("{api_base_url}/accounts/{account_id}/reset-password");
    let body = serde_json::json!({ "performed_by": acting_user_id });
    let request = json_request("POST", url, &body);

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        publish_notice(&ctx, result, RESET_OK_NOTICE);
    });
}

/// Update an account's active state: `PUT {api}/accounts/{id}/active`.
pub fn set_active_state(api_base_url: &str, new_active: bool, account_id: i64, ctx: egui::Context) {
    let url = format!("{api_base_url}/accounts/{account_id}/active");
    let body = serde_json::json!({ "active": new_active });
    let request = json_request("PUT", url, &body);

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        publish_notice(&ctx, result, CHANGE_OK_NOTICE);
    });
}

/// Change an account's role: `PUT {api}/accounts/{id}/role`.
///
/// `role_id` comes from the closed role catalog ("1" or "2").
pub fn change_role(api_base_url: &str, role_id: &str, account_id: i64, ctx: egui::Context) {
    let url = format!("{api_base_url}/accounts/{account_id}/role");
    let body = serde_json::json!({ "role_id": role_id });
    let request = json_request("PUT", url, &body);

    ehttp::fetch(request, move |result| {
        ctx.request_repaint();
        publish_notice(&ctx, result, CHANGE_OK_NOTICE);
    });
}

fn json_request(method: &str, url: String, body: &serde_json::Value) -> ehttp::Request {
    let mut request = ehttp::Request::post(url, body.to_string().into_bytes());
    request.method = method.to_string();
    request.headers.insert("Content-Type", "application/json");
    request
}

/// Maps an action outcome to the notice shown to the administrator.
///
/// Success picks the fixed message; a rejected call surfaces its raw error
/// text. No cause is distinguished beyond that.
fn publish_notice(ctx: &egui::Context, result: ehttp::Result<ehttp::Response>, ok_notice: &str) {
    let notice = match result {
        Ok(response) if (200..300).contains(&response.status) => ok_notice.to_string(),
        Ok(response) => format!("API returned status: {}", response.status),
        Err(err) => err,
    };
    ctx.memory_mut(|mem| {
        mem.data.insert_temp(Id::new("account_notice"), notice);
    });
}
