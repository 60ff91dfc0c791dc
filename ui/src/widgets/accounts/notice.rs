//! Blocking notification modal for action outcomes.

use egui::{Context, Id, Modal};

/// Shows the pending notice, if any, and clears it once dismissed.
///
/// One modal per panel; if several remote calls resolve in the same frame
/// the last notice written wins, matching the callers' last-response-wins
/// contract.
pub fn show_notice_modal(notice: &mut Option<String>, ctx: &Context) {
    let Some(message) = notice.clone() else {
        return;
    };

    let modal = Modal::new(Id::new("account_notice_modal")).show(ctx, |ui| {
        ui.set_max_width(320.0);
        ui.label(message);
        ui.add_space(8.0);
        ui.vertical_centered(|ui| ui.button("OK").clicked()).inner
    });

    if modal.inner || modal.should_close() {
        *notice = None;
    }
}
