//! Table header rendering for the accounts table.

use egui::{Color32, RichText, Ui};
use egui_extras::TableRow;

use super::columns::COLUMNS;

/// Dark header fill behind white header labels.
const HEADER_BG_COLOR: Color32 = Color32::from_rgb(52, 58, 64);

/// Renders the table header with centered, bold labels on a dark fill.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>) {
    for spec in &COLUMNS {
        header.col(|ui| {
            render_header_cell(ui, spec.title);
        });
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    let rect = ui.available_rect_before_wrap();
    ui.painter().rect_filled(rect, 0.0, HEADER_BG_COLOR);

    ui.centered_and_justified(|ui| {
        ui.label(RichText::new(label).strong().color(Color32::WHITE));
    });
}
