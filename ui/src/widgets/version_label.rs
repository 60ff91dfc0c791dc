//! Build version indicator for the top bar.

use egui::{Align, Layout, RichText, Ui};

pub fn version_label(ui: &mut Ui) {
    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        ui.label(RichText::new(concat!("v", env!("CARGO_PKG_VERSION"))).weak());
    });
}
