use crate::{pages, state::State, widgets};

/// The eframe application: a top bar plus the accounts page.
pub struct GymdeskApp {
    state: State,
}

impl GymdeskApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for GymdeskApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.heading("GymDesk");
                widgets::version_label(ui);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            pages::accounts_page(&mut self.state, ui);
        });
    }
}
