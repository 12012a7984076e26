use crate::ui::state::{AppState, Tab};
use eframe::egui;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Painéis");
    ui.separator();

    for tab in Tab::ALL {
        ui.selectable_value(&mut state.active_tab, tab, tab.label());
    }

    ui.separator();
    ui.label("Contato:");
    ui.horizontal(|ui| {
        // Contact is always shown online in the demo.
        ui.colored_label(egui::Color32::GREEN, "●");
        ui.label("SY · Sistema de Mensagens");
    });

    if state.session.is_composing() {
        ui.label(egui::RichText::new("digitando...").italics().weak());
    } else {
        ui.label(egui::RichText::new("Online • Latência: 45ms").weak());
    }
}
