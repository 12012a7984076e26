use eframe::egui;

use crate::dashboard::architecture::{CHALLENGES, COMPONENTS, DATA_FLOW};
use crate::dashboard::Health;

const CHALLENGE_COLORS: [egui::Color32; 3] = [
    egui::Color32::from_rgb(153, 27, 27),
    egui::Color32::from_rgb(133, 77, 14),
    egui::Color32::from_rgb(22, 101, 52),
];

pub fn render(ui: &mut egui::Ui) {
    ui.heading("→ Fluxo de Dados da Arquitetura");
    ui.horizontal_wrapped(|ui| {
        for (index, step) in DATA_FLOW.iter().enumerate() {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(*step);
            });
            if index + 1 < DATA_FLOW.len() {
                ui.colored_label(egui::Color32::LIGHT_BLUE, "→");
            }
        }
    });

    ui.add_space(12.0);
    ui.heading("Componentes");
    egui::Grid::new("architecture_components")
        .num_columns(4)
        .spacing([12.0, 12.0])
        .show(ui, |ui| {
            for (index, component) in COMPONENTS.iter().enumerate() {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(200.0);
                    ui.horizontal(|ui| {
                        ui.strong(component.name);
                        let color = match component.status {
                            Health::Active | Health::Healthy => egui::Color32::GREEN,
                        };
                        ui.colored_label(color, component.status.label());
                    });
                    ui.label(egui::RichText::new(component.description).weak());
                    ui.monospace(component.metric);
                });
                if index % 4 == 3 {
                    ui.end_row();
                }
            }
        });

    ui.add_space(12.0);
    ui.heading("Principais Desafios e Soluções");
    ui.horizontal_wrapped(|ui| {
        for (note, color) in CHALLENGES.iter().zip(CHALLENGE_COLORS) {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(260.0);
                ui.colored_label(color, egui::RichText::new(note.title).strong());
                ui.label(format!("Solução: {}", note.body));
            });
        }
    });
}
