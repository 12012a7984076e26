use std::time::Duration;

use eframe::egui;

use super::components::{
    architecture_panel, chat_area, debug_panel, infrastructure_panel, input_bar,
    monitoring_panel, sidebar,
};
use super::state::{AppState, Tab};
use crate::simulator::ChatSession;

pub struct DashboardApp {
    state: AppState,
    title: String,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, session: ChatSession, title: String) -> Self {
        Self {
            state: AppState::new(session),
            title,
        }
    }

    fn render_chat(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.heading("Sistema de Mensagens");
            ui.label(egui::RichText::new("Online • Latência: 45ms").weak());
            ui.separator();

            let input_height = 40.0;
            let area_height = (ui.available_height() - input_height).max(100.0);
            ui.allocate_ui(egui::vec2(ui.available_width(), area_height), |ui| {
                chat_area::render(ui, &self.state.session.view());
            });

            ui.separator();
            if let Some(content) = input_bar::render(ui, &mut self.state.input_text) {
                self.state.submit(content);
            }
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.pump_session();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(&self.title);
                ui.label(
                    egui::RichText::new("Infraestrutura Escalável para Comunicação em Tempo Real")
                        .weak(),
                );
            });
            ui.add_space(4.0);
        });

        egui::SidePanel::left("navigation")
            .resizable(true)
            .default_width(200.0)
            .show(ctx, |ui| {
                sidebar::render(ui, &mut self.state);
            });

        egui::SidePanel::right("debug_panel")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                debug_panel::render(ui, &self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.state.active_tab {
            Tab::Chat => self.render_chat(ui),
            Tab::Architecture => {
                egui::ScrollArea::vertical().show(ui, architecture_panel::render);
            }
            Tab::Infrastructure => {
                egui::ScrollArea::vertical().show(ui, infrastructure_panel::render);
            }
            Tab::Monitoring => {
                egui::ScrollArea::vertical().show(ui, monitoring_panel::render);
            }
        });

        // Pending replies need quick frames; otherwise only the clock ticks.
        let repaint_after = if self.state.session.has_pending_replies() {
            Duration::from_millis(100)
        } else {
            Duration::from_secs(1)
        };
        ctx.request_repaint_after(repaint_after);
    }
}
