use chrono::{Local, Utc};
use eframe::egui;

use super::charts;
use crate::dashboard::monitoring::{
    ALERTS, AlertKind, ERRORS_BY_SERVICE, LATENCY_MS, MONITORING_STACK, SYSTEM_METRICS,
    Severity, THROUGHPUT, Trend,
};

pub fn render(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.heading("Dashboard de Monitoramento em Tempo Real");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.monospace(Local::now().format("%H:%M:%S").to_string());
            ui.label("🕑");
        });
    });
    ui.separator();

    ui.horizontal_wrapped(|ui| {
        for metric in SYSTEM_METRICS {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(180.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(metric.name).weak());
                    let (arrow, color) = match metric.trend {
                        Trend::Up => ("▲", egui::Color32::GREEN),
                        Trend::Down => ("▼", egui::Color32::RED),
                    };
                    ui.colored_label(color, format!("{arrow} {}", metric.change));
                });
                ui.label(egui::RichText::new(metric.value).size(22.0).strong());
            });
        }
    });

    ui.add_space(12.0);
    ui.columns(2, |columns| {
        columns[0].strong("Latência (ms)");
        charts::line_chart(
            &mut columns[0],
            "latency_chart",
            "latência",
            &LATENCY_MS,
            egui::Color32::from_rgb(59, 130, 246),
        );
        columns[1].strong("Throughput (Mensagens/s)");
        charts::area_chart(
            &mut columns[1],
            "throughput_chart",
            "mensagens",
            &THROUGHPUT,
            egui::Color32::from_rgb(16, 185, 129),
        );
    });

    ui.add_space(12.0);
    ui.strong("Erros por Serviço (Última Hora)");
    charts::bar_chart(
        ui,
        "errors_chart",
        "erros",
        &ERRORS_BY_SERVICE,
        egui::Color32::from_rgb(239, 68, 68),
    );

    ui.add_space(12.0);
    ui.heading("⚠ Alertas Recentes");
    let now = Utc::now();
    for alert in ALERTS {
        ui.horizontal(|ui| {
            let (icon, color) = match alert.kind {
                AlertKind::Warning => ("⚠", egui::Color32::YELLOW),
                AlertKind::Success => ("✔", egui::Color32::GREEN),
                AlertKind::Info => ("ℹ", egui::Color32::LIGHT_BLUE),
            };
            ui.colored_label(color, icon);
            ui.vertical(|ui| {
                ui.label(alert.message);
                ui.label(
                    egui::RichText::new(
                        alert
                            .raised_at(now)
                            .with_timezone(&Local)
                            .format("%H:%M:%S")
                            .to_string(),
                    )
                    .small()
                    .weak(),
                );
            });
            let severity_color = match alert.severity {
                Severity::Medium => egui::Color32::YELLOW,
                Severity::Low => egui::Color32::LIGHT_BLUE,
            };
            ui.colored_label(severity_color, alert.severity.label());
        });
    }

    ui.add_space(12.0);
    ui.heading("Stack de Monitoramento");
    ui.horizontal_wrapped(|ui| {
        for note in MONITORING_STACK {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(260.0);
                ui.strong(note.title);
                ui.label(note.body);
            });
        }
    });
}
