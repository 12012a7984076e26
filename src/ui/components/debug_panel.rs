use eframe::egui;

use crate::ui::state::AppState;

pub fn render(ui: &mut egui::Ui, state: &AppState) {
    ui.heading("Activity");
    ui.separator();

    let (mine, contact) = state.message_counts();
    ui.horizontal(|ui| {
        ui.label("Messages sent:");
        ui.label(format!("{mine}"));
    });
    ui.horizontal(|ui| {
        ui.label("Replies received:");
        ui.label(format!("{contact}"));
    });
    ui.horizontal(|ui| {
        ui.label("Contact:");
        if state.session.is_composing() {
            ui.colored_label(egui::Color32::YELLOW, "composing");
        } else if state.session.has_pending_replies() {
            ui.label("reply pending");
        } else {
            ui.label("idle");
        }
    });

    ui.separator();

    ui.label("Recent Events:");
    egui::ScrollArea::vertical()
        .max_height(400.0)
        .show(ui, |ui| {
            for event in state.activity.iter().rev().take(20) {
                let time_str = event
                    .timestamp
                    .with_timezone(&chrono::Local)
                    .format("%H:%M:%S");
                let color = match event.event_type.as_str() {
                    "MESSAGE_SENT" => egui::Color32::GREEN,
                    "COMPOSING_STARTED" => egui::Color32::YELLOW,
                    "REPLY_RECEIVED" => egui::Color32::LIGHT_BLUE,
                    _ => egui::Color32::WHITE,
                };

                ui.horizontal(|ui| {
                    ui.colored_label(color, format!("[{}]", time_str));
                    ui.label(&event.message);
                });
            }
        });
}
