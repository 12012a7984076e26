use eframe::egui;

use crate::simulator::{Alignment, ChatView, MessageRow, Receipt};

const BUBBLE_MINE: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);
const BUBBLE_CONTACT: egui::Color32 = egui::Color32::from_rgb(245, 245, 245);
const TICK_GREY: egui::Color32 = egui::Color32::from_rgb(209, 213, 219);
const TICK_BLUE: egui::Color32 = egui::Color32::from_rgb(96, 165, 250);

pub fn render(ui: &mut egui::Ui, view: &ChatView) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for row in &view.rows {
                ui.push_id(&row.id, |ui| bubble(ui, row));
                ui.add_space(6.0);
            }

            if view.composing {
                typing_indicator(ui);
            }
        });
}

fn bubble(ui: &mut egui::Ui, row: &MessageRow) {
    let (layout, fill, text_color) = match row.alignment {
        Alignment::Right => (
            egui::Layout::right_to_left(egui::Align::TOP),
            BUBBLE_MINE,
            egui::Color32::WHITE,
        ),
        Alignment::Left => (
            egui::Layout::left_to_right(egui::Align::TOP),
            BUBBLE_CONTACT,
            egui::Color32::from_rgb(31, 41, 55),
        ),
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::new()
            .fill(fill)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(12, 6))
            .show(ui, |ui| {
                ui.set_max_width(360.0);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&row.text).color(text_color));
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(&row.time_label)
                                .small()
                                .color(text_color.gamma_multiply(0.7)),
                        );
                        if let Some(receipt) = row.receipt {
                            let color = match receipt {
                                Receipt::Read => TICK_BLUE,
                                Receipt::Sent | Receipt::Delivered => TICK_GREY,
                            };
                            ui.label(egui::RichText::new(receipt.ticks()).small().color(color));
                        }
                    });
                });
            });
    });
}

fn typing_indicator(ui: &mut egui::Ui) {
    let time = ui.input(|i| i.time);
    // Three dots, one lit at a time.
    let lit = ((time * 3.0) as usize) % 3;
    let dots: String = (0..3).map(|i| if i == lit { '●' } else { '○' }).collect();

    ui.with_layout(egui::Layout::left_to_right(egui::Align::TOP), |ui| {
        egui::Frame::new()
            .fill(BUBBLE_CONTACT)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(12, 6))
            .show(ui, |ui| {
                ui.label(egui::RichText::new(dots).color(egui::Color32::GRAY));
            });
    });
    ui.ctx().request_repaint();
}
