use eframe::egui;

use crate::dashboard::infrastructure::{
    HEADLINES, RESOURCES, SCALABILITY, SECURITY_FEATURES, SERVICES, total_instances,
};

pub fn render(ui: &mut egui::Ui) {
    ui.horizontal_wrapped(|ui| {
        for headline in HEADLINES {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(180.0);
                ui.label(egui::RichText::new(headline.title).weak());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(headline.value).size(22.0).strong());
                    ui.colored_label(egui::Color32::GREEN, headline.change);
                });
            });
        }
    });

    ui.add_space(12.0);
    ui.heading("Utilização de Recursos");
    egui::Grid::new("resource_utilisation")
        .num_columns(2)
        .spacing([16.0, 8.0])
        .show(ui, |ui| {
            for resource in RESOURCES {
                ui.label(resource.name);
                ui.add(
                    egui::ProgressBar::new(resource.fraction())
                        .desired_width(240.0)
                        .text(format!("{}{}", resource.usage, resource.unit)),
                );
                ui.end_row();
            }
        });

    ui.add_space(12.0);
    ui.heading(format!("Status dos Serviços ({} instâncias)", total_instances()));
    egui::Grid::new("service_status")
        .num_columns(3)
        .striped(true)
        .spacing([16.0, 6.0])
        .show(ui, |ui| {
            for service in SERVICES {
                ui.strong(service.name);
                ui.label(format!("{} instâncias • {}", service.instances, service.region));
                ui.colored_label(egui::Color32::GREEN, service.status.label());
                ui.end_row();
            }
        });

    ui.add_space(12.0);
    ui.heading("Recursos de Segurança");
    ui.horizontal_wrapped(|ui| {
        for feature in SECURITY_FEATURES {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.colored_label(egui::Color32::GREEN, format!("✔ {feature}"));
            });
        }
    });

    ui.add_space(12.0);
    ui.heading("Configurações de Escalabilidade");
    ui.horizontal_wrapped(|ui| {
        for note in SCALABILITY {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(260.0);
                ui.strong(note.title);
                ui.label(note.body);
            });
        }
    });
}
