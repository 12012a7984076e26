use eframe::egui;

pub fn render(ui: &mut egui::Ui, input_text: &mut String) -> Option<String> {
    let mut send = false;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .hint_text("Digite uma mensagem...")
                .desired_width(ui.available_width() - 60.0),
        );
        if ui.button("Enviar").clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
            response.request_focus();
        }
    });

    if send && !input_text.trim().is_empty() {
        let message = input_text.clone();
        input_text.clear();
        return Some(message);
    }

    None
}
