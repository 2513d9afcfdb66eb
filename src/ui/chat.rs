// Chat panel view
// Transcript, auto-growing input and send button

use eframe::egui;

use crate::state::chat::{input_rows, ChatState};
use crate::ui::components::{card_heading, chat_bubble};

const INPUT_HINT: &str = "질문을 입력하세요...";

/// Render the chat panel on the right side of the window
pub fn render_chat_panel(ctx: &egui::Context, chat: &mut ChatState) {
    egui::SidePanel::right("chat_panel")
        .resizable(true)
        .default_width(320.0)
        .min_width(240.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            card_heading(ui, "Assistant", "ESG AI 챗봇");
            ui.add_space(4.0);
            ui.separator();

            // Input row is laid out first so the transcript takes the rest
            egui::TopBottomPanel::bottom("chat_input")
                .show_separator_line(false)
                .show_inside(ui, |ui| {
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        let send_width = 56.0;
                        let rows = input_rows(&chat.input);
                        ui.add(
                            egui::TextEdit::multiline(&mut chat.input)
                                .hint_text(INPUT_HINT)
                                .desired_rows(rows)
                                .desired_width(ui.available_width() - send_width),
                        );
                        let send = ui.add_enabled(chat.can_send(), egui::Button::new("Send"));
                        if send.clicked() {
                            chat.send_input();
                        }
                    });
                    ui.add_space(6.0);
                });

            egui::ScrollArea::vertical()
                .id_source("chat_messages_scroll")
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for message in chat.messages() {
                        chat_bubble(ui, message);
                        ui.add_space(4.0);
                    }
                });
        });
}
