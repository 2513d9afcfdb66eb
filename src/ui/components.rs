// Reusable UI components
// Cards, buttons, chat bubbles and the markdown view

use eframe::egui;

use crate::markdown::{Block, Span};
use crate::state::chat::{ChatMessage, Sender};

const ACCENT: egui::Color32 = egui::Color32::from_rgb(124, 108, 220);

/// Card with a small subtitle above a heading, as used in the sidebar and chat header
pub fn card_heading(ui: &mut egui::Ui, subtitle: &str, title: &str) {
    ui.label(egui::RichText::new(subtitle).small().weak());
    ui.label(egui::RichText::new(title).heading().size(16.0));
}

/// Render a framed card
pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    let mut frame = egui::Frame::group(ui.style());
    frame.rounding = egui::Rounding::same(8.0);
    frame.inner_margin = egui::Margin::same(12.0);
    frame
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

/// Agent tab header; returns the click response
pub fn agent_tab(ui: &mut egui::Ui, label: &str, selected: bool) -> egui::Response {
    let text = if selected {
        egui::RichText::new(label).strong().color(ACCENT)
    } else {
        egui::RichText::new(label).weak()
    };
    ui.selectable_label(selected, text)
}

/// Run button, disabled while a run is in flight
pub fn run_button(ui: &mut egui::Ui, running: bool) -> egui::Response {
    let label = if running { "Running..." } else { "Run Agent" };
    ui.add_enabled(
        !running,
        egui::Button::new(egui::RichText::new(label).strong()).stroke(egui::Stroke::new(1.0, ACCENT)),
    )
}

/// One chat bubble, user messages right aligned
pub fn chat_bubble(ui: &mut egui::Ui, message: &ChatMessage) {
    let (layout, fill) = match message.sender {
        Sender::User => (
            egui::Layout::right_to_left(egui::Align::TOP),
            ui.visuals().selection.bg_fill,
        ),
        Sender::Bot => (
            egui::Layout::left_to_right(egui::Align::TOP),
            ui.visuals().faint_bg_color,
        ),
    };

    ui.with_layout(layout, |ui| {
        let mut frame = egui::Frame::none().fill(fill);
        frame.rounding = egui::Rounding::same(10.0);
        frame.inner_margin = egui::Margin::symmetric(10.0, 6.0);
        frame.show(ui, |ui| {
            ui.set_max_width(ui.available_width() * 0.8);
            ui.label(&message.text);
        });
    });
}

fn span_text(span: &Span) -> egui::RichText {
    let mut text = egui::RichText::new(&span.text);
    if span.style.strong {
        text = text.strong();
    }
    if span.style.emphasis {
        text = text.italics();
    }
    if span.style.strikethrough {
        text = text.strikethrough();
    }
    if span.style.code {
        text = text.code();
    }
    text
}

fn render_spans(ui: &mut egui::Ui, spans: &[Span], size: Option<f32>) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for span in spans {
            let mut text = span_text(span);
            if let Some(size) = size {
                text = text.size(size);
            }
            match &span.link {
                Some(url) => {
                    ui.add(egui::Hyperlink::from_label_and_url(text, url).open_in_new_tab(true));
                }
                None => {
                    ui.label(text);
                }
            }
        }
    });
}

/// Render parsed markdown blocks
pub fn markdown_view(ui: &mut egui::Ui, blocks: &[Block]) {
    for block in blocks {
        match block {
            Block::Heading { level, spans } => {
                let size = match level {
                    1 => 24.0,
                    2 => 20.0,
                    3 => 17.0,
                    _ => 15.0,
                };
                ui.add_space(6.0);
                render_spans(ui, spans, Some(size));
                ui.add_space(2.0);
            }
            Block::Paragraph(spans) => {
                render_spans(ui, spans, None);
                ui.add_space(6.0);
            }
            Block::ListItem {
                depth,
                marker,
                spans,
            } => {
                ui.horizontal(|ui| {
                    ui.add_space(12.0 + *depth as f32 * 16.0);
                    ui.label(marker);
                    render_spans(ui, spans, None);
                });
            }
            Block::CodeBlock(code) => {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(code).monospace());
                });
                ui.add_space(6.0);
            }
            Block::Rule => {
                ui.separator();
            }
        }
    }
}
