// Sidebar view
// Guide card and the file drop area

use eframe::egui;

use crate::state::AppState;
use crate::ui::components::{card, card_heading};

/// Name shown for a dropped file
fn dropped_file_name(file: &egui::DroppedFile) -> String {
    match &file.path {
        Some(path) => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
        None => file.name.clone(),
    }
}

/// Record files dropped on the window this frame
/// Runs every frame, whether or not the sidebar is shown
pub fn collect_dropped_files(ctx: &egui::Context, state: &mut AppState) {
    let dropped: Vec<String> =
        ctx.input(|i| i.raw.dropped_files.iter().map(dropped_file_name).collect());
    if !dropped.is_empty() {
        state.sidebar.accept_files(dropped);
    }
}

/// Render the left sidebar
pub fn render_sidebar(ctx: &egui::Context, state: &mut AppState) {
    let hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());

    egui::SidePanel::left("sidebar")
        .resizable(true)
        .default_width(260.0)
        .min_width(200.0)
        .show(ctx, |ui| {
            ui.add_space(8.0);

            card(ui, |ui| {
                card_heading(ui, "Guide", "ESG 챗봇 기록");
                ui.add_space(8.0);
                if ui.button("✅ ESG 웹 사용 가이드 (기본 대화)").clicked() {
                    state.show_guide();
                }
            });

            ui.add_space(12.0);

            card(ui, |ui| {
                card_heading(ui, "Upload", "파일 업로드");
                ui.add_space(8.0);

                let mut frame = egui::Frame::none()
                    .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.inactive.bg_stroke.color))
                    .inner_margin(egui::Margin::same(16.0));
                frame.rounding = egui::Rounding::same(6.0);
                if hovering {
                    frame.fill = ui.visuals().selection.bg_fill;
                }
                frame.show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new("파일을 드래그하여 업로드").weak());
                    });
                });

                if !state.sidebar.uploaded_files.is_empty() {
                    ui.add_space(8.0);
                    for name in &state.sidebar.uploaded_files {
                        ui.label(egui::RichText::new(name).small().monospace());
                    }
                }
            });
        });
}
