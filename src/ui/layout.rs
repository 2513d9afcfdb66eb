// Main application layout
// Menu bar, sidebar, central workspace and chat panel

use eframe::egui;

use crate::runner::AgentRunner;
use crate::state::AppState;
use crate::ui::chat::render_chat_panel;
use crate::ui::sidebar::{collect_dropped_files, render_sidebar};
use crate::ui::workspace::{render_workspace, MarkdownCache};

/// Render the main application layout
/// Side panels must be added before the central panel claims the remaining space
pub fn render_app_layout(
    ctx: &egui::Context,
    state: &mut AppState,
    runner: &AgentRunner,
    cache: &mut MarkdownCache,
) {
    render_menu_bar(ctx);

    collect_dropped_files(ctx, state);
    if state.ui_state.sidebar_open {
        render_sidebar(ctx, state);
    }
    render_chat_panel(ctx, &mut state.chat);

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            let arrow = if state.ui_state.sidebar_open { "◀" } else { "▶" };
            if ui
                .button(arrow)
                .on_hover_text("Toggle sidebar")
                .clicked()
            {
                state.toggle_sidebar();
            }
        });
        ui.add_space(4.0);
        render_workspace(ui, &mut state.workspace, runner, cache);
    });

    state.dispatch_signals();
}

/// Render the top menu bar
fn render_menu_bar(ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let mut dark_mode = ctx.style().visuals.dark_mode;
                if ui.checkbox(&mut dark_mode, "Dark Mode").changed() {
                    let visuals = if dark_mode {
                        egui::Visuals::dark()
                    } else {
                        egui::Visuals::light()
                    };
                    ctx.set_visuals(visuals);
                    ui.close_menu();
                }
            });
        });
    });
}
