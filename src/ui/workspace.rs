// Agent workspace view
// Tab strip, heading with run button, and the output area

use eframe::egui;

use crate::markdown::{self, Block};
use crate::runner::AgentRunner;
use crate::state::workspace::{EMPTY_OUTPUT_PROMPT, PROCESSING_PLACEHOLDER};
use crate::state::{Agent, WorkspaceState};
use crate::ui::components::{agent_tab, markdown_view, run_button};

/// Parsed form of the last rendered output, reparsed only when the text changes
#[derive(Debug, Default)]
pub struct MarkdownCache {
    source: String,
    blocks: Vec<Block>,
}

impl MarkdownCache {
    pub fn blocks(&mut self, source: &str) -> &[Block] {
        if self.source != source {
            self.source = source.to_string();
            self.blocks = markdown::parse(source);
        }
        &self.blocks
    }
}

/// Render the workspace into the central panel
pub fn render_workspace(
    ui: &mut egui::Ui,
    workspace: &mut WorkspaceState,
    runner: &AgentRunner,
    cache: &mut MarkdownCache,
) {
    // Tabs
    ui.horizontal(|ui| {
        for agent in Agent::ALL {
            let selected = workspace.active_agent() == agent;
            if agent_tab(ui, agent.display_name(), selected).clicked() {
                workspace.select_tab(agent);
            }
        }
    });
    ui.separator();
    ui.add_space(8.0);

    // Heading and run button
    ui.horizontal(|ui| {
        ui.heading(
            egui::RichText::new(workspace.active_agent().display_name())
                .size(22.0)
                .strong(),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.spacing_mut().button_padding = egui::vec2(12.0, 6.0);
            if run_button(ui, workspace.is_running()).clicked() {
                let ticket = workspace.begin_run();
                tracing::info!(seq = ticket.seq, agent = %ticket.agent, "Agent run started");
                let ctx = ui.ctx().clone();
                runner.spawn_run(ticket, move || ctx.request_repaint());
            }
        });
    });
    ui.add_space(12.0);

    // Output
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            egui::ScrollArea::vertical()
                .id_source("agent_output_scroll")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    if workspace.is_running() {
                        ui.vertical_centered(|ui| {
                            ui.add_space(40.0);
                            ui.add(egui::Spinner::new());
                            ui.label(egui::RichText::new(PROCESSING_PLACEHOLDER).weak());
                        });
                    } else if workspace.last_output().is_empty() {
                        ui.vertical_centered(|ui| {
                            ui.add_space(80.0);
                            ui.label(egui::RichText::new(EMPTY_OUTPUT_PROMPT).weak().size(14.0));
                        });
                    } else {
                        markdown_view(ui, cache.blocks(workspace.last_output()));
                    }
                });
        });
}
