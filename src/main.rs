// ESG Agent Workspace - Main Entry Point
// Native desktop shell for running ESG analysis agents

use eframe::egui;
use esg_agent_workspace::client::AgentClient;
use esg_agent_workspace::config::Config;
use esg_agent_workspace::runner::AgentRunner;
use esg_agent_workspace::state::{AppState, FileSettingsStore, SettingsStore};
use esg_agent_workspace::ui::{self, render_app_layout, MarkdownCache};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    tracing::info!(
        api_base_url = %config.api_base_url,
        settings_path = %config.settings_path.display(),
        "Starting ESG Agent Workspace"
    );

    let app = WorkspaceApp::new(&config, Box::new(FileSettingsStore::new(&config.settings_path)))?;
    let font_path = config.font_path.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("ESG Agent Workspace")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 600.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "ESG Agent Workspace",
        options,
        Box::new(move |cc| {
            if let Some(path) = &font_path {
                if let Err(e) = ui::install_fallback_font(&cc.egui_ctx, path) {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to load fallback font");
                }
            }
            Box::new(app)
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run window: {}", e))
}

/// Main application struct
/// Owns the state, the background runner and per-frame view caches
struct WorkspaceApp {
    state: AppState,
    runner: AgentRunner,
    markdown: MarkdownCache,
}

impl WorkspaceApp {
    fn new(config: &Config, store: Box<dyn SettingsStore>) -> anyhow::Result<Self> {
        let runner = AgentRunner::new(AgentClient::new(config.api_base_url.clone()))?;
        Ok(Self {
            state: AppState::new(store),
            runner,
            markdown: MarkdownCache::default(),
        })
    }
}

impl eframe::App for WorkspaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let applied = self.runner.apply_completions(&mut self.state.workspace);
        if applied > 0 {
            tracing::info!(
                agent = %self.state.workspace.active_agent(),
                output_len = self.state.workspace.last_output().len(),
                "Agent run finished"
            );
        }

        render_app_layout(ctx, &mut self.state, &self.runner, &mut self.markdown);
    }
}
