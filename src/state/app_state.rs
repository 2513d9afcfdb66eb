// Application state management
// Composes workspace, chat, sidebar and shell layout state

use super::chat::ChatState;
use super::settings::SettingsStore;
use super::workspace::WorkspaceState;
use crate::events::{Signal, SignalBus};

/// Shell layout state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Whether the sidebar is laid out next to the main content
    pub sidebar_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { sidebar_open: true }
    }
}

/// Sidebar state
/// Dropped files are only listed; they are never read or uploaded
#[derive(Debug, Clone, Default)]
pub struct SidebarState {
    /// Names of files dropped on the upload area, in drop order
    pub uploaded_files: Vec<String>,
}

impl SidebarState {
    /// Record dropped files by name
    pub fn accept_files<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            tracing::debug!(file = %name, "File dropped on upload area");
            self.uploaded_files.push(name);
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub workspace: WorkspaceState,
    pub chat: ChatState,
    pub sidebar: SidebarState,
    pub ui_state: UiState,
    pub signals: SignalBus,
}

impl AppState {
    /// Create the application state, restoring the workspace from `store`
    pub fn new(store: Box<dyn SettingsStore>) -> Self {
        Self {
            workspace: WorkspaceState::load(store),
            chat: ChatState::new(),
            sidebar: SidebarState::default(),
            ui_state: UiState::default(),
            signals: SignalBus::new(),
        }
    }

    /// Flip sidebar visibility
    pub fn toggle_sidebar(&mut self) {
        self.ui_state.sidebar_open = !self.ui_state.sidebar_open;
    }

    /// Sidebar guide button handler
    pub fn show_guide(&mut self) {
        self.signals.broadcast(Signal::ShowSample);
    }

    /// Deliver pending signals
    /// Nothing subscribes to them yet, so they are logged and discarded
    pub fn dispatch_signals(&mut self) -> usize {
        let signals = self.signals.drain();
        for signal in &signals {
            tracing::debug!(signal = signal.name(), "No subscriber for signal");
        }
        signals.len()
    }
}
