// State management module
// Workspace, chat, sidebar and shell state plus settings persistence

pub mod agent;
pub mod app_state;
pub mod chat;
pub mod settings;
pub mod workspace;

pub use agent::{Agent, AgentError};
pub use app_state::{AppState, SidebarState, UiState};
pub use chat::{ChatMessage, ChatState, Sender};
pub use settings::{FileSettingsStore, MemorySettingsStore, PersistedSettings, SettingsStore};
pub use workspace::{RunOutcome, RunTicket, WorkspaceState};
