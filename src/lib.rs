//! ESG Agent Workspace
//!
//! Library side of the desktop application: workspace and chat state,
//! settings persistence, the agent service client and the egui views.
//! The binary in `src/main.rs` wires them into an eframe window.

pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod markdown;
pub mod runner;
/// Application state management
///
/// Workspace tabs and run lifecycle, chat transcript, sidebar and settings.
pub mod state;
pub mod ui;
