//! Agent workspace state
//!
//! Tracks the active agent tab, the last rendered output and the run lifecycle.
//! Tab and output are written through the injected [`SettingsStore`] on every
//! change and read back once, when the workspace is constructed.
//!
//! Runs are sequenced: each [`WorkspaceState::begin_run`] hands out a ticket
//! with a strictly increasing number, and only the completion carrying the most
//! recently issued number is applied. A slow earlier request that finishes
//! after a later one is dropped.

use super::agent::Agent;
use super::settings::{PersistedSettings, SettingsStore};
use crate::error::RunError;

/// Shown when the agent replied without a `result` field
pub const NO_OUTPUT_FALLBACK: &str = "No output returned.";

/// Shown in place of output while nothing has been run yet
pub const EMPTY_OUTPUT_PROMPT: &str = "Select an agent and click \"Run Agent\" to start.";

/// Shown while a run is in flight
pub const PROCESSING_PLACEHOLDER: &str = "Processing...";

/// Handle for one issued run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTicket {
    /// Monotonically increasing run number
    pub seq: u64,
    /// Agent that was active when the run was issued
    pub agent: Agent,
}

/// Result of a run as seen by the workspace
pub type RunOutcome = Result<Option<String>, RunError>;

/// Convert a run outcome into the text displayed in the workspace
pub fn outcome_text(outcome: RunOutcome) -> String {
    match outcome {
        Ok(Some(result)) if !result.is_empty() => result,
        Ok(_) => NO_OUTPUT_FALLBACK.to_string(),
        Err(e) => format!("Error: {}", e),
    }
}

/// Workspace state with write-through persistence
pub struct WorkspaceState {
    active_agent: Agent,
    last_output: String,
    is_running: bool,
    /// Number of the most recently issued run (0 = none yet)
    latest_seq: u64,
    store: Box<dyn SettingsStore>,
}

impl std::fmt::Debug for WorkspaceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkspaceState")
            .field("active_agent", &self.active_agent)
            .field("last_output", &self.last_output)
            .field("is_running", &self.is_running)
            .field("latest_seq", &self.latest_seq)
            .finish_non_exhaustive()
    }
}

impl WorkspaceState {
    /// Create a workspace, restoring tab and output from the store
    ///
    /// A store that cannot be read, or that holds an unknown tab id, yields
    /// the defaults for the affected values.
    pub fn load(store: Box<dyn SettingsStore>) -> Self {
        let settings = match store.load() {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load workspace settings, using defaults");
                PersistedSettings::default()
            }
        };

        let active_agent = if settings.active_tab.is_empty() {
            Agent::default()
        } else {
            settings.active_tab.parse::<Agent>().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring stored tab");
                Agent::default()
            })
        };

        tracing::debug!(
            agent = %active_agent,
            output_len = settings.agent_output.len(),
            "Workspace restored"
        );

        Self {
            active_agent,
            last_output: settings.agent_output,
            is_running: false,
            latest_seq: 0,
            store,
        }
    }

    pub fn active_agent(&self) -> Agent {
        self.active_agent
    }

    pub fn last_output(&self) -> &str {
        &self.last_output
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    /// Switch to another agent tab
    /// The previous output stays visible under the new heading
    pub fn select_tab(&mut self, agent: Agent) {
        if self.active_agent == agent {
            return;
        }
        self.active_agent = agent;
        self.persist();
    }

    /// Start a run for the active agent
    ///
    /// Marks the workspace as running and clears the output. Nothing prevents
    /// starting a run while another is in flight.
    pub fn begin_run(&mut self) -> RunTicket {
        self.latest_seq += 1;
        self.is_running = true;
        self.set_output(String::new());

        RunTicket {
            seq: self.latest_seq,
            agent: self.active_agent,
        }
    }

    /// Apply a finished run
    ///
    /// Returns `false` and leaves the state untouched when a later run has
    /// been issued since `ticket`.
    pub fn complete_run(&mut self, ticket: RunTicket, outcome: RunOutcome) -> bool {
        if ticket.seq != self.latest_seq {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                agent = %ticket.agent,
                "Dropping stale run result"
            );
            return false;
        }

        self.set_output(outcome_text(outcome));
        self.is_running = false;
        true
    }

    fn set_output(&mut self, output: String) {
        if self.last_output == output {
            return;
        }
        self.last_output = output;
        self.persist();
    }

    fn persist(&self) {
        let settings = PersistedSettings {
            active_tab: self.active_agent.id().to_string(),
            agent_output: self.last_output.clone(),
        };
        if let Err(e) = self.store.save(&settings) {
            tracing::warn!(error = %e, "Failed to save workspace settings");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::settings::MemorySettingsStore;
    use std::sync::Arc;

    fn workspace_with(settings: PersistedSettings) -> (WorkspaceState, Arc<MemorySettingsStore>) {
        let store = Arc::new(MemorySettingsStore::new(settings));
        (WorkspaceState::load(Box::new(store.clone())), store)
    }

    #[test]
    fn test_defaults_without_stored_settings() {
        let (ws, _) = workspace_with(PersistedSettings::default());
        assert_eq!(ws.active_agent(), Agent::Regulation);
        assert!(ws.last_output().is_empty());
        assert!(!ws.is_running());
    }

    #[test]
    fn test_unknown_stored_tab_falls_back_to_default() {
        let (ws, _) = workspace_with(PersistedSettings {
            active_tab: "esg".to_string(),
            agent_output: "kept".to_string(),
        });
        assert_eq!(ws.active_agent(), Agent::Regulation);
        assert_eq!(ws.last_output(), "kept");
    }

    #[test]
    fn test_select_tab_keeps_output_for_every_agent() {
        let (mut ws, store) = workspace_with(PersistedSettings {
            active_tab: "policy".to_string(),
            agent_output: "previous".to_string(),
        });

        for agent in Agent::ALL {
            ws.select_tab(agent);
            assert_eq!(ws.active_agent().display_name(), agent.display_name());
            assert_eq!(ws.last_output(), "previous");
            assert_eq!(store.snapshot().active_tab, agent.id());
        }
    }

    #[test]
    fn test_begin_run_clears_output_and_marks_running() {
        let (mut ws, store) = workspace_with(PersistedSettings {
            active_tab: "report".to_string(),
            agent_output: "old".to_string(),
        });

        let ticket = ws.begin_run();
        assert_eq!(ticket.agent, Agent::Report);
        assert!(ws.is_running());
        assert!(ws.last_output().is_empty());
        assert!(store.snapshot().agent_output.is_empty());
    }

    #[test]
    fn test_complete_run_outcomes() {
        let (mut ws, _) = workspace_with(PersistedSettings::default());

        let ticket = ws.begin_run();
        assert!(ws.complete_run(ticket, Ok(Some("X".to_string()))));
        assert_eq!(ws.last_output(), "X");
        assert!(!ws.is_running());

        let ticket = ws.begin_run();
        ws.complete_run(ticket, Ok(None));
        assert_eq!(ws.last_output(), NO_OUTPUT_FALLBACK);

        let ticket = ws.begin_run();
        ws.complete_run(
            ticket,
            Err(RunError::Transport("connection refused".to_string())),
        );
        assert!(ws.last_output().starts_with("Error:"));
        assert!(ws.last_output().contains("connection refused"));
        assert!(!ws.is_running());
    }

    #[test]
    fn test_overlapping_runs_last_request_wins() {
        // The first request resolves after the second one. Its result must not
        // overwrite the newer run's output.
        let (mut ws, store) = workspace_with(PersistedSettings::default());

        let first = ws.begin_run();
        let second = ws.begin_run();
        assert!(second.seq > first.seq);

        assert!(ws.complete_run(second, Ok(Some("second".to_string()))));
        assert!(!ws.complete_run(first, Ok(Some("first".to_string()))));

        assert_eq!(ws.last_output(), "second");
        assert!(!ws.is_running());
        assert_eq!(store.snapshot().agent_output, "second");
    }

    #[test]
    fn test_stale_completion_keeps_running_flag() {
        let (mut ws, _) = workspace_with(PersistedSettings::default());

        let first = ws.begin_run();
        let _second = ws.begin_run();
        ws.complete_run(first, Ok(Some("first".to_string())));

        assert!(ws.is_running());
        assert!(ws.last_output().is_empty());
    }

    #[test]
    fn test_reload_restores_tab_and_output() {
        let store = Arc::new(MemorySettingsStore::default());
        {
            let mut ws = WorkspaceState::load(Box::new(store.clone()));
            ws.select_tab(Agent::Risk);
            let ticket = ws.begin_run();
            ws.complete_run(ticket, Ok(Some("**material** risks".to_string())));
        }

        let ws = WorkspaceState::load(Box::new(store));
        assert_eq!(ws.active_agent(), Agent::Risk);
        assert_eq!(ws.last_output(), "**material** risks");
        assert!(!ws.is_running());
    }
}
