// Agent definitions
// The fixed set of analysis agents shown as workspace tabs

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised when an agent id cannot be mapped to a known agent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// The id is not one of the fixed agent ids
    #[error("Unknown agent: {0}")]
    UnknownAgent(String),
}

/// One of the five fixed analysis agents
/// Each agent maps to a tab label and a distinct request path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Agent {
    Policy,
    #[default]
    Regulation,
    Report,
    Risk,
    Custom,
}

impl Agent {
    /// All agents in tab order
    pub const ALL: [Agent; 5] = [
        Agent::Policy,
        Agent::Regulation,
        Agent::Report,
        Agent::Risk,
        Agent::Custom,
    ];

    /// Stable identifier used in request paths and the settings file
    pub fn id(self) -> &'static str {
        match self {
            Agent::Policy => "policy",
            Agent::Regulation => "regulation",
            Agent::Report => "report",
            Agent::Risk => "risk",
            Agent::Custom => "custom",
        }
    }

    /// Tab label and workspace heading
    pub fn display_name(self) -> &'static str {
        match self {
            Agent::Policy => "Policy Tool",
            Agent::Regulation => "Regulation Tool",
            Agent::Report => "Report Tool",
            Agent::Risk => "Risk Tool",
            Agent::Custom => "Custom Agent",
        }
    }

    /// Path of the run endpoint, relative to the API base URL
    pub fn request_path(self) -> String {
        format!("/api/agent/{}", self.id())
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Agent {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Agent::ALL
            .into_iter()
            .find(|agent| agent.id() == s)
            .ok_or_else(|| AgentError::UnknownAgent(s.to_string()))
    }
}
