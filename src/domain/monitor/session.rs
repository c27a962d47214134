//! Monitor session state machine

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Monitor states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitorState {
    #[default]
    Idle,
    Running,
    Stopped,
}

impl MonitorState {
    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Stopped => "stopped",
        }
    }
}

impl fmt::Display for MonitorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while {current_state}")]
pub struct InvalidStateTransition {
    pub current_state: MonitorState,
    pub action: String,
}

/// Monitor session entity.
///
/// State machine:
///   IDLE -> RUNNING (start)
///   RUNNING -> STOPPED (stop)
///
/// STOPPED is terminal; a monitor polls at most once in its lifetime.
#[derive(Debug, Default)]
pub struct MonitorSession {
    state: MonitorState,
}

impl MonitorSession {
    /// Create a new session in idle state
    pub fn new() -> Self {
        Self {
            state: MonitorState::Idle,
        }
    }

    /// Get the current state
    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// Transition from IDLE to RUNNING
    pub fn start(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != MonitorState::Idle {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "start monitoring".to_string(),
            });
        }
        self.state = MonitorState::Running;
        Ok(())
    }

    /// Transition from RUNNING to STOPPED
    pub fn stop(&mut self) -> Result<(), InvalidStateTransition> {
        if self.state != MonitorState::Running {
            return Err(InvalidStateTransition {
                current_state: self.state,
                action: "stop monitoring".to_string(),
            });
        }
        self.state = MonitorState::Stopped;
        Ok(())
    }
}
