//! Monitor lifecycle domain

mod interval;
mod session;

pub use interval::{PollInterval, DEFAULT_INTERVAL_MS, MIN_INTERVAL_MS};
pub use session::{InvalidStateTransition, MonitorSession, MonitorState};
