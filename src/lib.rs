//! clipmon - clipboard history monitor
//!
//! Samples the system clipboard on a fixed interval and keeps a bounded,
//! deduplicated, most-recent-first history of the text it has seen.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: History collection and store, monitor session, config values, errors
//! - **Application**: The clipboard monitor use case, change listener and port traits
//! - **Infrastructure**: Clipboard, desktop notification and config file adapters
//! - **CLI**: Argument parsing, signal handling, IPC and the foreground runner

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
