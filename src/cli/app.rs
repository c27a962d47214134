//! Config resolution and exit codes shared by the entry point

use tracing::warn;

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, ClipboardBackend};
use crate::infrastructure::XdgConfigStore;

use super::args::{Cli, MonitorOptions};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Config values given on the command line
pub fn cli_config(cli: &Cli) -> AppConfig {
    AppConfig {
        max_history: cli.max_history,
        interval: cli.interval.clone(),
        backend: cli
            .backend
            .map(|b| ClipboardBackend::from(b).to_string()),
        notify: cli.notify_flag(),
    }
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = match store.load().await {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, path = %store.path().display(), "ignoring unreadable config file");
            AppConfig::empty()
        }
    };

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

/// Load the XDG config file and merge CLI values over it
pub async fn load_default_config(cli_config: AppConfig) -> AppConfig {
    load_merged_config(&XdgConfigStore::new(), cli_config).await
}

/// Validate merged config into monitor options
pub fn resolve_monitor_options(config: &AppConfig, quiet: bool) -> Result<MonitorOptions, String> {
    let max_history = config.max_history().map_err(|e| e.to_string())?;
    let interval = config.interval().map_err(|e| e.to_string())?;
    let backend = config.backend().map_err(|e| e.to_string())?;

    Ok(MonitorOptions {
        max_history,
        interval,
        backend,
        notify: config.notify_or_default(),
        quiet,
    })
}
