//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, ClipboardBackend};
use crate::domain::error::ConfigError;
use crate::domain::monitor::PollInterval;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    let value = config_value(&config, key).unwrap_or_else(|| NOT_SET.to_string());
    presenter.output(&value);

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = config_value(&config, key).unwrap_or_else(|| NOT_SET.to_string());
        presenter.key_value(key, &value);
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Stored value for `key`, as text
fn config_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "max_history" => config.max_history.map(|n| n.to_string()),
        "interval" => config.interval.clone(),
        "backend" => config.backend.clone(),
        "notify" => config.notify.map(|b| b.to_string()),
        _ => None,
    }
}

/// Validate `value` for `key` and store it in normalized form
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "max_history" => {
            let n = value
                .trim()
                .parse::<usize>()
                .map_err(|_| invalid("Value must be a positive integer".to_string()))?;
            if n == 0 {
                return Err(invalid("Value must be at least 1".to_string()));
            }
            config.max_history = Some(n);
        }
        "interval" => {
            let interval = value
                .parse::<PollInterval>()
                .map_err(|e| invalid(e.to_string()))?;
            config.interval = Some(interval.to_string());
        }
        "backend" => {
            let backend = value
                .parse::<ClipboardBackend>()
                .map_err(|e| invalid(e.to_string()))?;
            config.backend = Some(backend.to_string());
        }
        "notify" => {
            let enabled = parse_bool(value)
                .map_err(|_| invalid("Value must be 'true' or 'false'".to_string()))?;
            config.notify = Some(enabled);
        }
        _ => return Err(invalid("Unknown key".to_string())),
    }
    Ok(())
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::XdgConfigStore;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, XdgConfigStore) {
        let dir = TempDir::new().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        (dir, store)
    }

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert_eq!(parse_bool("yes"), Ok(true));
        assert_eq!(parse_bool("no"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("0"), Ok(false));
        assert!(parse_bool("invalid").is_err());
    }

    #[test]
    fn max_history_must_be_positive() {
        let mut config = AppConfig::empty();
        assert!(apply_value(&mut config, "max_history", "0").is_err());
        assert!(apply_value(&mut config, "max_history", "-3").is_err());
        assert!(apply_value(&mut config, "max_history", "many").is_err());
        apply_value(&mut config, "max_history", "25").unwrap();
        assert_eq!(config.max_history, Some(25));
    }

    #[test]
    fn interval_is_validated_and_normalized() {
        let mut config = AppConfig::empty();
        assert!(apply_value(&mut config, "interval", "5ms").is_err());
        assert!(apply_value(&mut config, "interval", "soon").is_err());
        apply_value(&mut config, "interval", "1500ms").unwrap();
        assert_eq!(config.interval, Some("1s500ms".to_string()));
    }

    #[test]
    fn backend_is_validated_and_normalized() {
        let mut config = AppConfig::empty();
        assert!(apply_value(&mut config, "backend", "xclip").is_err());
        apply_value(&mut config, "backend", "WL").unwrap();
        assert_eq!(config.backend, Some("wayland".to_string()));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(matches!(
            check_key("api_key"),
            Err(ConfigError::ValidationError { key, .. }) if key == "api_key"
        ));
    }

    #[tokio::test]
    async fn set_then_get_persists_value() {
        let (_dir, store) = temp_store();
        let presenter = Presenter::new();

        handle_set(&store, &presenter, "notify", "yes").await.unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.notify, Some(true));
        assert_eq!(config_value(&config, "notify"), Some("true".to_string()));
        assert_eq!(config_value(&config, "backend"), None);
    }

    #[tokio::test]
    async fn set_invalid_value_leaves_file_untouched() {
        let (_dir, store) = temp_store();
        let presenter = Presenter::new();

        let result = handle_set(&store, &presenter, "max_history", "0").await;
        assert!(result.is_err());
        assert!(!store.exists());
    }

    #[tokio::test]
    async fn init_twice_fails() {
        let (_dir, store) = temp_store();
        let presenter = Presenter::new();

        handle_config_command(ConfigAction::Init, &store, &presenter)
            .await
            .unwrap();
        let again = handle_config_command(ConfigAction::Init, &store, &presenter).await;
        assert!(matches!(again, Err(ConfigError::AlreadyExists(_))));
    }
}
