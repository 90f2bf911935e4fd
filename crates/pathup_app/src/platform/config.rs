use std::fs;
use std::path::Path;
use std::time::Duration;

use pathup_engine::{ClientSettings, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};

use super::logging::LogDestination;

/// Contents of the optional RON settings file. Absent fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoint: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_response_bytes: u64,
    pub log_destination: LogDestination,
}

impl Default for Settings {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout_secs: client.connect_timeout.as_secs(),
            request_timeout_secs: client.request_timeout.as_secs(),
            max_response_bytes: client.max_response_bytes,
            log_destination: LogDestination::default(),
        }
    }
}

impl Settings {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            endpoint: self.endpoint.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_response_bytes: self.max_response_bytes,
        }
    }
}

/// Settings plus a problem to report once logging is up.
#[derive(Debug)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub warning: Option<String>,
}

/// Missing file means defaults. An unreadable or invalid file also falls back
/// to defaults, with a warning.
pub fn load_settings(path: &Path) -> LoadedSettings {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return LoadedSettings {
                settings: Settings::default(),
                warning: None,
            };
        }
        Err(err) => {
            return LoadedSettings {
                settings: Settings::default(),
                warning: Some(format!("Failed to read settings from {:?}: {}", path, err)),
            };
        }
    };

    match ron::from_str::<Settings>(&content) {
        Ok(settings) => LoadedSettings {
            settings,
            warning: None,
        },
        Err(err) => LoadedSettings {
            settings: Settings::default(),
            warning: Some(format!("Failed to parse settings from {:?}: {}", path, err)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults_silently() {
        let temp = TempDir::new().unwrap();
        let loaded = load_settings(&temp.path().join("pathup.ron"));

        assert_eq!(loaded.settings, Settings::default());
        assert!(loaded.warning.is_none());
    }

    #[test]
    fn partial_file_overrides_named_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pathup.ron");
        fs::write(
            &path,
            r#"(endpoint: "https://skills.example.com/api/analyze", request_timeout_secs: 5, log_destination: Both)"#,
        )
        .unwrap();

        let loaded = load_settings(&path);

        assert!(loaded.warning.is_none());
        assert_eq!(
            loaded.settings,
            Settings {
                endpoint: "https://skills.example.com/api/analyze".to_string(),
                request_timeout_secs: 5,
                log_destination: LogDestination::Both,
                ..Settings::default()
            }
        );
        let client = loaded.settings.client_settings();
        assert_eq!(client.request_timeout, Duration::from_secs(5));
        assert_eq!(client.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn invalid_file_falls_back_with_warning() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pathup.ron");
        fs::write(&path, "(endpoint: 42").unwrap();

        let loaded = load_settings(&path);

        assert_eq!(loaded.settings, Settings::default());
        assert!(loaded.warning.unwrap().contains("Failed to parse settings"));
    }
}
