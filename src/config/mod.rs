use crate::ui::messages;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    pub session_cache: String,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_client")]
    pub default_client: String,
}

fn default_user() -> String {
    "local".to_string()
}
fn default_client() -> String {
    String::new()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            session_cache: Self::session_file().to_string_lossy().to_string(),
            user: default_user(),
            default_client: default_client(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("tracklet")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".tracklet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tracklet.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("tracklet.sqlite")
    }

    /// Return the full path of the session cache slot
    pub fn session_file() -> PathBuf {
        Self::config_dir().join("session.json")
    }

    /// Load configuration from file, or return defaults if missing or
    /// unreadable. A broken config never aborts the CLI.
    pub fn load() -> Self {
        let path = Self::config_file();

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    messages::warning(format!(
                        "Config at {} is unreadable ({}); using defaults",
                        path.display(),
                        e
                    ));
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        }
    }

    /// Write the configuration back to its standard location.
    pub fn save(&self) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| io::Error::other(format!("serialize config: {}", e)))?;
        fs::write(Self::config_file(), yaml)
    }
}
