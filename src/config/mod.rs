use config::{Config, ConfigError};
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct DbConfig {
    pub location: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct UploadConfig {
    /// the largest attachment that can be uploaded, in mebibytes
    #[serde(rename = "maxsizemb")]
    pub max_size_mb: u64,
}

/// config properties for the whole of this application
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct NoteServerConfig {
    pub database: DbConfig,
    pub uploads: UploadConfig,
}

/// Parses the config file located at ./NoteServer.toml, if it exists.
/// A missing or unreadable file falls back to the defaults
pub fn parse_config() -> NoteServerConfig {
    parse_config_from("./NoteServer.toml")
}

fn parse_config_from(path: &str) -> NoteServerConfig {
    let builder = Config::builder()
        .add_source(config::File::with_name(path))
        .build();
    let settings = match builder {
        Ok(settings) => settings,
        // some errors are fine, such as not found
        Err(ConfigError::Foreign(e)) if e.to_string().contains("not found") => {
            log::warn!("No config file found. Continuing startup...");
            return NS_CONFIG_DEFAULT.clone();
        }
        Err(e) => {
            log::error!("Failed to parse config file, using defaults instead. Exception is {e}");
            return NS_CONFIG_DEFAULT.clone();
        }
    };
    match settings.try_deserialize() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Config file is missing properties, using defaults instead. Exception is {e}");
            NS_CONFIG_DEFAULT.clone()
        }
    }
}

/// global variable for config, that way it doesn't need to be repeatedly parsed
pub static NOTE_SERVER_CONFIG: Lazy<NoteServerConfig> = Lazy::new(parse_config);
static NS_CONFIG_DEFAULT: Lazy<NoteServerConfig> = Lazy::new(|| NoteServerConfig {
    database: DbConfig {
        location: "./notes.sqlite".to_string(),
    },
    uploads: UploadConfig { max_size_mb: 25 },
});
