use crate::error::{CheckInError, CiResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub share: ShareSettings,
    #[command(flatten)]
    pub feedback: FeedbackSettings,
    #[command(flatten)]
    pub server: ServerSettings,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShareSettings {
    /// Origin that share links point at
    #[arg(long, default_value = "http://localhost:3000")]
    pub share_origin: String,
    #[arg(long, default_value = "/")]
    pub share_path: String,
}

impl Default for ShareSettings {
    fn default() -> Self {
        Self {
            share_origin: "http://localhost:3000".to_string(),
            share_path: "/".to_string(),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeedbackSettings {
    #[arg(long, default_value = "feedback-data.json")]
    pub feedback_file: PathBuf,
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            feedback_file: PathBuf::from("feedback-data.json"),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerSettings {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,
    #[arg(long, default_value_t = 3000)]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CiResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            CheckInError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            CheckInError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })
    }

    /// Overlays only the flags that were typed on the command line, so a
    /// config file beats clap defaults but loses to explicit flags.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(share.share_origin);
        update_if_present!(share.share_path);
        update_if_present!(feedback.feedback_file);
        update_if_present!(server.host);
        update_if_present!(server.port);
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
