// ABOUTME: Configuration types for output handling
// ABOUTME: Defines structures for configuring output formats and destinations

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub destinations: Vec<OutputDestination>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputDestination {
    pub writer_type: String,
    #[serde(default)]
    pub config: HashMap<String, serde_yaml::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileWriterConfig {
    pub path: String,
    #[serde(default = "default_true")]
    pub create_dirs: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StdoutWriterConfig {
    #[serde(default)]
    pub quiet: bool,
}

fn default_format() -> String {
    "html".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            destinations: vec![OutputDestination::new_stdout()],
        }
    }
}

impl OutputConfig {
    pub fn new<S: Into<String>>(format: S, destinations: Vec<OutputDestination>) -> Self {
        Self {
            format: format.into(),
            destinations,
        }
    }
}

impl OutputDestination {
    pub fn new_stdout() -> Self {
        Self {
            writer_type: "stdout".to_string(),
            config: HashMap::new(),
        }
    }

    pub fn new_file<S: Into<String>>(path: S) -> Self {
        let mut config = HashMap::new();
        config.insert("path".to_string(), serde_yaml::Value::String(path.into()));

        Self {
            writer_type: "file".to_string(),
            config,
        }
    }

    pub fn get_config<T>(&self) -> Result<T, super::error::OutputError>
    where
        T: serde::de::DeserializeOwned,
    {
        let config_value = serde_yaml::Value::Mapping(
            self.config
                .iter()
                .map(|(k, v)| (serde_yaml::Value::String(k.clone()), v.clone()))
                .collect(),
        );

        serde_yaml::from_value(config_value).map_err(|e| super::error::OutputError::ConfigError {
            message: format!("Failed to parse destination config: {}", e),
        })
    }
}
