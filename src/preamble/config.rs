use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const MODELS_FILENAME: &str = "models.yaml";

/// One chat-completion endpoint from models.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelEndpoint {
    pub name: String,
    pub base_url: String,
    pub api_key: String,
}

/// The optional models.yaml file. A missing file is a supported state, not
/// an error: every consumer has a deterministic local fallback.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelsConfig {
    #[serde(default)]
    pub models: Vec<ModelEndpoint>,
}

impl ModelsConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Find a models.yaml: an explicit path wins, then the working
    /// directory, then the user config directory.
    pub fn discover(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        let local = PathBuf::from(MODELS_FILENAME);
        if local.exists() {
            return Some(local);
        }
        directories::ProjectDirs::from("com", "preamble", "preamble")
            .map(|dirs| dirs.config_dir().join(MODELS_FILENAME))
            .filter(|path| path.exists())
    }

    /// The endpoint actually used: the first one listed.
    pub fn primary(&self) -> Option<&ModelEndpoint> {
        self.models.first()
    }
}
