use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// nbdash.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NbdashConfig {
    #[serde(default)]
    pub image: ImageConfig,
    #[serde(default)]
    pub docker: DockerConfig,
    #[serde(default)]
    pub metadata: MetadataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Base image for generated Dockerfiles
    #[serde(default = "default_base_image")]
    pub base_image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockerConfig {
    /// Container build program (docker, podman, ...)
    #[serde(default = "default_program")]
    pub program: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataConfig {
    /// Default maintainer label when --maintainer is not given
    pub maintainer: Option<String>,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_image: default_base_image(),
        }
    }
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

impl NbdashConfig {
    /// Load from nbdash.toml at the given path, or return defaults if not found.
    pub fn load(working_dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = working_dir.join("nbdash.toml");
        if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            tracing::debug!("no nbdash.toml found, using defaults");
            Ok(Self::default())
        }
    }
}

fn default_base_image() -> String {
    "nbdash".to_owned()
}

fn default_program() -> String {
    "docker".to_owned()
}

/// Runtime mode used to present the notebook as an interactive application.
///
/// The mode is embedded in the generated CMD directive and gates whether
/// the parameters cell is promoted during grooming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardMode {
    Voila,
    Nbparameterise,
}

impl DashboardMode {
    pub fn as_str(self) -> &'static str {
        match self {
            DashboardMode::Voila => "voila",
            DashboardMode::Nbparameterise => "nbparameterise",
        }
    }
}

impl fmt::Display for DashboardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DashboardMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "voila" => Ok(DashboardMode::Voila),
            "nbparameterise" => Ok(DashboardMode::Nbparameterise),
            _ => Err(crate::Error::UnknownMode { mode: s.to_owned() }),
        }
    }
}
