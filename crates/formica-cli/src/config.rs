//! Configuration management for the formica CLI.

use anyhow::{Context, Result};
use formica::prelude::{ColonyConfig, NodeSource};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "formica.toml";
pub const DATA_DIR: &str = ".formica";

/// Formica project configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub colony: ColonyConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub run: RunConfig,
}

/// Where the nodes come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(rename = "RandomNetwork", default = "default_random_network")]
    pub random_network: bool,
    #[serde(rename = "NumberOfNodes", default = "default_number_of_nodes")]
    pub number_of_nodes: usize,
    #[serde(rename = "DisplaySize", default = "default_display_size")]
    pub display_size: i64,
    #[serde(rename = "NetworkFileName", default = "default_network_file")]
    pub network_file_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_ticks")]
    pub ticks: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

// Default value functions
fn default_random_network() -> bool { true }
fn default_number_of_nodes() -> usize { 30 }
fn default_display_size() -> i64 { 500 }
fn default_network_file() -> String { "network.txt".to_string() }
fn default_ticks() -> u64 { 1000 }

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            random_network: default_random_network(),
            number_of_nodes: default_number_of_nodes(),
            display_size: default_display_size(),
            network_file_name: default_network_file(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            ticks: default_ticks(),
            seed: None,
        }
    }
}

impl NetworkConfig {
    /// The node source these settings select.
    pub fn source(&self) -> NodeSource {
        NodeSource::from_parameters(
            self.random_network,
            self.number_of_nodes,
            self.display_size,
            &self.network_file_name,
        )
    }
}

impl Config {
    /// Load config from formica.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config
            .colony
            .validate()
            .with_context(|| format!("Invalid [colony] section in {}", path.display()))?;
        Ok(config)
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Find formica.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Get the formica data directory (.formica/).
pub fn data_dir() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(DATA_DIR))
}

/// Get the current session file path.
pub fn current_session_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("current.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_parameter_defaults() {
        let config = Config::default();
        assert_eq!(config.colony.population_size, 10);
        assert_eq!(config.colony.trail.evaporating_coefficient, 0.01);
        assert!(config.network.random_network);
        assert_eq!(config.run.seed, None);
    }

    #[test]
    fn parses_historical_names() {
        let text = r#"
[colony]
PopulationSize = 25
PheromoneInfluence = 0.5
EvaporatingCoefficient = 0.2

[network]
RandomNetwork = false
NetworkFileName = "cities.txt"

[run]
ticks = 40
seed = 9
"#;
        let config: Config = toml::from_str(text).unwrap();
        assert_eq!(config.colony.population_size, 25);
        assert_eq!(config.colony.trail.pheromone_influence, 0.5);
        assert_eq!(config.colony.trail.distance_influence, 1.0);
        assert_eq!(config.colony.trail.evaporating_coefficient, 0.2);
        assert_eq!(config.network.number_of_nodes, 30);
        assert_eq!(config.network.source(), NodeSource::File("cities.txt".into()));
        assert_eq!(config.run.ticks, 40);
        assert_eq!(config.run.seed, Some(9));
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut config = Config::default();
        config.colony.population_size = 3;
        config.run.seed = Some(1);
        config.save(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn invalid_colony_section_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[colony]\nEvaporatingCoefficient = 3.0\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
