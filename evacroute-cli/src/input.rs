//! Reading the files named on the command line

use std::{fs, path::Path};

use evacroute_core::{RiskUpdate, RoutingConfig, TrafficUpdate};
use serde::Deserialize;
use tracing::info;

use crate::CliError;

/// Update batches delivered alongside the network
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpdateBatch {
    pub risk: Vec<RiskUpdate>,
    pub traffic: Vec<TrafficUpdate>,
}

pub fn read_config(path: Option<&Path>) -> Result<RoutingConfig, CliError> {
    let Some(path) = path else {
        return Ok(RoutingConfig::default());
    };
    info!(path = %path.display(), "loading routing config");
    let config: RoutingConfig = toml::from_str(&read(path)?)?;
    config.validate()?;
    Ok(config)
}

pub fn read_updates(path: &Path) -> Result<UpdateBatch, CliError> {
    info!(path = %path.display(), "loading updates");
    Ok(serde_json::from_str(&read(path)?)?)
}

pub fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
