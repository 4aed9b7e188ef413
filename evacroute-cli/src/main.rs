mod cli;
mod input;

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use evacroute_core::prelude::*;
use serde_json::json;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, OutputFormat};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] evacroute_core::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    let config = input::read_config(cli.config.as_deref())?;
    let graph = graph_from_json(&input::read(&cli.network)?)?;

    let mut weighting = GraphWeighting::new(graph, config.cost_model()?);
    if let Some(path) = &cli.updates {
        let batch = input::read_updates(path)?;
        weighting.apply_risk_updates(&batch.risk);
        weighting.apply_traffic_updates(&batch.traffic);
    }
    weighting.refresh_all_edge_weights();

    let graph = weighting.graph();
    let planner = EvacuationPlanner::new(graph, config.clone())?;

    let routes = match cli.command {
        Command::Route { start, end, paths } => {
            planner.plan_evacuations(start, end, paths.unwrap_or(config.num_paths))
        }
        Command::Evacuate {
            start,
            paths,
            policy,
        } => planner.simulate_with_policy(
            start,
            paths.unwrap_or(config.num_paths),
            policy.map_or(config.destination_policy, Into::into),
        )?,
        Command::Zones => {
            let zones = json!({
                "safe_zones": planner.safe_zones(),
                "critical_zones": planner.critical_zones(),
            });
            return Ok(serde_json::to_string_pretty(&zones)?);
        }
    };
    info!("Planned {} evacuation routes", routes.len());

    let output = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&routes)?,
        OutputFormat::Geojson => serde_json::to_string_pretty(&routes_to_geojson(&routes, graph)?)?,
    };
    Ok(output)
}
