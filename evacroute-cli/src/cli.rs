use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use evacroute_core::DestinationPolicy;

#[derive(Debug, Parser)]
#[command(name = "evacroute", about = "Risk-aware evacuation route planning", version)]
pub struct Cli {
    /// Network document (JSON)
    #[arg(long, short)]
    pub network: PathBuf,

    /// Routing settings (TOML); defaults apply when omitted
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Risk and traffic updates (JSON) applied before planning
    #[arg(long)]
    pub updates: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Plan diverse routes between two nodes
    Route {
        #[arg(long)]
        start: u64,
        #[arg(long)]
        end: u64,
        /// Overrides `num_paths` from the config
        #[arg(long)]
        paths: Option<usize>,
    },
    /// Simulate an evacuation from a node to a safe zone
    Evacuate {
        #[arg(long)]
        start: u64,
        #[arg(long)]
        paths: Option<usize>,
        /// Overrides `destination_policy` from the config
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,
    },
    /// List safe and critical zones
    Zones,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Geojson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    First,
    Nearest,
    Cheapest,
}

impl From<PolicyArg> for DestinationPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::First => DestinationPolicy::FirstDiscovered,
            PolicyArg::Nearest => DestinationPolicy::NearestByDistance,
            PolicyArg::Cheapest => DestinationPolicy::LowestCost,
        }
    }
}
