#![forbid(unsafe_code)]

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hungarian_pool::{assign, AgentPool, Roster, SolverConfig};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assign a pool of agents to slots, maximizing total preference",
    long_about = None
)]
struct Cli {
    /// Roster JSON: {"slots": [...], "agents": [{"name": ..., "scores": [...]}]}.
    #[arg(value_name = "ROSTER")]
    roster: PathBuf,

    /// Solver configuration (TOML).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Emit JSON output instead of human-readable text.
    #[arg(long)]
    json: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("HUNGARIAN_POOL_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "hungarian_pool=debug,info"
        } else {
            "hungarian_pool=info,warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<SolverConfig> {
    let Some(path) = path else {
        return Ok(SolverConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    SolverConfig::from_toml(&text).with_context(|| format!("in config {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = load_config(cli.config.as_ref())?;
    let text = fs::read_to_string(&cli.roster)
        .with_context(|| format!("failed to read roster {}", cli.roster.display()))?;
    let roster = Roster::from_json(&text)
        .with_context(|| format!("in roster {}", cli.roster.display()))?;
    if let Some(slots) = roster.slots {
        config.slots = slots;
    }
    info!(
        agents = roster.agents.len(),
        slots = config.slots.len(),
        "loaded roster"
    );

    let pool = AgentPool::new(roster.agents, config.slots.len())?;
    let report = assign(pool, &config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}
