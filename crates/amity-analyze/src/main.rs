//! CLI entry point for amity social graph analysis.
//!
//! Loads a roster file, runs the requested analysis, and prints a JSON
//! report on stdout. Diagnostics go to stderr so stdout stays parseable.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use amity_analyze::AnalysisEngine;

#[derive(Parser)]
#[command(name = "amity")]
#[command(about = "Acquaintance chain, school circle, and connector analysis")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Roster file describing people, schools, and friendships.
    #[arg(long, global = true)]
    roster: Option<String>,

    /// Config file prefix (default: amity).
    #[arg(short, long, default_value = "amity", global = true)]
    config: String,
}

#[derive(Subcommand)]
enum Command {
    /// Shortest acquaintance chain between two people.
    Chain {
        /// Person the chain starts from.
        #[arg(long)]
        from: String,
        /// Person the chain ends at.
        #[arg(long)]
        to: String,
    },
    /// Friend circles within one school.
    Circles {
        /// School name, matched exactly.
        #[arg(long)]
        school: String,
    },
    /// People whose removal would fragment the friendship graph.
    Connectors,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let roster = resolve_roster(&cli)?;
    let engine = AnalysisEngine::from_roster(&roster)?;

    match cli.command {
        Command::Chain { ref from, ref to } => {
            let report = engine.chain_report(from, to)?;
            println!("{}", serde_json::to_string(&report)?);
        }
        Command::Circles { ref school } => {
            let report = engine.circles_report(school);
            println!("{}", serde_json::to_string(&report)?);
        }
        Command::Connectors => {
            let report = engine.connectors_report();
            println!("{}", serde_json::to_string(&report)?);
        }
    }

    Ok(())
}

/// Roster path from the flag, the AMITY__ROSTER environment variable, or the
/// config file, in that order.
fn resolve_roster(cli: &Cli) -> anyhow::Result<String> {
    if let Some(path) = &cli.roster {
        return Ok(path.clone());
    }

    let cfg = config::Config::builder()
        .add_source(config::File::with_name(&cli.config).required(false))
        .add_source(
            config::Environment::with_prefix("AMITY")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    cfg.get_string("roster").map_err(|_| {
        anyhow::anyhow!(
            "no roster file given: pass --roster, set AMITY__ROSTER, or add `roster` to {}.toml",
            cli.config
        )
    })
}
