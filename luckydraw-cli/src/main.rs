mod commands;
mod config;
mod feedback;

use clap::{Parser, Subcommand};
use config::CliConfig;
use feedback::{ConsoleFeedback, Target};
use luckydraw_core::{DrawError, DrawSession, PrizePoolEngine, PrizeTier};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "luckydraw")]
#[command(about = "Red-envelope lucky draw console for live events")]
#[command(version)]
struct Cli {
    /// Prize tier as AMOUNT:COUNT (repeatable)
    #[arg(short, long = "tier", global = true, value_parser = parse_tier)]
    tiers: Vec<PrizeTier>,

    /// JSON file with a list of {"amount", "initial_count"} tiers
    #[arg(long, global = true)]
    tiers_file: Option<PathBuf>,

    /// Pause before revealing each winner, in milliseconds
    #[arg(long, global = true, default_value_t = 2000)]
    delay_ms: u64,

    /// Seed the shuffle for a reproducible draw order
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Do not ring the terminal bell
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive draw console (default)
    Run,
    /// Draw envelopes for the given guests, in order
    Draw {
        /// Guest names
        #[arg(required = true)]
        names: Vec<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the configured tiers and pool
    Pool {
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_tier(s: &str) -> Result<PrizeTier, String> {
    s.parse::<PrizeTier>().map_err(|e: DrawError| e.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = CliConfig {
        tiers_file: cli.tiers_file,
        tiers: cli.tiers,
        delay_ms: cli.delay_ms,
        seed: cli.seed,
        verbose: cli.verbose,
    };

    // Initialize logging; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_filter()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = cli.command.unwrap_or(Commands::Run);

    let result = match build_session(&config) {
        Ok(session) => {
            let target = feedback_target(&command);
            session.add_observer(Arc::new(ConsoleFeedback::new(!cli.quiet, target)));

            match command {
                Commands::Run => commands::run_console(&session).await,
                Commands::Draw { names, json } => {
                    commands::draw_names(&session, &names, json).await
                }
                Commands::Pool { json } => commands::show_pool(&session, json),
            }
        }
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// JSON output owns stdout, so draw feedback moves to stderr.
fn feedback_target(command: &Commands) -> Target {
    match command {
        Commands::Draw { json: true, .. } | Commands::Pool { json: true } => Target::Stderr,
        _ => Target::Stdout,
    }
}

fn build_session(config: &CliConfig) -> anyhow::Result<DrawSession> {
    let engine_config = config.engine_config()?;

    let session = match config.seed {
        Some(seed) => {
            tracing::debug!("Using seeded shuffle ({})", seed);
            let engine =
                PrizePoolEngine::new(engine_config.tiers, StdRng::seed_from_u64(seed))?;
            DrawSession::with_engine(engine, engine_config.reveal_delay)
        }
        None => DrawSession::new(engine_config)?,
    };

    Ok(session)
}
