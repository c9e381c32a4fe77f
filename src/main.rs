// ===== fiesta-tally/src/main.rs =====
use clap::{Parser, Subcommand};
use fiesta_tally::error::TallyResult;
use fiesta_tally::registry::Registry;
use fiesta_tally::store;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Contestant store file, loaded on startup and rewritten after every
    /// mutating command.
    #[arg(global = true, short, long, default_value = store::DEFAULT_STORE_FILE)]
    store: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit one category's sub-scores for a contestant
    Submit(cmd::submit::SubmitArgs),
    /// Print the leaderboard
    Rank,
    /// Show one contestant's full scorecard
    Show(cmd::show::ShowArgs),
    /// Remove a contestant from the running
    Remove(cmd::remove::RemoveArgs),
    /// Wipe every contestant record
    Clear(cmd::clear::ClearArgs),
    /// Export the ranked results as CSV
    Export(cmd::export::ExportArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    info!("🚀 Ransohan Fiesta Pageant Tabulator");
    info!("📂 Loading store: {}", cli.store);

    let records = store::load(&cli.store).unwrap_or_else(|e| {
        error!("❌ Failed to load store: {}", e);
        process::exit(1);
    });
    let mut registry = Registry::from_contestants(records);

    if let Err(e) = dispatch(&cli, &mut registry) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn dispatch(cli: &Cli, registry: &mut Registry) -> TallyResult<()> {
    match &cli.command {
        Commands::Submit(args) => {
            cmd::submit::run(args.clone(), registry)?;
            store::save(&cli.store, registry.contestants())
        }
        Commands::Rank => cmd::rank::run(registry),
        Commands::Show(args) => cmd::show::run(args.clone(), registry),
        Commands::Remove(args) => {
            cmd::remove::run(args.clone(), registry)?;
            store::save(&cli.store, registry.contestants())
        }
        Commands::Clear(args) => {
            cmd::clear::run(args.clone(), registry)?;
            store::save(&cli.store, registry.contestants())
        }
        Commands::Export(args) => cmd::export::run(args.clone(), registry),
    }
}
