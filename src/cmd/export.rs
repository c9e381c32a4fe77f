use clap::Args;
use fiesta_tally::error::{TallyError, TallyResult};
use fiesta_tally::export::{default_export_path, write_csv_file};
use fiesta_tally::registry::Registry;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output file; defaults to ransohan-fiesta-results-<date>.csv
    #[arg(short, long)]
    pub output: Option<String>,
}

pub fn run(args: ExportArgs, registry: &Registry) -> TallyResult<()> {
    let path = args.output.unwrap_or_else(default_export_path);
    match write_csv_file(registry, &path) {
        Ok(()) => {
            info!("💾 Exported {} contestant(s) to {}", registry.len(), path);
            Ok(())
        }
        Err(TallyError::NothingToExport) => {
            warn!("⚠️  No contestants to export; no file written");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
