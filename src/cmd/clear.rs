use clap::Args;
use fiesta_tally::error::TallyResult;
use fiesta_tally::registry::Registry;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct ClearArgs {
    /// Confirm wiping every contestant record
    #[arg(long)]
    pub yes: bool,
}

pub fn run(args: ClearArgs, registry: &mut Registry) -> TallyResult<()> {
    if !args.yes {
        warn!(
            "⚠️  Refusing to clear {} contestant record(s); pass --yes to confirm",
            registry.len()
        );
        return Ok(());
    }
    let cleared = registry.len();
    registry.clear();
    info!("🧹 Cleared {} contestant record(s)", cleared);
    Ok(())
}
