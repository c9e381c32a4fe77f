use clap::Args;
use fiesta_tally::error::TallyResult;
use fiesta_tally::registry::Registry;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct RemoveArgs {
    /// Contestant name; matching is trimmed and case-insensitive
    pub name: String,
}

pub fn run(args: RemoveArgs, registry: &mut Registry) -> TallyResult<()> {
    let (id, removed_name) = match registry.find_by_name(&args.name) {
        Some(record) => (record.id.clone(), record.name.clone()),
        None => {
            // Removal is idempotent; an unknown name is not a failure.
            warn!(
                "⚠️  No contestant named '{}'; nothing removed",
                args.name.trim()
            );
            return Ok(());
        }
    };
    registry.remove(&id);
    info!("🗑️  Removed {}", removed_name);
    Ok(())
}
