use crate::reports;
use clap::Args;
use fiesta_tally::error::{TallyError, TallyResult};
use fiesta_tally::registry::Registry;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Contestant name; matching is trimmed and case-insensitive
    pub name: String,
}

pub fn run(args: ShowArgs, registry: &Registry) -> TallyResult<()> {
    let record = registry
        .find_by_name(&args.name)
        .ok_or_else(|| TallyError::NotFound(args.name.trim().to_string()))?;
    reports::print_contestant_detail(record);
    Ok(())
}
