use crate::reports;
use fiesta_tally::error::TallyResult;
use fiesta_tally::registry::Registry;
use tracing::info;

pub fn run(registry: &Registry) -> TallyResult<()> {
    if registry.is_empty() {
        info!("No contestants yet. Submit a category round to open the rankings.");
        return Ok(());
    }
    reports::print_leaderboard(&registry.ranked_list());
    Ok(())
}
