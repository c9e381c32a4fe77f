use clap::Args;
use fiesta_tally::criteria::{parse_score_list, Category, CATEGORY_COUNT};
use fiesta_tally::error::TallyResult;
use fiesta_tally::registry::Registry;
use fiesta_tally::scoring;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    /// Contestant name; matching is trimmed and case-insensitive
    pub name: String,

    /// Category key: casualwear, shortswear, longgown, talent, qa, production
    pub category: Category,

    /// Four comma-separated sub-scores in criteria order, e.g. "85,90,88,92".
    /// Entries that are not numbers count as 0.
    pub scores: String,
}

pub fn run(args: SubmitArgs, registry: &mut Registry) -> TallyResult<()> {
    let values = parse_score_list(&args.scores);

    match registry.find_by_name(&args.name) {
        Some(existing) => info!(
            "✏️  Updating {} ({}/{} categories completed)",
            existing.name, existing.completed_categories, CATEGORY_COUNT
        ),
        None => info!("🆕 New contestant: {}", args.name.trim()),
    }

    for (criterion, value) in args.category.sub_criteria().iter().zip(values.iter()) {
        info!(
            "   {} ({:.0}%): {:.2}",
            criterion.label,
            criterion.weight * 100.0,
            value
        );
    }

    let subtotal = scoring::weighted_category_total(args.category, &values);
    let contribution = scoring::category_contribution(args.category, &values);
    info!(
        "🎯 {}: {:.2} weighted, {:.2} pts at {:.0}% weight",
        args.category.full_label(),
        subtotal,
        contribution,
        args.category.weight() * 100.0
    );

    let record = registry.submit(&args.name, args.category, values);
    info!(
        "🏆 {}: Grand Total {:.2} | Grade {} | {}/{} categories",
        record.name,
        record.grand_total,
        record.grade,
        record.completed_categories,
        CATEGORY_COUNT
    );
    Ok(())
}
