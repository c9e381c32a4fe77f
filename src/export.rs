use crate::contestant::Contestant;
use crate::criteria::{Category, CATEGORY_COUNT, SUB_CRITERIA_PER_CATEGORY};
use crate::error::{TallyError, TallyResult};
use crate::registry::Registry;
use chrono::Utc;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use strum::IntoEnumIterator;

/// Results filename for today's run, e.g.
/// `ransohan-fiesta-results-2026-08-21.csv`.
pub fn default_export_path() -> String {
    format!(
        "ransohan-fiesta-results-{}.csv",
        Utc::now().format("%Y-%m-%d")
    )
}

// 5 identity columns + 6 categories x (4 sub-scores + 1 weighted total).
fn header_row() -> Vec<String> {
    let mut headers = vec![
        "Rank".to_string(),
        "Contestant Name".to_string(),
        "Grade".to_string(),
        "Grand Total".to_string(),
        "Completed Categories".to_string(),
    ];
    for category in Category::iter() {
        let prefix = category.export_label();
        for sub in category.sub_criteria() {
            headers.push(format!("{} - {}", prefix, sub.column));
        }
        headers.push(format!("{} - Weighted Total", prefix));
    }
    headers
}

fn contestant_row(rank: usize, contestant: &Contestant) -> Vec<String> {
    let mut row = vec![
        rank.to_string(),
        contestant.name.clone(),
        contestant.grade.to_string(),
        format!("{:.2}", contestant.grand_total),
        format!("{}/{}", contestant.completed_categories, CATEGORY_COUNT),
    ];
    for category in Category::iter() {
        // Unsubmitted categories leave their five cells empty; a submitted
        // all-zero round still prints 0.00s.
        match contestant.scores.get(&category) {
            Some(sub_scores) => {
                for value in sub_scores.values() {
                    row.push(format!("{:.2}", value));
                }
            }
            None => {
                for _ in 0..SUB_CRITERIA_PER_CATEGORY {
                    row.push(String::new());
                }
            }
        }
        match contestant.totals.get(&category) {
            Some(total) => row.push(format!("{:.2}", total)),
            None => row.push(String::new()),
        }
    }
    row
}

/// Writes the ranked results CSV to any sink. An empty roster yields
/// `NothingToExport` before anything is written.
pub fn write_csv<W: Write>(registry: &Registry, sink: W) -> TallyResult<()> {
    if registry.is_empty() {
        return Err(TallyError::NothingToExport);
    }
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(header_row())?;
    for (index, contestant) in registry.ranked_list().iter().enumerate() {
        writer.write_record(contestant_row(index + 1, contestant))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the results CSV to a file, refusing to create the file when there
/// is nothing to export.
pub fn write_csv_file<P: AsRef<Path>>(registry: &Registry, path: P) -> TallyResult<()> {
    if registry.is_empty() {
        return Err(TallyError::NothingToExport);
    }
    let file = File::create(path)?;
    write_csv(registry, file)
}
