// ===== fiesta-tally/src/reports/mod.rs =====
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use fiesta_tally::contestant::Contestant;
use fiesta_tally::criteria::{Category, CATEGORY_COUNT};
use fiesta_tally::scoring::{self, Grade};
use strum::IntoEnumIterator;

fn grade_cell(grade: Grade) -> Cell {
    let color = match grade {
        Grade::A => Color::Green,
        Grade::B => Color::Blue,
        Grade::C => Color::Yellow,
        Grade::D => Color::DarkYellow,
        Grade::F => Color::Red,
    };
    Cell::new(grade).fg(color).add_attribute(Attribute::Bold)
}

fn rank_label(rank: usize) -> String {
    match rank {
        1 => "🥇 1".to_string(),
        2 => "🥈 2".to_string(),
        3 => "🥉 3".to_string(),
        n => n.to_string(),
    }
}

pub fn print_leaderboard(ranked: &[&Contestant]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("Contestant").add_attribute(Attribute::Bold),
        Cell::new("Done"),
    ];
    for category in Category::iter() {
        header.push(Cell::new(category.label()));
    }
    header.push(Cell::new("Total").fg(Color::Cyan));
    header.push(Cell::new("Grade").add_attribute(Attribute::Bold));
    table.add_row(header);

    // Numeric columns: Done, the six categories, Total.
    for i in 2..=(CATEGORY_COUNT + 3) {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (index, contestant) in ranked.iter().enumerate() {
        let mut row = vec![
            Cell::new(rank_label(index + 1)),
            Cell::new(&contestant.name).add_attribute(Attribute::Bold),
            Cell::new(format!(
                "{}/{}",
                contestant.completed_categories, CATEGORY_COUNT
            )),
        ];
        for category in Category::iter() {
            match contestant.totals.get(&category) {
                Some(total) => row.push(Cell::new(format!("{:.2}", total))),
                None => row.push(Cell::new("-")),
            }
        }
        row.push(
            Cell::new(format!("{:.2}", contestant.grand_total))
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
        );
        row.push(grade_cell(contestant.grade));
        table.add_row(row);
    }
    println!("\n{}", table);
}

pub fn print_contestant_detail(contestant: &Contestant) {
    println!("\n👤 {}", contestant.name);
    println!(
        "   Grand Total: {:.2} | Grade: {} | Completed: {}/{}",
        contestant.grand_total,
        contestant.grade,
        contestant.completed_categories,
        CATEGORY_COUNT
    );

    for entry in contestant.completion_status() {
        let category = entry.category;
        if !entry.completed {
            println!("\n{}: not yet judged", category.full_label());
            continue;
        }

        println!(
            "\n{} ({:.0}% of grand total)",
            category.full_label(),
            category.weight() * 100.0
        );

        let mut table = Table::new();
        table
            .load_preset(ASCII_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table.add_row(vec![
            Cell::new("Criterion").add_attribute(Attribute::Bold),
            Cell::new("Judging Notes"),
            Cell::new("Weight"),
            Cell::new("Score"),
        ]);
        for i in 2..=3 {
            if let Some(col) = table.column_mut(i) {
                col.set_cell_alignment(CellAlignment::Right);
            }
        }

        let values = match contestant.scores.get(&category) {
            Some(sub_scores) => sub_scores.values(),
            None => continue,
        };
        for (criterion, value) in category.sub_criteria().iter().zip(values.iter()) {
            table.add_row(vec![
                Cell::new(criterion.label),
                Cell::new(criterion.hint),
                Cell::new(format!("{:.0}%", criterion.weight * 100.0)),
                Cell::new(format!("{:.2}", value)),
            ]);
        }

        let contribution = contestant.totals.get(&category).copied().unwrap_or(0.0);
        let weighted_total = scoring::weighted_category_total(category, &values);
        table.add_row(vec![
            Cell::new("Weighted Total").add_attribute(Attribute::Bold),
            Cell::new(""),
            Cell::new(""),
            Cell::new(format!("{:.2}", weighted_total))
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
        ]);
        println!("{}", table);
        println!(
            "   Contribution to grand total: {:.2} pts at {:.0}% weight",
            contribution,
            category.weight() * 100.0
        );
    }
}
