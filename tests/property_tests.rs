use fiesta_tally::contestant::normalize_name;
use fiesta_tally::criteria::{coerce_score, parse_score_list, Category};
use fiesta_tally::registry::Registry;
use fiesta_tally::scoring::{
    category_contribution, letter_grade, round2, weighted_category_total,
};
use proptest::prelude::*;
use std::collections::HashSet;
use strum::IntoEnumIterator;

// Collision-heavy name pool: three distinct identities across six spellings.
const NAMES: [&str; 6] = [
    "Maria Clara",
    "maria clara",
    "  MARIA CLARA ",
    "Gabriela Silang",
    "gabriela silang",
    "Juan Luna",
];

// --- STRATEGIES ---

prop_compose! {
    fn arb_marks()(
        a in 0.0..=100.0f64,
        b in 0.0..=100.0f64,
        c in 0.0..=100.0f64,
        d in 0.0..=100.0f64
    ) -> [f64; 4] {
        [a, b, c, d]
    }
}

fn arb_category() -> impl Strategy<Value = Category> {
    proptest::sample::select(Category::iter().collect::<Vec<_>>())
}

// One submission: a name from the pool, a category, four marks.
fn arb_submission() -> impl Strategy<Value = (usize, Category, [f64; 4])> {
    (0..NAMES.len(), arb_category(), arb_marks())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn category_scores_stay_in_range(category in arb_category(), marks in arb_marks()) {
        let subtotal = weighted_category_total(category, &marks);
        prop_assert!((0.0..=100.0 + 1e-9).contains(&subtotal),
            "subtotal out of range: {}", subtotal);

        let contribution = category_contribution(category, &marks);
        let cap = category.weight() * 100.0;
        prop_assert!((0.0..=cap + 1e-9).contains(&contribution),
            "contribution out of range: {}", contribution);
    }

    #[test]
    fn raising_one_mark_never_lowers_the_contribution(
        category in arb_category(),
        marks in arb_marks(),
        index in 0usize..4,
        bump in 0.0..50.0f64
    ) {
        let mut raised = marks;
        raised[index] += bump;

        let before = category_contribution(category, &marks);
        let after = category_contribution(category, &raised);
        prop_assert!(after >= before,
            "contribution fell from {} to {} after raising mark {}", before, after, index);
    }

    #[test]
    fn higher_totals_never_earn_worse_grades(
        low in -50.0..150.0f64,
        delta in 0.0..100.0f64
    ) {
        let high = low + delta;
        prop_assert!(letter_grade(high) <= letter_grade(low),
            "grade({}) = {} worse than grade({}) = {}",
            high, letter_grade(high), low, letter_grade(low));
    }

    #[test]
    fn invariants_hold_after_any_submission_sequence(
        sequence in proptest::collection::vec(arb_submission(), 1..30)
    ) {
        let mut registry = Registry::new();
        let mut seen = HashSet::new();

        for (name_index, category, marks) in sequence {
            let name = NAMES[name_index];
            seen.insert(normalize_name(name));
            registry.submit(name, category, marks);

            prop_assert_eq!(registry.len(), seen.len());
            for record in registry.contestants() {
                let sum: f64 = record.totals.values().sum();
                prop_assert!((record.grand_total - round2(sum)).abs() < 1e-9,
                    "{}: grand total {} vs {}", record.name, record.grand_total, round2(sum));
                prop_assert_eq!(record.completed_categories, record.scores.len());
                prop_assert_eq!(record.grade, letter_grade(record.grand_total));
            }
        }
    }

    #[test]
    fn resubmission_is_idempotent(
        name_index in 0..NAMES.len(),
        category in arb_category(),
        marks in arb_marks()
    ) {
        let mut registry = Registry::new();
        let first = registry.submit(NAMES[name_index], category, marks).grand_total;
        let second = registry.submit(NAMES[name_index], category, marks).grand_total;

        prop_assert_eq!(first.to_bits(), second.to_bits());
        prop_assert_eq!(registry.len(), 1);
    }

    #[test]
    fn ranked_list_is_sorted_and_deterministic(
        sequence in proptest::collection::vec(arb_submission(), 1..30)
    ) {
        let mut registry = Registry::new();
        for (name_index, category, marks) in sequence {
            registry.submit(NAMES[name_index], category, marks);
        }

        let ranked = registry.ranked_list();
        for pair in ranked.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(
                a.grand_total > b.grand_total
                    || (a.grand_total == b.grand_total
                        && normalize_name(&a.name) <= normalize_name(&b.name)),
                "out of order: {} ({}) before {} ({})",
                a.name, a.grand_total, b.name, b.grand_total
            );
        }

        let first_pass: Vec<&str> = ranked.iter().map(|c| c.id.as_str()).collect();
        let second_pass: Vec<&str> =
            registry.ranked_list().iter().map(|c| c.id.as_str()).collect();
        prop_assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn score_coercion_never_panics(raw in any::<String>()) {
        let value = coerce_score(&raw);
        prop_assert!(value.is_finite(), "coerced to non-finite: {}", value);

        let values = parse_score_list(&raw);
        prop_assert!(values.iter().all(|v| v.is_finite()));
    }
}
