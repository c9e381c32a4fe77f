use crate::criteria::{Category, SUB_CRITERIA_PER_CATEGORY};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Letter bands over the 0-100 grand total. Inclusive lower bounds, no
/// clamping: anything below 60 is an F, 90 and above is an A.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

pub fn letter_grade(score: f64) -> Grade {
    if score >= 90.0 {
        Grade::A
    } else if score >= 80.0 {
        Grade::B
    } else if score >= 70.0 {
        Grade::C
    } else if score >= 60.0 {
        Grade::D
    } else {
        Grade::F
    }
}

/// Weighted 0-100 total for one category round: sub-score x sub-weight,
/// summed in sub-criterion order.
pub fn weighted_category_total(
    category: Category,
    sub_scores: &[f64; SUB_CRITERIA_PER_CATEGORY],
) -> f64 {
    category
        .sub_criteria()
        .iter()
        .zip(sub_scores.iter())
        .map(|(criterion, score)| score * criterion.weight)
        .sum()
}

/// The category's share of the grand total: weighted total x overall weight.
pub fn category_contribution(
    category: Category,
    sub_scores: &[f64; SUB_CRITERIA_PER_CATEGORY],
) -> f64 {
    weighted_category_total(category, sub_scores) * category.weight()
}

/// Half-away-from-zero rounding at two decimals. Grand totals are stored
/// already rounded.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
