use crate::criteria::{Category, Family, SUB_CRITERIA_PER_CATEGORY};
use crate::scoring::{self, Grade};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// Raw judge marks for one submitted category, shaped by the category's
/// family. Field order matches the catalog order in `criteria`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubScores {
    Fashion {
        carriage: f64,
        stylishness: f64,
        presentation: f64,
        audience: f64,
    },
    Talent {
        choreography: f64,
        originality: f64,
        performance: f64,
        audience: f64,
    },
    Qa {
        relevance: f64,
        delivery: f64,
        articulation: f64,
        audience: f64,
    },
    Production {
        mastery: f64,
        bearing: f64,
        presentation: f64,
        audience: f64,
    },
}

impl SubScores {
    pub fn from_values(category: Category, values: [f64; SUB_CRITERIA_PER_CATEGORY]) -> Self {
        match category.family() {
            Family::Fashion => Self::Fashion {
                carriage: values[0],
                stylishness: values[1],
                presentation: values[2],
                audience: values[3],
            },
            Family::Talent => Self::Talent {
                choreography: values[0],
                originality: values[1],
                performance: values[2],
                audience: values[3],
            },
            Family::Qa => Self::Qa {
                relevance: values[0],
                delivery: values[1],
                articulation: values[2],
                audience: values[3],
            },
            Family::Production => Self::Production {
                mastery: values[0],
                bearing: values[1],
                presentation: values[2],
                audience: values[3],
            },
        }
    }

    /// The four marks in catalog order.
    pub fn values(&self) -> [f64; SUB_CRITERIA_PER_CATEGORY] {
        match *self {
            Self::Fashion {
                carriage,
                stylishness,
                presentation,
                audience,
            } => [carriage, stylishness, presentation, audience],
            Self::Talent {
                choreography,
                originality,
                performance,
                audience,
            } => [choreography, originality, performance, audience],
            Self::Qa {
                relevance,
                delivery,
                articulation,
                audience,
            } => [relevance, delivery, articulation, audience],
            Self::Production {
                mastery,
                bearing,
                presentation,
                audience,
            } => [mastery, bearing, presentation, audience],
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Self::Fashion { .. } => Family::Fashion,
            Self::Talent { .. } => Family::Talent,
            Self::Qa { .. } => Family::Qa,
            Self::Production { .. } => Family::Production,
        }
    }
}

/// Identity key for lookups and duplicate detection. The stored display name
/// keeps its first-seen spelling.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Stable opaque id derived from the normalized name.
pub fn contestant_id(name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalize_name(name).as_bytes());
    let digest = hasher.finalize();
    hex::encode(&digest[..8])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionEntry {
    pub category: Category,
    pub completed: bool,
}

/// One contestant's full tabulation state. `scores` and `totals` carry
/// entries only for categories that have been submitted; absence means "not
/// yet judged", which is distinct from an all-zero submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contestant {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "de_sparse_map")]
    pub scores: BTreeMap<Category, SubScores>,
    #[serde(deserialize_with = "de_sparse_map")]
    pub totals: BTreeMap<Category, f64>,
    pub grand_total: f64,
    pub grade: Grade,
    pub completed_categories: usize,
}

impl Contestant {
    pub fn new(name: &str) -> Self {
        Self {
            id: contestant_id(name),
            name: name.to_string(),
            scores: BTreeMap::new(),
            totals: BTreeMap::new(),
            grand_total: 0.0,
            grade: Grade::F,
            completed_categories: 0,
        }
    }

    /// Records one category round, replacing any earlier marks for it, then
    /// refreshes every derived field.
    pub fn record_category(
        &mut self,
        category: Category,
        values: [f64; SUB_CRITERIA_PER_CATEGORY],
    ) {
        let contribution = scoring::category_contribution(category, &values);
        self.scores
            .insert(category, SubScores::from_values(category, values));
        self.totals.insert(category, contribution);
        self.recompute_derived();
    }

    /// Re-derives grand total, grade and completion count from the category
    /// maps. Always a full pass, never incremental.
    pub fn recompute_derived(&mut self) {
        let sum: f64 = self.totals.values().sum();
        self.grand_total = scoring::round2(sum);
        self.grade = scoring::letter_grade(self.grand_total);
        self.completed_categories = self.scores.len();
    }

    /// Per-category completion flags in canonical order, always six entries.
    pub fn completion_status(&self) -> Vec<CompletionEntry> {
        Category::iter()
            .map(|category| CompletionEntry {
                category,
                completed: self.scores.contains_key(&category),
            })
            .collect()
    }
}

// Browser-era stores write explicit nulls for categories that were never
// submitted. Those entries load as absent.
fn de_sparse_map<'de, D, V>(deserializer: D) -> Result<BTreeMap<Category, V>, D::Error>
where
    D: serde::Deserializer<'de>,
    V: Deserialize<'de>,
{
    let full = BTreeMap::<Category, Option<V>>::deserialize(deserializer)?;
    Ok(full
        .into_iter()
        .filter_map(|(category, value)| value.map(|v| (category, v)))
        .collect())
}
