use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::warn;

pub const CATEGORY_COUNT: usize = 6;
pub const SUB_CRITERIA_PER_CATEGORY: usize = 4;

/// The six scoring rounds of the pageant, in canonical program order.
/// Overall weights sum to 1.00.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Casualwear,
    Shortswear,
    Longgown,
    Talent,
    Qa,
    Production,
}

/// Sub-criteria profile shared by one or more categories.
/// The three wear rounds all judge the same four fashion marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Fashion,
    Talent,
    Qa,
    Production,
}

#[derive(Debug, Clone, Copy)]
pub struct SubCriterion {
    pub key: &'static str,
    pub label: &'static str,
    // Short name used for export column headers.
    pub column: &'static str,
    pub weight: f64,
    pub hint: &'static str,
}

// Sub-weights sum to 1.00 per family; Audience Response is pinned at 0.15
// everywhere.
static FASHION_CRITERIA: [SubCriterion; SUB_CRITERIA_PER_CATEGORY] = [
    SubCriterion {
        key: "carriage",
        label: "Carriage",
        column: "Carriage",
        weight: 0.30,
        hint: "Posture, confidence, walk, elegance",
    },
    SubCriterion {
        key: "stylishness",
        label: "Stylishness of Outfit",
        column: "Stylishness",
        weight: 0.30,
        hint: "Fashion sense, fit, coordination, appropriateness",
    },
    SubCriterion {
        key: "presentation",
        label: "Overall Presentation",
        column: "Presentation",
        weight: 0.25,
        hint: "Stage presence, poise, charisma, confidence",
    },
    SubCriterion {
        key: "audience",
        label: "Audience Response",
        column: "Audience",
        weight: 0.15,
        hint: "Crowd engagement, applause, reaction",
    },
];

static TALENT_CRITERIA: [SubCriterion; SUB_CRITERIA_PER_CATEGORY] = [
    SubCriterion {
        key: "choreography",
        label: "Choreography",
        column: "Choreography",
        weight: 0.30,
        hint: "Including entrance & exit, flow, transitions",
    },
    SubCriterion {
        key: "originality",
        label: "Originality",
        column: "Originality",
        weight: 0.25,
        hint: "Creativity, uniqueness, innovation",
    },
    SubCriterion {
        key: "performance",
        label: "Overall Performance",
        column: "Performance",
        weight: 0.30,
        hint: "Execution, skill, technique, energy",
    },
    SubCriterion {
        key: "audience",
        label: "Audience Response",
        column: "Audience",
        weight: 0.15,
        hint: "Crowd engagement, applause, reaction",
    },
];

static QA_CRITERIA: [SubCriterion; SUB_CRITERIA_PER_CATEGORY] = [
    SubCriterion {
        key: "relevance",
        label: "Relevance, Content, Wit & Impact",
        column: "Relevance",
        weight: 0.35,
        hint: "Answer relevance, substance, cleverness, impact",
    },
    SubCriterion {
        key: "delivery",
        label: "Delivery & Choice of Words",
        column: "Delivery",
        weight: 0.25,
        hint: "Confidence, pacing, word selection, clarity",
    },
    SubCriterion {
        key: "articulation",
        label: "Articulation, Diction & Grammar",
        column: "Articulation",
        weight: 0.25,
        hint: "Pronunciation, enunciation, proper grammar",
    },
    SubCriterion {
        key: "audience",
        label: "Audience Response",
        column: "Audience",
        weight: 0.15,
        hint: "Crowd engagement, applause, reaction",
    },
];

static PRODUCTION_CRITERIA: [SubCriterion; SUB_CRITERIA_PER_CATEGORY] = [
    SubCriterion {
        key: "mastery",
        label: "Mastery Performance",
        column: "Mastery",
        weight: 0.30,
        hint: "Skill level, technique, precision, control",
    },
    SubCriterion {
        key: "bearing",
        label: "Personal Bearing",
        column: "Bearing",
        weight: 0.25,
        hint: "Confidence, stage presence, professionalism",
    },
    SubCriterion {
        key: "presentation",
        label: "Overall Presentation",
        column: "Presentation",
        weight: 0.30,
        hint: "Costume, props, staging, visual impact",
    },
    SubCriterion {
        key: "audience",
        label: "Audience Response",
        column: "Audience",
        weight: 0.15,
        hint: "Crowd engagement, applause, reaction",
    },
];

impl Category {
    /// Share of the grand total carried by this category.
    pub fn weight(&self) -> f64 {
        match self {
            Self::Casualwear => 0.10,
            Self::Shortswear => 0.15,
            Self::Longgown => 0.20,
            Self::Talent => 0.20,
            Self::Qa => 0.25,
            Self::Production => 0.10,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Casualwear => "Casualwear",
            Self::Shortswear => "Shortswear",
            Self::Longgown => "Long Gown",
            Self::Talent => "Talent",
            Self::Qa => "Q&A",
            Self::Production => "Production #",
        }
    }

    pub fn full_label(&self) -> &'static str {
        match self {
            Self::Casualwear => "Best in Casualwear",
            Self::Shortswear => "Best in Shortswear",
            Self::Longgown => "Best in Long Gown",
            Self::Talent => "Best in Talent",
            Self::Qa => "Best in Q&A",
            Self::Production => "Best in Production Number",
        }
    }

    // Column prefix in the results CSV ("Production", not "Production #").
    pub fn export_label(&self) -> &'static str {
        match self {
            Self::Production => "Production",
            other => other.label(),
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Self::Casualwear | Self::Shortswear | Self::Longgown => Family::Fashion,
            Self::Talent => Family::Talent,
            Self::Qa => Family::Qa,
            Self::Production => Family::Production,
        }
    }

    pub fn sub_criteria(&self) -> &'static [SubCriterion; SUB_CRITERIA_PER_CATEGORY] {
        self.family().sub_criteria()
    }
}

impl Family {
    pub fn sub_criteria(&self) -> &'static [SubCriterion; SUB_CRITERIA_PER_CATEGORY] {
        match self {
            Self::Fashion => &FASHION_CRITERIA,
            Self::Talent => &TALENT_CRITERIA,
            Self::Qa => &QA_CRITERIA,
            Self::Production => &PRODUCTION_CRITERIA,
        }
    }
}

/// Coerces one raw judge entry to a score. Anything that does not parse as a
/// finite number counts as 0 rather than rejecting the submission.
pub fn coerce_score(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Maps a comma-separated score list to exactly four values in sub-criterion
/// order. Missing entries pad with 0, extras beyond four are dropped.
pub fn parse_score_list(raw: &str) -> [f64; SUB_CRITERIA_PER_CATEGORY] {
    let mut values = [0.0; SUB_CRITERIA_PER_CATEGORY];
    let mut parts = raw.split(',');
    for slot in values.iter_mut() {
        if let Some(part) = parts.next() {
            *slot = coerce_score(part);
        }
    }
    let extras = parts.count();
    if extras > 0 {
        warn!(
            "⚠️  Ignoring {} extra score value(s); each category takes {}",
            extras, SUB_CRITERIA_PER_CATEGORY
        );
    }
    values
}
