#![allow(dead_code)]

use fiesta_tally::criteria::{Category, SUB_CRITERIA_PER_CATEGORY};
use fiesta_tally::registry::Registry;
use strum::IntoEnumIterator;

/// Same mark on all four sub-criteria; the weighted category total then
/// equals the mark itself.
pub fn flat(value: f64) -> [f64; SUB_CRITERIA_PER_CATEGORY] {
    [value; SUB_CRITERIA_PER_CATEGORY]
}

/// Submits the same flat marks across all six categories, so the grand
/// total also equals the mark.
pub fn submit_all(registry: &mut Registry, name: &str, value: f64) {
    for category in Category::iter() {
        registry.submit(name, category, flat(value));
    }
}

/// Three fully-judged contestants with distinct grand totals.
pub fn sample_registry() -> Registry {
    let mut registry = Registry::new();
    submit_all(&mut registry, "Maria Clara", 90.0);
    submit_all(&mut registry, "Gabriela Silang", 75.0);
    submit_all(&mut registry, "Juan Luna", 60.0);
    registry
}
