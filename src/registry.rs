use crate::contestant::{normalize_name, Contestant};
use crate::criteria::{Category, SUB_CRITERIA_PER_CATEGORY};
use std::cmp::Ordering;
use tracing::warn;

/// Sole owner of the contestant list. Every mutation leaves each record's
/// derived fields freshly recomputed.
#[derive(Debug, Default)]
pub struct Registry {
    contestants: Vec<Contestant>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a registry from loaded records. Raw sub-scores are the only
    /// trusted input: ids, totals, grades and completion counts are all
    /// re-derived, and records whose normalized name duplicates an earlier
    /// one are dropped.
    pub fn from_contestants(records: Vec<Contestant>) -> Self {
        let mut registry = Self::new();
        for record in records {
            if registry.find_by_name(&record.name).is_some() {
                warn!("⚠️  Dropping duplicate store entry for '{}'", record.name);
                continue;
            }
            let mut rebuilt = Contestant::new(&record.name);
            for (category, sub_scores) in &record.scores {
                rebuilt.record_category(*category, sub_scores.values());
            }
            registry.contestants.push(rebuilt);
        }
        registry
    }

    /// Trimmed, case-insensitive lookup.
    pub fn find_by_name(&self, name: &str) -> Option<&Contestant> {
        let normalized = normalize_name(name);
        self.contestants
            .iter()
            .find(|c| normalize_name(&c.name) == normalized)
    }

    /// Create-or-update submission of one category round. A contestant comes
    /// into existence on first submission; a resubmitted category replaces
    /// the earlier marks wholesale. Returns the stored record.
    pub fn submit(
        &mut self,
        name: &str,
        category: Category,
        values: [f64; SUB_CRITERIA_PER_CATEGORY],
    ) -> &Contestant {
        let normalized = normalize_name(name);
        let index = match self
            .contestants
            .iter()
            .position(|c| normalize_name(&c.name) == normalized)
        {
            Some(i) => i,
            None => {
                self.contestants.push(Contestant::new(name));
                self.contestants.len() - 1
            }
        };
        self.contestants[index].record_category(category, values);
        &self.contestants[index]
    }

    /// Removes by id. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.contestants.len();
        self.contestants.retain(|c| c.id != id);
        self.contestants.len() != before
    }

    pub fn clear(&mut self) {
        self.contestants.clear();
    }

    /// Presentation order: grand total descending, ties broken by normalized
    /// name ascending so repeated runs print the same ranking.
    pub fn ranked_list(&self) -> Vec<&Contestant> {
        let mut ranked: Vec<&Contestant> = self.contestants.iter().collect();
        ranked.sort_by(|a, b| {
            b.grand_total
                .partial_cmp(&a.grand_total)
                .unwrap_or(Ordering::Equal)
                .then_with(|| normalize_name(&a.name).cmp(&normalize_name(&b.name)))
        });
        ranked
    }

    /// Insertion-ordered view, as persisted.
    pub fn contestants(&self) -> &[Contestant] {
        &self.contestants
    }

    pub fn len(&self) -> usize {
        self.contestants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contestants.is_empty()
    }
}
