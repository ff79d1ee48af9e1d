//! Display projections: workshop cards and the summary footer.

use crate::catalog::{CatalogStore, Category, Difficulty, WorkshopId, WorkshopRecord};
use chrono::NaiveDate;
use serde::Serialize;

/// Tags shown on a card before collapsing the rest into "+N more".
pub const CARD_TAG_LIMIT: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopCard {
    pub id: WorkshopId,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub participants: String,
    pub objectives: String,
    pub category: Category,
    pub category_label: &'static str,
    pub difficulty: Difficulty,
    pub featured: bool,
    pub tags: Vec<String>,
    pub more_tags: usize,
    pub last_updated: NaiveDate,
}

impl WorkshopCard {
    pub fn from_record(record: &WorkshopRecord) -> Self {
        let shown: Vec<String> = record.tags.iter().take(CARD_TAG_LIMIT).cloned().collect();
        Self {
            id: record.id,
            title: record.title.clone(),
            description: record.description.clone(),
            duration: record.duration.clone(),
            participants: record.participants.clone(),
            objectives: record.objectives.clone(),
            category: record.category,
            category_label: record.category.label(),
            difficulty: record.difficulty,
            featured: record.featured,
            more_tags: record.tags.len() - shown.len(),
            tags: shown,
            last_updated: record.last_updated,
        }
    }

    /// "+N more" badge text, if any tags were collapsed.
    pub fn more_tags_label(&self) -> Option<String> {
        (self.more_tags > 0).then(|| format!("+{} more", self.more_tags))
    }

    pub fn updated_label(&self) -> String {
        format!("Updated {}", self.last_updated.format("%Y-%m-%d"))
    }
}

/// Footer counts, always taken over every record regardless of the query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub total: usize,
    pub featured: usize,
    pub categories: usize,
}

impl CatalogSummary {
    pub fn of(store: &CatalogStore) -> Self {
        Self {
            total: store.total_count(),
            featured: store.featured_count(),
            categories: store.category_count(),
        }
    }
}

/// Cards for the currently visible records.
pub fn visible_cards(store: &CatalogStore) -> Vec<WorkshopCard> {
    store
        .visible_records()
        .into_iter()
        .map(WorkshopCard::from_record)
        .collect()
}
