//! Live query parameters and the visibility predicate.
//!
//! A record is visible when its category passes the filter AND the search
//! term is empty or appears (case-insensitively) in the title, the
//! description, or any tag. Materials, objectives and participants are not
//! searched.

use crate::catalog::identity::CategoryFilter;
use crate::catalog::model::WorkshopRecord;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameters {
    pub search_term: String,
    pub category: CategoryFilter,
}

impl QueryParameters {
    pub fn new(search_term: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search_term: search_term.into(),
            category,
        }
    }

    /// Both filters are inactive: every record is visible.
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty() && self.category == CategoryFilter::All
    }

    pub fn matches(&self, record: &WorkshopRecord) -> bool {
        self.category.admits(record.category) && text_matches(record, &self.search_term)
    }

    /// Matching records in their original order.
    pub fn filter<'a, I>(&self, records: I) -> Vec<&'a WorkshopRecord>
    where
        I: IntoIterator<Item = &'a WorkshopRecord>,
    {
        // Lowercase the needle once instead of per record.
        let needle = self.search_term.to_lowercase();
        records
            .into_iter()
            .filter(|record| {
                self.category.admits(record.category) && contains_lowercased(record, &needle)
            })
            .collect()
    }
}

fn text_matches(record: &WorkshopRecord, term: &str) -> bool {
    contains_lowercased(record, &term.to_lowercase())
}

fn contains_lowercased(record: &WorkshopRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}
