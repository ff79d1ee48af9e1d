//! In-memory catalog store.
//!
//! Owns the ordered record list plus the two live query parameters. The
//! visible set is derived on every call; nothing is cached, so it can never go
//! stale after a mutation. Records are append-only: there is no update or
//! delete, which is what keeps `count + 1` id assignment unique.

use crate::catalog::identity::{Category, CategoryFilter, WorkshopId};
use crate::catalog::model::{WorkshopDraft, WorkshopRecord};
use crate::catalog::query::QueryParameters;
use crate::catalog::seed::seed_records;
use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};
use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

#[derive(Clone, Debug, Default)]
pub struct CatalogStore {
    records: Vec<WorkshopRecord>,
    query: QueryParameters,
    strict_categories: bool,
}

impl CatalogStore {
    /// Empty store with permissive category handling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the example workshops.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.initialize();
        store
    }

    /// Apply configuration; seeds the store unless the config disables it.
    pub fn from_config(config: &CatalogConfig) -> Self {
        let mut store = Self {
            strict_categories: config.strict_categories,
            ..Self::default()
        };
        if config.seed {
            store.initialize();
        }
        store
    }

    /// Replace the records with the example set and reset the query.
    pub fn initialize(&mut self) {
        self.records = seed_records();
        self.query = QueryParameters::default();
        debug!(records = self.records.len(), "catalog initialized");
    }

    pub fn strict_categories(&self) -> bool {
        self.strict_categories
    }

    pub fn set_strict_categories(&mut self, strict: bool) {
        self.strict_categories = strict;
    }

    pub fn query(&self) -> &QueryParameters {
        &self.query
    }

    pub fn search_term(&self) -> &str {
        &self.query.search_term
    }

    pub fn selected_category(&self) -> &CategoryFilter {
        &self.query.category
    }

    /// Replace the search term. Empty means no text filter.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        debug!(search_term = %self.query.search_term, "search term updated");
    }

    /// Replace the category filter from its raw value.
    ///
    /// Values outside `all` and the four categories are kept as a filter that
    /// matches nothing, unless strict mode is on, in which case they are
    /// rejected and the current filter stays in place.
    pub fn set_category(&mut self, value: &str) -> CatalogResult<()> {
        let filter = CategoryFilter::from_value(value);
        if !filter.is_recognized() {
            if self.strict_categories {
                warn!(category = value, "rejected unknown category filter");
                return Err(CatalogError::InvalidCategory(value.to_string()));
            }
            warn!(category = value, "unknown category filter; no records will match");
        }
        self.set_category_filter(filter);
        Ok(())
    }

    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        debug!(category = filter.as_str(), "category filter updated");
        self.query.category = filter;
    }

    /// Restore `("", "all")` without touching the records.
    pub fn reset_query(&mut self) {
        self.query = QueryParameters::default();
        debug!("query reset");
    }

    /// Records passing the current query, in insertion order.
    pub fn visible_records(&self) -> Vec<&WorkshopRecord> {
        self.query.filter(&self.records)
    }

    /// Validate `draft`, then append it dated with today's local date.
    pub fn add_record(&mut self, draft: WorkshopDraft) -> CatalogResult<&WorkshopRecord> {
        let today = Local::now().date_naive();
        self.add_record_on(draft, today)
    }

    /// Validate `draft`, then append it with both dates set to `today`.
    ///
    /// On error nothing is appended and no id is consumed.
    pub fn add_record_on(
        &mut self,
        draft: WorkshopDraft,
        today: NaiveDate,
    ) -> CatalogResult<&WorkshopRecord> {
        if let Err(err) = draft.validate() {
            warn!(error = %err, "rejected workshop draft");
            return Err(err);
        }

        let id = self.next_id();
        let record = draft.into_record(id, today);
        info!(
            id = id.0,
            category = record.category.as_str(),
            title = %record.title,
            "workshop added"
        );
        let index = self.records.len();
        self.records.push(record);
        Ok(&self.records[index])
    }

    // Only unique while records are never removed.
    fn next_id(&self) -> WorkshopId {
        WorkshopId(self.records.len() as u64 + 1)
    }

    pub fn records(&self) -> &[WorkshopRecord] {
        &self.records
    }

    pub fn record(&self, id: WorkshopId) -> Option<&WorkshopRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn total_count(&self) -> usize {
        self.records.len()
    }

    pub fn featured_count(&self) -> usize {
        self.records.iter().filter(|record| record.featured).count()
    }

    /// Number of selectable categories, independent of the records present.
    pub fn category_count(&self) -> usize {
        Category::ALL.len()
    }
}
