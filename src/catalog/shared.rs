//! Thread-safe handle around a `CatalogStore`.
//!
//! Writers (query setters, `add_record`) serialize on the write lock; readers
//! share the read lock and receive owned clones so no guard escapes.

use crate::catalog::identity::WorkshopId;
use crate::catalog::model::{WorkshopDraft, WorkshopRecord};
use crate::catalog::query::QueryParameters;
use crate::catalog::store::CatalogStore;
use crate::error::CatalogResult;
use chrono::NaiveDate;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Clone, Debug, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<CatalogStore>>,
}

impl SharedCatalog {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    // Store operations never leave it half-updated, so a poisoned lock is
    // still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, CatalogStore> {
        self.inner.read().unwrap_or_else(|err| err.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, CatalogStore> {
        self.inner.write().unwrap_or_else(|err| err.into_inner())
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        self.write().set_search_term(term);
    }

    pub fn set_category(&self, value: &str) -> CatalogResult<()> {
        self.write().set_category(value)
    }

    pub fn reset_query(&self) {
        self.write().reset_query();
    }

    pub fn add_record(&self, draft: WorkshopDraft) -> CatalogResult<WorkshopRecord> {
        self.write().add_record(draft).cloned()
    }

    pub fn add_record_on(&self, draft: WorkshopDraft, today: NaiveDate) -> CatalogResult<WorkshopRecord> {
        self.write().add_record_on(draft, today).cloned()
    }

    pub fn query(&self) -> QueryParameters {
        self.read().query().clone()
    }

    pub fn visible_records(&self) -> Vec<WorkshopRecord> {
        self.read().visible_records().into_iter().cloned().collect()
    }

    pub fn record(&self, id: WorkshopId) -> Option<WorkshopRecord> {
        self.read().record(id).cloned()
    }

    pub fn total_count(&self) -> usize {
        self.read().total_count()
    }

    pub fn featured_count(&self) -> usize {
        self.read().featured_count()
    }

    /// Run `f` against a consistent snapshot under one read lock.
    pub fn with_store<R>(&self, f: impl FnOnce(&CatalogStore) -> R) -> R {
        f(&self.read())
    }
}
