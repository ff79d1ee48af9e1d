//! Workshop catalog core.
//!
//! `identity` holds the small value types (ids, categories, difficulty),
//! `model` the record and draft structs, `query` the visibility predicate, and
//! `store` the in-memory `CatalogStore` that ties them together. Use
//! `SharedCatalog` when more than one thread needs the same store.

pub mod identity;
pub mod model;
pub mod query;
pub mod seed;
pub mod shared;
pub mod store;

pub use identity::{
    ALL_CATEGORIES_LABEL, ALL_CATEGORIES_VALUE, Category, CategoryFilter, Difficulty, WorkshopId,
};
pub use model::{DraftField, WorkshopDraft, WorkshopRecord, split_tags};
pub use query::QueryParameters;
pub use seed::seed_records;
pub use shared::SharedCatalog;
pub use store::CatalogStore;
