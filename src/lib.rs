//! In-memory catalog of facilitation workshops.
//!
//! The crate exposes the catalog data model, the search/category filter, and
//! the validated create operation, plus the display projections and CLI
//! plumbing used by `workshop-browser`. Nothing is persisted: a store lives
//! as long as the value that owns it.

pub mod catalog;
pub mod config;
pub mod draft_schema;
pub mod error;
pub mod logging;
pub mod view;

pub use catalog::{
    CatalogStore, Category, CategoryFilter, Difficulty, DraftField, QueryParameters,
    SharedCatalog, WorkshopDraft, WorkshopId, WorkshopRecord, seed_records, split_tags,
};
pub use config::CatalogConfig;
pub use draft_schema::DraftSchema;
pub use error::{CatalogError, CatalogResult};
pub use view::{CatalogSummary, WorkshopCard, visible_cards};
