//! Workshop records and the draft structure used to create them.
//!
//! Field names serialize in camelCase (`dateCreated`, `lastUpdated`) so JSON
//! output lines up with what the catalog front end renders. Drafts carry tags
//! as a single comma-separated string, exactly as typed into the add form;
//! `split_tags` turns that into the ordered tag list stored on the record.

use crate::catalog::identity::{Category, Difficulty, WorkshopId};
use crate::error::{CatalogError, CatalogResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One catalog entry describing a facilitation workshop.
pub struct WorkshopRecord {
    pub id: WorkshopId,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub participants: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub materials: String,
    pub objectives: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub date_created: NaiveDate,
    pub last_updated: NaiveDate,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phases: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Add-form input: every record field except the ones the store assigns.
///
/// `Default` matches a freshly opened form: empty text, category
/// `process-improvement`, difficulty `intermediate`.
pub struct WorkshopDraft {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub participants: String,
    pub category: Category,
    pub tags: String,
    pub materials: String,
    pub objectives: String,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phases: Option<Vec<String>>,
}

/// Draft fields that must be non-empty before a record is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Title,
    Description,
    Duration,
    Participants,
    Objectives,
}

impl DraftField {
    /// Required fields in form order.
    pub const REQUIRED: [DraftField; 5] = [
        DraftField::Title,
        DraftField::Description,
        DraftField::Duration,
        DraftField::Participants,
        DraftField::Objectives,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Description => "description",
            DraftField::Duration => "duration",
            DraftField::Participants => "participants",
            DraftField::Objectives => "objectives",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl WorkshopDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
            DraftField::Duration => &self.duration,
            DraftField::Participants => &self.participants,
            DraftField::Objectives => &self.objectives,
        }
    }

    /// Reject the draft on the first required field that is blank.
    ///
    /// Whitespace-only input counts as blank.
    pub fn validate(&self) -> CatalogResult<()> {
        for field in DraftField::REQUIRED {
            if self.field(field).trim().is_empty() {
                return Err(CatalogError::Validation { field });
            }
        }
        Ok(())
    }

    /// Build the record the store appends. Callers validate first.
    pub(crate) fn into_record(self, id: WorkshopId, today: NaiveDate) -> WorkshopRecord {
        WorkshopRecord {
            id,
            tags: split_tags(&self.tags),
            title: self.title,
            description: self.description,
            duration: self.duration,
            participants: self.participants,
            category: self.category,
            materials: self.materials,
            objectives: self.objectives,
            difficulty: self.difficulty,
            date_created: today,
            last_updated: today,
            featured: false,
            phases: self.phases,
        }
    }
}

/// Split a comma-separated tag string into trimmed, non-empty tags.
///
/// Order is preserved; duplicates are kept as typed.
pub fn split_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled_draft() -> WorkshopDraft {
        WorkshopDraft {
            title: "Retro Remix".into(),
            description: "Sailboat retrospective".into(),
            duration: "1 hour".into(),
            participants: "5-9 people".into(),
            objectives: "Surface risks".into(),
            ..WorkshopDraft::default()
        }
    }

    #[test]
    fn split_tags_trims_and_drops_empty_segments() {
        assert_eq!(
            split_tags(" kaizen ,  email,, agile "),
            vec!["kaizen", "email", "agile"]
        );
        assert!(split_tags("").is_empty());
        assert!(split_tags(" , ,").is_empty());
    }

    #[test]
    fn default_draft_matches_fresh_form() {
        let draft = WorkshopDraft::default();
        assert_eq!(draft.category, Category::ProcessImprovement);
        assert_eq!(draft.difficulty, Difficulty::Intermediate);
        assert!(draft.title.is_empty());
        assert!(draft.phases.is_none());
    }

    #[test]
    fn validate_reports_first_blank_field() {
        assert!(filled_draft().validate().is_ok());

        let mut draft = filled_draft();
        draft.duration = "   ".into();
        draft.objectives.clear();
        assert_eq!(
            draft.validate(),
            Err(CatalogError::Validation {
                field: DraftField::Duration
            })
        );
    }

    #[test]
    fn materials_and_tags_are_optional() {
        let mut draft = filled_draft();
        draft.materials.clear();
        draft.tags.clear();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn into_record_stamps_dates_and_clears_featured() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let mut draft = filled_draft();
        draft.tags = "retro, , agile".into();
        let record = draft.into_record(WorkshopId(7), day);
        assert_eq!(record.id, WorkshopId(7));
        assert_eq!(record.tags, vec!["retro", "agile"]);
        assert_eq!(record.date_created, day);
        assert_eq!(record.last_updated, day);
        assert!(!record.featured);
    }

    #[test]
    fn record_json_uses_camel_case_dates() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let record = filled_draft().into_record(WorkshopId(1), day);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["dateCreated"], json!("2024-06-12"));
        assert_eq!(value["lastUpdated"], json!("2024-06-12"));
        assert_eq!(value["category"], json!("process-improvement"));
        assert!(value.get("phases").is_none());
    }

    #[test]
    fn draft_deserializes_with_form_defaults() {
        let draft: WorkshopDraft =
            serde_json::from_value(json!({"title": "Only a title", "tags": "a,b"})).unwrap();
        assert_eq!(draft.title, "Only a title");
        assert_eq!(draft.category, Category::ProcessImprovement);
        assert_eq!(draft.difficulty, Difficulty::Intermediate);
        assert_eq!(
            draft.validate(),
            Err(CatalogError::Validation {
                field: DraftField::Description
            })
        );
    }
}
