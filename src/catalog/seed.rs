//! The example workshops loaded by `CatalogStore::initialize`.
//!
//! These double as golden fixtures: ids 1..=3, categories
//! process-improvement / strategy / team-building, two of them featured.

use crate::catalog::identity::{Category, Difficulty, WorkshopId};
use crate::catalog::model::WorkshopRecord;
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid calendar dates")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn seed_records() -> Vec<WorkshopRecord> {
    vec![
        WorkshopRecord {
            id: WorkshopId(1),
            title: "Kaizen Email Process Mapping".into(),
            description: "Visual process mapping workshop to simplify email creation workflows using continuous improvement principles".into(),
            duration: "2 hours".into(),
            participants: "6-8 team members".into(),
            category: Category::ProcessImprovement,
            tags: strings(&[
                "kaizen",
                "email",
                "process-mapping",
                "burger-king",
                "continuous-improvement",
            ]),
            materials: "Sticky notes, markers, whiteboard, timer".into(),
            objectives: "Map current email process, identify pain points, implement quick wins".into(),
            difficulty: Difficulty::Intermediate,
            date_created: date(2024, 6, 12),
            last_updated: date(2024, 6, 12),
            featured: true,
            phases: Some(strings(&[
                "Current State Mapping (45 min)",
                "Analysis & Simplification (50 min)",
                "Action Planning (10 min)",
            ])),
        },
        WorkshopRecord {
            id: WorkshopId(2),
            title: "Clues You Can Use: Personalization Lab".into(),
            description: "Interactive brand personalization workshop using clue-based strategy development and cohort scenario analysis".into(),
            duration: "2.5 hours".into(),
            participants: "19 brand teams (5-6 per team)".into(),
            category: Category::Strategy,
            tags: strings(&[
                "personalization",
                "brand-strategy",
                "cohort-analysis",
                "clue-cards",
                "customer-insights",
            ]),
            materials: "Game boards, clue card packets, cohort scenarios, insights printouts, sticky notes, pens/markers".into(),
            objectives: "Brainstorm personalization clues, build personalized moment strategies, create activation triggers".into(),
            difficulty: Difficulty::Intermediate,
            date_created: date(2024, 6, 12),
            last_updated: date(2024, 6, 12),
            featured: false,
            phases: Some(strings(&[
                "Introduction & Room Setup (20 min)",
                "Activity 1: Brainstorm Clues (45 min)",
                "Activity 2: Build Personalized Moment Strategy (60 min)",
                "Synthesis & Voting (25 min)",
            ])),
        },
        WorkshopRecord {
            id: WorkshopId(3),
            title: "Dolor Sit Amet Facilitation".into(),
            description: "Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo".into(),
            duration: "90 minutes".into(),
            participants: "4-6 participants".into(),
            category: Category::TeamBuilding,
            tags: strings(&["consectetur", "adipiscing", "elit", "tempor"]),
            materials: "Ullamco laboris, nisi ut aliquip, ex ea commodo".into(),
            objectives: "Duis aute irure dolor in reprehenderit in voluptate velit esse".into(),
            difficulty: Difficulty::Beginner,
            date_created: date(2024, 6, 8),
            last_updated: date(2024, 6, 9),
            featured: true,
            phases: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn seed_ids_are_sequential_and_unique() {
        let records = seed_records();
        let ids: Vec<u64> = records.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let unique: BTreeSet<u64> = ids.into_iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn seed_has_two_featured_records() {
        let featured = seed_records().iter().filter(|r| r.featured).count();
        assert_eq!(featured, 2);
    }

    #[test]
    fn only_third_record_lacks_phases() {
        let records = seed_records();
        assert!(records[0].phases.is_some());
        assert!(records[1].phases.is_some());
        assert!(records[2].phases.is_none());
        assert!(records[2].last_updated > records[2].date_created);
    }
}
