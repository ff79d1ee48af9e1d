use crate::error::CatalogError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier of a workshop record, assigned sequentially at creation time.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkshopId(pub u64);

impl fmt::Display for WorkshopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed classification used for filtering.
///
/// Serialized as the kebab-case value (`process-improvement`, ...). Unknown
/// values are rejected; records never carry a category outside this set.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default)]
pub enum Category {
    #[default]
    ProcessImprovement,
    Innovation,
    TeamBuilding,
    Strategy,
}

/// Query-side category selection.
///
/// `All` is the "no category filter" sentinel and never appears on a record.
/// `Other` keeps a value that names no category; it filters out every record.
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    Other(String),
}

/// Difficulty level shown on a workshop card.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default)]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

pub const ALL_CATEGORIES_VALUE: &str = "all";
pub const ALL_CATEGORIES_LABEL: &str = "All Workshops";

impl Category {
    /// Categories in display order.
    pub const ALL: [Category; 4] = [
        Category::ProcessImprovement,
        Category::Innovation,
        Category::TeamBuilding,
        Category::Strategy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ProcessImprovement => "process-improvement",
            Category::Innovation => "innovation",
            Category::TeamBuilding => "team-building",
            Category::Strategy => "strategy",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::ProcessImprovement => "Process Improvement",
            Category::Innovation => "Innovation",
            Category::TeamBuilding => "Team Building",
            Category::Strategy => "Strategy",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "process-improvement" => Some(Category::ProcessImprovement),
            "innovation" => Some(Category::Innovation),
            "team-building" => Some(Category::TeamBuilding),
            "strategy" => Some(Category::Strategy),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::parse(value).ok_or_else(|| CatalogError::InvalidCategory(value.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl CategoryFilter {
    /// Interpret a raw filter value without rejecting anything.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORIES_VALUE {
            return CategoryFilter::All;
        }
        match Category::parse(value) {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::Other(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_VALUE,
            CategoryFilter::Only(category) => category.as_str(),
            CategoryFilter::Other(value) => value.as_str(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_LABEL,
            CategoryFilter::Only(category) => category.label(),
            CategoryFilter::Other(value) => value.as_str(),
        }
    }

    /// True for `all` and the four category values.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, CategoryFilter::Other(_))
    }

    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
            CategoryFilter::Other(_) => false,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Difficulty::parse(value).ok_or_else(|| CatalogError::InvalidDifficulty(value.to_string()))
    }
}

impl Serialize for Difficulty {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
