use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListDirection {
    #[default]
    Ascending,
    Descending,
}

/// Ordering hint handed to the storage collaborator.
///
/// Rows are never reordered in this crate, the hint only travels through to
/// whoever performs the fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub by: String,
    #[serde(default)]
    pub direction: ListDirection,
}

impl Sort {
    pub fn ascending(by: impl Into<String>) -> Self {
        Self {
            by: by.into(),
            direction: ListDirection::Ascending,
        }
    }

    pub fn descending(by: impl Into<String>) -> Self {
        Self {
            by: by.into(),
            direction: ListDirection::Descending,
        }
    }
}
