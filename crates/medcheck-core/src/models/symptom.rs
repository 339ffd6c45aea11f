use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A selectable symptom. `category` is an open grouping label, not an enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Symptom {
    pub id: String,
    pub name: String,
    pub category: String,
}

impl Symptom {
    pub fn new(id: &str, name: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
        }
    }
}
