//! The color entity.

use serde::{Deserialize, Serialize};

/// A stored color: identity plus RGB components.
///
/// Maps 1:1 to a row of the `color` table and to the JSON wire shape
/// `{id, name, red, green, blue}`. The id is assigned by the storage
/// layer on insert and is `None` until the value has been persisted.
///
/// RGB components are intended to be in [0, 255] but are not validated
/// here; only database constraints apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Server-assigned identity. `None` until persisted.
    #[serde(default)]
    pub id: Option<i64>,
    /// Display name, at most 50 characters (enforced by the table).
    pub name: String,
    /// Red component.
    pub red: i64,
    /// Green component.
    pub green: i64,
    /// Blue component.
    pub blue: i64,
}

impl Color {
    /// Create a new, not-yet-persisted color.
    pub fn new(name: impl Into<String>, red: i64, green: i64, blue: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            red,
            green,
            blue,
        }
    }

    /// Copy of this color with the given id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
