//! API request/response types.

use palette_store::Color;
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
}

/// Color body accepted by POST and PUT.
///
/// A client-supplied `id` is accepted but never trusted: create discards
/// it and update forces the path id.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorPayload {
    /// Ignored; identity comes from the server.
    #[serde(default)]
    pub id: Option<i64>,
    /// Display name.
    pub name: String,
    /// Red component.
    pub red: i64,
    /// Green component.
    pub green: i64,
    /// Blue component.
    pub blue: i64,
}

impl ColorPayload {
    /// Convert into an entity with the given identity, dropping whatever
    /// id the client sent.
    pub fn into_color(self, id: Option<i64>) -> Color {
        Color {
            id,
            name: self.name,
            red: self.red,
            green: self.green,
            blue: self.blue,
        }
    }
}
