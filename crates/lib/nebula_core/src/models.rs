//! Domain models.
//!
//! Field names are the wire format: the API serializes these structs as-is,
//! so renaming a field changes the public JSON contract.

use serde::{Deserialize, Serialize};

/// A sport in the streaming catalog. Seeded at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sport {
    /// Stable identifier, used for stream page routing.
    pub id: u32,
    pub name: String,
    /// Emoji glyph shown on the sport card.
    pub icon: String,
    /// Number of live streams.
    pub streams: u32,
    /// Current viewer count across all streams.
    pub viewers: u32,
}

/// A news ticker headline. Seeded at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    /// Free-text relative timestamp ("2 часа назад").
    pub time: String,
}

/// A chat message. The seed set plus everything posted since startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u32,
    pub user: String,
    pub message: String,
    /// Free-text relative timestamp ("только что" for posted messages).
    pub time: String,
}
