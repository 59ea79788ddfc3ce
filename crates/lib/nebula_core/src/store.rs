//! In-memory content store.
//!
//! The store is the entire datastore of the demo backend: three ordered
//! collections owned by one struct, constructed once at startup and shared
//! with every request handler. Nothing is persisted; state lives for the
//! process lifetime only.

use tokio::sync::RwLock;

use crate::models::{ChatMessage, NewsItem, Sport};
use crate::seed;

/// User name recorded when a chat post carries no `user` field.
pub const ANONYMOUS_USER: &str = "Anonymous";
/// Timestamp literal recorded on every posted message.
pub const JUST_NOW: &str = "только что";

/// Chat log state kept behind the store's write lock.
///
/// `next_id` is a dedicated counter rather than `messages.len() + 1`: ids
/// stay distinct under concurrent posts and would survive deletions if those
/// were ever added.
#[derive(Debug)]
struct ChatLog {
    messages: Vec<ChatMessage>,
    next_id: u32,
}

/// Owns the three demo collections for the lifetime of the process.
///
/// Sports and news are immutable after construction; only the chat log is
/// guarded by a lock.
#[derive(Debug)]
pub struct ContentStore {
    sports: Vec<Sport>,
    news: Vec<NewsItem>,
    chat: RwLock<ChatLog>,
}

impl ContentStore {
    /// Build a store populated with the demo seed data.
    pub fn new() -> Self {
        Self::with_data(seed::sports(), seed::news(), seed::chat_messages())
    }

    /// Build a store from explicit collections (used by tests).
    pub fn with_data(sports: Vec<Sport>, news: Vec<NewsItem>, chat: Vec<ChatMessage>) -> Self {
        let next_id = chat.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        Self {
            sports,
            news,
            chat: RwLock::new(ChatLog {
                messages: chat,
                next_id,
            }),
        }
    }

    /// The full sports catalog in seeded order.
    pub fn sports(&self) -> &[Sport] {
        &self.sports
    }

    /// All news items in seeded order.
    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }

    /// Resolve a sport by its identifier. Linear scan, first match.
    pub fn sport_by_id(&self, id: u32) -> Option<&Sport> {
        self.sports.iter().find(|s| s.id == id)
    }

    /// Snapshot of the chat log in append order.
    pub async fn chat_messages(&self) -> Vec<ChatMessage> {
        self.chat.read().await.messages.clone()
    }

    /// Append a chat message and return it.
    ///
    /// Absent fields are defaulted, never rejected: no `user` becomes
    /// [`ANONYMOUS_USER`], no `message` becomes the empty string. The
    /// timestamp is always the [`JUST_NOW`] literal.
    pub async fn post_chat(&self, user: Option<String>, message: Option<String>) -> ChatMessage {
        let mut chat = self.chat.write().await;
        let posted = ChatMessage {
            id: chat.next_id,
            user: user.unwrap_or_else(|| ANONYMOUS_USER.to_string()),
            message: message.unwrap_or_default(),
            time: JUST_NOW.to_string(),
        };
        chat.next_id += 1;
        chat.messages.push(posted.clone());
        posted
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}
