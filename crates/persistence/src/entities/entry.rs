//! Entry entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::Entry;
use sqlx::FromRow;

/// Database row mapping for the entries table.
#[derive(Debug, Clone, FromRow)]
pub struct EntryEntity {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<EntryEntity> for Entry {
    fn from(entity: EntryEntity) -> Self {
        Entry {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            created_at: entity.created_at,
        }
    }
}
