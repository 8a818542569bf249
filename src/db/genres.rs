//! Genre records. Genres are only created by seeding; there are no genre mutations.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::collection::Record;

#[derive(Debug, Clone, PartialEq)]
pub struct GenreRecord {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for GenreRecord {
    fn id(&self) -> Uuid {
        self.id
    }
}
