//! Author records

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::collection::Record;

/// Author row as held by the store
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorRecord {
    pub id: Uuid,
    pub name: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for AuthorRecord {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateAuthor {
    pub name: String,
    pub bio: Option<String>,
}

/// Partial update for an author; `bio: Some(None)` clears the bio
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateAuthor {
    pub name: Option<String>,
    pub bio: Option<Option<String>>,
}

impl AuthorRecord {
    pub fn new(input: CreateAuthor, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            bio: input.bio,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: UpdateAuthor) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
    }
}
