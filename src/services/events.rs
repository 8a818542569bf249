//! Book change notifications
//!
//! One broadcast channel per event name. Publishing never waits on
//! subscribers: with nobody listening the event is dropped, and a subscriber
//! that falls behind loses the oldest events rather than holding up a mutation.

use std::fmt;

use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

use crate::db::BookRecord;

/// Named event channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventChannel {
    BookAdded,
    BookUpdated,
    BookDeleted,
}

impl EventChannel {
    pub const ALL: [EventChannel; 3] = [Self::BookAdded, Self::BookUpdated, Self::BookDeleted];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventChannel::BookAdded => "BOOK_ADDED",
            EventChannel::BookUpdated => "BOOK_UPDATED",
            EventChannel::BookDeleted => "BOOK_DELETED",
        }
    }
}

impl fmt::Display for EventChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification channel configuration
#[derive(Debug, Clone)]
pub struct CatalogEventsConfig {
    /// Broadcast buffer per channel
    pub channel_capacity: usize,
}

impl Default for CatalogEventsConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
        }
    }
}

/// Process-wide publish point for book changes
#[derive(Debug, Clone)]
pub struct CatalogEvents {
    book_added: broadcast::Sender<BookRecord>,
    book_updated: broadcast::Sender<BookRecord>,
    book_deleted: broadcast::Sender<Uuid>,
}

impl CatalogEvents {
    /// `channel_capacity` must be at least 1
    pub fn new(config: CatalogEventsConfig) -> Self {
        let capacity = config.channel_capacity.max(1);
        let (book_added, _) = broadcast::channel(capacity);
        let (book_updated, _) = broadcast::channel(capacity);
        let (book_deleted, _) = broadcast::channel(capacity);

        Self {
            book_added,
            book_updated,
            book_deleted,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(CatalogEventsConfig::default())
    }

    pub fn subscribe_book_added(&self) -> broadcast::Receiver<BookRecord> {
        self.book_added.subscribe()
    }

    pub fn subscribe_book_updated(&self) -> broadcast::Receiver<BookRecord> {
        self.book_updated.subscribe()
    }

    pub fn subscribe_book_deleted(&self) -> broadcast::Receiver<Uuid> {
        self.book_deleted.subscribe()
    }

    /// Number of live subscribers on a channel
    pub fn receiver_count(&self, channel: EventChannel) -> usize {
        match channel {
            EventChannel::BookAdded => self.book_added.receiver_count(),
            EventChannel::BookUpdated => self.book_updated.receiver_count(),
            EventChannel::BookDeleted => self.book_deleted.receiver_count(),
        }
    }

    /// Returns how many subscribers the event reached
    pub fn publish_book_added(&self, book: &BookRecord) -> usize {
        deliver(EventChannel::BookAdded, &self.book_added, book.clone())
    }

    pub fn publish_book_updated(&self, book: &BookRecord) -> usize {
        deliver(EventChannel::BookUpdated, &self.book_updated, book.clone())
    }

    pub fn publish_book_deleted(&self, id: Uuid) -> usize {
        deliver(EventChannel::BookDeleted, &self.book_deleted, id)
    }
}

impl Default for CatalogEvents {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn deliver<T: Clone>(channel: EventChannel, tx: &broadcast::Sender<T>, payload: T) -> usize {
    match tx.send(payload) {
        Ok(reached) => {
            debug!(channel = %channel, subscribers = reached, "Published catalog event");
            reached
        }
        // No receivers; nothing to deliver
        Err(_) => 0,
    }
}
