//! GraphQL subscriptions for real-time updates
//!
//! Each subscription owns its own broadcast receiver, so subscribers never
//! slow down a mutation. A subscriber that falls behind skips the events it
//! missed and carries on with the newest ones.

use async_graphql::{Context, ID, Subscription};
use futures::Stream;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use crate::services::{CatalogService, EventChannel};

use super::helpers::to_id;
use super::types::Book;

fn skip_lagged<T>(channel: EventChannel, result: Result<T, BroadcastStreamRecvError>) -> Option<T> {
    match result {
        Ok(event) => Some(event),
        Err(BroadcastStreamRecvError::Lagged(missed)) => {
            tracing::warn!(channel = %channel, missed, "Subscriber lagged, events dropped");
            None
        }
    }
}

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Books as they are created
    async fn book_added<'ctx>(&self, ctx: &Context<'ctx>) -> impl Stream<Item = Book> + 'ctx {
        let catalog = ctx.data_unchecked::<CatalogService>();
        let receiver = catalog.events().subscribe_book_added();

        BroadcastStream::new(receiver)
            .filter_map(|result| skip_lagged(EventChannel::BookAdded, result).map(Book))
    }

    /// Books as they are updated, with their new state
    async fn book_updated<'ctx>(&self, ctx: &Context<'ctx>) -> impl Stream<Item = Book> + 'ctx {
        let catalog = ctx.data_unchecked::<CatalogService>();
        let receiver = catalog.events().subscribe_book_updated();

        BroadcastStream::new(receiver)
            .filter_map(|result| skip_lagged(EventChannel::BookUpdated, result).map(Book))
    }

    /// IDs of deleted books
    async fn book_deleted<'ctx>(&self, ctx: &Context<'ctx>) -> impl Stream<Item = ID> + 'ctx {
        let catalog = ctx.data_unchecked::<CatalogService>();
        let receiver = catalog.events().subscribe_book_deleted();

        BroadcastStream::new(receiver)
            .filter_map(|result| skip_lagged(EventChannel::BookDeleted, result).map(to_id))
    }
}
