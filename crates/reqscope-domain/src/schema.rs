//! Query root with the three resolver strategies under test.
//!
//! All three fields answer the same question ("who is the authenticated
//! viewer?") but differ in when the scoped slot is read relative to the
//! engine's execution pass:
//!
//! - `viewerId` reads it synchronously,
//! - `promiseViewerUserId` reads it inside a continuation resumed after a
//!   yield, past the point where another request may have bound its own slot,
//! - `dataloaderViewerUserId` routes it through the shared batching loader.

use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Result, Schema};

use crate::context::current_viewer;
use crate::error::DomainError;
use crate::loader::ViewerIdLoader;

/// Schema shared read-only by every concurrent request.
pub type ViewerSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Builds the schema with the process-wide loader in engine data.
pub fn build_schema(loader: DataLoader<ViewerIdLoader>) -> ViewerSchema {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(loader)
        .finish()
}

pub struct Query;

#[Object]
impl Query {
    /// Synchronous read of the request scope.
    async fn viewer_id(&self) -> Result<String> {
        let viewer = current_viewer().ok_or(DomainError::ScopeUnset)?;
        Ok(viewer.as_str().to_owned())
    }

    /// Deferred read: the slot is consulted at continuation time, not at
    /// schedule time.
    async fn promise_viewer_user_id(&self) -> Result<String> {
        tokio::task::yield_now().await;
        let viewer = current_viewer().ok_or(DomainError::ScopeUnset)?;
        Ok(viewer.as_str().to_owned())
    }

    /// Batched read: submits the scoped viewer id as a key to the shared
    /// loader and returns the echoed value.
    async fn dataloader_viewer_user_id(&self, ctx: &Context<'_>) -> Result<String> {
        let viewer = current_viewer().ok_or(DomainError::ScopeUnset)?;
        let loader = ctx.data::<DataLoader<ViewerIdLoader>>()?;
        let echoed = loader
            .load_one(viewer.clone())
            .await?
            .ok_or_else(|| DomainError::LoaderMissingKey {
                key: viewer.to_string(),
            })?;
        Ok(echoed.as_str().to_owned())
    }
}
