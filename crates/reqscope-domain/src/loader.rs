//! Pass-through batching loader for viewer ids.
//!
//! One `DataLoader` instance is shared process-wide across every concurrent
//! request (it lives in the schema's data). Batching groups keys issued
//! during one execution pass into a single `load` call; because results come
//! back keyed, each caller gets the value for the key it submitted even when
//! the batch mixes keys from different requests.

use std::collections::HashMap;
use std::convert::Infallible;

use async_graphql::dataloader::Loader;

use crate::session::ViewerId;

/// Loader that resolves every viewer id key to itself.
///
/// The identity mapping makes misattribution directly observable: if grouping
/// ever crossed results between callers, a request would read back a key it
/// never submitted.
pub struct ViewerIdLoader;

impl Loader<ViewerId> for ViewerIdLoader {
    type Value = ViewerId;
    type Error = Infallible;

    async fn load(
        &self,
        keys: &[ViewerId],
    ) -> Result<HashMap<ViewerId, Self::Value>, Self::Error> {
        Ok(keys.iter().map(|key| (key.clone(), key.clone())).collect())
    }
}
