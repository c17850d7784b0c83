//! Request handler: binds the viewer scope, then executes one request.

use async_graphql::dataloader::DataLoader;
use async_graphql::{Request, Response};
use tracing::debug;

use crate::context::with_current_viewer;
use crate::loader::ViewerIdLoader;
use crate::schema::{build_schema, ViewerSchema};
use crate::session::Session;

/// Handles inbound requests against a shared schema.
///
/// The schema (and the loader inside it) is built once and shared read-only
/// by every concurrent caller; the only mutable per-request state is the
/// viewer binding, which lives in the scope wrapped around each execution.
#[derive(Clone)]
pub struct RequestHandler {
    schema: ViewerSchema,
}

impl RequestHandler {
    /// Creates a handler with a fresh process-wide loader.
    pub fn new() -> Self {
        Self::with_loader(DataLoader::new(ViewerIdLoader, tokio::spawn))
    }

    /// Creates a handler around an explicitly constructed loader.
    pub fn with_loader(loader: DataLoader<ViewerIdLoader>) -> Self {
        Self {
            schema: build_schema(loader),
        }
    }

    /// Executes `request` with the session's viewer bound for the duration of
    /// the execution pass, deferred continuations included.
    ///
    /// Engine errors propagate untouched in the response error list.
    pub async fn handle(&self, session: &Session, request: impl Into<Request>) -> Response {
        let viewer = session.viewer_id().clone();
        debug!(viewer = %viewer, "executing request");
        with_current_viewer(viewer, self.schema.execute(request)).await
    }
}

impl Default for RequestHandler {
    fn default() -> Self {
        Self::new()
    }
}
