//! Task-scoped storage for the current request's viewer.
//!
//! Per-request state lives in a Tokio task-local rather than an ambient
//! global or OS-thread TLS. The slot is bound by wrapping one request's
//! execution future in a scope: every poll of that future (including
//! continuations resumed after await points) observes the bound value, while
//! concurrently executing requests on other tasks observe their own. The
//! binding is dropped automatically when the scope future completes, so there
//! is no cleanup to forget and no value can outlive its request.
//!
//! Execution may migrate OS threads between polls; isolation is per logical
//! task, which is exactly the unit one request occupies.

use std::future::Future;

use crate::session::ViewerId;

tokio::task_local! {
    /// Viewer bound to the request currently executing on this task.
    static CURRENT_VIEWER: ViewerId;
}

/// Runs `fut` with `viewer` bound as the current viewer.
///
/// Nested calls shadow the outer binding for the inner future's duration and
/// restore it afterwards.
pub async fn with_current_viewer<F>(viewer: ViewerId, fut: F) -> F::Output
where
    F: Future,
{
    CURRENT_VIEWER.scope(viewer, fut).await
}

/// Returns the viewer bound to the calling task, or `None` when the caller is
/// not executing inside any request scope.
pub fn current_viewer() -> Option<ViewerId> {
    CURRENT_VIEWER.try_with(ViewerId::clone).ok()
}
