//! Concurrency harness: overlapping request streams for multiple viewers.
//!
//! One worker task per simulated viewer runs a sequential loop of
//! request/assert cycles against the shared handler, all workers in parallel
//! on the multi-thread runtime. Any cross-talk between requests shows up as a
//! viewer mismatch and halts that worker immediately; the harness joins every
//! worker and returns the first failure instead of swallowing it.

use futures::future::join_all;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::handler::RequestHandler;
use crate::session::{Session, ViewerId};

/// Field every scenario asserts on; deferred and batched scenarios alias
/// their field to the same name.
const VIEWER_FIELD: &str = "viewerId";

/// Configuration for one harness run.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Viewers to simulate; one concurrent worker each.
    pub viewers: Vec<ViewerId>,
    /// Sequential request cycles per worker.
    pub iterations: u32,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            viewers: vec![ViewerId::new("1"), ViewerId::new("2")],
            iterations: 1000,
        }
    }
}

/// Failures surfaced by the harness. Every variant is fatal; nothing retries.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The engine reported execution errors for a request.
    #[error("request #{iteration} for viewer {viewer} failed: {messages:?}")]
    Execution {
        viewer: ViewerId,
        iteration: u32,
        messages: Vec<String>,
    },

    /// The response data could not be decoded for assertion.
    #[error("request #{iteration} for viewer {viewer} returned undecodable data: {source}")]
    Decode {
        viewer: ViewerId,
        iteration: u32,
        source: serde_json::Error,
    },

    /// The expected field is absent from the response data.
    #[error("request #{iteration} for viewer {viewer} is missing field '{field}'")]
    MissingField {
        viewer: ViewerId,
        iteration: u32,
        field: &'static str,
    },

    /// The property under test: a request observed another request's viewer.
    #[error("request #{iteration}: authenticated viewer {expected} - observed viewer {actual}")]
    ViewerMismatch {
        expected: ViewerId,
        actual: String,
        iteration: u32,
    },

    /// A worker task panicked before reporting a result.
    #[error("harness worker panicked: {0}")]
    WorkerPanicked(#[from] tokio::task::JoinError),
}

/// Runs `query` concurrently for every configured viewer and verifies each
/// response still carries its own viewer's id.
///
/// Requires a multi-thread runtime so workers actually overlap in parallel.
pub async fn simulate_concurrent_requests(
    handler: &RequestHandler,
    query: &str,
    config: &HarnessConfig,
) -> Result<(), HarnessError> {
    let mut workers = Vec::with_capacity(config.viewers.len());
    for viewer in &config.viewers {
        let handler = handler.clone();
        let query = query.to_owned();
        let viewer = viewer.clone();
        let iterations = config.iterations;
        workers.push(tokio::spawn(async move {
            drive_viewer(&handler, viewer, &query, iterations).await
        }));
    }

    for outcome in join_all(workers).await {
        outcome??;
    }
    info!(
        viewers = config.viewers.len(),
        iterations = config.iterations,
        "all workers completed without cross-talk"
    );
    Ok(())
}

/// Sequential request/assert loop for one viewer.
async fn drive_viewer(
    handler: &RequestHandler,
    viewer: ViewerId,
    query: &str,
    iterations: u32,
) -> Result<(), HarnessError> {
    let session = Session::new(viewer.clone());

    for iteration in 1..=iterations {
        let response = handler.handle(&session, query).await;

        if !response.errors.is_empty() {
            return Err(HarnessError::Execution {
                viewer,
                iteration,
                messages: response.errors.iter().map(|e| e.message.clone()).collect(),
            });
        }

        let data = response
            .data
            .into_json()
            .map_err(|source| HarnessError::Decode {
                viewer: viewer.clone(),
                iteration,
                source,
            })?;

        let actual = match data.get(VIEWER_FIELD).and_then(Value::as_str) {
            Some(actual) => actual,
            None => {
                return Err(HarnessError::MissingField {
                    viewer,
                    iteration,
                    field: VIEWER_FIELD,
                })
            }
        };
        if actual != viewer.as_str() {
            return Err(HarnessError::ViewerMismatch {
                expected: viewer,
                actual: actual.to_owned(),
                iteration,
            });
        }
    }

    debug!(viewer = %viewer, iterations, "worker finished");
    Ok(())
}
