//! Concurrent request-isolation scenarios.
//!
//! Two (or more) viewers hammer one shared handler in parallel; every
//! response must carry the id of the viewer that issued it. Exercised once
//! per resolver strategy: synchronous, deferred, and batched through the
//! shared loader. Multi-thread runtimes are required so the workers truly
//! overlap.

use anyhow::Result;

use reqscope_domain::{
    simulate_concurrent_requests, HarnessConfig, RequestHandler, Session, ViewerId,
};

/// Scenario: `{ viewerId }` under two parallel viewers, 1000 cycles each.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_regular_field_stays_isolated() -> Result<()> {
    let handler = RequestHandler::new();
    simulate_concurrent_requests(&handler, "query { viewerId }", &HarnessConfig::default())
        .await?;
    Ok(())
}

/// Scenario: deferred resolution reads the slot after the other worker has
/// already rebound its own.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_promised_field_stays_isolated() -> Result<()> {
    let handler = RequestHandler::new();
    simulate_concurrent_requests(
        &handler,
        "query { viewerId: promiseViewerUserId }",
        &HarnessConfig::default(),
    )
    .await?;
    Ok(())
}

/// Scenario: both workers feed keys to the one loader instance inside the
/// shared handler; grouping must not cross-assign their results.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_dataloader_field_stays_isolated_with_shared_loader() -> Result<()> {
    let handler = RequestHandler::new();
    simulate_concurrent_requests(
        &handler,
        "query { viewerId: dataloaderViewerUserId }",
        &HarnessConfig::default(),
    )
    .await?;
    Ok(())
}

/// Repetition: a single viewer gets the same answer 1000 times in a row.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_repeated_requests_are_idempotent() -> Result<()> {
    let handler = RequestHandler::new();
    let config = HarnessConfig {
        viewers: vec![ViewerId::new("1")],
        iterations: 1000,
    };
    simulate_concurrent_requests(&handler, "query { viewerId }", &config).await?;
    Ok(())
}

/// The harness generalizes past the default pair: four viewers interleaving
/// on the deferred strategy.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_wider_interleaving_stays_isolated() -> Result<()> {
    let handler = RequestHandler::new();
    let config = HarnessConfig {
        viewers: ["1", "2", "3", "4"].into_iter().map(ViewerId::new).collect(),
        iterations: 250,
    };
    simulate_concurrent_requests(
        &handler,
        "query { viewerId: promiseViewerUserId }",
        &config,
    )
    .await?;
    Ok(())
}

/// End-to-end equivalence: for one viewer, all three strategies report the
/// same id through the full handler path.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_resolver_strategies_agree_end_to_end() -> Result<()> {
    let handler = RequestHandler::new();
    let session = Session::new("42");

    let response = handler
        .handle(
            &session,
            "query { viewerId promiseViewerUserId dataloaderViewerUserId }",
        )
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);

    let data = response.data.into_json()?;
    for field in ["viewerId", "promiseViewerUserId", "dataloaderViewerUserId"] {
        assert_eq!(
            data[field],
            serde_json::json!("42"),
            "strategy {field} disagreed"
        );
    }
    Ok(())
}
