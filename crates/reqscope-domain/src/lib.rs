//! reqscope-domain: Request-scoped viewer isolation for concurrent GraphQL
//! execution.
//!
//! This crate verifies that per-request authentication state never leaks
//! between concurrently executing requests, no matter which resolver strategy
//! reads it. The GraphQL engine, the deferred-value primitive, and the
//! batching loader are all provided by `async-graphql`; the logic here is the
//! scoped state, the resolvers that read it, and the harness that hammers it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                reqscope-domain                   │
//! ├─────────────────────────────────────────────────┤
//! │  context  - task-scoped viewer slot             │
//! │  session  - viewer id and per-call session      │
//! │  schema   - Query root, three resolver variants │
//! │  loader   - pass-through batching loader        │
//! │  handler  - binds scope, executes one request   │
//! │  harness  - concurrent multi-viewer driver      │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod context;
pub mod error;
pub mod handler;
pub mod harness;
pub mod loader;
pub mod schema;
pub mod session;

// Re-export commonly used types at the crate root
pub use context::{current_viewer, with_current_viewer};
pub use error::{DomainError, DomainResult};
pub use handler::RequestHandler;
pub use harness::{simulate_concurrent_requests, HarnessConfig, HarnessError};
pub use loader::ViewerIdLoader;
pub use schema::{build_schema, Query, ViewerSchema};
pub use session::{Session, ViewerId};
