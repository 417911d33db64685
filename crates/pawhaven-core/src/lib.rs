//! Shared service plumbing: health endpoints, request-id middleware,
//! serialization helpers, and tracing setup.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
