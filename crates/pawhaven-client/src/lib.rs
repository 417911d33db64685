//! HTTP client for the PawHaven API.
//!
//! Plays the role the browser session manager plays in the web UI: it holds
//! the session token (rehydrated from a [`store::TokenStore`] at startup),
//! attaches it as a bearer header on every request, and exposes the
//! tri-state [`session::SessionState`] so callers never see a flash of
//! wrong auth state while a persisted token is still being resolved.

pub mod client;
pub mod error;
pub mod session;
pub mod store;
pub mod types;

pub use client::PawhavenClient;
pub use error::ClientError;
pub use session::SessionState;
