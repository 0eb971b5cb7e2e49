//! HTTP middleware and extractors for the storefront.
//!
//! # Layer Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. Sentry layers (capture errors, one hub per request)
//!
//! Editor authentication is an extractor, not a layer: see [`Editor`].

pub mod auth;

pub use auth::Editor;
