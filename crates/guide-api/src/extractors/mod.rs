//! Request extractors
//!
//! Custom Axum extractors for authentication and validated input.

pub mod auth;
pub mod validated;

pub use auth::{AdminGuide, AuthGuide};
pub use validated::ValidatedJson;
