//! Request-processing middleware and extractors.
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with `Authorization: Bearer <token>`
//! 2. The [`auth::AuthUser`] extractor verifies the JWT and exposes the
//!    caller's id to the handler
//! 3. The handler runs only if verification passed

pub mod auth;
