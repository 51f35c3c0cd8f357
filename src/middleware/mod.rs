//! Request-processing middleware.
//!
//! # Authentication Flow
//!
//! 1. Client sends a request with an `Authorization: Bearer <token>` header
//! 2. The [`auth::require_auth`] layer validates the token and caches the
//!    decoded claims in the request extensions
//! 3. Handlers that need the caller's identity take the [`auth::AuthUser`]
//!    extractor, which reads the cached claims without re-verification
//! 4. Any verification failure aborts the pipeline with a 401 before the
//!    handler runs

pub mod auth;
