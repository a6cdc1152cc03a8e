//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the bearer identity from a JWT token;
//!   rejects requests without a valid token.
//! - [`auth::MaybeUser`] -- Like `AuthUser`, but absent credentials yield
//!   `None` instead of a rejection (for routes that are only sometimes
//!   gated, e.g. the generic resource handlers).

pub mod auth;
