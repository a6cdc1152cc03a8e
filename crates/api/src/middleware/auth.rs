//! JWT-based authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use medley_core::error::CoreError;
use medley_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated bearer identity extracted from a JWT in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication, then check individual scopes with [`AuthUser::require`]:
///
/// ```ignore
/// async fn gated(user: AuthUser) -> AppResult<Json<()>> {
///     user.require(scopes::POST_DRINKS)?;
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The token holder's id at the issuer (from `claims.sub`).
    pub sub: DbId,
    /// Permission scopes granted to this token.
    pub permissions: Vec<String>,
}

impl AuthUser {
    /// Require a permission scope, rejecting with 403 Forbidden when the
    /// token does not grant it.
    pub fn require(&self, scope: &str) -> Result<(), AppError> {
        if self.permissions.iter().any(|p| p == scope) {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::Forbidden(format!(
                "Missing required permission: {scope}"
            ))))
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            sub: claims.sub,
            permissions: claims.permissions,
        })
    }
}

/// Bearer identity for routes that are only conditionally gated.
///
/// A missing `Authorization` header yields `MaybeUser(None)`; a present but
/// invalid token is still rejected with 401. The generic resource handlers
/// use this together with [`authorize`] so public and scoped resources can
/// share one handler set.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<AuthUser>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if parts.headers.get("authorization").is_none() {
            return Ok(MaybeUser(None));
        }
        AuthUser::from_request_parts(parts, state)
            .await
            .map(|user| MaybeUser(Some(user)))
    }
}

/// Check an optional scope requirement against an optional bearer identity.
///
/// `None` scope means the operation is public. A required scope with no
/// credentials is 401; credentials without the scope are 403.
pub fn authorize(user: &MaybeUser, scope: Option<&str>) -> Result<(), AppError> {
    let Some(scope) = scope else {
        return Ok(());
    };
    let Some(user) = &user.0 else {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Missing Authorization header".into(),
        )));
    };
    user.require(scope)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with(perms: &[&str]) -> AuthUser {
        AuthUser {
            sub: 1,
            permissions: perms.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_require_passes_with_scope() {
        let user = user_with(&["get:user", "patch:user"]);
        assert!(user.require("patch:user").is_ok());
    }

    #[test]
    fn test_require_rejects_missing_scope() {
        let user = user_with(&["get:user"]);
        let err = user.require("delete:user").unwrap_err();
        assert!(matches!(err, AppError::Core(CoreError::Forbidden(_))));
    }

    #[test]
    fn test_authorize_public_operation_needs_no_user() {
        assert!(authorize(&MaybeUser(None), None).is_ok());
    }

    #[test]
    fn test_authorize_gated_operation_without_user_is_unauthorized() {
        let err = authorize(&MaybeUser(None), Some("get:all-users")).unwrap_err();
        assert!(matches!(err, AppError::Core(CoreError::Unauthorized(_))));
    }
}
