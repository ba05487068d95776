//! Authentication extractors
//!
//! Extract and validate JWT tokens from the Authorization header, turning
//! them into an explicit request identity.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use guide_core::{Actor, DomainError};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated guide extracted from a JWT token
#[derive(Debug, Clone)]
pub struct AuthGuide {
    /// The identity carried by the token
    pub actor: Actor,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthGuide
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access the JWT service
        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .jwt_service()
            .validate_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::App(e)
            })?;

        Ok(AuthGuide {
            actor: claims.actor(),
        })
    }
}

/// Authenticated admin extracted from a JWT token
///
/// Rejects non-admin tokens with a 403 before the handler runs.
#[derive(Debug, Clone)]
pub struct AdminGuide {
    /// The identity carried by the token
    pub actor: Actor,
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminGuide
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthGuide { actor } = AuthGuide::from_request_parts(parts, state).await?;

        if !actor.is_admin() {
            return Err(ApiError::Domain(DomainError::AdminRequired));
        }

        Ok(AdminGuide { actor })
    }
}
