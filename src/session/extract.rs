//! Bearer-token extractor resolving the caller's session

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use std::sync::Arc;

use crate::error::AppError;
use crate::AppState;

use super::Session;

/// The session named by the request's `Authorization: Bearer` header
pub struct CurrentSession(pub Arc<Session>);

#[async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AppError::Unauthorized)?;

        let session = state.sessions.get(token).await.ok_or(AppError::Unauthorized)?;
        Ok(CurrentSession(session))
    }
}
