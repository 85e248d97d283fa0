//! Profile route handlers

use axum::{extract::State, Json};

use crate::error::{AppError, Result};
use crate::models::{Profile, ProfileUpdate};
use crate::session::CurrentSession;
use crate::AppState;

pub async fn show(CurrentSession(session): CurrentSession) -> Json<Profile> {
    Json(session.profile.clone())
}

/// Save edits from the profile screen
pub async fn update(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<Profile>> {
    let profile = update.apply(&session.profile)?;
    let session = state
        .sessions
        .update_profile(&session.token, profile)
        .await
        .ok_or(AppError::Unauthorized)?;

    tracing::info!("Profile updated for {}", session.email);
    Ok(Json(session.profile.clone()))
}
