//! Login, signup and logout route handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::error::Result;
use crate::session::validation::{LoginForm, SignupForm};
use crate::session::{CurrentSession, Session};
use crate::AppState;

/// Stand-in for the network round trip of a real auth backend
async fn mock_latency(state: &AppState) {
    if !state.config.mock_auth_delay.is_zero() {
        tokio::time::sleep(state.config.mock_auth_delay).await;
    }
}

/// Sign in with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(form): Json<LoginForm>,
) -> Result<(StatusCode, Json<Session>)> {
    form.validate()?;
    mock_latency(&state).await;

    let session = state.sessions.open(form.email.trim(), None).await;
    Ok((StatusCode::CREATED, Json(Session::clone(&session))))
}

/// Create an account and sign in
pub async fn signup(
    State(state): State<AppState>,
    Json(form): Json<SignupForm>,
) -> Result<(StatusCode, Json<Session>)> {
    form.validate()?;
    mock_latency(&state).await;

    let session = state
        .sessions
        .open(form.email.trim(), Some(form.full_name.trim().to_string()))
        .await;
    Ok((StatusCode::CREATED, Json(Session::clone(&session))))
}

/// The caller's session
pub async fn current(CurrentSession(session): CurrentSession) -> Json<Session> {
    Json(Session::clone(&session))
}

/// Sign out, ending the caller's session
pub async fn logout(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> StatusCode {
    state.sessions.close(&session.token).await;
    StatusCode::NO_CONTENT
}
