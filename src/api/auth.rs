//! Auth Commands
//!
//! Sign-in/out and session restore. The bearer token and CSRF token come
//! from the backend auth payload; the session survives reloads via local
//! storage.

use serde::Serialize;

use super::{ApiClient, ApiError};
use crate::draft::{DraftStore, LocalStorageDrafts};
use crate::models::{AuthSession, User};

const SESSION_KEY: &str = "bloombox.session.v1";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub password: &'a str,
}

pub async fn login(api: &ApiClient, credentials: &Credentials<'_>) -> Result<AuthSession, ApiError> {
    let session: AuthSession = api.post("/auth/login", credentials).await?;
    adopt(api, &session);
    Ok(session)
}

pub async fn register(
    api: &ApiClient,
    registration: &Registration<'_>,
) -> Result<AuthSession, ApiError> {
    let session: AuthSession = api.post("/auth/register", registration).await?;
    adopt(api, &session);
    Ok(session)
}

/// Sign out. Local credentials are dropped even if the backend call fails.
pub async fn logout(api: &ApiClient) {
    let _ = api.post_empty("/auth/logout").await;
    api.clear_session();
    LocalStorageDrafts.clear(SESSION_KEY);
}

/// Re-adopt a session persisted by a previous page load, if any
pub fn restore_session(api: &ApiClient) -> Option<AuthSession> {
    let session: AuthSession = LocalStorageDrafts.load(SESSION_KEY)?;
    api.set_session(&session);
    Some(session)
}

pub async fn me(api: &ApiClient) -> Result<User, ApiError> {
    api.get("/auth/me").await
}

fn adopt(api: &ApiClient, session: &AuthSession) {
    api.set_session(session);
    LocalStorageDrafts.save(SESSION_KEY, session);
}
