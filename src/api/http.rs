//! HTTP Plumbing
//!
//! Shared request pipeline for the backend REST API: bearer auth, CSRF
//! header on mutating calls, error envelope parsing, and a single silent
//! refresh-then-retry on 401.

use leptos::prelude::*;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::AuthSession;

const CSRF_HEADER: &str = "X-CSRFToken";

/// Client-local error taxonomy for API calls
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response; message extracted from the error envelope
    #[error("{0}")]
    Rejected(String),
    /// Transport failure before a response arrived
    #[error("network error: {0}")]
    Network(String),
    /// 401 that survived the single refresh attempt
    #[error("your session has expired, please sign in again")]
    Unauthorized,
    /// 2xx response whose body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Refresh pipeline state. At most one refresh attempt per failed call;
/// once Failed, 401s short-circuit until the next sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthGate {
    Authorized,
    Refreshing,
    Failed,
}

#[derive(Debug, Deserialize)]
struct RefreshedToken {
    token: String,
}

/// Shared API client handle. Copy; copies share the session signals.
#[derive(Clone, Copy)]
pub struct ApiClient {
    base: &'static str,
    token: RwSignal<Option<String>>,
    csrf: RwSignal<Option<String>>,
    gate: RwSignal<AuthGate>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base("/api")
    }

    pub fn with_base(base: &'static str) -> Self {
        Self {
            base,
            token: RwSignal::new(None),
            csrf: RwSignal::new(None),
            gate: RwSignal::new(AuthGate::Authorized),
        }
    }

    /// Adopt the credentials of a fresh sign-in
    pub fn set_session(&self, session: &AuthSession) {
        self.token.set(Some(session.token.clone()));
        self.csrf.set(session.csrf_token.clone());
        self.gate.set(AuthGate::Authorized);
    }

    /// Forget credentials (sign-out or expired session)
    pub fn clear_session(&self) {
        self.token.set(None);
        self.csrf.set(None);
        self.gate.set(AuthGate::Authorized);
    }

    pub fn signed_in(&self) -> bool {
        self.token.get_untracked().is_some()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.execute(Method::GET, path, None).await?;
        decode(&text)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = to_body(body)?;
        let text = self.execute(Method::POST, path, Some(body)).await?;
        decode(&text)
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = to_body(body)?;
        let text = self.execute(Method::PATCH, path, Some(body)).await?;
        decode(&text)
    }

    /// POST without a body, ignoring the response payload
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::POST, path, None).await.map(|_| ())
    }

    /// POST without a body, decoding the response payload
    pub async fn post_action<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let text = self.execute(Method::POST, path, None).await?;
        decode(&text)
    }

    /// One attempt, plus a single silent refresh-and-retry on 401
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<String, ApiError> {
        match self.send_raw(method.clone(), path, body.as_ref()).await {
            Err(ApiError::Unauthorized) if self.signed_in() => {
                if !self.try_refresh().await {
                    return Err(ApiError::Unauthorized);
                }
                self.send_raw(method, path, body.as_ref()).await
            }
            other => other,
        }
    }

    async fn send_raw(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base, path);
        let mut request = Client::new().request(method.clone(), url);
        if let Some(token) = self.token.get_untracked() {
            request = request.bearer_auth(token);
        }
        if is_mutating(&method) {
            if let Some(csrf) = self.csrf.get_untracked() {
                request = request.header(CSRF_HEADER, csrf);
            }
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !status.is_success() {
            return Err(ApiError::Rejected(detail_from_body(status.as_u16(), &text)));
        }
        Ok(text)
    }

    async fn try_refresh(&self) -> bool {
        match self.gate.get_untracked() {
            // A failed or in-flight refresh must not spawn another one
            AuthGate::Failed | AuthGate::Refreshing => return false,
            AuthGate::Authorized => {}
        }
        self.gate.set(AuthGate::Refreshing);

        let url = format!("{}/auth/refresh", self.base);
        let mut request = Client::new().post(url);
        if let Some(token) = self.token.get_untracked() {
            request = request.bearer_auth(token);
        }
        if let Some(csrf) = self.csrf.get_untracked() {
            request = request.header(CSRF_HEADER, csrf);
        }

        let refreshed = match request.send().await {
            Ok(response) if response.status().is_success() => {
                match response.json::<RefreshedToken>().await {
                    Ok(body) => {
                        self.token.set(Some(body.token));
                        true
                    }
                    Err(_) => false,
                }
            }
            _ => false,
        };

        if refreshed {
            self.gate.set(AuthGate::Authorized);
        } else {
            self.gate.set(AuthGate::Failed);
            self.token.set(None);
        }
        refreshed
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn is_mutating(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

/// Extract a human-readable message from an error response body.
///
/// Accepts either `{"detail": "..."}` or a per-field map such as
/// `{"budget": ["must be positive"]}`; falls back to the status code.
fn detail_from_body(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(detail) = value.get("detail").and_then(Value::as_str) {
            return detail.to_string();
        }
        if let Some(map) = value.as_object() {
            let mut parts = Vec::new();
            for (field, messages) in map {
                match messages {
                    Value::String(message) => parts.push(format!("{field}: {message}")),
                    Value::Array(items) => {
                        for item in items {
                            if let Some(message) = item.as_str() {
                                parts.push(format!("{field}: {message}"));
                            }
                        }
                    }
                    _ => {}
                }
            }
            if !parts.is_empty() {
                return parts.join("; ");
            }
        }
    }
    format!("request failed with status {status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_field_takes_precedence() {
        let message = detail_from_body(
            400,
            r#"{"detail":"budget too low","budget":["must be positive"]}"#,
        );
        assert_eq!(message, "budget too low");
    }

    #[test]
    fn field_errors_are_joined() {
        let message = detail_from_body(
            400,
            r#"{"budget":["must be positive"],"years":["too many"]}"#,
        );
        assert!(message.contains("budget: must be positive"));
        assert!(message.contains("years: too many"));
    }

    #[test]
    fn string_field_errors_are_accepted() {
        let message = detail_from_body(422, r#"{"frequency":"unknown cadence"}"#);
        assert_eq!(message, "frequency: unknown cadence");
    }

    #[test]
    fn unparseable_body_falls_back_to_status() {
        assert_eq!(
            detail_from_body(502, "<html>bad gateway</html>"),
            "request failed with status 502"
        );
        assert_eq!(detail_from_body(500, "{}"), "request failed with status 500");
    }

    #[test]
    fn only_mutating_methods_carry_csrf() {
        assert!(is_mutating(&Method::POST));
        assert!(is_mutating(&Method::PUT));
        assert!(is_mutating(&Method::PATCH));
        assert!(is_mutating(&Method::DELETE));
        assert!(!is_mutating(&Method::GET));
        assert!(!is_mutating(&Method::HEAD));
    }
}
