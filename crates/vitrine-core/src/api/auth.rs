//! Login, registration, and health-check calls.
//!
//! The API's notion of authentication is a bare username echo: a
//! successful login proves the password once, and afterwards the client
//! asserts identity on its own (see [`crate::session`]).

use serde::{Deserialize, Serialize};

use super::{ApiError, ApiResult, ShopClient};

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

/// Server health report from `GET /api/health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
}

impl ShopClient {
    fn credentials<'a>(username: &'a str, password: &'a str) -> ApiResult<Credentials<'a>> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(ApiError::validation("Username and password are required"));
        }
        Ok(Credentials { username, password })
    }

    /// Verifies credentials against the API.
    ///
    /// A 401 surfaces as a server error carrying the API's "Invalid
    /// credentials" message. The response body is otherwise ignored.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<()> {
        let body = Self::credentials(username, password)?;
        let response = self
            .http()
            .post(self.url("/api/login"))
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::network(&e))?;
        Self::check(response).await?;
        Ok(())
    }

    /// Registers a new user.
    ///
    /// A 409 surfaces the API's "Username already exists" message.
    /// Registration does not log the user in.
    pub async fn register(&self, username: &str, password: &str) -> ApiResult<()> {
        let body = Self::credentials(username, password)?;
        let response = self
            .http()
            .post(self.url("/api/register"))
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::network(&e))?;
        Self::check(response).await?;
        Ok(())
    }

    /// Fetches the API health report.
    pub async fn health(&self) -> ApiResult<HealthReport> {
        let response = self
            .http()
            .get(self.url("/api/health"))
            .send()
            .await
            .map_err(|e| ApiError::network(&e))?;
        let response = Self::check(response).await?;
        response
            .json::<HealthReport>()
            .await
            .map_err(|e| ApiError::new(super::ApiErrorKind::Server, e.to_string()))
    }
}
