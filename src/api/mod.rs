//! REST API Client
//!
//! Single wrapper around the backend: joins URLs, attaches the bearer token,
//! unwraps the `{success, data, message}` envelope and applies the 401
//! policy (clear credentials, go to `/login`) for every authenticated call.

mod transport;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::models::{Credentials, Envelope, LoginRequest};
use crate::routes::{Navigator, LOGIN_PATH};
use crate::session::Session;

pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, ReqwestTransport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Public,
    Authenticated,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    transport: Arc<dyn HttpTransport>,
    session: Session,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        transport: Arc<dyn HttpTransport>,
        session: Session,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            transport,
            session,
            navigator,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // ========================
    // Verbs
    // ========================

    /// Public read
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let data = self.request(Method::Get, path, None, Access::Public).await?;
        decode_data(data)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body)?;
        let data = self.request(Method::Post, path, Some(body), Access::Authenticated).await?;
        decode_data(data)
    }

    /// Authenticated POST whose response carries no data we need
    pub async fn post_ack<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> AppResult<()> {
        let body = serde_json::to_string(body)?;
        self.request(Method::Post, path, Some(body), Access::Authenticated).await?;
        Ok(())
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body)?;
        let data = self.request(Method::Put, path, Some(body), Access::Authenticated).await?;
        decode_data(data)
    }

    pub async fn delete(&self, path: &str) -> AppResult<()> {
        self.request(Method::Delete, path, None, Access::Authenticated).await?;
        Ok(())
    }

    // ========================
    // Auth
    // ========================

    /// Exchange email/password for credentials and store them in the session
    pub async fn login(&self, email: &str, password: &str) -> AppResult<Credentials> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::validation("Email and password are required"));
        }
        let body = serde_json::to_string(&LoginRequest { email, password })?;
        let data = self.request(Method::Post, "/auth/login", Some(body), Access::Public).await?;
        let credentials: Credentials = decode_data(data)?;
        self.session.sign_in(credentials.clone());
        Ok(credentials)
    }

    pub fn logout(&self) {
        self.session.clear();
        self.navigator.navigate(LOGIN_PATH);
    }

    // ========================
    // Core
    // ========================

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        access: Access,
    ) -> AppResult<Option<serde_json::Value>> {
        let bearer = match access {
            Access::Public => None,
            Access::Authenticated => Some(self.session.token().ok_or(AppError::PermissionDenied)?),
        };

        let request = HttpRequest { method, url: self.url(path), bearer, body };
        log::debug!("{} {}", method.as_str(), request.url);

        let response = self.transport.execute(request).await.map_err(|e| {
            log::warn!("{} {} failed: {}", method.as_str(), path, e);
            e
        })?;

        if response.status == 401 && access == Access::Authenticated {
            log::warn!("{} {} returned 401, clearing session", method.as_str(), path);
            self.session.clear();
            self.navigator.navigate(LOGIN_PATH);
            return Err(AppError::Unauthorized);
        }

        unwrap_envelope(&response)
    }
}

/// Split a raw response into its `data`, or the error it describes
fn unwrap_envelope(response: &HttpResponse) -> AppResult<Option<serde_json::Value>> {
    let envelope = serde_json::from_str::<Envelope<serde_json::Value>>(&response.body);

    if !response.is_success() {
        let message = envelope
            .ok()
            .and_then(|e| e.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", response.status));
        return Err(AppError::Server { status: response.status, message });
    }

    let envelope = envelope?;
    if !envelope.success {
        return Err(AppError::Server {
            status: response.status,
            message: envelope.message.unwrap_or_else(|| "Request failed".to_string()),
        });
    }
    Ok(envelope.data)
}

fn decode_data<T: DeserializeOwned>(data: Option<serde_json::Value>) -> AppResult<T> {
    let value = data.ok_or_else(|| AppError::Decode("response has no data".to_string()))?;
    Ok(serde_json::from_value(value)?)
}
