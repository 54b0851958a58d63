//! Service-account authorization (OAuth 2.0 JWT bearer grant).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::SheetsError;

/// Scope granting read/write access to spreadsheets.
pub const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Assertion lifetime accepted by Google.
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Refresh this long before the token's stated expiry.
const EXPIRY_MARGIN_SECS: i64 = 60;

/// Supplies bearer tokens for Sheets requests.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn access_token(&self) -> Result<String, SheetsError>;
}

/// Fields of a service-account key file used for signing.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    pub fn from_json(json: &str) -> Result<Self, SheetsError> {
        serde_json::from_str(json).map_err(|e| SheetsError::Credentials(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self, SheetsError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| SheetsError::Credentials(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }
}

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

#[derive(Debug, Clone)]
struct CachedToken {
    token: String,
    expires_at: DateTime<Utc>,
}

/// Where the key comes from. A path is read on first use so a missing file
/// surfaces as a write failure, not a startup error.
#[derive(Debug)]
enum KeySource {
    File(PathBuf),
    Loaded(ServiceAccountKey),
}

/// Exchanges signed assertions for access tokens and caches them until expiry.
pub struct ServiceAccountAuth {
    source: Mutex<KeySource>,
    http: reqwest::Client,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountAuth {
    pub fn new(key: ServiceAccountKey) -> Self {
        Self::with_source(KeySource::Loaded(key))
    }

    /// Auth backed by a key file that is read lazily.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::with_source(KeySource::File(path.into()))
    }

    fn with_source(source: KeySource) -> Self {
        Self {
            source: Mutex::new(source),
            http: reqwest::Client::new(),
            cached: Mutex::new(None),
        }
    }

    async fn key(&self) -> Result<ServiceAccountKey, SheetsError> {
        let mut source = self.source.lock().await;
        let key = match &*source {
            KeySource::Loaded(key) => return Ok(key.clone()),
            KeySource::File(path) => {
                debug!("Loading service account key from {}", path.display());
                ServiceAccountKey::from_file(path)?
            }
        };
        *source = KeySource::Loaded(key.clone());
        Ok(key)
    }

    async fn fetch_token(&self) -> Result<CachedToken, SheetsError> {
        let key = self.key().await?;
        let now = Utc::now();
        let assertion = sign_assertion(&key, now)?;

        debug!("Requesting access token for {}", key.client_email);
        let response = self
            .http
            .post(&key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SheetsError::Auth(format!("{}: {}", status.as_u16(), body)));
        }

        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| SheetsError::Auth(format!("Malformed token response: {}", e)))?;
        let lifetime = token.expires_in.unwrap_or(ASSERTION_LIFETIME_SECS);

        Ok(CachedToken {
            token: token.access_token,
            expires_at: now + Duration::seconds(lifetime - EXPIRY_MARGIN_SECS),
        })
    }
}

#[async_trait]
impl TokenSource for ServiceAccountAuth {
    async fn access_token(&self) -> Result<String, SheetsError> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| t.expires_at > Utc::now()) {
            return Ok(token.token.clone());
        }

        let fresh = self.fetch_token().await?;
        let token = fresh.token.clone();
        *cached = Some(fresh);
        Ok(token)
    }
}

/// RS256-signed JWT asserting the service account's identity.
fn sign_assertion(key: &ServiceAccountKey, now: DateTime<Utc>) -> Result<String, SheetsError> {
    let claims = Claims {
        iss: &key.client_email,
        scope: SPREADSHEETS_SCOPE,
        aud: &key.token_uri,
        iat: now.timestamp(),
        exp: now.timestamp() + ASSERTION_LIFETIME_SECS,
    };
    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .map_err(|e| SheetsError::Credentials(format!("private_key: {}", e)))?;

    jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
        .map_err(|e| SheetsError::Credentials(format!("signing failed: {}", e)))
}

/// Fixed token, for callers that obtain credentials elsewhere.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

#[async_trait]
impl TokenSource for StaticToken {
    async fn access_token(&self) -> Result<String, SheetsError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
