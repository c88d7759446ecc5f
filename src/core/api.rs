use async_trait::async_trait;
use reqwest::{Client, Method, Response, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::error::ApiError;
use crate::models::{ApiConfig, FormData, User, UserId};

/// The four calls the directory view makes against the users service
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// GET the collection endpoint
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;

    /// POST the draft to the collection endpoint
    async fn create_user(&self, draft: &FormData) -> Result<(), ApiError>;

    /// PUT the draft to the per-id endpoint
    async fn update_user(&self, id: &UserId, draft: &FormData) -> Result<(), ApiError>;

    /// DELETE the per-id endpoint
    async fn delete_user(&self, id: &UserId) -> Result<(), ApiError>;
}

/// Error body returned by the service on a rejected create or update
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Pull the `error` string out of a response body, if it has one
pub fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.trim().is_empty())
}

/// reqwest-backed users API client
pub struct HttpUsersApi {
    client: Client,
    config: ApiConfig,
}

impl HttpUsersApi {
    /// Create a new client. Without a configured timeout the transport default applies.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Use an already configured reqwest client
    pub fn with_client(client: Client, config: ApiConfig) -> Self {
        Self { client, config }
    }

    /// Collection endpoint
    pub fn collection_url(&self) -> &str {
        self.config.collection_url()
    }

    /// Per-id endpoint, with the id percent-encoded as a single path segment
    pub fn user_url(&self, id: &UserId) -> Result<Url, ApiError> {
        let base = self.collection_url();
        let mut url = Url::parse(base)
            .map_err(|e| ApiError::RequestFailed(format!("Invalid API URL {}: {}", base, e)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::RequestFailed(format!("API URL cannot take a path: {}", base)))?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }

    fn map_send_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_connect() {
            ApiError::ConnectionRefused(format!(
                "Could not connect to users API at {}. Is the backend running?",
                self.collection_url()
            ))
        } else if err.is_timeout() {
            ApiError::Timeout(self.config.timeout_seconds.unwrap_or_default())
        } else {
            ApiError::from(err)
        }
    }

    /// Turn a non-success response into `ApiError::Rejected`, keeping the body's message
    async fn reject(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        debug!("Request rejected with status {}: {}", status, body);
        ApiError::Rejected {
            status,
            message: extract_error_message(&body),
        }
    }

    async fn send_draft(&self, method: Method, url: Url, draft: &FormData) -> Result<(), ApiError> {
        debug!("Sending {} {}", method, url);

        let response = self
            .client
            .request(method, url)
            .json(draft)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        Ok(())
    }
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.collection_url();
        debug!("Sending GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }

        let users: Vec<User> = response
            .json()
            .await
            .map_err(|e| ApiError::ParseError(e.to_string()))?;
        debug!("Fetched {} users", users.len());
        Ok(users)
    }

    async fn create_user(&self, draft: &FormData) -> Result<(), ApiError> {
        let url = Url::parse(self.collection_url()).map_err(|e| {
            ApiError::RequestFailed(format!("Invalid API URL {}: {}", self.collection_url(), e))
        })?;
        self.send_draft(Method::POST, url, draft).await
    }

    async fn update_user(&self, id: &UserId, draft: &FormData) -> Result<(), ApiError> {
        let url = self.user_url(id)?;
        self.send_draft(Method::PUT, url, draft).await
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), ApiError> {
        let url = self.user_url(id)?;
        debug!("Sending DELETE {}", url);

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            return Err(Self::reject(response).await);
        }
        Ok(())
    }
}
