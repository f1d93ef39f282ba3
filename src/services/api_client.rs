//! Manna API client.
//!
//! Provides the HTTP client for the hosted Manna API with bearer-token
//! authentication and cursor pagination.

use crate::error::AppError;
use crate::models::{
    BoardPost, Fellowship, Group, Notice, Notification, PrayerRequest, Session, User,
};
use crate::services::notification_center::NotificationApi;
use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Manna API client configuration.
#[derive(Debug, Clone)]
pub struct MannaClientConfig {
    /// Base URL of the API (e.g. `https://api.manna.app`).
    pub base_url: String,

    /// Session token for authentication. Empty before sign-in.
    pub token: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for MannaClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            token: String::new(),
            timeout_secs: 30,
        }
    }
}

/// Manna API client.
#[derive(Debug, Clone)]
pub struct MannaClient {
    client: Client,
    config: MannaClientConfig,
}

/// One page of a cursor-paginated list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,

    /// Cursor for the next page, absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

/// Query parameters for group-scoped feed endpoints.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedQuery {
    /// Group whose feed to list.
    pub group_id: String,

    /// Maximum number of items to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Cursor from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Input for email sign-in.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Input for push-token registration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDeviceRequest {
    pub token: String,
    pub platform: String,
}

impl MannaClient {
    /// Create a new Manna API client.
    ///
    /// The token is empty before sign-in; the auth header is attached only
    /// once a session exists.
    pub fn new(config: MannaClientConfig) -> Result<Self, AppError> {
        let mut headers = header::HeaderMap::new();

        if !config.token.is_empty() {
            let mut token_value =
                header::HeaderValue::from_str(&format!("Bearer {}", config.token))
                    .map_err(|_| AppError::authentication("Invalid token format"))?;
            token_value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, token_value);
        }

        // Build the HTTP client
        let client = Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Get the base URL for API requests.
    fn api_url(&self, path: &str) -> String {
        format!("{}/v1{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Handle API response errors.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
        endpoint: &str,
    ) -> Result<T, AppError> {
        let status = response.status();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| AppError::internal(format!("Failed to parse response: {}", e)))
        } else if status == StatusCode::UNAUTHORIZED {
            // 401 Unauthorized - session expired or revoked
            Err(AppError::authentication(
                "Session expired or revoked. Please sign in again.",
            ))
        } else {
            let status_code = status.as_u16();
            let body = response.text().await.unwrap_or_default();
            let body_message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| {
                    // The API returns errors as {"message": "..."} or {"error": "..."}
                    v.get("message")
                        .or_else(|| v.get("error"))
                        .and_then(|m| m.as_str().map(|s| s.to_string()))
                });

            let message = match (status, &body_message) {
                (StatusCode::FORBIDDEN, _) => "Access denied".to_string(),
                (StatusCode::NOT_FOUND, _) => "Resource not found".to_string(),
                (StatusCode::TOO_MANY_REQUESTS, _) => "Rate limit exceeded".to_string(),
                (_, Some(msg)) => msg.clone(),
                _ => format!("Request failed ({}): {}", status_code, body),
            };

            Err(AppError::api_full(&message, status_code, endpoint))
        }
    }

    /// Make a GET request and parse the JSON response.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: Option<&impl Serialize>,
    ) -> Result<T, AppError> {
        let url = self.api_url(endpoint);

        let mut request = self.client.get(&url);
        if let Some(q) = query {
            request = request.query(q);
        }

        let response = request.send().await?;
        self.handle_response(response, endpoint).await
    }

    /// Send a POST request to an endpoint, expecting only a success status.
    async fn post_empty(&self, endpoint: &str) -> Result<(), AppError> {
        let url = self.api_url(endpoint);
        let response = self.client.post(&url).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AppError::api_full(
                "Request failed",
                response.status().as_u16(),
                endpoint,
            ))
        }
    }

    /// Validate the session by fetching the current user.
    pub async fn validate_session(&self) -> Result<User, AppError> {
        self.get_json("/me", None::<&()>).await
    }

    /// Sign in with email and password, returning a new session.
    pub async fn sign_in(&self, input: &SignInRequest) -> Result<Session, AppError> {
        let endpoint = "/auth/sign-in";
        let url = self.api_url(endpoint);
        let response = self.client.post(&url).json(input).send().await?;
        self.handle_response(response, endpoint).await
    }

    /// Get the groups the current user belongs to.
    pub async fn get_my_groups(&self) -> Result<Vec<Group>, AppError> {
        self.get_json("/me/groups", None::<&()>).await
    }

    /// Get the notices to surface on the home screen, newest first.
    pub async fn get_main_notices(&self) -> Result<Vec<Notice>, AppError> {
        self.get_json("/notices", Some(&[("placement", "home")]))
            .await
    }

    /// List fellowships for a group, newest first.
    pub async fn list_fellowships(&self, query: &FeedQuery) -> Result<Page<Fellowship>, AppError> {
        self.get_json("/fellowships", Some(query)).await
    }

    /// List prayer requests for a group, newest first.
    pub async fn list_prayer_requests(
        &self,
        query: &FeedQuery,
    ) -> Result<Page<PrayerRequest>, AppError> {
        self.get_json("/prayer-requests", Some(query)).await
    }

    /// List board posts for a group, newest first.
    pub async fn list_board_posts(&self, query: &FeedQuery) -> Result<Page<BoardPost>, AppError> {
        self.get_json("/board-posts", Some(query)).await
    }

    /// Register this device's push token so the backend can target it.
    pub async fn register_push_token(
        &self,
        input: &RegisterDeviceRequest,
    ) -> Result<(), AppError> {
        let endpoint = "/devices";
        let url = self.api_url(endpoint);
        let response = self.client.post(&url).json(input).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AppError::api_full(
                "Request failed",
                response.status().as_u16(),
                endpoint,
            ))
        }
    }
}

impl NotificationApi for MannaClient {
    async fn get_notifications(&self) -> Result<Vec<Notification>, AppError> {
        self.get_json("/notifications", None::<&()>).await
    }

    async fn mark_notification_as_read(&self, id: &str) -> Result<(), AppError> {
        let encoded = urlencoding::encode(id);
        self.post_empty(&format!("/notifications/{}/read", encoded))
            .await
    }

    async fn mark_all_notifications_as_read(&self) -> Result<(), AppError> {
        self.post_empty("/notifications/read-all").await
    }

    async fn delete_notification(&self, id: &str) -> Result<Notification, AppError> {
        let encoded = urlencoding::encode(id);
        let endpoint = format!("/notifications/{}", encoded);
        let url = self.api_url(&endpoint);
        let response = self.client.delete(&url).send().await?;
        self.handle_response(response, &endpoint).await
    }
}
