//! HTTP transport for the API.
//!
//! # Responsibilities
//! - Build authenticated requests against the configured endpoint
//! - Encode form bodies and decode JSON responses
//! - Map non-success statuses to typed errors
//!
//! # Design Decisions
//! - Paths are built from raw segments via the url crate, so resource names
//!   containing '/' or spaces are percent-encoded instead of splitting the path
//! - Every request carries a generated X-Request-Id for correlation
//! - No retries at this layer; callers own their retry policy

use std::time::Duration;

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;
use uuid::Uuid;

use crate::config::loader::validate_config;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

/// Authenticated client for the configuration API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    api_token: String,
}

impl Client {
    /// Create a client from a validated configuration.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        validate_config(&config).map_err(|errors| ApiError::Config(errors.join(", ")))?;

        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "base_url '{}' cannot carry path segments",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        tracing::debug!(
            base_url = %base_url,
            timeout_secs = config.timeout_secs,
            "API client initialized"
        );

        Ok(Self {
            http,
            base_url,
            api_token: config.api_token,
        })
    }

    /// Create a client from `FASTLY_API_TOKEN` / `FASTLY_API_URL`.
    pub fn from_env() -> ApiResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Build a URL by appending raw path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Client::new rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET a JSON resource.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> ApiResult<T> {
        let url = self.endpoint(segments);
        let resp = self.dispatch(self.http.get(url.clone()), "GET", &url).await?;
        Ok(resp.json().await?)
    }

    /// POST a form-encoded body, decoding the JSON response.
    pub(crate) async fn post_form<B, T>(&self, segments: &[&str], body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments);
        let resp = self
            .dispatch(self.http.post(url.clone()).form(body), "POST", &url)
            .await?;
        Ok(resp.json().await?)
    }

    /// PUT a form-encoded body, decoding the JSON response.
    pub(crate) async fn put_form<B, T>(&self, segments: &[&str], body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments);
        let resp = self
            .dispatch(self.http.put(url.clone()).form(body), "PUT", &url)
            .await?;
        Ok(resp.json().await?)
    }

    /// DELETE a resource. Success carries no payload.
    pub(crate) async fn delete(&self, segments: &[&str]) -> ApiResult<()> {
        let url = self.endpoint(segments);
        self.dispatch(self.http.delete(url.clone()), "DELETE", &url)
            .await?;
        Ok(())
    }

    /// Send a request and map non-success statuses to ApiError::Remote.
    async fn dispatch(
        &self,
        req: reqwest::RequestBuilder,
        method: &str,
        url: &Url,
    ) -> ApiResult<Response> {
        let request_id = Uuid::new_v4();
        tracing::debug!(
            method = %method,
            path = %url.path(),
            request_id = %request_id,
            "Dispatching API request"
        );

        let resp = req
            .header("Fastly-Key", &self.api_token)
            .header("Accept", "application/json")
            .header("X-Request-Id", request_id.to_string())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            tracing::warn!(
                method = %method,
                path = %url.path(),
                status = status.as_u16(),
                request_id = %request_id,
                "API request failed"
            );
            return Err(ApiError::Remote {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> Client {
        let config = ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::with_token("abcd1234")
        };
        Client::new(config).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let client = test_client("https://api.example.com");
        let url = client.endpoint(&["service", "SU1Z0isx", "version", "1", "logging", "loggly"]);
        assert_eq!(
            url.as_str(),
            "https://api.example.com/service/SU1Z0isx/version/1/logging/loggly"
        );
    }

    #[test]
    fn test_endpoint_encodes_unsafe_segments() {
        let client = test_client("https://api.example.com");
        let url = client.endpoint(&["logging", "loggly", "a/b c"]);
        assert_eq!(url.path(), "/logging/loggly/a%2Fb%20c");
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = test_client("https://api.example.com/");
        let url = client.endpoint(&["service", "x"]);
        assert_eq!(url.path(), "/service/x");
    }

    #[test]
    fn test_new_rejects_empty_token() {
        let config = ClientConfig::default();
        assert!(matches!(Client::new(config), Err(ApiError::Config(_))));
    }
}
