use ferrous_acme_dns_domain::config::ProviderConfig;
use ferrous_acme_dns_domain::{ApiToken, DomainError};
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use super::types::{Envelope, ErrorBody};

const USER_AGENT: &str = concat!("ferrous-acme-dns/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the DNSimple v2 API.
///
/// Implements the zone, account and TXT record ports. Calls are single shot:
/// no retry, no pagination.
pub struct DnsimpleClient {
    http: reqwest::Client,
    base_url: Url,
    token: ApiToken,
}

impl DnsimpleClient {
    pub fn new(base_url: &str, token: ApiToken, timeout: Duration) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DomainError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = Url::parse(base_url.trim_end_matches('/')).map_err(|e| {
            DomainError::Transport(format!("Invalid API base URL {}: {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(DomainError::Transport(format!(
                "API base URL {} cannot carry a path",
                base_url
            )));
        }

        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self, DomainError> {
        let token = config
            .api_token
            .as_deref()
            .ok_or_else(|| DomainError::Unauthorized("No API token configured".to_string()))
            .and_then(|t| ApiToken::new(t).map_err(DomainError::Unauthorized))?;

        Self::new(
            config.api_base(),
            token,
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        self.http.request(method, self.url(segments))
    }

    /// Appends `segments` to the base path, percent-encoding each one so a
    /// zone or record name can never add path, query or fragment parts.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends an authenticated request. Non-2xx statuses are returned as is
    /// so callers can give meaning to specific codes such as 404.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, DomainError> {
        let response = request
            .bearer_auth(self.token.expose())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::Timeout
                } else {
                    DomainError::Transport(e.to_string())
                }
            })?;

        debug!(
            path = %response.url().path(),
            status = response.status().as_u16(),
            "Provider API response"
        );

        Ok(response)
    }

    pub(crate) async fn read_data<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, DomainError> {
        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| DomainError::InvalidResponse(e.to_string()))?;
        Ok(envelope.data)
    }

    /// Turns a non-success response into a `DomainError`, keeping the
    /// provider's `message` when the body carries one.
    pub(crate) async fn error_from(&self, response: Response) -> DomainError {
        let status = response.status();
        let body: ErrorBody = response.json().await.unwrap_or_default();
        let message = body.message.unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string()
        });

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => DomainError::Unauthorized(message),
            _ => DomainError::Provider {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> DnsimpleClient {
        DnsimpleClient::new(base, ApiToken::new("t").unwrap(), Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_url_appends_segments() {
        let url = client("https://api.dnsimple.com/v2/").url(&["1385", "zones", "example.com"]);
        assert_eq!(url.as_str(), "https://api.dnsimple.com/v2/1385/zones/example.com");
    }

    #[test]
    fn test_url_encodes_reserved_characters() {
        let url = client("https://api.dnsimple.com/v2").url(&["1385", "zones", "other.com?x/y#z"]);

        assert_eq!(url.path(), "/v2/1385/zones/other.com%3Fx%2Fy%23z");
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn test_new_rejects_invalid_base() {
        let result = DnsimpleClient::new("not a url", ApiToken::new("t").unwrap(), Duration::from_secs(1));
        assert!(matches!(result, Err(DomainError::Transport(_))));
    }
}
