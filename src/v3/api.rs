/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::ApiRequest;
use crate::v3::errors::VimeoError;
use bytes::Bytes;
use log::{debug, trace};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::Duration;

// Root Vimeo API
pub const API_ORIGIN: &str = "https://api.vimeo.com";

// Pins the response format to API 3.4
pub const API_ACCEPT: &str = "application/vnd.vimeo.*+json;version=3.4";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Raw outcome of a request: the status code and whatever body came back
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Bytes,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends an [`ApiRequest`] and hands back the raw response.
///
/// Implementations only report network level failures as errors. Non-2xx statuses are
/// returned as a normal [`ApiResponse`] and classified by the caller.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<ApiResponse, VimeoError>> + Send;
}

/// Bearer token used to authenticate every request
#[derive(Clone)]
pub struct Creds {
    access_token: String,
}

impl Creds {
    pub fn from_token(access_token: &str) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    /// Reads the token from `VIMEO_ACCESS_TOKEN`
    pub fn from_env() -> Result<Self, VimeoError> {
        std::env::var("VIMEO_ACCESS_TOKEN")
            .map(|token| Self::from_token(&token))
            .map_err(|_| VimeoError::Config("VIMEO_ACCESS_TOKEN is not set".to_string()))
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("access_token", &"xxx")
            .finish()
    }
}

/// Settings for the HTTP side of [`ApiClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_origin: String,
    pub accept: String,
    pub user_agent: String,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_origin: API_ORIGIN.to_string(),
            accept: API_ACCEPT.to_string(),
            user_agent: concat!("vimeo-rs/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Defaults, with the origin overridden by `VIMEO_API_ORIGIN` when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(origin) = std::env::var("VIMEO_API_ORIGIN") {
            config.api_origin = origin;
        }
        config
    }
}

/// Directly communicates with the API.
#[derive(Clone)]
pub struct ApiClient {
    creds: Creds,
    config: ClientConfig,
    https_client: reqwest::Client,
}

impl ApiClient {
    /// Creates a new client talking to the public Vimeo API
    pub fn new(creds: Creds) -> Self {
        Self {
            creds,
            config: ClientConfig::default(),
            https_client: reqwest::Client::new(),
        }
    }

    /// Creates a new client with custom HTTP settings
    pub fn with_config(creds: Creds, config: ClientConfig) -> Result<Self, VimeoError> {
        url::Url::parse(&config.api_origin)?;
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let https_client = builder
            .build()
            .map_err(|e| VimeoError::Config(format!("failed building HTTP client: {e}")))?;
        Ok(Self {
            creds,
            config,
            https_client,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Transport for ApiClient {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, VimeoError> {
        let req_url = request.url(&self.config.api_origin)?;
        debug!("{} {}", request.method, request.path_and_query());

        let mut req = self
            .https_client
            .request(request.method.clone(), req_url)
            .bearer_auth(&self.creds.access_token)
            .header(ACCEPT, self.config.accept.as_str());
        if let Some(body) = request.body {
            trace!("request body: {}", body);
            req = req.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(body);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        trace!("{} {} -> {} ({} bytes)", request.method, request.path, status, body.len());
        Ok(ApiResponse { status, body })
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_origin", &self.config.api_origin)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn creds_are_redacted() {
        let creds = Creds::from_token("super-secret");
        assert!(!format!("{:?}", creds).contains("super-secret"));
    }

    #[test]
    fn bad_origin_is_rejected() {
        let config = ClientConfig {
            api_origin: "not a url".to_string(),
            ..Default::default()
        };
        assert!(ApiClient::with_config(Creds::from_token("t"), config).is_err());
    }
}
