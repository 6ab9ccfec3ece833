/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum VimeoError {
    /// Caller supplied a value that cannot be sent. Raised before any request goes out.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The response body did not have the expected shape
    #[error("API Response is malformed: {0}")]
    MalformedResponse(String),

    /// The API reported that the addressed resource does not exist.
    /// `message` is the API's own explanation when it sent one.
    #[error(
        "Resource not found: {path}{}",
        .message.as_deref().map(|m| format!(", msg: {m}")).unwrap_or_default()
    )]
    NotFound {
        path: String,
        message: Option<String>,
    },

    /// Network, TLS or timeout failure from the underlying HTTP client
    #[error("Request network error")]
    Transport(#[from] reqwest::Error),

    #[error("API Response was error: {0}, msg: {1}")]
    ApiResponse(u16, String),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl VimeoError {
    /// True when the error means the target resource is already gone
    pub fn is_not_found(&self) -> bool {
        matches!(self, VimeoError::NotFound { .. })
    }
}
