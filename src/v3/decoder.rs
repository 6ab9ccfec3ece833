/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::VimeoError;
use crate::v3::{ApiResponse, Page};
use log::warn;
use serde::Deserialize;
use serde::de::DeserializeOwned;

const NOT_FOUND: u16 = 404;

// Error body the API sends along with 4xx/5xx responses
#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    error: Option<String>,
    developer_message: Option<String>,
}

// Message from the API's error body, if it sent one
fn error_message(response: &ApiResponse) -> Option<String> {
    serde_json::from_slice::<ApiErrorBody>(&response.body)
        .ok()
        .and_then(|b| b.developer_message.or(b.error))
}

/// Maps a non-2xx status to an error. `path` only feeds the error message.
pub fn check_status(response: &ApiResponse, path: &str) -> Result<(), VimeoError> {
    match response.status {
        200..=299 => Ok(()),
        NOT_FOUND => {
            let message = error_message(response);
            warn!("{} not found: {}", path, message.as_deref().unwrap_or("-"));
            Err(VimeoError::NotFound {
                path: path.to_string(),
                message,
            })
        }
        status if status >= 400 => {
            let message = error_message(response)
                .unwrap_or_else(|| String::from_utf8_lossy(&response.body).into_owned());
            warn!("{} failed with {}: {}", path, status, message);
            Err(VimeoError::ApiResponse(status, message))
        }
        _ => Ok(()),
    }
}

fn from_body<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, VimeoError> {
    serde_json::from_slice::<T>(&response.body)
        .map_err(|e| VimeoError::MalformedResponse(e.to_string()))
}

/// Decodes a single resource
pub fn decode_entity<T: DeserializeOwned>(
    response: ApiResponse,
    path: &str,
) -> Result<T, VimeoError> {
    check_status(&response, path)?;
    if !(200..=299).contains(&response.status) {
        return Err(VimeoError::MalformedResponse(format!(
            "unexpected status {} for {}",
            response.status, path
        )));
    }
    from_body(&response)
}

/// Decodes a paginated collection
pub fn decode_page<T: DeserializeOwned>(
    response: ApiResponse,
    path: &str,
) -> Result<Page<T>, VimeoError> {
    let page: Page<T> = decode_entity(response, path)?;
    if page.per_page == 0 {
        return Err(VimeoError::MalformedResponse(
            "per_page must be greater than 0".to_string(),
        ));
    }
    if page.items.len() > page.per_page as usize {
        return Err(VimeoError::MalformedResponse(format!(
            "{} items returned for a page size of {}",
            page.items.len(),
            page.per_page
        )));
    }
    Ok(page)
}

/// A delete is confirmed by a 2xx status alone. The body is expected to be empty and is
/// never looked at.
pub fn decode_deleted(response: ApiResponse, path: &str) -> Result<bool, VimeoError> {
    check_status(&response, path)?;
    Ok((200..=299).contains(&response.status))
}
