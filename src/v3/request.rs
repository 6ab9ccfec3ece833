/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::UserId;
use crate::v3::errors::VimeoError;
use reqwest::Method;

const ALBUMS_SEGMENT: &str = "/albums";

/// Transport agnostic description of a single API call.
///
/// `path` is relative to the API origin and `query`/`body` are already encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>, query: Option<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: query.filter(|q| !q.is_empty()),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: String) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            query: None,
            body: Some(body),
        }
    }

    pub fn patch(path: impl Into<String>, body: String) -> Self {
        Self {
            method: Method::PATCH,
            path: path.into(),
            query: None,
            body: Some(body),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::DELETE,
            path: path.into(),
            query: None,
            body: None,
        }
    }

    /// GET request for a paging link as returned by the API, e.g. `/me/albums?page=2`.
    ///
    /// Only links relative to the API origin are followed.
    pub fn from_link(link: &str) -> Result<Self, VimeoError> {
        if !link.starts_with('/') || link.starts_with("//") {
            return Err(VimeoError::MalformedResponse(format!(
                "paging link '{}' is not relative to the API origin",
                link
            )));
        }
        Ok(match link.split_once('?') {
            Some((path, query)) => Self::get(path, Some(query.to_string())),
            None => Self::get(link, None),
        })
    }

    /// Path plus query, as it would appear after the origin
    pub fn path_and_query(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }

    /// Full URL of this request against the given API origin.
    /// Fails if the path would take the request to another origin.
    pub fn url(&self, api_origin: &str) -> Result<url::Url, VimeoError> {
        let origin_url = url::Url::parse(api_origin)?;
        let mut req_url = origin_url.join(&self.path)?;
        if req_url.origin() != origin_url.origin() {
            return Err(VimeoError::MalformedResponse(format!(
                "'{}' is not under {}",
                self.path, api_origin
            )));
        }
        req_url.set_query(self.query.as_deref());
        Ok(req_url)
    }
}

/// Path of the Album collection owned by `user`
pub fn albums_path(user: &UserId) -> Result<String, VimeoError> {
    Ok(format!("{}{}", user.path()?, ALBUMS_SEGMENT))
}

/// Path of a single Album owned by `user`
pub fn album_path(user: &UserId, album_id: u64) -> Result<String, VimeoError> {
    Ok(format!("{}/{}", albums_path(user)?, album_id))
}
