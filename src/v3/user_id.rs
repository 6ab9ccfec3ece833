/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::VimeoError;
use std::fmt;

/// Owner of a collection of resources.
///
/// `Me` addresses the user the access token belongs to without needing to know their id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserId {
    Me,
    Id(String),
}

impl UserId {
    const ME_PATH: &'static str = "/me";
    const USERS_PATH: &'static str = "/users/";

    /// Path prefix for resources owned by this user, e.g. `/me` or `/users/2433258`
    pub fn path(&self) -> Result<String, VimeoError> {
        match self {
            UserId::Me => Ok(Self::ME_PATH.to_string()),
            UserId::Id(id) => {
                if id.trim().is_empty() {
                    return Err(VimeoError::InvalidArgument(
                        "user id cannot be empty".to_string(),
                    ));
                }
                Ok(format!("{}{}", Self::USERS_PATH, urlencoding::encode(id)))
            }
        }
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId::Id(id.to_string())
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId::Id(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        UserId::Id(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Me => write!(f, "me"),
            UserId::Id(id) => write!(f, "{}", id),
        }
    }
}
