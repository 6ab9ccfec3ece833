/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::API_ORIGIN;
use crate::v3::errors::VimeoError;
use serde::Deserialize;
use std::str::FromStr;

// Parses an enum by its wire name, falling back to the default (Unknown) for null or
// values this library doesn't know about yet
pub fn from_str_or_unknown<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr + Default,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.and_then(|s| T::from_str(&s).ok()).unwrap_or_default())
}

// Parses strings that may be null or "" and sets to None
pub fn from_empty_str_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.is_empty()))
}

/// Extracts the numeric id from the last segment of a resource uri,
/// e.g. `/users/2433258/albums/10303859` -> `10303859`
pub fn id_from_uri(uri: &str) -> Result<u64, VimeoError> {
    let malformed = || VimeoError::MalformedResponse(format!("no numeric id in uri '{}'", uri));
    let req_url = url::Url::parse(API_ORIGIN)?.join(uri)?;
    let id_segment = req_url
        .path_segments()
        .ok_or_else(malformed)?
        .filter(|s| !s.is_empty())
        .next_back()
        .ok_or_else(malformed)?;
    id_segment.parse::<u64>().map_err(|_| malformed())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ids_from_uris() {
        assert_eq!(id_from_uri("/albums/10303859").unwrap(), 10303859);
        assert_eq!(id_from_uri("/users/2433258/albums/10303859").unwrap(), 10303859);
        assert_eq!(id_from_uri("/me/albums/42/").unwrap(), 42);
    }

    #[test]
    fn unparsable_uris() {
        for uri in ["", "/", "/me/albums/abc", "/me/albums/-1"] {
            assert!(
                matches!(id_from_uri(uri), Err(VimeoError::MalformedResponse(_))),
                "uri {uri:?} should not parse"
            );
        }
    }
}
