/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::VimeoError;
use crate::v3::parsers::{from_empty_str_to_none, from_str_or_unknown, id_from_uri};
use crate::v3::{AlbumPrivacyOption, AlbumSortOption};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Holds information returned from the Album API.
///
/// This is a snapshot of the Album at the time of the request. Updating the Album on the
/// server returns a new snapshot rather than changing this one.
///
/// See [Vimeo API Docs](https://developer.vimeo.com/api/reference/showcases) for more
/// details on the individual fields.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Album {
    pub uri: ResourceUri,

    pub name: String,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub link: Option<String>,

    #[serde(default)]
    pub duration: u64,

    #[serde(default)]
    pub privacy: AlbumPrivacy,

    #[serde(default, deserialize_with = "from_str_or_unknown")]
    pub sort: AlbumSortOption,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub layout: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub theme: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub resource_key: Option<String>,

    pub created_time: Option<DateTime<Utc>>,

    pub modified_time: Option<DateTime<Utc>>,
}

impl Album {
    /// Id assigned by the API, taken from the Album's uri
    pub fn id(&self) -> u64 {
        self.uri.id()
    }
}

impl std::fmt::Display for Album {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "name: {}, id: {}", self.name, self.id())
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct AlbumPrivacy {
    #[serde(default, deserialize_with = "from_str_or_unknown")]
    pub view: AlbumPrivacyOption,

    #[serde(
        default,
        deserialize_with = "from_empty_str_to_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub password: Option<String>,
}

/// Resource locator returned by the API along with the numeric id it ends in.
///
/// Decoding fails if the uri does not end in a numeric segment.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceUri {
    uri: String,
    id: u64,
}

impl ResourceUri {
    pub fn as_str(&self) -> &str {
        &self.uri
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl TryFrom<String> for ResourceUri {
    type Error = VimeoError;

    fn try_from(uri: String) -> Result<Self, Self::Error> {
        let id = id_from_uri(&uri)?;
        Ok(Self { uri, id })
    }
}

impl From<ResourceUri> for String {
    fn from(uri: ResourceUri) -> Self {
        uri.uri
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_known_fields_and_ignores_the_rest() {
        let album: Album = serde_json::from_value(json!({
            "uri": "/users/2433258/albums/10303859",
            "name": "Unit Test Album",
            "description": null,
            "privacy": {"view": "password", "password": "test"},
            "sort": "newest",
            "created_time": "2024-03-01T10:00:00+00:00",
            "pictures": {"sizes": []},
            "some_new_field": 12
        }))
        .unwrap();
        assert_eq!(album.id(), 10303859);
        assert_eq!(album.uri.as_str(), "/users/2433258/albums/10303859");
        assert_eq!(album.description, None);
        assert_eq!(album.privacy.view, AlbumPrivacyOption::Password);
        assert_eq!(album.sort, AlbumSortOption::Newest);
        assert!(album.created_time.is_some());
        assert_eq!(album.modified_time, None);
    }

    #[test]
    fn unknown_enum_values_fall_back() {
        let album: Album = serde_json::from_value(json!({
            "uri": "/albums/1",
            "name": "a",
            "privacy": {"view": "friends_of_friends"},
            "sort": "random"
        }))
        .unwrap();
        assert_eq!(album.privacy.view, AlbumPrivacyOption::Unknown);
        assert_eq!(album.sort, AlbumSortOption::Unknown);
    }

    #[test]
    fn missing_or_bad_uri_fails() {
        assert!(serde_json::from_value::<Album>(json!({"name": "a"})).is_err());
        assert!(serde_json::from_value::<Album>(json!({"uri": "/albums/x", "name": "a"})).is_err());
    }
}
