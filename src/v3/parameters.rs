/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::VimeoError;
use crate::v3::{AlbumPrivacyOption, AlbumSortOption, GetAlbumsSortOption, SortDirection};
use url::form_urlencoded;

/// Fields to set when creating or editing an Album.
///
/// Only the fields that are `Some` are sent, so an update only touches what is set here.
/// Encoding is form-urlencoded in a fixed order: `privacy`, `sort`, `name`, `description`,
/// `password`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EditAlbumParameters {
    pub name: Option<String>,
    pub description: Option<String>,
    pub privacy: Option<AlbumPrivacyOption>,
    pub password: Option<String>,
    pub sort: Option<AlbumSortOption>,
}

impl EditAlbumParameters {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.privacy.is_none()
            && self.password.is_none()
            && self.sort.is_none()
    }

    /// Form body for a POST/PATCH request
    pub fn encode(&self) -> Result<String, VimeoError> {
        let mut form = form_urlencoded::Serializer::new(String::new());
        if let Some(privacy) = self.privacy {
            if privacy == AlbumPrivacyOption::Unknown {
                return Err(VimeoError::InvalidArgument(
                    "album privacy cannot be Unknown".to_string(),
                ));
            }
            form.append_pair("privacy", privacy.into());
        }
        if let Some(sort) = self.sort {
            if sort == AlbumSortOption::Unknown {
                return Err(VimeoError::InvalidArgument(
                    "album sort cannot be Unknown".to_string(),
                ));
            }
            form.append_pair("sort", sort.into());
        }
        if let Some(name) = &self.name {
            form.append_pair("name", name);
        }
        if let Some(description) = &self.description {
            form.append_pair("description", description);
        }
        if let Some(password) = &self.password {
            form.append_pair("password", password);
        }
        Ok(form.finish())
    }
}

/// Paging and filtering controls for listing Albums
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GetAlbumsParameters {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub query: Option<String>,
    pub sort: Option<GetAlbumsSortOption>,
    pub direction: Option<SortDirection>,
}

impl GetAlbumsParameters {
    /// Query string in the order `page`, `per_page`, `query`, `sort`, `direction`.
    /// Returns `None` when nothing is set.
    pub fn encode(&self) -> Result<Option<String>, VimeoError> {
        let mut form = form_urlencoded::Serializer::new(String::new());
        let mut is_empty = true;

        if let Some(page) = self.page {
            if page == 0 {
                return Err(VimeoError::InvalidArgument("page starts at 1".to_string()));
            }
            form.append_pair("page", &page.to_string());
            is_empty = false;
        }
        if let Some(per_page) = self.per_page {
            if per_page == 0 {
                return Err(VimeoError::InvalidArgument(
                    "per_page must be greater than 0".to_string(),
                ));
            }
            form.append_pair("per_page", &per_page.to_string());
            is_empty = false;
        }
        if let Some(query) = &self.query {
            form.append_pair("query", query);
            is_empty = false;
        }
        if let Some(sort) = self.sort {
            form.append_pair("sort", sort.into());
            is_empty = false;
        }
        if let Some(direction) = self.direction {
            form.append_pair("direction", direction.into());
            is_empty = false;
        }

        Ok((!is_empty).then(|| form.finish()))
    }
}
