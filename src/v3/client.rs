/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::decoder::{decode_deleted, decode_entity, decode_page};
use crate::v3::errors::VimeoError;
use crate::v3::request::{album_path, albums_path};
use crate::v3::{
    Album, ApiClient, ApiRequest, ClientConfig, Creds, EditAlbumParameters, GetAlbumsParameters,
    Page, Transport, UserId,
};
use async_stream::try_stream;
use futures::Stream;
use log::debug;
use std::sync::Arc;

/// Entry point for the Album operations.
///
/// The client keeps no state between calls. It is cheap to clone and can be shared across
/// tasks. Every operation is a single request and nothing is retried.
///
/// ```rust,no_run
/// use vimeo::v3::{Client, Creds, EditAlbumParameters, UserId};
///
/// # async fn run() -> Result<(), vimeo::v3::VimeoError> {
/// let client = Client::new(Creds::from_token("access token"));
/// let album = client
///     .create_album(
///         &UserId::Me,
///         &EditAlbumParameters {
///             name: Some("Holidays".to_string()),
///             ..Default::default()
///         },
///     )
///     .await?;
/// client.delete_album(&UserId::Me, album.id()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client<T = ApiClient> {
    transport: Arc<T>,
}

impl<T> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
        }
    }
}

impl Client<ApiClient> {
    /// Creates a client talking to the public Vimeo API
    pub fn new(creds: Creds) -> Self {
        Self::with_transport(ApiClient::new(creds))
    }

    /// Creates a client with custom HTTP settings
    pub fn with_config(creds: Creds, config: ClientConfig) -> Result<Self, VimeoError> {
        Ok(Self::with_transport(ApiClient::with_config(creds, config)?))
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client on top of any [`Transport`]
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Retrieves one page of the Albums owned by `user`
    pub async fn albums(
        &self,
        user: &UserId,
        params: Option<&GetAlbumsParameters>,
    ) -> Result<Page<Album>, VimeoError> {
        let query = match params {
            Some(params) => params.encode()?,
            None => None,
        };
        let request = ApiRequest::get(albums_path(user)?, query);
        let path = request.path_and_query();
        debug!("listing albums: {}", path);
        decode_page(self.transport.send(request).await?, &path)
    }

    /// Retrieves every Album owned by `user`, following the `next` links page by page.
    ///
    /// The stream ends after the first error.
    pub fn albums_stream<'a>(
        &'a self,
        user: &'a UserId,
        params: Option<&'a GetAlbumsParameters>,
    ) -> impl Stream<Item = Result<Album, VimeoError>> + 'a {
        try_stream! {
            let query = match params {
                Some(params) => params.encode()?,
                None => None,
            };
            let mut request = ApiRequest::get(albums_path(user)?, query);
            loop {
                let path = request.path_and_query();
                debug!("streaming albums: {}", path);
                let page: Page<Album> = decode_page(self.transport.send(request).await?, &path)?;
                for album in page.items {
                    yield album;
                }

                match page.paging.next {
                    Some(next_page) => request = ApiRequest::from_link(&next_page)?,
                    None => break,
                }
            }
        }
    }

    /// Retrieves a single Album
    pub async fn album(&self, user: &UserId, album_id: u64) -> Result<Album, VimeoError> {
        let path = album_path(user, album_id)?;
        decode_entity(self.transport.send(ApiRequest::get(path.as_str(), None)).await?, &path)
    }

    /// Creates an Album and returns it as the API stored it, including its new id.
    ///
    /// `name` is required. Sending the same parameters twice creates two Albums.
    pub async fn create_album(
        &self,
        user: &UserId,
        params: &EditAlbumParameters,
    ) -> Result<Album, VimeoError> {
        if params.name.as_deref().is_none_or(|name| name.trim().is_empty()) {
            return Err(VimeoError::InvalidArgument(
                "an album name is required".to_string(),
            ));
        }
        let path = albums_path(user)?;
        let body = params.encode()?;
        debug!("creating album under {}", path);
        decode_entity(self.transport.send(ApiRequest::post(path.as_str(), body)).await?, &path)
    }

    /// Changes only the fields set in `params` and returns the updated Album
    pub async fn update_album(
        &self,
        user: &UserId,
        album_id: u64,
        params: &EditAlbumParameters,
    ) -> Result<Album, VimeoError> {
        let path = album_path(user, album_id)?;
        let body = params.encode()?;
        debug!("updating album {}", path);
        decode_entity(self.transport.send(ApiRequest::patch(path.as_str(), body)).await?, &path)
    }

    /// Deletes an Album. Fails with [`VimeoError::NotFound`] if it no longer exists.
    pub async fn delete_album(&self, user: &UserId, album_id: u64) -> Result<bool, VimeoError> {
        let path = album_path(user, album_id)?;
        debug!("deleting album {}", path);
        decode_deleted(self.transport.send(ApiRequest::delete(path.as_str())).await?, &path)
    }
}
