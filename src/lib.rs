/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Vimeo
//!
//! This Vimeo library was created for working with the Vimeo API v3 interface.
//!
//! For further details on the Rest API refer to the [Vimeo API Docs](https://developer.vimeo.com/api/reference)
//!
//! ## Features
//!
//! - Album management for the authenticated user (`/me`) or any user id
//!     - List a page of Albums, or stream all of them following the paging links
//!     - Get, create, update and delete an Album
//! - Typed pagination envelope ([`v3::Page`])
//! - Lower level interface for handling the raw communication ([`v3::Transport`])
//!
//! *The Vimeo API uses OAuth2 bearer tokens. Getting the access token is left up to the
//! consumer of this library*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! vimeo = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use futures::{pin_mut, StreamExt};
//! use vimeo::v3::{
//!     AlbumPrivacyOption, Client, Creds, EditAlbumParameters, GetAlbumsParameters, UserId,
//! };
//!
//! async fn rename_albums(access_token: &str) -> anyhow::Result<()> {
//!     let client = Client::new(Creds::from_token(access_token));
//!
//!     let params = GetAlbumsParameters {
//!         per_page: Some(50),
//!         ..Default::default()
//!     };
//!     let albums = client.albums_stream(&UserId::Me, Some(&params));
//!     pin_mut!(albums);
//!     while let Some(album) = albums.next().await {
//!         let album = album?;
//!         let changes = EditAlbumParameters {
//!             name: Some(format!("{} (archived)", album.name)),
//!             privacy: Some(AlbumPrivacyOption::Nobody),
//!             ..Default::default()
//!         };
//!         client.update_album(&UserId::Me, album.id(), &changes).await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
pub mod v3;
