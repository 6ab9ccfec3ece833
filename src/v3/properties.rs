/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::Serialize;
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Who can view an Album.
///
/// `Unknown` only ever comes back from the API for values this library does not recognize and
/// is rejected when used in a request.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AlbumPrivacyOption {
    #[default]
    Unknown,
    Anybody,
    EmbedOnly,
    Nobody,
    Password,
    Team,
    Unlisted,
}

/// Default ordering of the videos inside an Album
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AlbumSortOption {
    #[default]
    Unknown,
    AddedFirst,
    AddedLast,
    Alphabetical,
    Arranged,
    Comments,
    Likes,
    Newest,
    Oldest,
    Plays,
}

/// Sort methods accepted when listing Albums
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum GetAlbumsSortOption {
    Alphabetical,
    Date,
    Duration,
    Videos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
pub enum SortDirection {
    #[strum(to_string = "asc")]
    Ascending,
    #[strum(to_string = "desc")]
    Descending,
}
