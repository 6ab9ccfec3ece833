/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::{Deserialize, Serialize};

/// One page of a collection plus what is needed to walk to the others
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub total: u64,

    #[serde(default)]
    pub page: Option<u32>,

    pub per_page: u32,

    #[serde(default)]
    pub paging: Paging,

    #[serde(rename = "data")]
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.paging.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.paging.previous.is_some()
    }
}

/// Links to other pages, relative to the API origin, e.g. `/me/albums?page=2`.
/// `next`/`previous` are absent on the last/first page.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Paging {
    #[serde(default)]
    pub first: Option<String>,

    #[serde(default)]
    pub last: Option<String>,

    #[serde(default)]
    pub next: Option<String>,

    #[serde(default)]
    pub previous: Option<String>,
}
