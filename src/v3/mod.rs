/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod client;
pub mod decoder;
mod parsers;
pub mod album;
pub mod paging;
pub mod parameters;
pub mod properties;
pub mod request;
pub mod user_id;
pub mod errors;

pub use album::*;
pub use api::*;
pub use client::*;
pub use errors::*;
pub use paging::*;
pub use parameters::*;
pub use properties::*;
pub use request::ApiRequest;
pub use user_id::*;
