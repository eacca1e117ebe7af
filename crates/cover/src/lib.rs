//! # Catalog Cover
//!
//! Cover-reference classification and background loading for library items.
//!
//! ## Features
//!
//! - **Pure classification** - a free-form cover string becomes a
//!   [`CoverDescriptor`] (remote image, inline base64 image, or nothing)
//!   with mime-type inference for `data:` URIs
//! - **Explicit load handle** - the slow fetch runs on a background task
//!   behind a [`CoverFetcher`] seam, with a cancellation flag checked before
//!   any result is surfaced
//!
//! Decoding the image bytes (base64 or bitmap) is a downstream concern; this
//! crate never touches pixel data.

mod loader;
mod resolver;

pub use loader::{spawn_load, CoverFetcher, CoverLoadTask, CoverPayload, LoadedCover};
pub use resolver::{resolve_cover, resolve_item_cover, CoverDescriptor, MIME_AUTO};
