//! Utility functions for Block Kit Core
//!
//! Text classification and wire serialization helpers shared across models
//! and services.

pub mod serialize;
mod text;

pub use serialize::{preview_url, strip_nulls, to_json_string, wire_payload, PREVIEW_BASE_URL};
pub use text::{contains_emoji, is_url, url_extension};
