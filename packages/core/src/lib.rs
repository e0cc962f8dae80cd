//! Block Kit Core
//!
//! This crate provides a typed builder for Slack Block Kit payloads: the node
//! catalog, its construction-time validation and the JSON wire format.
//!
//! # Architecture
//!
//! - **Typed nodes**: every block, element and composition object is its own
//!   Rust type with a fixed `type` discriminant
//! - **Validate on construction**: constructors and setters reject out-of-range
//!   values, a node that exists is a valid node
//! - **Closed sets**: fields that accept only some element types hold an enum
//!   of exactly those types
//! - **Order-preserving JSON**: mappings keep declaration order and nulls are
//!   stripped on the way out
//!
//! # Modules
//!
//! - [`models`] - Node catalog (blocks, elements, composition objects, surfaces)
//! - [`behaviors`] - Child composition and bound-callback traits
//! - [`services`] - `BlockKit` facade, action registry, configuration
//! - [`utils`] - Serialization and text helpers
//! - [`mrkdwn`] - Markdown tokens accepted wherever text is
//!
//! # Examples
//!
//! ```rust
//! use blockkit_core::{BlockKit, MarkdownToken};
//!
//! let mut kit = BlockKit::new();
//! let section = kit.section(MarkdownToken::bold("Ready to ship")).unwrap();
//! kit.push(section).unwrap();
//!
//! let wire = kit.to_wire().unwrap();
//! assert_eq!(wire[0]["text"]["type"], "mrkdwn");
//! assert_eq!(wire[0]["text"]["text"], "*Ready to ship*");
//! ```

pub mod behaviors;
pub mod models;
pub mod mrkdwn;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use behaviors::*;
pub use models::*;
pub use mrkdwn::{MarkdownToken, TextContent};
pub use services::*;
