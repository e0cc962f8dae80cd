//! Business Services
//!
//! This module contains the services that sit on top of the node catalog:
//!
//! - `BlockKit` - Builder facade: factories, tree assembly and rendering
//! - `ActionRegistry` - Shared map of action ids to bound callbacks
//! - `BlockKitConfig` - Preview URL and JSON output settings
//!
//! Services coordinate between the catalog and the caller, registering bound
//! callbacks and turning validated trees into wire payloads.

pub mod action_registry;
pub mod block_kit;
pub mod config;
pub mod error;

pub use action_registry::ActionRegistry;
pub use block_kit::BlockKit;
pub use config::BlockKitConfig;
pub use error::{ActionError, BlockKitError};
