//! Node Behavior System
//!
//! This module provides the trait-based behaviors shared across node types:
//!
//! - `Collect` - Child list composition with closed-set admission
//! - `Callable` - Elements that can carry a bound callback
//! - `Actionable` - Trees that yield their bound callbacks for registration
//!
//! Behaviors are implemented on the catalog types in `models`; the builder
//! facade in `services` only talks to nodes through these traits.

pub mod callable;
pub mod collect;

pub use callable::{ActionCallback, Actionable, BoundCallback, Callable, Callback};
pub use collect::Collect;
