//! Action Registry
//!
//! Maps `action_id` strings to the callbacks bound to interactive elements.
//!
//! # Architecture
//!
//! The registry is a cloneable handle over `Arc<RwLock<HashMap<..>>>`. Clones
//! share one store, so several builders can register into the same registry
//! by passing a clone to `BlockKit::with_registry`.
//!
//! - **Last write wins**: registering an existing id replaces its callback
//! - **Poisoned locks** are recovered, a panicking callback elsewhere never
//!   makes the registry unusable
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use blockkit_core::services::ActionRegistry;
//!
//! let registry = ActionRegistry::new();
//! registry.register("approve", Arc::new(|| {}));
//!
//! assert!(registry.lookup("approve").is_some());
//! assert!(registry.resolve("reject").is_err());
//! ```

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::behaviors::callable::{Actionable, Callback};
use crate::models::elements::generate_action_id;
use crate::services::error::ActionError;

/// Shared map of action ids to callbacks
#[derive(Clone, Default)]
pub struct ActionRegistry {
    /// Map: action_id → callback
    actions: Arc<RwLock<HashMap<String, Callback>>>,
}

impl ActionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Callback>> {
        self.actions.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Callback>> {
        self.actions.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a callback, replacing any previous one under the same id
    pub fn register(&self, action_id: impl Into<String>, callback: Callback) {
        let action_id = action_id.into();
        let replaced = self.write().insert(action_id.clone(), callback).is_some();
        if replaced {
            tracing::debug!("Replaced callback for action '{}'", action_id);
        } else {
            tracing::trace!("Registered callback for action '{}'", action_id);
        }
    }

    /// Register a callback under a fresh UUID and return the id
    pub fn create_anonymous(&self, callback: Callback) -> String {
        let action_id = generate_action_id();
        self.register(action_id.clone(), callback);
        action_id
    }

    /// Look up a callback, `None` when the id is unknown
    pub fn lookup(&self, action_id: &str) -> Option<Callback> {
        self.read().get(action_id).cloned()
    }

    /// Look up a callback, failing when the id is unknown
    pub fn resolve(&self, action_id: &str) -> Result<Callback, ActionError> {
        self.lookup(action_id)
            .ok_or_else(|| ActionError::not_found(action_id))
    }

    /// Remove a callback
    pub fn delete(&self, action_id: &str) -> Result<(), ActionError> {
        match self.write().remove(action_id) {
            Some(_) => {
                tracing::trace!("Deleted callback for action '{}'", action_id);
                Ok(())
            }
            None => Err(ActionError::not_found(action_id)),
        }
    }

    /// Register every bound callback reachable from `node`
    ///
    /// Returns the number of callbacks registered.
    pub fn bind<A>(&self, node: &A) -> usize
    where
        A: Actionable + ?Sized,
    {
        let actions = node.bound_actions();
        let count = actions.len();
        if count > 0 {
            let mut store = self.write();
            for action in actions {
                store.insert(action.action_id, action.callback);
            }
            tracing::debug!("Bound {} action callbacks", count);
        }
        count
    }

    pub fn contains(&self, action_id: &str) -> bool {
        self.read().contains_key(action_id)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<String> = self.read().keys().cloned().collect();
        ids.sort();
        f.debug_struct("ActionRegistry").field("actions", &ids).finish()
    }
}
