//! Bound action callbacks
//!
//! Interactive elements can carry a callback that the facade registers under
//! the element's `action_id` when the element enters a tree. Callbacks never
//! appear on the wire.

use std::fmt;
use std::sync::Arc;

/// A callback invoked when an action fires
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// A callback attached to an element
///
/// Two bound callbacks are equal when they share the same allocation.
#[derive(Clone)]
pub struct BoundCallback(Callback);

impl BoundCallback {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self(Arc::new(callback))
    }

    pub fn callback(&self) -> Callback {
        Arc::clone(&self.0)
    }

    pub fn call(&self) {
        (self.0)()
    }
}

impl From<Callback> for BoundCallback {
    fn from(callback: Callback) -> Self {
        Self(callback)
    }
}

impl fmt::Debug for BoundCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoundCallback(..)")
    }
}

impl PartialEq for BoundCallback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for BoundCallback {}

/// An action id paired with its callback
#[derive(Clone)]
pub struct ActionCallback {
    pub action_id: String,
    pub callback: Callback,
}

impl fmt::Debug for ActionCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionCallback")
            .field("action_id", &self.action_id)
            .finish_non_exhaustive()
    }
}

/// An element that can hold a bound callback
pub trait Callable {
    fn action_id(&self) -> Option<&str>;

    fn bound_callback(&self) -> Option<&BoundCallback>;

    /// The bound action, if both an id and a callback are present
    fn get_action(&self) -> Option<ActionCallback> {
        let action_id = self.action_id()?;
        let bound = self.bound_callback()?;
        Some(ActionCallback {
            action_id: action_id.to_string(),
            callback: bound.callback(),
        })
    }
}

/// Anything that may contain callable elements
pub trait Actionable {
    /// Every bound action reachable from this node, in tree order
    fn bound_actions(&self) -> Vec<ActionCallback>;
}

impl<T: Callable> Actionable for T {
    fn bound_actions(&self) -> Vec<ActionCallback> {
        self.get_action().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Trigger {
        id: Option<String>,
        callback: Option<BoundCallback>,
    }

    impl Callable for Trigger {
        fn action_id(&self) -> Option<&str> {
            self.id.as_deref()
        }

        fn bound_callback(&self) -> Option<&BoundCallback> {
            self.callback.as_ref()
        }
    }

    #[test]
    fn test_get_action_requires_id_and_callback() {
        let bound = BoundCallback::new(|| {});
        let unbound = Trigger {
            id: Some("a".to_string()),
            callback: None,
        };
        assert!(unbound.get_action().is_none());

        let anonymous = Trigger {
            id: None,
            callback: Some(bound.clone()),
        };
        assert!(anonymous.get_action().is_none());

        let complete = Trigger {
            id: Some("a".to_string()),
            callback: Some(bound),
        };
        let action = complete.get_action().unwrap();
        assert_eq!(action.action_id, "a");
        assert_eq!(complete.bound_actions().len(), 1);
    }

    #[test]
    fn test_bound_callback_identity() {
        let first = BoundCallback::new(|| {});
        let second = BoundCallback::new(|| {});
        assert_eq!(first, first.clone());
        assert_ne!(first, second);
    }

    #[test]
    fn test_bound_callback_call() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let bound = BoundCallback::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        bound.call();
        (bound.callback())();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
