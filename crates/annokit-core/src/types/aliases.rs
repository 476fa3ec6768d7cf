//! Type aliases for commonly used shared-ownership types.
//!
//! The editor runs on a single thread and shares host state through
//! `Rc<RefCell<_>>`; the event bus is shared across threads and uses
//! `parking_lot` locks.

use parking_lot::RwLock;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// # Example
/// ```rust,ignore
/// let host: Shared<EditorHost> = shared(EditorHost::default());
/// host.borrow_mut().set_scale(2.0);
/// ```
pub type Shared<T> = Rc<RefCell<T>>;


/// A thread-safe hash map with read-write lock.
pub type ThreadSafeRwMap<K, V> = Arc<RwLock<HashMap<K, V>>>;

/// Wrap a value in `Shared<T>`.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
