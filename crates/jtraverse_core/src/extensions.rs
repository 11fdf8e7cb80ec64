//! Caller-owned bookkeeping attached to a traversal context.

use std::any::Any;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

/// String-keyed store of typed values.
///
/// Callbacks use it to carry state between invocations of one traversal,
/// such as a running depth counter. The walker never reads or resets it.
///
/// # Example
///
/// ```rust
/// use jtraverse_core::Extensions;
///
/// let mut extensions = Extensions::new();
/// *extensions.get_or_default::<usize>("level") += 1;
/// assert_eq!(extensions.get::<usize>("level"), Some(&1));
/// assert_eq!(extensions.get::<String>("level"), None);
/// ```
#[derive(Default)]
pub struct Extensions {
    values: HashMap<String, Box<dyn Any>>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, returning the previous value.
    pub fn insert<T: Any>(&mut self, key: impl Into<String>, value: T) -> Option<Box<dyn Any>> {
        self.values.insert(key.into(), Box::new(value))
    }

    /// Returns the value under `key` if it exists and is a `T`.
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.values.get(key)?.downcast_ref()
    }

    /// Returns the value under `key` mutably if it exists and is a `T`.
    pub fn get_mut<T: Any>(&mut self, key: &str) -> Option<&mut T> {
        self.values.get_mut(key)?.downcast_mut()
    }

    /// Returns the `T` under `key`, inserting `init()` first if the key is
    /// absent or holds a value of another type.
    pub fn get_or_insert_with<T: Any>(
        &mut self,
        key: impl Into<String>,
        init: impl FnOnce() -> T,
    ) -> &mut T {
        let slot = match self.values.entry(key.into()) {
            Entry::Occupied(entry) => {
                let slot = entry.into_mut();
                if !slot.is::<T>() {
                    *slot = Box::new(init());
                }
                slot
            }
            Entry::Vacant(entry) => entry.insert(Box::new(init())),
        };
        slot.downcast_mut()
            .expect("extension slot must hold the requested type")
    }

    /// Like [`Extensions::get_or_insert_with`] with `T::default()`.
    pub fn get_or_default<T: Any + Default>(&mut self, key: impl Into<String>) -> &mut T {
        self.get_or_insert_with(key, T::default)
    }

    pub fn remove(&mut self, key: &str) -> Option<Box<dyn Any>> {
        self.values.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for Extensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.values.keys().collect();
        keys.sort();
        f.debug_struct("Extensions").field("keys", &keys).finish()
    }
}
