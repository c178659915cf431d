//! Shared entity handles
//!
//! Entities that are referenced from more than one place (a menu item on a
//! menu and on several orders, an order in both the waiter's and the
//! customer's list) are held through a [`Handle`]. Cloning a handle shares
//! the entity; membership checks compare identity via [`Handle::ptr_eq`].

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::fmt;
use std::sync::{Arc, Weak};

/// Shared, lockable reference to an entity
pub struct Handle<T>(Arc<RwLock<T>>);

impl<T> Handle<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(RwLock::new(value)))
    }

    /// Shared read access
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.0.read()
    }

    /// Exclusive write access
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.0.write()
    }

    /// True when both handles point at the same entity
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn downgrade(&self) -> WeakHandle<T> {
        WeakHandle(Arc::downgrade(&self.0))
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.read(), f)
    }
}

impl<T: fmt::Display> fmt::Display for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.read(), f)
    }
}

/// Non-owning back-reference to an entity
pub struct WeakHandle<T>(Weak<RwLock<T>>);

impl<T> WeakHandle<T> {
    /// Upgrade to a [`Handle`] if the entity is still alive
    pub fn upgrade(&self) -> Option<Handle<T>> {
        self.0.upgrade().map(Handle)
    }
}

impl<T> Clone for WeakHandle<T> {
    fn clone(&self) -> Self {
        Self(Weak::clone(&self.0))
    }
}

impl<T> fmt::Debug for WeakHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(WeakHandle)")
    }
}

/// Remove the first element identical to `target`, returning whether one was found
pub(crate) fn remove_by_identity<T>(list: &mut Vec<Handle<T>>, target: &Handle<T>) -> bool {
    match list.iter().position(|h| h.ptr_eq(target)) {
        Some(index) => {
            list.remove(index);
            true
        }
        None => false,
    }
}

/// True when `list` already holds `target`
pub(crate) fn contains_identity<T>(list: &[Handle<T>], target: &Handle<T>) -> bool {
    list.iter().any(|h| h.ptr_eq(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let a = Handle::new(1);
        let b = a.clone();
        *b.write() = 5;
        assert_eq!(*a.read(), 5);
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_equal_values_are_not_identical() {
        let a = Handle::new("x".to_string());
        let b = Handle::new("x".to_string());
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn test_weak_handle_upgrade() {
        let strong = Handle::new(7);
        let weak = strong.downgrade();
        assert_eq!(weak.upgrade().map(|h| *h.read()), Some(7));
        drop(strong);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_remove_by_identity() {
        let a = Handle::new(1);
        let b = Handle::new(1);
        let mut list = vec![a.clone(), b.clone()];

        assert!(remove_by_identity(&mut list, &b));
        assert_eq!(list.len(), 1);
        assert!(list[0].ptr_eq(&a));
        assert!(!remove_by_identity(&mut list, &b));
        assert!(contains_identity(&list, &a));
    }
}
