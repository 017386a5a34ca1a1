//! Thread-safe wrapper around `KeyedRepository`.
//!
//! # Invariants
//! - One mutex per repository instance; every operation holds it for its
//!   whole duration, so each mutation is a single critical section.
//! - Reads hand back clones because references cannot outlive the guard.

use crate::model::entity::Keyed;
use crate::repo::keyed_repo::{FieldUpdate, KeyedRepository, QuantityTracked, RepoResult};
use parking_lot::Mutex;

/// Keyed repository that can be shared between threads behind an `Arc`.
#[derive(Debug)]
pub struct SharedRepository<T: Keyed> {
    inner: Mutex<KeyedRepository<T>>,
}

impl<T: Keyed> Default for SharedRepository<T> {
    fn default() -> Self {
        Self::from_repository(KeyedRepository::new())
    }
}

impl<T: Keyed> SharedRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing repository, e.g. one restored by a persistence adapter.
    pub fn from_repository(repo: KeyedRepository<T>) -> Self {
        Self {
            inner: Mutex::new(repo),
        }
    }

    pub fn add(&self, entity: T) -> RepoResult<(), T::Key> {
        self.inner.lock().add(entity)
    }

    pub fn get_by_id(&self, key: T::Key) -> RepoResult<T, T::Key>
    where
        T: Clone,
    {
        self.inner.lock().get_by_id(key).cloned()
    }

    pub fn remove(&self, key: T::Key) -> RepoResult<T, T::Key> {
        self.inner.lock().remove(key)
    }

    pub fn update_field<U>(&self, key: T::Key, update: U) -> RepoResult<(), T::Key>
    where
        U: FieldUpdate<T>,
    {
        self.inner.lock().update_field(key, update)
    }

    pub fn update_quantity(&self, key: T::Key, quantity: i64) -> RepoResult<(), T::Key>
    where
        T: QuantityTracked,
    {
        self.inner.lock().update_quantity(key, quantity)
    }

    pub fn get_all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.lock().get_all()
    }

    pub fn contains(&self, key: T::Key) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Runs `f` against the repository while holding the lock.
    ///
    /// Use for multi-step reads that must observe one consistent state.
    pub fn with<R>(&self, f: impl FnOnce(&KeyedRepository<T>) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Unwraps the lock, returning the plain repository.
    pub fn into_inner(self) -> KeyedRepository<T> {
        self.inner.into_inner()
    }
}
