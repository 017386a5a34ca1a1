//! Generic keyed repository and its error taxonomy.
//!
//! # Responsibility
//! - Own every stored entity and enforce one entity per key.
//! - Signal every rejected operation with a typed `RepoError`.
//!
//! # Invariants
//! - `add` never overwrites; a duplicate key leaves the store untouched.
//! - Lookups, removals and updates on an absent key fail with `NotFound`.
//! - `update_field` validates the new value before checking key existence.
//! - Snapshots (`get_all`) are in insertion order and detached from the store.
//! - This layer never logs; callers decide how failures are reported.

use crate::model::entity::{EntityId, InvalidValue, Keyed};
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

pub type RepoResult<T, K = EntityId> = Result<T, RepoError<K>>;

/// Failure kinds surfaced by `KeyedRepository` operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError<K = EntityId> {
    /// Insert targeted a key that is already stored.
    DuplicateKey(K),
    /// Lookup, removal or update targeted an absent key.
    NotFound(K),
    /// Update value violated a domain constraint.
    InvalidValue(InvalidValue),
}

impl<K: Display> Display for RepoError<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKey(key) => write!(f, "entity key {key} already exists"),
            Self::NotFound(key) => write!(f, "entity key {key} not found"),
            Self::InvalidValue(err) => write!(f, "{err}"),
        }
    }
}

impl<K: Debug + Display> Error for RepoError<K> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidValue(err) => Some(err),
            Self::DuplicateKey(_) | Self::NotFound(_) => None,
        }
    }
}

impl<K> From<InvalidValue> for RepoError<K> {
    fn from(value: InvalidValue) -> Self {
        Self::InvalidValue(value)
    }
}

/// Targeted in-place mutation of one entity field.
///
/// `validate` runs before the repository looks the key up, so it must only
/// inspect the new value, never the stored entity.
pub trait FieldUpdate<T> {
    fn validate(&self) -> Result<(), InvalidValue>;
    fn apply(self, entity: &mut T);
}

/// Entities carrying a mutable stock quantity.
pub trait QuantityTracked {
    fn quantity(&self) -> i64;
    fn set_quantity(&mut self, quantity: i64);
}

/// Replaces the quantity of a `QuantityTracked` entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetQuantity(pub i64);

impl<T: QuantityTracked> FieldUpdate<T> for SetQuantity {
    fn validate(&self) -> Result<(), InvalidValue> {
        if self.0 < 0 {
            return Err(InvalidValue::new("quantity", self.0, "must not be negative"));
        }
        Ok(())
    }

    fn apply(self, entity: &mut T) {
        entity.set_quantity(self.0);
    }
}

/// In-memory store of entities addressed by their unique key.
#[derive(Debug, Clone)]
pub struct KeyedRepository<T: Keyed> {
    entries: IndexMap<T::Key, T>,
}

impl<T: Keyed> Default for KeyedRepository<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T: Keyed> KeyedRepository<T> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository from an ordered seed sequence.
    ///
    /// All-or-nothing: the first duplicate key fails the whole build.
    pub fn try_from_seed<I>(seed: I) -> RepoResult<Self, T::Key>
    where
        I: IntoIterator<Item = T>,
    {
        let mut repo = Self::new();
        for entity in seed {
            repo.add(entity)?;
        }
        Ok(repo)
    }

    /// Inserts `entity` under its key.
    ///
    /// # Errors
    /// - `DuplicateKey` when the key is already stored; the store is unchanged.
    pub fn add(&mut self, entity: T) -> RepoResult<(), T::Key> {
        let key = entity.key();
        match self.entries.entry(key) {
            Entry::Occupied(_) => Err(RepoError::DuplicateKey(key)),
            Entry::Vacant(slot) => {
                slot.insert(entity);
                Ok(())
            }
        }
    }

    /// Returns the stored entity for `key`.
    pub fn get_by_id(&self, key: T::Key) -> RepoResult<&T, T::Key> {
        self.entries.get(&key).ok_or(RepoError::NotFound(key))
    }

    /// Deletes the entity for `key` and hands it back.
    ///
    /// Remaining entities keep their relative insertion order.
    pub fn remove(&mut self, key: T::Key) -> RepoResult<T, T::Key> {
        self.entries
            .shift_remove(&key)
            .ok_or(RepoError::NotFound(key))
    }

    /// Applies a targeted field update to the entity for `key`.
    ///
    /// # Errors
    /// - `InvalidValue` when `update` is rejected; takes precedence over a
    ///   missing key.
    /// - `NotFound` when `key` is absent.
    pub fn update_field<U>(&mut self, key: T::Key, update: U) -> RepoResult<(), T::Key>
    where
        U: FieldUpdate<T>,
    {
        update.validate()?;
        let entity = self
            .entries
            .get_mut(&key)
            .ok_or(RepoError::NotFound(key))?;
        update.apply(entity);
        debug_assert!(entity.key() == key, "field update must not change identity");
        Ok(())
    }

    /// Sets the stock quantity of the entity for `key`.
    ///
    /// Negative quantities fail with `InvalidValue` even when `key` is absent.
    pub fn update_quantity(&mut self, key: T::Key, quantity: i64) -> RepoResult<(), T::Key>
    where
        T: QuantityTracked,
    {
        self.update_field(key, SetQuantity(quantity))
    }

    /// Returns a detached copy of all entities in insertion order.
    pub fn get_all(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.entries.values().cloned().collect()
    }

    /// Iterates stored entities in insertion order without copying.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.values()
    }

    /// Iterates stored keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = T::Key> + '_ {
        self.entries.keys().copied()
    }

    pub fn contains(&self, key: T::Key) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldUpdate, KeyedRepository, QuantityTracked, RepoError, SetQuantity};
    use crate::model::entity::{InvalidValue, Keyed};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Crate {
        id: u32,
        label: String,
        quantity: i64,
    }

    impl Crate {
        fn new(id: u32, label: &str, quantity: i64) -> Self {
            Self {
                id,
                label: label.to_string(),
                quantity,
            }
        }
    }

    impl Keyed for Crate {
        type Key = u32;

        fn key(&self) -> u32 {
            self.id
        }
    }

    impl QuantityTracked for Crate {
        fn quantity(&self) -> i64 {
            self.quantity
        }

        fn set_quantity(&mut self, quantity: i64) {
            self.quantity = quantity;
        }
    }

    struct Relabel(&'static str);

    impl FieldUpdate<Crate> for Relabel {
        fn validate(&self) -> Result<(), InvalidValue> {
            if self.0.trim().is_empty() {
                return Err(InvalidValue::new("label", self.0, "must not be empty"));
            }
            Ok(())
        }

        fn apply(self, entity: &mut Crate) {
            entity.label = self.0.to_string();
        }
    }

    #[test]
    fn duplicate_add_keeps_original_entity() {
        let mut repo = KeyedRepository::new();
        repo.add(Crate::new(7, "bolts", 3)).unwrap();

        let err = repo.add(Crate::new(7, "nuts", 9)).unwrap_err();
        assert_eq!(err, RepoError::DuplicateKey(7));
        assert_eq!(repo.get_by_id(7).unwrap(), &Crate::new(7, "bolts", 3));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn custom_field_update_only_touches_target_field() {
        let mut repo = KeyedRepository::new();
        repo.add(Crate::new(1, "bolts", 3)).unwrap();

        repo.update_field(1, Relabel("washers")).unwrap();
        let stored = repo.get_by_id(1).unwrap();
        assert_eq!(stored.label, "washers");
        assert_eq!(stored.quantity, 3);
    }

    #[test]
    fn invalid_update_wins_over_missing_key() {
        let mut repo: KeyedRepository<Crate> = KeyedRepository::new();
        let err = repo.update_field(42, Relabel("  ")).unwrap_err();
        assert!(matches!(err, RepoError::InvalidValue(ref value) if value.field == "label"));
    }

    #[test]
    fn set_quantity_accepts_zero() {
        assert!(FieldUpdate::<Crate>::validate(&SetQuantity(0)).is_ok());
        assert!(FieldUpdate::<Crate>::validate(&SetQuantity(-1)).is_err());
    }

    #[test]
    fn removal_preserves_order_of_remaining_entities() {
        let mut repo =
            KeyedRepository::try_from_seed([1, 2, 3, 4].map(|id| Crate::new(id, "x", 0))).unwrap();
        repo.remove(2).unwrap();
        assert_eq!(repo.keys().collect::<Vec<_>>(), vec![1, 3, 4]);
    }

    #[test]
    fn error_messages_identify_key() {
        assert_eq!(
            RepoError::<u32>::DuplicateKey(101).to_string(),
            "entity key 101 already exists"
        );
        assert_eq!(
            RepoError::<u32>::NotFound(999).to_string(),
            "entity key 999 not found"
        );
    }
}
