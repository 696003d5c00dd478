//! Entry API: look a key up once, then read, overwrite, fill in or remove it
//! without hashing again.

use super::core::RefMut;
use crate::{Bucket, HashValue};
use alloc::vec::Vec;
use core::{fmt, mem};
use hashbrown::hash_table;

/// The result of [`RandomMap::entry`][crate::RandomMap::entry]: either the
/// slot that already holds the key, or the place where it would go.
pub enum Entry<'a, K, V> {
    /// The key is in the map.
    Occupied(OccupiedEntry<'a, K, V>),
    /// The key is not in the map.
    Vacant(VacantEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    /// The slot of the key: where it is now, or `len` if it would be
    /// appended.
    pub fn index(&self) -> usize {
        match self {
            Entry::Occupied(slot) => slot.index(),
            Entry::Vacant(gap) => gap.index(),
        }
    }

    /// The key of the entry. For a vacant entry it is the key passed to
    /// `entry`.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(slot) => slot.key(),
            Entry::Vacant(gap) => gap.key(),
        }
    }

    /// Set-if-absent: keep an existing value, otherwise append `default` in
    /// a new last slot. Returns the value either way.
    ///
    /// ```
    /// use randmap::RandomMap;
    ///
    /// let mut map = RandomMap::new();
    /// map.insert("a", 1);
    /// assert_eq!(*map.entry("a").or_insert(5), 1);
    /// assert_eq!(*map.entry("b").or_insert(5), 5);
    /// ```
    pub fn or_insert(self, default: V) -> &'a mut V {
        self.or_insert_with(|| default)
    }

    /// Like [`or_insert`][Self::or_insert], but only builds the value when
    /// the key is absent.
    pub fn or_insert_with<F>(self, make: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        self.or_insert_with_key(|_| make())
    }

    /// Like [`or_insert_with`][Self::or_insert_with], handing the key to
    /// `make`.
    pub fn or_insert_with_key<F>(self, make: F) -> &'a mut V
    where
        F: FnOnce(&K) -> V,
    {
        match self {
            Entry::Occupied(slot) => slot.into_mut(),
            Entry::Vacant(gap) => {
                let value = make(&gap.key);
                gap.insert(value)
            }
        }
    }

    /// Fill an absent key with `V::default()`.
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }

    /// Run `f` on the value if the key is present; a vacant entry passes
    /// through untouched.
    pub fn and_modify<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        if let Entry::Occupied(slot) = &mut self {
            f(slot.get_mut());
        }
        self
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Entry<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Occupied(slot) => f.debug_tuple("Occupied").field(slot).finish(),
            Entry::Vacant(gap) => f.debug_tuple("Vacant").field(gap).finish(),
        }
    }
}

/// A key that is present, pinned to its slot.
///
/// Holding one borrows the map, so the slot cannot move underneath it.
pub struct OccupiedEntry<'a, K, V> {
    slots: &'a mut Vec<Bucket<K, V>>,
    index: hash_table::OccupiedEntry<'a, usize>,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    pub(super) fn new(
        slots: &'a mut Vec<Bucket<K, V>>,
        index: hash_table::OccupiedEntry<'a, usize>,
    ) -> Self {
        OccupiedEntry { slots, index }
    }

    /// The slot holding the entry.
    #[inline]
    pub fn index(&self) -> usize {
        *self.index.get()
    }

    fn bucket(&self) -> &Bucket<K, V> {
        &self.slots[self.index()]
    }

    /// The key stored in the map. This is the one inserted first, not the
    /// one passed to `entry`.
    pub fn key(&self) -> &K {
        &self.bucket().key
    }

    pub fn get(&self) -> &V {
        &self.bucket().value
    }

    pub fn get_mut(&mut self) -> &mut V {
        let i = self.index();
        &mut self.slots[i].value
    }

    /// Give up the entry and keep a reference to the value for as long as
    /// the map borrow lasts.
    pub fn into_mut(self) -> &'a mut V {
        let i = self.index();
        &mut self.slots[i].value
    }

    /// Overwrite the value in place and return the old one. Nothing moves.
    pub fn insert(&mut self, value: V) -> V {
        mem::replace(self.get_mut(), value)
    }

    /// Delete the entry and return its value.
    ///
    /// The entry in the last slot moves into the freed one; every other slot
    /// keeps its position. **O(1)** (average).
    pub fn remove(self) -> V {
        self.remove_entry().1
    }

    /// Delete the entry and return the stored key and value, filling the
    /// hole from the last slot like [`remove`][Self::remove].
    pub fn remove_entry(self) -> (K, V) {
        let (hole, emptied) = self.index.remove();
        RefMut::new(emptied.into_table(), self.slots).swap_remove_finish(hole)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OccupiedEntry<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OccupiedEntry")
            .field("index", &self.index())
            .field("key", self.key())
            .field("value", self.get())
            .finish()
    }
}

/// An absent key, already hashed, waiting for a value.
pub struct VacantEntry<'a, K, V> {
    map: RefMut<'a, K, V>,
    hash: HashValue,
    key: K,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    pub(super) fn new(map: RefMut<'a, K, V>, hash: HashValue, key: K) -> Self {
        VacantEntry { map, hash, key }
    }

    /// The slot the key will get if inserted, which is always the current
    /// `len`.
    pub fn index(&self) -> usize {
        self.map.len()
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Drop the entry and get the key back.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Append the key and `value` in a new last slot. **O(1)** (amortized
    /// average).
    pub fn insert(self, value: V) -> &'a mut V {
        self.map
            .insert_unique(self.hash, self.key, value)
            .into_mut()
    }
}

impl<K: fmt::Debug, V> fmt::Debug for VacantEntry<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VacantEntry")
            .field("index", &self.index())
            .field("key", self.key())
            .finish()
    }
}
