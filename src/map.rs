//! [`RandomMap`] is a hash table with constant-time random selection of its
//! keys, values and entries.

mod core;
mod entry;
mod iter;


pub use self::entry::{Entry, OccupiedEntry, VacantEntry};
pub use self::iter::{IntoIter, Iter, IterMut, Keys, Values};

use ::core::fmt;
use ::core::hash::{BuildHasher, Hash};
use ::core::ops::{Index, IndexMut};
use rand::Rng;

#[cfg(feature = "std")]
use std::collections::hash_map::RandomState;

use self::core::RandomMapCore;
use crate::{Bucket, Equivalent, Error, HashValue};

/// A hash table with constant-time uniform random selection.
///
/// The interface is closely compatible with the standard
/// [`HashMap`][std::collections::HashMap], and adds
/// [`random_key`][Self::random_key], [`random_value`][Self::random_value],
/// [`random_item`][Self::random_item] and [`pop_random`][Self::pop_random].
///
/// # Slots
///
/// The key-value pairs live in a dense range of *slots* `0..self.len()` with
/// no holes. A random pick draws one slot number uniformly and reads it, so
/// every live entry has the same chance of being picked, whatever the
/// history of insertions and removals.
///
/// Inserting a new key appends it in slot `len`. Inserting an existing key
/// replaces its value and keeps its slot. Removing a key moves the entry in
/// the last slot into the removed one, so the slot of at most one other
/// entry changes.
///
/// # Order
///
/// Iteration visits the slots in order. That is insertion order only as long
/// as nothing has been removed; after a removal the order is an artifact of
/// the storage and not a contract.
///
/// # Complexity
///
/// Lookup, insertion, removal and random selection are **O(1)** (average).
///
/// # Examples
///
/// ```
/// use randmap::RandomMap;
///
/// let mut map = RandomMap::new();
/// map.insert("a", 1);
/// map.insert("b", 2);
/// map.insert("c", 3);
/// map.remove("a");
///
/// let key = *map.random_key().unwrap();
/// assert!(key == "b" || key == "c");
/// ```
#[cfg(feature = "std")]
pub struct RandomMap<K, V, S = RandomState> {
    pub(crate) core: RandomMapCore<K, V>,
    hash_builder: S,
}
#[cfg(not(feature = "std"))]
pub struct RandomMap<K, V, S> {
    pub(crate) core: RandomMapCore<K, V>,
    hash_builder: S,
}

impl<K, V, S> Clone for RandomMap<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    /// Return an independent copy of the map. The two maps share no storage.
    fn clone(&self) -> Self {
        RandomMap {
            core: self.core.clone(),
            hash_builder: self.hash_builder.clone(),
        }
    }

    fn clone_from(&mut self, other: &Self) {
        self.core.clone_from(&other.core);
        self.hash_builder.clone_from(&other.hash_builder);
    }
}

impl<K, V, S> fmt::Debug for RandomMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    #[cfg(not(feature = "test_debug"))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }

    #[cfg(feature = "test_debug")]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Let the inner `RandomMapCore` print all of its details
        f.debug_struct("RandomMap")
            .field("core", &self.core)
            .finish()
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<K, V> RandomMap<K, V> {
    /// Create a new map. (Does not allocate.)
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new map with capacity for `n` key-value pairs. (Does not
    /// allocate if `n` is zero.)
    ///
    /// Computes in **O(n)** time.
    #[inline]
    pub fn with_capacity(n: usize) -> Self {
        Self::with_capacity_and_hasher(n, <_>::default())
    }
}

impl<K, V, S> RandomMap<K, V, S> {
    /// Create a new map with capacity for `n` key-value pairs. (Does not
    /// allocate if `n` is zero.)
    ///
    /// Computes in **O(n)** time.
    #[inline]
    pub fn with_capacity_and_hasher(n: usize, hash_builder: S) -> Self {
        if n == 0 {
            Self::with_hasher(hash_builder)
        } else {
            RandomMap {
                core: RandomMapCore::with_capacity(n),
                hash_builder,
            }
        }
    }

    /// Create a new map with `hash_builder`.
    ///
    /// This function is `const`, so it
    /// can be called in `static` contexts.
    pub const fn with_hasher(hash_builder: S) -> Self {
        RandomMap {
            core: RandomMapCore::new(),
            hash_builder,
        }
    }

    /// Return the number of elements the map can hold without reallocating.
    ///
    /// This number is a lower bound; the map might be able to hold more,
    /// but is guaranteed to be able to hold at least this many.
    ///
    /// Computes in **O(1)** time.
    pub fn capacity(&self) -> usize {
        self.core.capacity()
    }

    /// Return a reference to the map's `BuildHasher`.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Return the number of key-value pairs in the map.
    ///
    /// Computes in **O(1)** time.
    #[inline]
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// Returns true if the map contains no elements.
    ///
    /// Computes in **O(1)** time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return an iterator over the key-value pairs of the map, in slot order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.as_entries())
    }

    /// Return an iterator over the key-value pairs of the map, in slot order
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(self.as_entries_mut())
    }

    /// Return an iterator over the keys of the map, in slot order
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Return an iterator over the values of the map, in slot order
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Remove all key-value pairs in the map, while preserving its capacity.
    ///
    /// Computes in **O(n)** time.
    pub fn clear(&mut self) {
        self.core.clear();
    }

    #[inline]
    pub(crate) fn into_entries(self) -> alloc::vec::Vec<Bucket<K, V>> {
        self.core.into_entries()
    }

    #[inline]
    pub(crate) fn as_entries(&self) -> &[Bucket<K, V>] {
        self.core.as_entries()
    }

    #[inline]
    pub(crate) fn as_entries_mut(&mut self) -> &mut [Bucket<K, V>] {
        self.core.as_entries_mut()
    }
}

impl<K, V, S> RandomMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Create a map from `keys`, with every key bound to a clone of `value`.
    ///
    /// Duplicate keys collapse into one entry.
    ///
    /// ```
    /// use randmap::RandomMap;
    ///
    /// let map: RandomMap<_, _> = RandomMap::from_keys(["a", "b", "c"], 0);
    /// assert_eq!(map.len(), 3);
    /// assert!(map.values().all(|&v| v == 0));
    /// ```
    pub fn from_keys<I>(keys: I, value: V) -> Self
    where
        I: IntoIterator<Item = K>,
        V: Clone,
        S: Default,
    {
        keys.into_iter().map(|key| (key, value.clone())).collect()
    }

    /// Reserve capacity for `additional` more key-value pairs.
    ///
    /// Computes in **O(n)** time.
    pub fn reserve(&mut self, additional: usize) {
        self.core.reserve(additional);
    }

    /// Shrink the capacity of the map as much as possible.
    ///
    /// Computes in **O(n)** time.
    pub fn shrink_to_fit(&mut self) {
        self.core.shrink_to(0);
    }

    /// Shrink the capacity of the map with a lower limit.
    ///
    /// Computes in **O(n)** time.
    pub fn shrink_to(&mut self, min_capacity: usize) {
        self.core.shrink_to(min_capacity);
    }

    fn hash<Q: ?Sized + Hash>(&self, key: &Q) -> HashValue {
        HashValue(self.hash_builder.hash_one(key) as usize)
    }

    /// Insert a key-value pair in the map.
    ///
    /// If an equivalent key already exists in the map: the key remains in its
    /// slot, its corresponding value is updated with `value`, and the older
    /// value is returned inside `Some(_)`.
    ///
    /// If no equivalent key existed in the map: the new key-value pair is
    /// inserted in the last slot, and `None` is returned.
    ///
    /// Computes in **O(1)** time (amortized average).
    ///
    /// See also [`entry`][Self::entry] if you want to insert *or* modify.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.insert_full(key, value).1
    }

    /// Insert a key-value pair in the map, and get their slot.
    ///
    /// If an equivalent key already exists in the map: the key remains in its
    /// slot, its corresponding value is updated with `value`, and the older
    /// value is returned inside `(index, Some(_))`.
    ///
    /// If no equivalent key existed in the map: the new key-value pair is
    /// inserted in the last slot, and `(index, None)` is returned.
    ///
    /// Computes in **O(1)** time (amortized average).
    pub fn insert_full(&mut self, key: K, value: V) -> (usize, Option<V>) {
        let hash = self.hash(&key);
        self.core.insert_full(hash, key, value)
    }

    /// Get the given key's corresponding entry in the map for insertion and/or
    /// in-place manipulation.
    ///
    /// Computes in **O(1)** time (amortized average).
    ///
    /// ```
    /// use randmap::RandomMap;
    ///
    /// let mut counts = RandomMap::new();
    /// for word in "the cat and the hat".split(' ') {
    ///     *counts.entry(word).or_insert(0) += 1;
    /// }
    /// assert_eq!(counts["the"], 2);
    /// assert_eq!(counts["cat"], 1);
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        let hash = self.hash(&key);
        self.core.entry(hash, key)
    }

    /// Return `true` if an equivalent to `key` exists in the map.
    ///
    /// Computes in **O(1)** time (average).
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.get_index_of(key).is_some()
    }

    /// Return a reference to the value stored for `key`, if it is present,
    /// else `None`.
    ///
    /// Computes in **O(1)** time (average).
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let i = self.get_index_of(key)?;
        Some(&self.as_entries()[i].value)
    }

    /// Return a reference to the value stored for `key`, or `default` if it
    /// is not present.
    ///
    /// Computes in **O(1)** time (average).
    pub fn get_or<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.get(key).unwrap_or(default)
    }

    /// Return a reference to the value stored for `key`, or
    /// [`Error::KeyNotFound`] if it is not present.
    ///
    /// Computes in **O(1)** time (average).
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V, Error>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Return references to the key-value pair stored for `key`,
    /// if it is present, else `None`.
    ///
    /// Computes in **O(1)** time (average).
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let i = self.get_index_of(key)?;
        Some(self.as_entries()[i].refs())
    }

    /// Return the slot and references to the key-value pair stored for
    /// `key`, if it is present, else `None`.
    ///
    /// Computes in **O(1)** time (average).
    pub fn get_full<Q>(&self, key: &Q) -> Option<(usize, &K, &V)>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let i = self.get_index_of(key)?;
        let entry = &self.as_entries()[i];
        Some((i, &entry.key, &entry.value))
    }

    /// Return the slot of the key-value pair stored for `key`, if it is
    /// present, else `None`.
    ///
    /// Computes in **O(1)** time (average).
    pub fn get_index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        match self.as_entries() {
            [] => None,
            [x] => key.equivalent(&x.key).then_some(0),
            _ => {
                let hash = self.hash(key);
                self.core.get_index_of(hash, key)
            }
        }
    }

    /// Return a mutable reference to the value stored for `key`, if it is
    /// present, else `None`.
    ///
    /// Computes in **O(1)** time (average).
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let i = self.get_index_of(key)?;
        Some(&mut self.as_entries_mut()[i].value)
    }

    /// Remove the key-value pair equivalent to `key` and return its value.
    ///
    /// The entry in the last slot is moved into the freed slot, so the slots
    /// stay dense. **This changes the slot of what used to be the last
    /// entry**, and with it the iteration order.
    ///
    /// Return `None` if `key` is not in map.
    ///
    /// Computes in **O(1)** time (average).
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.remove_full(key).map(|(_, _, v)| v)
    }

    /// Remove and return the key-value pair equivalent to `key`.
    ///
    /// Like [`remove`][Self::remove], the last entry moves into the freed
    /// slot.
    ///
    /// Return `None` if `key` is not in map.
    ///
    /// Computes in **O(1)** time (average).
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.remove_full(key).map(|(_, k, v)| (k, v))
    }

    /// Remove the key-value pair equivalent to `key` and return it and
    /// the slot it had.
    ///
    /// Like [`remove`][Self::remove], the last entry moves into the freed
    /// slot.
    ///
    /// Return `None` if `key` is not in map.
    ///
    /// Computes in **O(1)** time (average).
    pub fn remove_full<Q>(&mut self, key: &Q) -> Option<(usize, K, V)>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        match self.as_entries() {
            [x] if key.equivalent(&x.key) => {
                let (k, v) = self.core.pop()?;
                Some((0, k, v))
            }
            [_] | [] => None,
            _ => {
                let hash = self.hash(key);
                self.core.swap_remove_full(hash, key)
            }
        }
    }

    /// Remove the key-value pair equivalent to `key` and return its value,
    /// or `default` if `key` is not in map.
    ///
    /// Computes in **O(1)** time (average).
    pub fn remove_or<Q>(&mut self, key: &Q, default: V) -> V
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.remove(key).unwrap_or(default)
    }

    /// Remove the key-value pair equivalent to `key` and return its value,
    /// or [`Error::KeyNotFound`] if `key` is not in map. The map is left
    /// unchanged on error.
    ///
    /// Computes in **O(1)** time (average).
    pub fn try_remove<Q>(&mut self, key: &Q) -> Result<V, Error>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.remove(key).ok_or(Error::KeyNotFound)
    }

    /// Scan through each key-value pair in the map and keep those where the
    /// closure `keep` returns `true`.
    ///
    /// The kept entries are compacted into the low slots, keeping their
    /// relative order.
    ///
    /// Computes in **O(n)** time (average).
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.core.retain(keep);
    }
}

impl<K, V, S> RandomMap<K, V, S> {
    /// Get a key-value pair by slot
    ///
    /// Valid slots are *0 <= index < self.len()*
    ///
    /// Computes in **O(1)** time.
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.as_entries().get(index).map(Bucket::refs)
    }

    /// Get a key-value pair by slot, with mutable access to the value
    ///
    /// Valid slots are *0 <= index < self.len()*
    ///
    /// Computes in **O(1)** time.
    pub fn get_index_mut(&mut self, index: usize) -> Option<(&K, &mut V)> {
        self.as_entries_mut().get_mut(index).map(Bucket::ref_mut)
    }

    /// Remove the key-value pair in slot `index` and return it.
    ///
    /// Like [`remove`][Self::remove], the last entry moves into the freed
    /// slot.
    ///
    /// Valid slots are *0 <= index < self.len()*
    ///
    /// Computes in **O(1)** time (average).
    pub fn remove_index(&mut self, index: usize) -> Option<(K, V)> {
        self.core.swap_remove_index(index)
    }

    /// Remove the key-value pair in the last slot, if there is one.
    ///
    /// No other entry moves.
    ///
    /// Computes in **O(1)** time (average).
    pub fn pop(&mut self) -> Option<(K, V)> {
        self.core.pop()
    }

    /// Remove the key-value pair in the last slot, or fail with
    /// [`Error::Empty`] if the map is empty.
    ///
    /// Computes in **O(1)** time (average).
    pub fn try_pop(&mut self) -> Result<(K, V), Error> {
        self.pop().ok_or(Error::Empty)
    }

    /// Return a key chosen uniformly at random, using `rng`.
    ///
    /// Fails with [`Error::Empty`] if the map is empty.
    ///
    /// Computes in **O(1)** time.
    ///
    /// ```
    /// use rand::rngs::SmallRng;
    /// use rand::SeedableRng;
    /// use randmap::RandomMap;
    ///
    /// let mut rng = SmallRng::seed_from_u64(7);
    /// let map: RandomMap<_, _> = (0..10).map(|i| (i, i * i)).collect();
    /// let key = *map.random_key_with(&mut rng).unwrap();
    /// assert!((0..10).contains(&key));
    /// ```
    pub fn random_key_with<R>(&self, rng: &mut R) -> Result<&K, Error>
    where
        R: Rng + ?Sized,
    {
        self.random_item_with(rng).map(|(k, _)| k)
    }

    /// Return a value chosen uniformly at random, using `rng`.
    ///
    /// Fails with [`Error::Empty`] if the map is empty.
    ///
    /// Computes in **O(1)** time.
    pub fn random_value_with<R>(&self, rng: &mut R) -> Result<&V, Error>
    where
        R: Rng + ?Sized,
    {
        self.random_item_with(rng).map(|(_, v)| v)
    }

    /// Return a mutable reference to a value chosen uniformly at random,
    /// using `rng`.
    ///
    /// Fails with [`Error::Empty`] if the map is empty.
    ///
    /// Computes in **O(1)** time.
    pub fn random_value_mut_with<R>(&mut self, rng: &mut R) -> Result<&mut V, Error>
    where
        R: Rng + ?Sized,
    {
        let i = self.core.random_index(rng).ok_or(Error::Empty)?;
        Ok(&mut self.as_entries_mut()[i].value)
    }

    /// Return a key-value pair chosen uniformly at random, using `rng`.
    ///
    /// Fails with [`Error::Empty`] if the map is empty.
    ///
    /// Computes in **O(1)** time.
    pub fn random_item_with<R>(&self, rng: &mut R) -> Result<(&K, &V), Error>
    where
        R: Rng + ?Sized,
    {
        let i = self.core.random_index(rng).ok_or(Error::Empty)?;
        Ok(self.as_entries()[i].refs())
    }

    /// Remove and return a key-value pair chosen uniformly at random, using
    /// `rng`.
    ///
    /// Like [`remove`][Self::remove], the last entry moves into the freed
    /// slot. Fails with [`Error::Empty`] if the map is empty.
    ///
    /// Computes in **O(1)** time (average).
    pub fn pop_random_with<R>(&mut self, rng: &mut R) -> Result<(K, V), Error>
    where
        R: Rng + ?Sized,
    {
        self.core
            .random_index(rng)
            .and_then(|i| self.core.swap_remove_index(i))
            .ok_or(Error::Empty)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<K, V, S> RandomMap<K, V, S> {
    /// Return a key chosen uniformly at random.
    ///
    /// Fails with [`Error::Empty`] if the map is empty. Each call is an
    /// independent draw from the thread-local generator.
    ///
    /// Computes in **O(1)** time.
    pub fn random_key(&self) -> Result<&K, Error> {
        self.random_key_with(&mut rand::rng())
    }

    /// Return a value chosen uniformly at random.
    ///
    /// Fails with [`Error::Empty`] if the map is empty.
    ///
    /// Computes in **O(1)** time.
    pub fn random_value(&self) -> Result<&V, Error> {
        self.random_value_with(&mut rand::rng())
    }

    /// Return a mutable reference to a value chosen uniformly at random.
    ///
    /// Fails with [`Error::Empty`] if the map is empty.
    ///
    /// Computes in **O(1)** time.
    pub fn random_value_mut(&mut self) -> Result<&mut V, Error> {
        self.random_value_mut_with(&mut rand::rng())
    }

    /// Return a key-value pair chosen uniformly at random.
    ///
    /// Fails with [`Error::Empty`] if the map is empty.
    ///
    /// Computes in **O(1)** time.
    pub fn random_item(&self) -> Result<(&K, &V), Error> {
        self.random_item_with(&mut rand::rng())
    }

    /// Remove and return a key-value pair chosen uniformly at random.
    ///
    /// Fails with [`Error::Empty`] if the map is empty.
    ///
    /// Computes in **O(1)** time (average).
    pub fn pop_random(&mut self) -> Result<(K, V), Error> {
        self.pop_random_with(&mut rand::rng())
    }
}

/// Access [`RandomMap`] values corresponding to a key.
///
/// # Examples
///
/// ```
/// use randmap::RandomMap;
///
/// let mut map = RandomMap::new();
/// for word in "Lorem ipsum dolor sit amet".split_whitespace() {
///     map.insert(word.to_lowercase(), word.to_uppercase());
/// }
/// assert_eq!(map["lorem"], "LOREM");
/// assert_eq!(map["ipsum"], "IPSUM");
/// ```
///
/// ```should_panic
/// use randmap::RandomMap;
///
/// let mut map = RandomMap::new();
/// map.insert("foo", 1);
/// println!("{:?}", map["bar"]); // panics!
/// ```
impl<K, V, Q: ?Sized, S> Index<&Q> for RandomMap<K, V, S>
where
    Q: Hash + Equivalent<K>,
    K: Hash + Eq,
    S: BuildHasher,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied `key`.
    ///
    /// ***Panics*** if `key` is not present in the map.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("RandomMap: key not found")
    }
}

/// Access [`RandomMap`] values corresponding to a key.
///
/// Mutable indexing allows changing / updating values of key-value
/// pairs that are already present.
///
/// You can **not** insert new pairs with index syntax, use `.insert()`.
impl<K, V, Q: ?Sized, S> IndexMut<&Q> for RandomMap<K, V, S>
where
    Q: Hash + Equivalent<K>,
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Returns a mutable reference to the value corresponding to the supplied `key`.
    ///
    /// ***Panics*** if `key` is not present in the map.
    fn index_mut(&mut self, key: &Q) -> &mut V {
        self.get_mut(key).expect("RandomMap: key not found")
    }
}

/// Access [`RandomMap`] values at slots.
///
/// Since the slot of an entry changes when the last entry moves into a
/// freed slot, this is mostly useful together with
/// [`get_index_of`][RandomMap::get_index_of].
impl<K, V, S> Index<usize> for RandomMap<K, V, S> {
    type Output = V;

    /// Returns a reference to the value at the supplied `index`.
    ///
    /// ***Panics*** if `index` is out of bounds.
    fn index(&self, index: usize) -> &V {
        self.get_index(index)
            .expect("RandomMap: index out of bounds")
            .1
    }
}

impl<K, V, S> IndexMut<usize> for RandomMap<K, V, S> {
    /// Returns a mutable reference to the value at the supplied `index`.
    ///
    /// ***Panics*** if `index` is out of bounds.
    fn index_mut(&mut self, index: usize) -> &mut V {
        self.get_index_mut(index)
            .expect("RandomMap: index out of bounds")
            .1
    }
}

impl<K, V, S> FromIterator<(K, V)> for RandomMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Create a `RandomMap` from the sequence of key-value pairs in the
    /// iterable.
    ///
    /// `from_iter` uses the same logic as `extend`. See
    /// [`extend`][RandomMap::extend] for more details.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterable: I) -> Self {
        let iter = iterable.into_iter();
        let (low, _) = iter.size_hint();
        let mut map = Self::with_capacity_and_hasher(low, <_>::default());
        map.extend(iter);
        map
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<K, V, const N: usize> From<[(K, V); N]> for RandomMap<K, V, RandomState>
where
    K: Hash + Eq,
{
    /// # Examples
    ///
    /// ```
    /// use randmap::RandomMap;
    ///
    /// let map1 = RandomMap::from([(1, 2), (3, 4)]);
    /// let map2: RandomMap<_, _> = [(1, 2), (3, 4)].into();
    /// assert_eq!(map1, map2);
    /// ```
    fn from(arr: [(K, V); N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<K, V, S> Extend<(K, V)> for RandomMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Extend the map with all key-value pairs in the iterable.
    ///
    /// This is equivalent to calling [`insert`][RandomMap::insert] for each of
    /// them in order, which means that for keys that already existed
    /// in the map, their value is updated but they keep their slot,
    /// and a later duplicate in the iterable wins over an earlier one.
    ///
    /// New keys are inserted in the order they appear in the sequence. If
    /// equivalents of a key occur more than once, the last corresponding value
    /// prevails.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iterable: I) {
        // (Note: this is a copy of `std`/`hashbrown`'s reservation logic.)
        // Keys may be already present or show multiple times in the iterator.
        // Reserve the entire hint lower bound if the map is empty.
        // Otherwise reserve half the hint (rounded up), so the map
        // will only resize twice in the worst case.
        let iter = iterable.into_iter();
        let reserve = if self.is_empty() {
            iter.size_hint().0
        } else {
            (iter.size_hint().0 + 1) / 2
        };
        self.reserve(reserve);
        iter.for_each(move |(k, v)| {
            self.insert(k, v);
        });
    }
}

impl<'a, K, V, S> Extend<(&'a K, &'a V)> for RandomMap<K, V, S>
where
    K: Hash + Eq + Copy,
    V: Copy,
    S: BuildHasher,
{
    /// Extend the map with all key-value pairs in the iterable.
    ///
    /// See the first extend method for more details.
    fn extend<I: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iterable: I) {
        self.extend(iterable.into_iter().map(|(&key, &value)| (key, value)));
    }
}

impl<K, V, S> Default for RandomMap<K, V, S>
where
    S: Default,
{
    /// Return an empty [`RandomMap`]
    fn default() -> Self {
        Self::with_capacity_and_hasher(0, S::default())
    }
}

impl<K, V1, S1, V2, S2> PartialEq<RandomMap<K, V2, S2>> for RandomMap<K, V1, S1>
where
    K: Hash + Eq,
    V1: PartialEq<V2>,
    S1: BuildHasher,
    S2: BuildHasher,
{
    /// Two maps are equal if they hold the same keys with equal values,
    /// regardless of which slots they occupy.
    fn eq(&self, other: &RandomMap<K, V2, S2>) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter()
            .all(|(key, value)| other.get(key).map_or(false, |v| *value == *v))
    }
}

impl<K, V, S> Eq for RandomMap<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}
