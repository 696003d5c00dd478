//! Iterators over a [`RandomMap`]. All of them walk the slots from `0` to
//! `len - 1`; that order is whatever the removals so far have left behind.

use super::{Bucket, RandomMap};

use alloc::vec::{self, Vec};
use core::fmt;
use core::iter::FusedIterator;
use core::slice;

impl<'a, K, V, S> IntoIterator for &'a RandomMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut RandomMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, S> IntoIterator for RandomMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            slots: self.into_entries().into_iter(),
        }
    }
}

/// Borrowing iterator over the entries of a [`RandomMap`].
///
/// Created by [`RandomMap::iter`]. A clone carries on from the same slot as
/// the original.
pub struct Iter<'a, K, V> {
    slots: slice::Iter<'a, Bucket<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(slots: &'a [Bucket<K, V>]) -> Self {
        Iter {
            slots: slots.iter(),
        }
    }
}

slot_iterator!(Iter<'a, K, V>, (&'a K, &'a V), Bucket::refs);

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            slots: self.slots.clone(),
        }
    }
}

impl<K, V> Default for Iter<'_, K, V> {
    fn default() -> Self {
        Iter::new(&[])
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.clone()).finish()
    }
}

/// Iterator over the entries of a [`RandomMap`] with mutable access to the
/// values. Keys stay shared, since changing one would leave it filed under
/// the wrong hash.
///
/// Created by [`RandomMap::iter_mut`].
pub struct IterMut<'a, K, V> {
    slots: slice::IterMut<'a, Bucket<K, V>>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub(super) fn new(slots: &'a mut [Bucket<K, V>]) -> Self {
        IterMut {
            slots: slots.iter_mut(),
        }
    }
}

slot_iterator!(IterMut<'a, K, V>, (&'a K, &'a mut V), Bucket::ref_mut);

impl<K, V> Default for IterMut<'_, K, V> {
    fn default() -> Self {
        IterMut::new(&mut [])
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IterMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rest = self.slots.as_slice().iter().map(Bucket::refs);
        f.debug_map().entries(rest).finish()
    }
}

/// Owning iterator over the entries of a [`RandomMap`].
///
/// Created by the `into_iter` method of the map (from [`IntoIterator`]).
pub struct IntoIter<K, V> {
    slots: vec::IntoIter<Bucket<K, V>>,
}

slot_iterator!(IntoIter<K, V>, (K, V), Bucket::key_value);

impl<K: Clone, V: Clone> Clone for IntoIter<K, V> {
    fn clone(&self) -> Self {
        IntoIter {
            slots: self.slots.clone(),
        }
    }
}

impl<K, V> Default for IntoIter<K, V> {
    fn default() -> Self {
        IntoIter {
            slots: Vec::new().into_iter(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rest = self.slots.as_slice().iter().map(Bucket::refs);
        f.debug_map().entries(rest).finish()
    }
}

/// Iterator over the keys of a [`RandomMap`], created by [`RandomMap::keys`].
pub struct Keys<'a, K, V> {
    slots: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(super) fn new(slots: Iter<'a, K, V>) -> Self {
        Keys { slots }
    }
}

slot_iterator!(Keys<'a, K, V>, &'a K, |(key, _)| key);

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys::new(self.slots.clone())
    }
}

impl<K, V> Default for Keys<'_, K, V> {
    fn default() -> Self {
        Keys::new(Iter::default())
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Iterator over the values of a [`RandomMap`], created by
/// [`RandomMap::values`].
pub struct Values<'a, K, V> {
    slots: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(super) fn new(slots: Iter<'a, K, V>) -> Self {
        Values { slots }
    }
}

slot_iterator!(Values<'a, K, V>, &'a V, |(_, value)| value);

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values::new(self.slots.clone())
    }
}

impl<K, V> Default for Values<'_, K, V> {
    fn default() -> Self {
        Values::new(Iter::default())
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
