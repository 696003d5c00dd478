#![no_std]

//! [`RandomMap`] is a hash table that can hand out a uniformly random key,
//! value or entry in constant time.
//!
//! It behaves like the standard `HashMap` for keyed access, and adds
//! [`random_key`][RandomMap::random_key], [`random_value`][RandomMap::random_value]
//! and [`random_item`][RandomMap::random_item]. Removal is also **O(1)** and
//! keeps the random selection uniform over the live entries.
//!
//! ### Layout
//!
//! The map keeps its key-value pairs in a dense vector of *slots* `0..len`,
//! and a hash table from key to slot number. A random pick is a single
//! uniform draw of a slot number. Removing a key moves the last slot into the
//! hole it leaves (like [`Vec::swap_remove`][alloc::vec::Vec::swap_remove]),
//! so there are never gaps to skip over.
//!
//! A consequence is that **iteration order is not insertion order** once
//! anything has been removed. The order is an artifact of the storage and
//! should not be relied upon.
//!
//! ### Feature Flags
//!
//! To reduce the amount of compiled code in the crate by default, certain
//! features are gated behind [feature flags]. These allow you to opt in to (or
//! out of) functionality. Below is a list of the features available in this
//! crate.
//!
//! * `std`: Enables features which require the Rust standard library. For more
//!   information see the section on [`no_std`].
//! * `serde`: Adds implementations for [`Serialize`] and [`Deserialize`]
//!   to [`RandomMap`].
//!
//! _Note: only the `std` feature is enabled by default._
//!
//! [feature flags]: https://doc.rust-lang.org/cargo/reference/manifest.html#the-features-section
//! [`no_std`]: #no-standard-library-targets
//! [`Serialize`]: `::serde::Serialize`
//! [`Deserialize`]: `::serde::Deserialize`
//!
//! ### Randomness
//!
//! Every random operation has a `_with` form taking any [`rand::Rng`], which
//! makes draws reproducible under a seeded generator. The plain forms use the
//! thread-local generator from [`rand::rng`] and require `std`.
//!
//! ### No Standard Library Targets
//!
//! This crate supports being built without `std`, requiring `alloc` instead.
//! This is chosen by disabling the default "std" cargo feature, by adding
//! `default-features = false` to your dependency specification.
//!
//! - Creating maps requires a hasher type parameter explicitly, since
//!   `RandomState` is only available with `std`.
//! - The [`randmap!`] macro is not available without `std`.
//! - Random selection is only available through the `_with` methods.

#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

use core::fmt;

#[macro_use]
mod macros;
#[cfg(feature = "serde")]
mod serde;

pub mod map;

pub use crate::map::RandomMap;

pub use equivalent::Equivalent;

// shared private items

/// Hash value newtype. Not larger than usize, since anything larger
/// isn't used for selecting position anyway.
#[derive(Clone, Copy, Debug, PartialEq)]
struct HashValue(usize);

impl HashValue {
    #[inline(always)]
    fn get(self) -> u64 {
        self.0 as u64
    }
}

/// One slot of the map: the key-value pair together with the cached hash of
/// the key, so the index can be rebuilt without rehashing.
#[derive(Copy, Debug)]
struct Bucket<K, V> {
    hash: HashValue,
    key: K,
    value: V,
}

impl<K, V> Clone for Bucket<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        Bucket {
            hash: self.hash,
            key: self.key.clone(),
            value: self.value.clone(),
        }
    }

    fn clone_from(&mut self, other: &Self) {
        self.hash = other.hash;
        self.key.clone_from(&other.key);
        self.value.clone_from(&other.value);
    }
}

impl<K, V> Bucket<K, V> {
    // projections passed by name to `.map(..)` in the iterators
    fn key_value(self) -> (K, V) {
        (self.key, self.value)
    }
    fn refs(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }
    fn ref_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }
}

/// The error type for the fallible lookups, removals and random draws of
/// [`RandomMap`].
///
/// The methods returning `Option` (like [`RandomMap::get`]) are the
/// non-failing counterparts of the ones returning this error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// The requested key is not present in the map.
    KeyNotFound,
    /// The map has no entries to draw or pop from.
    Empty,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Error::KeyNotFound => "key not found in map",
            Error::Empty => "map is empty",
        };
        f.write_str(reason)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {}
