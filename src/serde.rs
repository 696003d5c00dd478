//! A map serializes as a plain map in slot order. Deserializing goes through
//! `insert`, so a key that shows up twice keeps the later value.

use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, MapAccess};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::RandomMap;

// Upper bound on what an untrusted length hint may preallocate.
const MAX_PREALLOCATED: usize = 4096;

/// Requires crate feature `"serde"`
impl<K, V, S> Serialize for RandomMap<K, V, S>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<T: Serializer>(&self, serializer: T) -> Result<T::Ok, T::Error> {
        let mut out = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            out.serialize_entry(key, value)?;
        }
        out.end()
    }
}

struct Filler<K, V, S> {
    marker: PhantomData<fn() -> RandomMap<K, V, S>>,
}

impl<'de, K, V, S> de::Visitor<'de> for Filler<K, V, S>
where
    K: Deserialize<'de> + Eq + Hash,
    V: Deserialize<'de>,
    S: BuildHasher + Default,
{
    type Value = RandomMap<K, V, S>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let hint = access.size_hint().unwrap_or(0).min(MAX_PREALLOCATED);
        let mut map = RandomMap::with_capacity_and_hasher(hint, S::default());
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

/// Requires crate feature `"serde"`
impl<'de, K, V, S> Deserialize<'de> for RandomMap<K, V, S>
where
    K: Deserialize<'de> + Eq + Hash,
    V: Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(Filler {
            marker: PhantomData,
        })
    }
}
