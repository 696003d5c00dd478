#[macro_use]
extern crate quickcheck;

use randmap::{Error, RandomMap};

use itertools::Itertools;
use quickcheck::TestResult;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasherDefault, Hash};

type FnvRandomMap<K, V> = RandomMap<K, V, BuildHasherDefault<fnv::FnvHasher>>;

fn set<'a, T: 'a, I>(iter: I) -> HashSet<T>
where
    I: IntoIterator<Item = &'a T>,
    T: Copy + Hash + Eq,
{
    iter.into_iter().copied().collect()
}

fn keyed<'a, T: 'a, I>(iter: I) -> RandomMap<T, ()>
where
    I: IntoIterator<Item = &'a T>,
    T: Copy + Hash + Eq,
{
    iter.into_iter().map(|&k| (k, ())).collect()
}

fn same_as_hashmap(map: &RandomMap<u8, u32>, reference: &HashMap<u8, u32>) -> bool {
    map.len() == reference.len()
        && map.iter().count() == reference.len()
        && reference.iter().all(|(k, v)| map.get(k) == Some(v))
}

quickcheck! {
    fn contains(insert: Vec<u32>) -> bool {
        let mut map = RandomMap::new();
        for &key in &insert {
            map.insert(key, ());
        }
        insert.iter().all(|&key| map.get(&key).is_some())
    }

    fn overwrite_updates_in_place(insert: Vec<(u8, u32)>) -> bool {
        let mut map = RandomMap::new();
        let mut reference = HashMap::new();
        for &(key, value) in &insert {
            let before = map.get_index_of(&key);
            map.insert(key, value);
            reference.insert(key, value);
            if before.is_some() && before != map.get_index_of(&key) {
                return false;
            }
        }
        same_as_hashmap(&map, &reference)
    }

    fn insert_remove(insert: Vec<u8>, remove: Vec<u8>) -> bool {
        let mut map = keyed(&insert);
        for &key in &remove {
            map.remove(&key);
        }
        let elements = &set(&insert) - &set(&remove);
        map.len() == elements.len()
            && map.iter().count() == elements.len()
            && elements.iter().all(|k| map.get(k).is_some())
    }

    fn missing_key_leaves_map_alone(insert: Vec<u8>, key: u8) -> TestResult {
        if insert.contains(&key) {
            return TestResult::discard();
        }
        let mut map = keyed(&insert);
        let copy = map.clone();
        TestResult::from_bool(
            map.try_get(&key) == Err(Error::KeyNotFound)
                && map.try_remove(&key) == Err(Error::KeyNotFound)
                && map.remove(&key).is_none()
                && map == copy,
        )
    }

    fn views_agree(insert: Vec<(u16, u16)>, remove: Vec<u16>) -> bool {
        let mut map: RandomMap<u16, u16> = insert.iter().copied().collect();
        for key in &remove {
            map.remove(key);
        }
        let keys: Vec<_> = map.keys().collect();
        let values: Vec<_> = map.values().collect();
        let items: Vec<_> = map.iter().collect();
        keys.len() == map.len()
            && set(keys.iter().copied()).len() == map.len()
            && values.len() == map.len()
            && items.iter().all(|&(k, v)| map[k] == *v)
    }

    fn order_is_insertion_until_removal(insert: Vec<u32>) -> bool {
        let map = keyed(&insert);
        itertools::assert_equal(insert.iter().unique(), map.keys());
        true
    }

    fn update_last_writer_wins(first: Vec<(u8, u32)>, second: Vec<(u8, u32)>) -> bool {
        let mut map: RandomMap<u8, u32> = first.iter().copied().collect();
        map.extend(second.iter().copied());
        let reference: HashMap<_, _> = first.iter().chain(&second).copied().collect();
        same_as_hashmap(&map, &reference)
    }

    fn clone_is_independent(insert: Vec<u8>, remove: Vec<u8>) -> bool {
        let map = keyed(&insert);
        let mut clone = map.clone();
        for key in &remove {
            clone.remove(key);
        }
        map.len() == set(&insert).len()
            && insert.iter().all(|k| map.contains_key(k))
            && remove.iter().all(|k| !clone.contains_key(k))
    }

    fn clear_empties(insert: Vec<u8>) -> bool {
        let mut map = keyed(&insert);
        map.clear();
        map.is_empty() && map.iter().next().is_none() && map.random_key() == Err(Error::Empty)
    }

    fn from_keys_shares_value(keys: Vec<u8>, value: u32) -> bool {
        let map: RandomMap<u8, u32> = RandomMap::from_keys(keys.iter().copied(), value);
        map.len() == set(&keys).len() && map.values().all(|&v| v == value)
    }

    fn equality_ignores_slots_and_hasher(insert: Vec<u8>) -> bool {
        let forward = keyed(&insert);
        let backward = keyed(insert.iter().rev());
        let fnv: FnvRandomMap<u8, ()> = insert.iter().map(|&k| (k, ())).collect();
        forward == backward && backward == forward && forward == fnv
    }

    fn or_insert_is_setdefault(insert: Vec<(u8, u32)>) -> bool {
        let mut map = RandomMap::new();
        let mut reference = HashMap::new();
        for &(key, value) in &insert {
            let got = *map.entry(key).or_insert(value);
            if got != *reference.entry(key).or_insert(value) {
                return false;
            }
        }
        same_as_hashmap(&map, &reference)
    }

    fn pop_walks_back_from_last_slot(insert: Vec<u8>) -> bool {
        let mut map = keyed(&insert);
        let mut pops = Vec::new();
        while let Some((key, ())) = map.pop() {
            pops.push(key);
        }
        pops.reverse();
        itertools::assert_equal(insert.iter().unique(), &pops);
        map.try_pop() == Err(Error::Empty)
    }

    fn pop_random_takes_each_key_once(insert: Vec<u8>, seed: u64) -> bool {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut map = keyed(&insert);
        let mut popped = HashSet::new();
        while let Ok((key, ())) = map.pop_random_with(&mut rng) {
            if !popped.insert(key) || map.contains_key(&key) {
                return false;
            }
        }
        popped == set(&insert)
    }

    fn random_picks_are_live(insert: Vec<u8>, remove: Vec<u8>, seed: u64) -> bool {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut map: RandomMap<u8, u8> = insert.iter().map(|&k| (k, !k)).collect();
        for key in &remove {
            map.remove(key);
        }
        if map.is_empty() {
            return map.random_key_with(&mut rng) == Err(Error::Empty)
                && map.random_value_with(&mut rng) == Err(Error::Empty)
                && map.random_item_with(&mut rng) == Err(Error::Empty);
        }
        (0..20).all(|_| {
            let key = *map.random_key_with(&mut rng).unwrap();
            let value = *map.random_value_with(&mut rng).unwrap();
            let (k, v) = map.random_item_with(&mut rng).unwrap();
            map.contains_key(&key) && map.contains_key(&!value) && map.get(k) == Some(v)
        })
    }

    fn equivalent_to_hashmap(operations: Vec<(u8, u8, u32)>, seed: u64) -> bool {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut map = RandomMap::new();
        let mut reference = HashMap::new();

        for (op, key, value) in operations {
            match op % 5 {
                // Insert or overwrite.
                0 | 1 => {
                    if map.insert(key, value) != reference.insert(key, value) {
                        return false;
                    }
                }

                // Delete by key.
                2 => {
                    if map.remove(&key) != reference.remove(&key) {
                        return false;
                    }
                }

                // Delete by slot.
                3 => {
                    if map.is_empty() {
                        continue;
                    }
                    let slot = value as usize % map.len();
                    match map.remove_index(slot) {
                        Some((k, v)) if reference.remove(&k) == Some(v) => {}
                        _ => return false,
                    }
                }

                // Random delete.
                4 => {
                    match map.pop_random_with(&mut rng) {
                        Ok((k, v)) if reference.remove(&k) == Some(v) => {}
                        Err(Error::Empty) if reference.is_empty() => {}
                        _ => return false,
                    }
                }

                _ => unreachable!(),
            }

            if map.get(&key) != reference.get(&key) {
                return false;
            }
        }

        same_as_hashmap(&map, &reference)
    }
}
