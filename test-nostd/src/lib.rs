#![no_std]

use core::hash::BuildHasherDefault;
use core::hash::Hasher;
use core::iter::FromIterator;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use randmap::{Error, RandomMap};

#[derive(Default)]
struct BadHasher(u64);

impl Hasher for BadHasher {
    fn finish(&self) -> u64 {
        self.0
    }
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.0 += byte as u64
        }
    }
}

type Map<K, V> = RandomMap<K, V, BuildHasherDefault<BadHasher>>;

pub fn test_compile() {
    let mut rng = SmallRng::seed_from_u64(7);

    let mut map = Map::default();
    map.insert(1, 1);
    map.insert(2, 4);
    for (_, _) in map.iter() {}

    let key = *map.random_key_with(&mut rng).unwrap();
    assert!(key == 1 || key == 2);

    let (popped, _) = map.pop_random_with(&mut rng).unwrap();
    assert!(!map.contains_key(&popped));
    assert_eq!(map.len(), 1);

    let left = 3 - popped;
    assert_eq!(map.try_remove(&left), Ok(left * left));
    assert_eq!(map.try_remove(&left), Err(Error::KeyNotFound));
    assert_eq!(map.pop_random_with(&mut rng), Err(Error::Empty));

    let map2 = Map::from_iter(Some((1, 1)));
    assert_eq!(map2.get(&1), Some(&1));
}

#[test]
fn test_behaviour() {
    test_compile();
}
