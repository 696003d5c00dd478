#![feature(test)]

extern crate test;

use fnv::FnvBuildHasher;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use test::black_box;
use test::Bencher;

use randmap::RandomMap;

use std::collections::HashMap;

type FnvRandomMap<K, V> = RandomMap<K, V, FnvBuildHasher>;

#[bench]
fn new_hashmap(b: &mut Bencher) {
    b.iter(|| HashMap::<String, String>::new());
}

#[bench]
fn new_randmap(b: &mut Bencher) {
    b.iter(|| RandomMap::<String, String>::new());
}

#[bench]
fn insert_hashmap_10_000(b: &mut Bencher) {
    let c = 10_000;
    b.iter(|| {
        let mut map = HashMap::with_capacity(c);
        for x in 0..c {
            map.insert(x, ());
        }
        map
    });
}

#[bench]
fn insert_randmap_10_000(b: &mut Bencher) {
    let c = 10_000;
    b.iter(|| {
        let mut map = RandomMap::with_capacity(c);
        for x in 0..c {
            map.insert(x, ());
        }
        map
    });
}

#[bench]
fn insert_hashmap_string_10_000(b: &mut Bencher) {
    let c = 10_000;
    b.iter(|| {
        let mut map = HashMap::with_capacity(c);
        for x in 0..c {
            map.insert(x.to_string(), ());
        }
        map
    });
}

#[bench]
fn insert_randmap_string_10_000(b: &mut Bencher) {
    let c = 10_000;
    b.iter(|| {
        let mut map = RandomMap::with_capacity(c);
        for x in 0..c {
            map.insert(x.to_string(), ());
        }
        map
    });
}

#[bench]
fn grow_fnv_randmap_100_000(b: &mut Bencher) {
    b.iter(|| {
        let mut map: FnvRandomMap<_, _> = RandomMap::default();
        for x in 0..100_000 {
            map.insert(x, ());
        }
        map
    });
}

const LOOKUP_MAP_SIZE: u32 = 100_000_u32;

fn shuffled_keys(n: u32, seed: u64) -> Vec<u32> {
    let mut keys: Vec<_> = (0..n).collect();
    keys.shuffle(&mut SmallRng::seed_from_u64(seed));
    keys
}

#[bench]
fn lookup_hashmap_100_000(b: &mut Bencher) {
    let map: HashMap<u32, u32> = (0..LOOKUP_MAP_SIZE).map(|i| (i, i)).collect();
    let keys = shuffled_keys(LOOKUP_MAP_SIZE, 1);
    b.iter(|| {
        let mut found = 0;
        for key in &keys {
            found += map.get(key).is_some() as u32;
        }
        found
    });
}

#[bench]
fn lookup_randmap_100_000(b: &mut Bencher) {
    let map: RandomMap<u32, u32> = (0..LOOKUP_MAP_SIZE).map(|i| (i, i)).collect();
    let keys = shuffled_keys(LOOKUP_MAP_SIZE, 1);
    b.iter(|| {
        let mut found = 0;
        for key in &keys {
            found += map.get(key).is_some() as u32;
        }
        found
    });
}

// The baseline for a random pick from a plain hash map is a linear walk.
#[bench]
fn random_key_hashmap_nth_10_000(b: &mut Bencher) {
    let map: HashMap<u32, u32> = (0..10_000).map(|i| (i, i)).collect();
    let mut rng = SmallRng::seed_from_u64(2);
    b.iter(|| {
        let n = rng.random_range(0..map.len());
        black_box(map.keys().nth(n))
    });
}

#[bench]
fn random_key_randmap_10_000(b: &mut Bencher) {
    let map: RandomMap<u32, u32> = (0..10_000).map(|i| (i, i)).collect();
    let mut rng = SmallRng::seed_from_u64(2);
    b.iter(|| black_box(map.random_key_with(&mut rng)));
}

#[bench]
fn random_key_randmap_1_000_000(b: &mut Bencher) {
    let map: RandomMap<u32, u32> = (0..1_000_000).map(|i| (i, i)).collect();
    let mut rng = SmallRng::seed_from_u64(2);
    b.iter(|| black_box(map.random_key_with(&mut rng)));
}

#[bench]
fn remove_hashmap_100_000(b: &mut Bencher) {
    let map: HashMap<u32, u32> = (0..LOOKUP_MAP_SIZE).map(|i| (i, i)).collect();
    let keys = shuffled_keys(LOOKUP_MAP_SIZE, 3);
    b.iter(|| {
        let mut map = map.clone();
        for key in &keys {
            map.remove(key);
        }
        assert_eq!(map.len(), 0);
        map
    });
}

#[bench]
fn remove_randmap_100_000(b: &mut Bencher) {
    let map: RandomMap<u32, u32> = (0..LOOKUP_MAP_SIZE).map(|i| (i, i)).collect();
    let keys = shuffled_keys(LOOKUP_MAP_SIZE, 3);
    b.iter(|| {
        let mut map = map.clone();
        for key in &keys {
            map.remove(key);
        }
        assert_eq!(map.len(), 0);
        map
    });
}

#[bench]
fn pop_random_randmap_100_000(b: &mut Bencher) {
    let map: RandomMap<u32, u32> = (0..LOOKUP_MAP_SIZE).map(|i| (i, i)).collect();
    let mut rng = SmallRng::seed_from_u64(4);
    b.iter(|| {
        let mut map = map.clone();
        while let Ok(entry) = map.pop_random_with(&mut rng) {
            black_box(entry);
        }
        map
    });
}
