use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::hint::black_box;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::bst::BstSet;
use crate::rbtree::RedBlackSet;

/// The three operations every benchmarked container has to expose.
pub trait KeyedSet {
    fn insert(&mut self, key: i32);
    fn contains(&self, key: &i32) -> bool;
    fn remove(&mut self, key: &i32);
}

impl<S: KeyedSet> KeyedSet for &mut S {
    fn insert(&mut self, key: i32) {
        (**self).insert(key)
    }
    fn contains(&self, key: &i32) -> bool {
        (**self).contains(key)
    }
    fn remove(&mut self, key: &i32) {
        (**self).remove(key)
    }
}

/// Wall-clock timings for one container, one measurement per phase.
pub struct BenchmarkResult {
    pub name: &'static str,
    /// Informational asymptotic label; nothing checks it.
    pub complexity: &'static str,
    pub insertion: Duration,
    pub search: Duration,
    pub deletion: Duration,
}

/// Runs the three timed phases over `data` against a fresh `set`: bulk
/// insert, bulk lookup, bulk delete, each in dataset order. Single-sample
/// timing with no warm-up; only the elapsed time is recorded, individual
/// operation results are not checked.
pub fn run_target<S: KeyedSet>(
    name: &'static str,
    complexity: &'static str,
    data: &[i32],
    mut set: S,
) -> BenchmarkResult {
    info!("benchmarking {name} over {} keys", data.len());

    let start = Instant::now();
    for &key in data {
        set.insert(key);
    }
    let insertion = start.elapsed();
    debug!("{name}: insertion phase took {insertion:?}");

    let start = Instant::now();
    for key in data {
        black_box(set.contains(key));
    }
    let search = start.elapsed();
    debug!("{name}: search phase took {search:?}");

    let start = Instant::now();
    for key in data {
        set.remove(key);
    }
    let deletion = start.elapsed();
    debug!("{name}: deletion phase took {deletion:?}");

    BenchmarkResult {
        name,
        complexity,
        insertion,
        search,
        deletion,
    }
}

impl KeyedSet for HashSet<i32> {
    fn insert(&mut self, key: i32) {
        HashSet::insert(self, key);
    }
    fn contains(&self, key: &i32) -> bool {
        HashSet::contains(self, key)
    }
    fn remove(&mut self, key: &i32) {
        HashSet::remove(self, key);
    }
}

impl KeyedSet for BTreeSet<i32> {
    fn insert(&mut self, key: i32) {
        BTreeSet::insert(self, key);
    }
    fn contains(&self, key: &i32) -> bool {
        BTreeSet::contains(self, key)
    }
    fn remove(&mut self, key: &i32) {
        BTreeSet::remove(self, key);
    }
}

// The map variant stores each key as its own value, mirroring how the set
// benchmarks drive it.
impl KeyedSet for BTreeMap<i32, i32> {
    fn insert(&mut self, key: i32) {
        BTreeMap::insert(self, key, key);
    }
    fn contains(&self, key: &i32) -> bool {
        self.contains_key(key)
    }
    fn remove(&mut self, key: &i32) {
        BTreeMap::remove(self, key);
    }
}

impl KeyedSet for BstSet<i32> {
    fn insert(&mut self, key: i32) {
        BstSet::insert(self, key);
    }
    fn contains(&self, key: &i32) -> bool {
        BstSet::contains(self, key)
    }
    fn remove(&mut self, key: &i32) {
        BstSet::remove(self, key);
    }
}

impl KeyedSet for RedBlackSet<i32> {
    fn insert(&mut self, key: i32) {
        RedBlackSet::insert(self, key);
    }
    fn contains(&self, key: &i32) -> bool {
        RedBlackSet::contains(self, key)
    }
    fn remove(&mut self, key: &i32) {
        RedBlackSet::remove(self, key);
    }
}
