use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::io;
use std::path::PathBuf;

use log::info;

pub mod bench;
pub mod bst;
pub mod dataset;
pub mod rbtree;
pub mod report;

pub use bench::{BenchmarkResult, KeyedSet};
pub use bst::BstSet;
pub use rbtree::RedBlackSet;

/// Knobs for one full benchmark run. `Default` matches the fixed constants
/// the shipped binary runs with.
pub struct BenchConfig {
    pub dataset_size: usize,
    pub seed: u64,
    pub output_path: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            dataset_size: 4_000_000,
            seed: 0,
            output_path: PathBuf::from("benchmark_results.txt"),
        }
    }
}

/// Benchmarks the five container implementations over one shared shuffled
/// dataset, printing progress per structure and writing the aggregate report
/// to `config.output_path`.
pub fn run(config: &BenchConfig) -> io::Result<Vec<BenchmarkResult>> {
    let data = dataset::permutation(config.dataset_size, config.seed);

    println!();
    println!(
        "=========== BENCHMARK {} ELEMENTS ===========",
        config.dataset_size
    );

    let mut results = Vec::with_capacity(5);
    results.push(announce(bench::run_target(
        "HashSet",
        "O(1) amortized",
        &data,
        HashSet::new(),
    )));
    results.push(announce(bench::run_target(
        "BTreeSet",
        "O(log n)",
        &data,
        BTreeSet::new(),
    )));
    results.push(announce(bench::run_target(
        "BTreeMap",
        "O(log n)",
        &data,
        BTreeMap::new(),
    )));
    results.push(announce(bench::run_target(
        "BST",
        "O(n) worst-case",
        &data,
        BstSet::new(),
    )));
    results.push(announce(bench::run_target(
        "Red-Black Tree",
        "O(log n) nominal",
        &data,
        RedBlackSet::new(),
    )));

    report::write(&config.output_path, config.dataset_size, &results)?;
    info!("report written to {}", config.output_path.display());

    println!();
    println!(
        "Benchmark complete. Results written to '{}'.",
        config.output_path.display()
    );
    Ok(results)
}

fn announce(result: BenchmarkResult) -> BenchmarkResult {
    print!("{}", report::progress_block(&result));
    result
}
