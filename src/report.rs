use std::fs;
use std::io;
use std::path::Path;

use crate::bench::BenchmarkResult;

const SEPARATOR: &str = "----------------------------------------";

/// Per-structure stdout block, printed as each benchmark finishes.
pub fn progress_block(result: &BenchmarkResult) -> String {
    format!(
        "\n[{}]\nInsertion: {:.3} s, Search: {:.3} s, Deletion: {:.3} s\n",
        result.name,
        result.insertion.as_secs_f64(),
        result.search.as_secs_f64(),
        result.deletion.as_secs_f64(),
    )
}

/// Full report body as written to the output file.
pub fn render(dataset_size: usize, results: &[BenchmarkResult]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "========== BENCHMARK {dataset_size} ELEMENTS ==========\n\n"
    ));
    for result in results {
        out.push_str(&format!("{} ({})\n", result.name, result.complexity));
        out.push_str(&format!(
            "Insertion: {:.3} s\n",
            result.insertion.as_secs_f64()
        ));
        out.push_str(&format!("Search: {:.3} s\n", result.search.as_secs_f64()));
        out.push_str(&format!(
            "Deletion: {:.3} s\n",
            result.deletion.as_secs_f64()
        ));
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    out
}

/// Rewrites the report file from scratch.
pub fn write(path: &Path, dataset_size: usize, results: &[BenchmarkResult]) -> io::Result<()> {
    fs::write(path, render(dataset_size, results))
}
