//! Search timing across the three structures.
use std::fs::File;
use std::hint::black_box;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use service_index::RBIndex;
use tracing::{debug, info};

use super::baseline::{linear_search, BinaryTree};
use super::config::BenchConfig;
use super::error::HarnessError;
use super::generator::ServiceGenerator;
use super::service::{Service, ShortStr};

pub const CSV_HEADER: &str = "Size,Linear (sec),Binary (sec),RBTree (sec)";

/// Average time of one search, per structure, at one record count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkRow {
    pub size: usize,
    pub linear: Duration,
    pub binary: Duration,
    pub rb_tree: Duration,
}

impl BenchmarkRow {
    /// Format as a `Size\tLinear\tBinary\tRBTree` console line.
    pub fn to_tsv(&self) -> String {
        format!(
            "{}\t{:.8}\t{:.8}\t{:.8}",
            self.size,
            self.linear.as_secs_f64(),
            self.binary.as_secs_f64(),
            self.rb_tree.as_secs_f64()
        )
    }

    pub fn to_csv(&self) -> String {
        format!(
            "{},{:.8},{:.8},{:.8}",
            self.size,
            self.linear.as_secs_f64(),
            self.binary.as_secs_f64(),
            self.rb_tree.as_secs_f64()
        )
    }
}

/// Build an index over `services`, keyed by service name.
pub fn build_index(services: &[Service]) -> RBIndex<ShortStr, &Service> {
    let mut index = RBIndex::new();
    for service in services {
        index.insert(service.service_name, service);
    }

    index
}

fn timed<T>(total: &mut Duration, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let result = black_box(f());
    *total += start.elapsed();
    result
}

/// Time `iterations` searches for randomly chosen present names over
/// `size` generated records.
///
/// # Panics
/// Panics if `size` or `iterations` is zero.
pub fn bench_size(generator: &mut ServiceGenerator, size: usize, iterations: usize) -> BenchmarkRow {
    assert!(size > 0 && iterations > 0, "benchmark needs records and iterations");

    let services = generator.generate_services(size);

    let mut binary = BinaryTree::new();
    for service in &services {
        binary.insert(service);
    }
    let index = build_index(&services);
    debug!(
        size,
        binary_height = binary.height(),
        rb_height = index.height(),
        "structures built"
    );

    let mut total_linear = Duration::ZERO;
    let mut total_binary = Duration::ZERO;
    let mut total_rb = Duration::ZERO;

    for _ in 0..iterations {
        let key = services[generator.random_index(size)].service_name;
        let key = black_box(key.as_bytes());

        let found_linear = timed(&mut total_linear, || linear_search(&services, key));
        let found_binary = timed(&mut total_binary, || binary.search(key));
        let found_rb = timed(&mut total_rb, || index.search(key).copied());

        debug_assert!(found_linear.is_some() && found_binary.is_some() && found_rb.is_some());
    }

    let n = iterations as f64;
    BenchmarkRow {
        size,
        linear: total_linear.div_f64(n),
        binary: total_binary.div_f64(n),
        rb_tree: total_rb.div_f64(n),
    }
}

/// Run every configured size, echoing each row to `out` as it completes.
pub fn run_benchmark<W: Write>(
    config: &BenchConfig,
    generator: &mut ServiceGenerator,
    out: &mut W,
) -> Result<Vec<BenchmarkRow>, HarnessError> {
    writeln!(out, "\nBenchmark: Searching services by Service Name")?;
    writeln!(
        out,
        "Each size will run {} iterations of random key searches; the result is averaged.",
        config.iterations
    )?;
    writeln!(out, "Size\tLinear (sec)\tBinary (sec)\tRBTree (sec)")?;
    writeln!(out, "{}", "-".repeat(64))?;

    let mut rows = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        info!(size, iterations = config.iterations, "benchmarking");
        let row = bench_size(generator, size, config.iterations);
        writeln!(out, "{}", row.to_tsv())?;
        out.flush()?;
        rows.push(row);
    }

    Ok(rows)
}

pub fn write_csv<W: Write>(out: &mut W, rows: &[BenchmarkRow]) -> io::Result<()> {
    writeln!(out, "{}", CSV_HEADER)?;
    for row in rows {
        writeln!(out, "{}", row.to_csv())?;
    }

    Ok(())
}

pub fn write_csv_file(path: &Path, rows: &[BenchmarkRow]) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_csv(&mut out, rows)?;
    out.flush()?;

    info!(path = %path.display(), rows = rows.len(), "benchmark results written");
    Ok(())
}
