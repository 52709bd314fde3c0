// Controller
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::engine::kernels::{count_parallel, count_sequential, Counted};
use crate::engine::loader::load_numbers;
use crate::engine::partition::ChunkStrategy;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Worker threads for the parallel pass.
    pub threads: usize,
    pub strategy: ChunkStrategy,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            threads: num_cpus::get().max(1),
            strategy: ChunkStrategy::default(),
        }
    }
}

/// Everything the report needs from one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub path: PathBuf,
    pub numbers: usize,
    pub skipped: usize,
    pub threads: usize,
    pub sequential: Counted,
    pub parallel: Counted,
}

impl RunSummary {
    /// Sequential time over parallel time, or `None` when the parallel pass
    /// finished below timer resolution.
    pub fn speedup(&self) -> Option<f64> {
        let parallel = self.parallel.elapsed.as_secs_f64();
        (parallel > 0.0).then(|| self.sequential.elapsed.as_secs_f64() / parallel)
    }
}

/// Loads `path`, then counts its primes sequentially and in parallel.
///
/// A file that cannot be read aborts before either pass runs.
pub fn run(path: impl AsRef<Path>, config: &RunConfig) -> Result<RunSummary> {
    let path = path.as_ref();

    // Phase 1: Load
    let input = load_numbers(path)?;

    // Phase 2: Baseline
    let sequential = count_sequential(&input.numbers);

    // Phase 3: Fork-join
    let parallel = count_parallel(&input.numbers, config.threads, config.strategy)?;

    if sequential.primes != parallel.primes {
        // Both passes read the same immutable slice, so this is a partitioning bug.
        error!(
            sequential = sequential.primes,
            parallel = parallel.primes,
            "prime counts disagree"
        );
    }
    info!(path = %path.display(), threads = config.threads, "run complete");

    Ok(RunSummary {
        path: path.to_path_buf(),
        numbers: input.numbers.len(),
        skipped: input.skipped,
        threads: config.threads.max(1),
        sequential,
        parallel,
    })
}
