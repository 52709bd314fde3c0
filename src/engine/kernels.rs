// Computation Kernels
// Prime counting over an immutable number slice
use rayon::ThreadPool;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::engine::partition::{ChunkPlan, ChunkStrategy};
use crate::engine::primality::is_prime;
use crate::error::Result;

/// A prime count together with the wall-clock time of the pass that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counted {
    pub primes: usize,
    pub elapsed: Duration,
    /// Tasks actually dispatched (1 for the sequential pass).
    pub chunks: usize,
}

fn count_chunk(chunk: &[i64]) -> usize {
    chunk.iter().filter(|&&n| is_prime(n)).count()
}

/// Single pass in sequence order on the calling thread.
pub fn count_sequential(numbers: &[i64]) -> Counted {
    let start = Instant::now();
    let primes = count_chunk(numbers);
    let elapsed = start.elapsed();

    info!(primes, ?elapsed, "sequential pass done");
    Counted {
        primes,
        elapsed,
        chunks: 1,
    }
}

/// Splits `numbers` into contiguous chunks and counts each one on its own
/// task in a dedicated pool of `workers` threads.
///
/// The pool is built before the clock starts; see [`count_parallel_in`].
pub fn count_parallel(numbers: &[i64], workers: usize, strategy: ChunkStrategy) -> Result<Counted> {
    let workers = workers.max(1);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("prime-worker-{i}"))
        .build()?;

    Ok(count_parallel_in(&pool, numbers, strategy))
}

/// Counts on an existing pool, one chunk per pool thread at most.
///
/// Every task writes only its own slot; the scope returning is the join
/// point, after which the slots are summed. The measured time covers
/// planning, dispatch, compute and join.
pub fn count_parallel_in(pool: &ThreadPool, numbers: &[i64], strategy: ChunkStrategy) -> Counted {
    let workers = pool.current_num_threads();
    let start = Instant::now();

    // 1. Static partition
    let plan = ChunkPlan::new(numbers.len(), workers, strategy);
    let mut partials = vec![0usize; plan.len()];

    // 2. One task per chunk, each owning a distinct result slot
    pool.scope(|s| {
        for ((idx, chunk), slot) in plan.slices(numbers).enumerate().zip(partials.iter_mut()) {
            debug!(chunk = idx, len = chunk.len(), "dispatching");
            s.spawn(move |_| {
                *slot = count_chunk(chunk);
            });
        }
    });

    // 3. Reduce
    let primes: usize = partials.iter().sum();
    let elapsed = start.elapsed();

    info!(primes, workers, chunks = plan.len(), %strategy, ?elapsed, "parallel pass done");
    Counted {
        primes,
        elapsed,
        chunks: plan.len(),
    }
}
