pub mod engine;
pub mod error;

pub use engine::controller::{run, RunConfig, RunSummary};
pub use engine::kernels::{count_parallel, count_parallel_in, count_sequential, Counted};
pub use engine::loader::{load_numbers, LoadedInput};
pub use engine::partition::{ChunkPlan, ChunkStrategy};
pub use engine::primality::is_prime;
pub use error::{PrimeError, Result};
