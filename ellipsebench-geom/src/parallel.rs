//! Worker Pool
//!
//! Dedicated Rayon pool for the data-parallel generators. The pool is an
//! explicit value handed to each call rather than Rayon's global pool, so the
//! thread count is fixed at construction and tests can build their own.
//!
//! Loops are statically partitioned: an index range of length `n` is cut
//! into contiguous blocks of `ceil(n / threads)` items, one block per worker.

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::num::NonZeroUsize;
use thiserror::Error;

/// Errors from pool construction
#[derive(Debug, Error)]
pub enum PoolError {
    /// A pool needs at least one worker
    #[error("Thread count must be at least 1")]
    ZeroThreads,

    /// rayon could not start the pool
    #[error("Failed to build worker pool: {0}")]
    Build(#[from] ThreadPoolBuildError),
}

/// Fixed-size pool running the parallel loops
pub struct WorkerPool {
    pool: ThreadPool,
    threads: usize,
}

impl WorkerPool {
    /// Build a pool with exactly `threads` workers
    pub fn new(threads: usize) -> Result<Self, PoolError> {
        if threads == 0 {
            return Err(PoolError::ZeroThreads);
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("ellipsebench-worker-{i}"))
            .build()?;

        Ok(Self { pool, threads })
    }

    /// Build a pool sized to the host's available parallelism (1 if unknown)
    pub fn with_available_parallelism() -> Result<Self, PoolError> {
        Self::new(available_parallelism())
    }

    /// Number of workers
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Block length for statically partitioning `len` items across the workers
    pub fn block_len(&self, len: usize) -> usize {
        len.div_ceil(self.threads).max(1)
    }

    /// Run `op` inside the pool; returns once every spawned task has finished
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }
}

impl std::fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerPool")
            .field("threads", &self.threads)
            .finish()
    }
}

/// Host hardware parallelism, falling back to 1
pub fn available_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_threads_rejected() {
        assert!(matches!(WorkerPool::new(0), Err(PoolError::ZeroThreads)));
    }

    #[test]
    fn test_pool_size() {
        let pool = WorkerPool::new(3).unwrap();
        assert_eq!(pool.threads(), 3);
        assert_eq!(pool.install(rayon::current_num_threads), 3);
    }

    #[test]
    fn test_block_len() {
        let pool = WorkerPool::new(4).unwrap();
        assert_eq!(pool.block_len(16), 4);
        assert_eq!(pool.block_len(17), 5);
        assert_eq!(pool.block_len(3), 1);
        assert_eq!(pool.block_len(0), 1);
    }

    #[test]
    fn test_available_parallelism_pool() {
        let pool = WorkerPool::with_available_parallelism().unwrap();
        assert!(pool.threads() >= 1);
    }
}
