//! Ordered parallel map over frames.
//!
//! [`FramePool`] evaluates one independent job per frame and returns results
//! in input order regardless of completion order. A pool of size 1 runs the
//! jobs in-process on the calling thread.

use rayon::prelude::*;
use rayon::ThreadPool;

use crate::api::ReduceError;

/// A fixed-size pool of worker threads for per-frame work.
pub struct FramePool {
    /// `None` when running sequentially.
    pool: Option<ThreadPool>,
}

impl FramePool {
    /// Create a pool with `workers` threads; 0 and 1 both mean sequential.
    ///
    /// # Errors
    ///
    /// [`ReduceError::WorkerPool`] if the threads cannot be spawned.
    pub fn new(workers: usize) -> Result<Self, ReduceError> {
        if workers <= 1 {
            return Ok(Self { pool: None });
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("frame-worker-{i}"))
            .build()
            .map_err(|e| ReduceError::WorkerPool(e.to_string()))?;
        Ok(Self { pool: Some(pool) })
    }

    /// Number of threads jobs run on.
    pub fn workers(&self) -> usize {
        self.pool
            .as_ref()
            .map(ThreadPool::current_num_threads)
            .unwrap_or(1)
    }

    /// Apply `job` to every item, keeping input order.
    ///
    /// `job` receives the item's index. If any job fails, one of the errors
    /// is returned and no partial output is produced; jobs already running
    /// on other threads may still finish.
    ///
    /// # Example
    ///
    /// ```
    /// use color_reduce::FramePool;
    ///
    /// let pool = FramePool::new(4).unwrap();
    /// let squares = pool
    ///     .map_ordered(&[1u32, 2, 3], |_, n| Ok::<_, ()>(n * n))
    ///     .unwrap();
    /// assert_eq!(squares, vec![1, 4, 9]);
    /// ```
    pub fn map_ordered<T, U, E, F>(&self, items: &[T], job: F) -> Result<Vec<U>, E>
    where
        T: Sync,
        U: Send,
        E: Send,
        F: Fn(usize, &T) -> Result<U, E> + Sync,
    {
        match &self.pool {
            None => items
                .iter()
                .enumerate()
                .map(|(i, item)| job(i, item))
                .collect(),
            Some(pool) => pool.install(|| {
                items
                    .par_iter()
                    .enumerate()
                    .map(|(i, item)| job(i, item))
                    .collect()
            }),
        }
    }
}

impl std::fmt::Debug for FramePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FramePool")
            .field("workers", &self.workers())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_sizes_zero_and_one_are_sequential() {
        assert_eq!(FramePool::new(0).unwrap().workers(), 1);
        assert_eq!(FramePool::new(1).unwrap().workers(), 1);
        assert_eq!(FramePool::new(3).unwrap().workers(), 3);
    }

    #[test]
    fn test_output_follows_input_order() {
        let items: Vec<u64> = (0..500).collect();
        for workers in [1, 2, 8] {
            let pool = FramePool::new(workers).unwrap();
            let out = pool
                .map_ordered(&items, |i, n| {
                    // Uneven job lengths shuffle completion order.
                    std::thread::sleep(Duration::from_micros((i % 7) as u64 * 20));
                    Ok::<_, ()>(n * 2)
                })
                .unwrap();
            assert_eq!(out, items.iter().map(|n| n * 2).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_error_discards_all_results() {
        let pool = FramePool::new(4).unwrap();
        let result = pool.map_ordered(&[0, 1, 2, 3, 4, 5], |i, _| {
            if i == 3 {
                Err(format!("job {i} failed"))
            } else {
                Ok(i)
            }
        });
        assert_eq!(result, Err("job 3 failed".to_string()));
    }
}
