//! Rayon-based parallelisation utilities.
//!
//! Scenario revaluation is embarrassingly parallel. Below a configurable
//! item count the thread-pool overhead dominates, so [`try_map_ordered`]
//! falls back to a sequential loop. Both paths return results in input
//! order and are bit-for-bit identical.

use rayon::prelude::*;

/// Default minimum item count before using parallelism.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// Configuration for parallel execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParallelConfig {
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
    /// Disable parallelism entirely
    pub sequential: bool,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            sequential: false,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(parallel_threshold: usize) -> Self {
        Self {
            parallel_threshold,
            sequential: false,
        }
    }

    /// Configuration that never parallelises.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            sequential: true,
        }
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        !self.sequential && n_items >= self.parallel_threshold
    }
}

/// Maps `items` through a fallible function, preserving order.
///
/// Runs on the rayon pool when `config` allows it for `items.len()`.
/// Returns the first error encountered in input order when running
/// sequentially, or any error when running in parallel.
pub fn try_map_ordered<T, R, E, F>(
    items: &[T],
    config: &ParallelConfig,
    mapper: F,
) -> Result<Vec<R>, E>
where
    T: Sync,
    R: Send,
    E: Send,
    F: Fn(&T) -> Result<R, E> + Sync + Send,
{
    if config.should_parallelize(items.len()) {
        items.par_iter().map(mapper).collect()
    } else {
        items.iter().map(mapper).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_config_default() {
        let config = ParallelConfig::default();
        assert_eq!(config.parallel_threshold, 100);
        assert!(!config.sequential);
    }

    #[test]
    fn test_should_parallelize() {
        let config = ParallelConfig::default();
        assert!(!config.should_parallelize(50));
        assert!(config.should_parallelize(100));
        assert!(config.should_parallelize(1000));
        assert!(!ParallelConfig::sequential().should_parallelize(1_000_000));
    }

    #[test]
    fn test_try_map_ordered_same_either_way() {
        let items: Vec<i32> = (0..1_000).collect();
        let square = |&x: &i32| -> Result<i64, String> { Ok(i64::from(x) * i64::from(x)) };

        let parallel = try_map_ordered(&items, &ParallelConfig::new(1), square).unwrap();
        let sequential = try_map_ordered(&items, &ParallelConfig::sequential(), square).unwrap();

        assert_eq!(parallel, sequential);
        assert_eq!(parallel[999], 998_001);
    }

    #[test]
    fn test_try_map_ordered_propagates_error() {
        let items: Vec<i32> = (0..500).collect();
        let check = |&x: &i32| if x == 321 { Err(x) } else { Ok(x) };

        assert_eq!(
            try_map_ordered(&items, &ParallelConfig::sequential(), check),
            Err(321)
        );
        assert!(try_map_ordered(&items, &ParallelConfig::new(1), check).is_err());
    }
}
