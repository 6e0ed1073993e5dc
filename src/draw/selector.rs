//! Partitioned no-replacement draws.

use rand::Rng;
use thiserror::Error;

use super::shuffle::shuffle;

/// Draw failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The pool cannot satisfy the requested group sizes.
    #[error("pool too small: need {required} generals, only {available} available")]
    InsufficientPool { required: usize, available: usize },
}

/// Draws `group_sizes` disjoint groups from `pool` without replacement.
///
/// One shuffle of the whole pool, then consecutive slices per group size,
/// so every group comes out of the same unbiased permutation. Fails before
/// touching the RNG when the pool is too small; the pool itself is never
/// mutated.
pub fn draw_partitioned<T: Clone>(
    pool: &[T],
    group_sizes: &[usize],
    rng: &mut impl Rng,
) -> Result<Vec<Vec<T>>, DrawError> {
    let required: usize = group_sizes.iter().sum();
    if required > pool.len() {
        return Err(DrawError::InsufficientPool {
            required,
            available: pool.len(),
        });
    }

    let shuffled = shuffle(pool, rng);
    let mut groups = Vec::with_capacity(group_sizes.len());
    let mut offset = 0;
    for &size in group_sizes {
        groups.push(shuffled[offset..offset + size].to_vec());
        offset += size;
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn partitions_cover_the_pool_disjointly() {
        let pool: Vec<u32> = (0..15).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let groups = draw_partitioned(&pool, &[5, 5, 5], &mut rng).unwrap();
        assert_eq!(groups.len(), 3);

        let mut all: Vec<u32> = groups.iter().flatten().copied().collect();
        all.sort_unstable();
        assert_eq!(all, pool);
    }

    #[test]
    fn insufficient_pool_fails_with_counts() {
        let pool: Vec<u32> = (0..10).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let err = draw_partitioned(&pool, &[5, 5, 5], &mut rng).unwrap_err();
        assert_eq!(
            err,
            DrawError::InsufficientPool {
                required: 15,
                available: 10,
            }
        );
        // The pool is untouched either way.
        assert_eq!(pool, (0..10).collect::<Vec<u32>>());
    }

    #[test]
    fn asymmetric_sizes_are_respected() {
        let pool: Vec<u32> = (0..11).collect();
        let mut rng = StdRng::seed_from_u64(3);
        let groups = draw_partitioned(&pool, &[5, 3, 3], &mut rng).unwrap();
        let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![5, 3, 3]);
    }

    #[test]
    fn repeated_draws_reorder_the_pool() {
        let pool: Vec<u32> = (0..15).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let draws: Vec<_> = (0..5)
            .map(|_| draw_partitioned(&pool, &[5, 5, 5], &mut rng).unwrap())
            .collect();
        assert!(draws.iter().any(|d| d != &draws[0]));
        for draw in &draws {
            let mut all: Vec<u32> = draw.iter().flatten().copied().collect();
            all.sort_unstable();
            assert_eq!(all, pool);
        }
    }

    #[test]
    fn no_groups_requested_draws_nothing() {
        let pool: Vec<u32> = (0..3).collect();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(draw_partitioned(&pool, &[], &mut rng).unwrap().is_empty());
    }
}
