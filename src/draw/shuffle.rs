//! Fisher-Yates shuffling.

use rand::Rng;

/// Returns a uniformly shuffled copy of `items`; the source is untouched.
pub fn shuffle<T: Clone>(items: &[T], rng: &mut impl Rng) -> Vec<T> {
    let mut arr = items.to_vec();
    for i in (1..arr.len()).rev() {
        let j = rng.gen_range(0..=i);
        arr.swap(i, j);
    }
    arr
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shuffle_preserves_the_multiset() {
        let items: Vec<u32> = (0..50).collect();
        let mut rng = StdRng::seed_from_u64(9);
        let mut shuffled = shuffle(&items, &mut rng);
        shuffled.sort_unstable();
        assert_eq!(shuffled, items);
    }

    #[test]
    fn shuffle_leaves_the_source_untouched() {
        let items: Vec<u32> = (0..10).collect();
        let mut rng = StdRng::seed_from_u64(9);
        let _ = shuffle(&items, &mut rng);
        assert_eq!(items, (0..10).collect::<Vec<u32>>());
    }

    #[test]
    fn same_seed_gives_the_same_order() {
        let items: Vec<u32> = (0..20).collect();
        let a = shuffle(&items, &mut StdRng::seed_from_u64(7));
        let b = shuffle(&items, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn tiny_inputs_shuffle_fine() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(shuffle(&Vec::<u32>::new(), &mut rng).is_empty());
        assert_eq!(shuffle(&[42], &mut rng), vec![42]);
    }
}
