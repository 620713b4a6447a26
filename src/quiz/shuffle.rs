use rand::Rng;

/// Return a uniformly shuffled copy of `items` (Fisher–Yates), leaving the
/// input untouched.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::thread_rng())
}

pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_shuffle_is_permutation() {
        let items = vec![1, 2, 3, 4, 5, 6, 7, 8];
        for _ in 0..50 {
            let mut shuffled = shuffle(&items);
            assert_eq!(shuffled.len(), items.len());
            shuffled.sort();
            assert_eq!(shuffled, items);
        }
    }

    #[test]
    fn test_shuffle_keeps_duplicates() {
        let items = vec!["a", "a", "b", "c"];
        let mut shuffled = shuffle(&items);
        shuffled.sort();
        assert_eq!(shuffled, vec!["a", "a", "b", "c"]);
    }

    #[test]
    fn test_shuffle_does_not_mutate_input() {
        let items = vec!["x".to_string(), "y".to_string(), "z".to_string()];
        let before = items.clone();
        let _ = shuffle(&items);
        assert_eq!(items, before);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let empty: Vec<u8> = vec![];
        assert!(shuffle(&empty).is_empty());
        assert_eq!(shuffle(&[42]), vec![42]);
    }

    #[test]
    fn test_shuffle_with_seed_is_reproducible() {
        let items: Vec<u32> = (0..10).collect();
        let a = shuffle_with(&items, &mut StdRng::seed_from_u64(7));
        let b = shuffle_with(&items, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_actually_reorders() {
        let items = vec![0, 1, 2, 3];
        let differs = (0..20).any(|_| shuffle(&items) != items);
        assert!(differs, "20 shuffles of 4 items never changed the order");
    }

    #[test]
    fn test_shuffle_reaches_every_position() {
        // each element should land in each slot at least once over many runs
        let items = vec![0usize, 1, 2, 3];
        let mut seen = [[false; 4]; 4];
        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..500 {
            for (pos, value) in shuffle_with(&items, &mut rng).into_iter().enumerate() {
                seen[value][pos] = true;
            }
        }
        assert!(seen.iter().all(|row| row.iter().all(|&hit| hit)));
    }
}
