use rand::Rng;

/// Return a uniformly shuffled copy of `items` (Fisher-Yates).
///
/// The input slice is left untouched.
pub fn shuffle<T: Clone, R: Rng>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_input_stays_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let out: Vec<u8> = shuffle(&mut rng, &[]);
        assert!(out.is_empty());
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let make = |seed: u64| -> Vec<u32> {
            let mut rng = StdRng::seed_from_u64(seed);
            shuffle(&mut rng, &(0..20).collect::<Vec<u32>>())
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn every_position_is_reachable() {
        // 3 elements, 600 draws: each value should land first at least once.
        let mut rng = StdRng::seed_from_u64(7);
        let mut firsts = [0usize; 3];
        for _ in 0..600 {
            let out = shuffle(&mut rng, &[0usize, 1, 2]);
            firsts[out[0]] += 1;
        }
        assert!(firsts.iter().all(|&n| n > 100), "skewed first positions: {firsts:?}");
    }

    proptest! {
        #[test]
        fn shuffle_is_a_permutation(items in prop::collection::vec(any::<u16>(), 0..40), seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = shuffle(&mut rng, &items);
            prop_assert_eq!(out.len(), items.len());
            let mut a = items.clone();
            let mut b = out;
            a.sort_unstable();
            b.sort_unstable();
            prop_assert_eq!(a, b);
        }
    }
}
