//! Band-preserving shuffle.
//!
//! A sorted sequence of length `n` is split into contiguous bands of
//! `max(1, n / divisor)` items (the last band may be shorter). Each band
//! is permuted uniformly at random; bands keep their relative order.
//! Coarse priority survives, fine-grained order does not.

use rand::seq::SliceRandom;
use rand::Rng;

/// Default number of bands a sequence is split into.
pub const DEFAULT_BAND_DIVISOR: usize = 5;

/// Band length for a sequence of `len` items.
///
/// A zero divisor is treated as one.
#[inline]
pub fn band_size(len: usize, divisor: usize) -> usize {
    (len / divisor.max(1)).max(1)
}

/// Band that position `position` falls into.
#[inline]
pub fn band_index(position: usize, len: usize, divisor: usize) -> usize {
    position / band_size(len, divisor)
}

/// Shuffles `items` in place, independently within each band.
pub fn shuffle_within_bands<T, R: Rng + ?Sized>(items: &mut [T], divisor: usize, rng: &mut R) {
    let size = band_size(items.len(), divisor);
    for band in items.chunks_mut(size) {
        band.shuffle(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_band_size() {
        assert_eq!(band_size(0, 5), 1);
        assert_eq!(band_size(4, 5), 1);
        assert_eq!(band_size(10, 5), 2);
        assert_eq!(band_size(12, 5), 2);
        assert_eq!(band_size(25, 5), 5);
        assert_eq!(band_size(7, 0), 7);
    }

    #[test]
    fn test_small_input_is_unchanged() {
        // Fewer than `divisor` items → bands of one → identity.
        let mut rng = SmallRng::seed_from_u64(7);
        let mut items = vec![1, 2, 3, 4];
        shuffle_within_bands(&mut items, DEFAULT_BAND_DIVISOR, &mut rng);
        assert_eq!(items, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_items_stay_in_their_band() {
        for seed in 0..50 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let len = 23;
            let mut items: Vec<usize> = (0..len).collect();
            shuffle_within_bands(&mut items, DEFAULT_BAND_DIVISOR, &mut rng);

            for (pos, &original) in items.iter().enumerate() {
                assert_eq!(
                    band_index(pos, len, DEFAULT_BAND_DIVISOR),
                    band_index(original, len, DEFAULT_BAND_DIVISOR),
                    "seed {seed}: item {original} left its band"
                );
            }
        }
    }

    #[test]
    fn test_higher_priority_never_in_later_band() {
        let mut rng = SmallRng::seed_from_u64(99);
        let len = 40;
        let mut items: Vec<usize> = (0..len).collect();
        shuffle_within_bands(&mut items, DEFAULT_BAND_DIVISOR, &mut rng);

        let mut position = vec![0; len];
        for (pos, &item) in items.iter().enumerate() {
            position[item] = pos;
        }
        for a in 0..len {
            for b in (a + 1)..len {
                let band_a = band_index(position[a], len, DEFAULT_BAND_DIVISOR);
                let band_b = band_index(position[b], len, DEFAULT_BAND_DIVISOR);
                assert!(band_a <= band_b);
            }
        }
    }

    #[test]
    fn test_shuffle_varies_between_seeds() {
        let original: Vec<usize> = (0..30).collect();
        let distinct = (0..20u64)
            .map(|seed| {
                let mut rng = SmallRng::seed_from_u64(seed);
                let mut items = original.clone();
                shuffle_within_bands(&mut items, DEFAULT_BAND_DIVISOR, &mut rng);
                items
            })
            .collect::<std::collections::HashSet<_>>();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_shuffle_is_reproducible_with_seed() {
        let run = |seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut items: Vec<usize> = (0..17).collect();
            shuffle_within_bands(&mut items, DEFAULT_BAND_DIVISOR, &mut rng);
            items
        };
        assert_eq!(run(5), run(5));
    }
}
