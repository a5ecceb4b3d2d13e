//! Random seat selection for one booking attempt.

use rand::Rng;

/// An ephemeral, deduplicated set of seat numbers (1-indexed) chosen for one
/// booking attempt. Never stored by the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatSelection {
    seats: Vec<u32>,
}

impl SeatSelection {
    /// Builds a selection from explicit seat numbers, dropping duplicates
    /// while preserving first-seen order.
    pub fn new(seats: impl IntoIterator<Item = u32>) -> Self {
        let mut deduped: Vec<u32> = Vec::new();
        for seat in seats {
            if !deduped.contains(&seat) {
                deduped.push(seat);
            }
        }
        Self { seats: deduped }
    }

    /// The selected seat numbers, in arbitrary order.
    pub fn seats(&self) -> &[u32] {
        &self.seats
    }

    /// Number of seats in the selection.
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    /// Whether the selection is empty.
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}

/// Generates a random selection: a count uniform in `[1, max_selection]` and
/// that many distinct seat numbers uniform in `[1, total_seats]`, sampled
/// without replacement.
///
/// The generator is injected so callers can seed it for reproducible runs.
pub fn generate_selection<R: Rng>(rng: &mut R, total_seats: u32, max_selection: u32) -> SeatSelection {
    let count = rng.gen_range(1..=max_selection.min(total_seats)) as usize;

    let mut seats: Vec<u32> = Vec::with_capacity(count);
    while seats.len() < count {
        let seat = rng.gen_range(1..=total_seats);
        if !seats.contains(&seat) {
            seats.push(seat);
        }
    }

    SeatSelection { seats }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_selection_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let selection = generate_selection(&mut rng, 10, 5);
            assert!((1..=5).contains(&selection.len()));
            for &seat in selection.seats() {
                assert!((1..=10).contains(&seat));
            }
        }
    }

    #[test]
    fn test_selection_has_no_duplicates() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let selection = generate_selection(&mut rng, 10, 5);
            let mut seen = selection.seats().to_vec();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), selection.len());
        }
    }

    #[test]
    fn test_selection_count_capped_by_pool_size() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let selection = generate_selection(&mut rng, 3, 5);
            assert!(selection.len() <= 3);
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = generate_selection(&mut StdRng::seed_from_u64(9), 10, 5);
        let b = generate_selection(&mut StdRng::seed_from_u64(9), 10, 5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_new_drops_duplicates() {
        let selection = SeatSelection::new([3, 7, 3, 7, 5]);
        assert_eq!(selection.seats(), &[3, 7, 5]);
    }
}
