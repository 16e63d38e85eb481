// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Excerpt selection — a random contiguous window over the paragraph pool.
//
// Randomness is injected: production callers pass `rand::rng()`, tests pass a
// seeded `StdRng`.

use std::ops::RangeInclusive;

use rand::Rng;
use readboost_core::{Excerpt, Paragraph};
use tracing::debug;

/// Choose a contiguous window of paragraphs.
///
/// The window size is drawn uniformly from `count_range`. The start is
/// `start_hint` clamped into range when given, otherwise drawn uniformly from
/// `0..=len - count`. With fewer paragraphs than the drawn size, the whole
/// pool is returned.
///
/// # Panics
///
/// If `count_range` is empty. Settings validation rejects such ranges before
/// they reach the selector.
pub fn select_excerpt<R: Rng + ?Sized>(
    paragraphs: &[Paragraph],
    count_range: &RangeInclusive<usize>,
    start_hint: Option<usize>,
    rng: &mut R,
) -> Excerpt {
    assert!(!count_range.is_empty(), "excerpt count range must not be empty");

    let count = rng.random_range(count_range.clone());
    if paragraphs.len() <= count {
        debug!(available = paragraphs.len(), count, "Excerpt covers every paragraph");
        return Excerpt {
            start: 0,
            paragraphs: paragraphs.to_vec(),
        };
    }

    let max_start = paragraphs.len() - count;
    let start = match start_hint {
        Some(hint) => hint.min(max_start),
        None => rng.random_range(0..=max_start),
    };

    debug!(start, count, available = paragraphs.len(), "Excerpt selected");
    Excerpt {
        start,
        paragraphs: paragraphs[start..start + count].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool(n: usize) -> Vec<Paragraph> {
        (0..n)
            .map(|i| Paragraph::new(&format!("Paragraph number {i}.")).unwrap())
            .collect()
    }

    #[test]
    fn empty_pool_gives_empty_excerpt() {
        let mut rng = StdRng::seed_from_u64(7);
        let excerpt = select_excerpt(&[], &(3..=5), None, &mut rng);
        assert!(excerpt.is_empty());
        assert_eq!(excerpt.start, 0);
    }

    #[test]
    fn small_pool_is_returned_whole() {
        let paragraphs = pool(2);
        let mut rng = StdRng::seed_from_u64(7);
        let excerpt = select_excerpt(&paragraphs, &(3..=5), None, &mut rng);
        assert_eq!(excerpt.paragraphs, paragraphs);
    }

    #[test]
    fn same_seed_same_excerpt() {
        let paragraphs = pool(40);
        let a = select_excerpt(&paragraphs, &(3..=5), None, &mut StdRng::seed_from_u64(99));
        let b = select_excerpt(&paragraphs, &(3..=5), None, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn regeneration_eventually_moves_the_window() {
        let paragraphs = pool(40);
        let mut rng = StdRng::seed_from_u64(1);
        let first = select_excerpt(&paragraphs, &(3..=5), None, &mut rng);
        let moved = (0..20).any(|_| select_excerpt(&paragraphs, &(3..=5), None, &mut rng) != first);
        assert!(moved);
    }

    #[test]
    fn start_hint_is_clamped() {
        let paragraphs = pool(10);
        let mut rng = StdRng::seed_from_u64(3);
        let excerpt = select_excerpt(&paragraphs, &(4..=4), Some(100), &mut rng);
        assert_eq!(excerpt.start, 6);
        assert_eq!(excerpt.paragraphs, paragraphs[6..10].to_vec());
    }

    #[test]
    fn pool_is_not_modified() {
        let paragraphs = pool(12);
        let before = paragraphs.clone();
        let _ = select_excerpt(&paragraphs, &(3..=5), None, &mut StdRng::seed_from_u64(5));
        assert_eq!(paragraphs, before);
    }

    proptest! {
        #[test]
        fn excerpt_is_a_bounded_contiguous_window(n in 0usize..30, seed in any::<u64>()) {
            let paragraphs = pool(n);
            let mut rng = StdRng::seed_from_u64(seed);
            let excerpt = select_excerpt(&paragraphs, &(3..=5), None, &mut rng);

            prop_assert!(excerpt.len() >= n.min(3));
            prop_assert!(excerpt.len() <= n.min(5));
            prop_assert_eq!(
                &excerpt.paragraphs[..],
                &paragraphs[excerpt.start..excerpt.start + excerpt.len()]
            );
        }
    }
}
