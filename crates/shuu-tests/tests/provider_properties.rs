//! Property-based tests for the random provider using proptest.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p shuu-tests --test provider_properties
//! ```

use proptest::prelude::*;

use shuu_random::{ErrorCode, RandomProvider};
use shuu_tests::draw_raw;

// ============================================================================
// 1. Sequence Determinism
// ============================================================================

proptest! {
    /// Two providers with the same seed agree on every raw draw.
    #[test]
    fn same_seed_same_sequence(seed in any::<i32>(), count in 0usize..200) {
        let mut a = RandomProvider::new(seed);
        let mut b = RandomProvider::new(seed);
        prop_assert_eq!(draw_raw(&mut a, count), draw_raw(&mut b, count));
    }

    /// Mixed helper calls stay in lockstep for equal seeds.
    #[test]
    fn same_seed_same_helper_results(seed in any::<i32>()) {
        let mut a = RandomProvider::new(seed);
        let mut b = RandomProvider::new(seed);
        let items = [10, 20, 30, 40];
        for _ in 0..20 {
            prop_assert_eq!(a.range(-50, 50).unwrap(), b.range(-50, 50).unwrap());
            prop_assert_eq!(a.next_float(), b.next_float());
            prop_assert_eq!(a.sign(), b.sign());
            prop_assert_eq!(a.pick(&items).unwrap(), b.pick(&items).unwrap());
        }
        prop_assert_eq!(a.get_state(), b.get_state());
    }
}

// ============================================================================
// 2. Ranges
// ============================================================================

proptest! {
    /// Range results respect the half-open bounds and cost one draw.
    #[test]
    fn range_within_bounds(seed in any::<i32>(), min in any::<i32>(), max in any::<i32>()) {
        let mut rng = RandomProvider::new(seed);
        match rng.range(min, max) {
            Ok(v) => {
                prop_assert!(min < max);
                prop_assert!(v >= min && v < max);
                prop_assert_eq!(rng.get_state(), 1);
            }
            Err(e) => {
                prop_assert!(min >= max);
                prop_assert_eq!(e.code(), ErrorCode::InvalidRange);
                prop_assert_eq!(rng.get_state(), 0);
            }
        }
    }

    /// Floats stay in [0, 1).
    #[test]
    fn floats_in_unit_interval(seed in any::<i32>()) {
        let mut rng = RandomProvider::new(seed);
        for _ in 0..100 {
            let f = rng.next_float();
            prop_assert!((0.0..1.0).contains(&f));
            let d = rng.next_double();
            prop_assert!((0.0..1.0).contains(&d));
        }
    }
}

// ============================================================================
// 3. Collections
// ============================================================================

proptest! {
    /// Shuffle output is a permutation of its input, for any length.
    #[test]
    fn shuffle_is_permutation(seed in any::<i32>(), items in prop::collection::vec(any::<u16>(), 0..64)) {
        let mut rng = RandomProvider::new(seed);
        let mut shuffled = items.clone();
        rng.shuffle(&mut shuffled);

        let mut expected = items.clone();
        expected.sort_unstable();
        shuffled.sort_unstable();
        prop_assert_eq!(shuffled, expected);
        prop_assert_eq!(rng.get_state(), items.len().saturating_sub(1) as u64);
    }

    /// pick_uniques returns min(count, len) distinct members of the source.
    #[test]
    fn pick_uniques_distinct(seed in any::<i32>(), len in 0usize..50, count in 0usize..80) {
        let source: Vec<usize> = (0..len).collect();
        let mut rng = RandomProvider::new(seed);
        let picked = rng.pick_uniques(&source, count);

        prop_assert_eq!(picked.len(), count.min(len));
        let mut dedup = picked.clone();
        dedup.sort_unstable();
        dedup.dedup();
        prop_assert_eq!(dedup.len(), picked.len());
        prop_assert!(picked.iter().all(|v| *v < len));
    }

    /// Weighted picks with positive weights always return a member.
    #[test]
    fn weighted_pick_returns_member(seed in any::<i32>(), weights in prop::collection::vec(0.01f32..10.0, 1..16)) {
        let items: Vec<usize> = (0..weights.len()).collect();
        let mut rng = RandomProvider::new(seed);
        for _ in 0..20 {
            let picked = *rng.pick_weighted(&items, &weights).unwrap();
            prop_assert!(picked < items.len());
        }
    }
}

// ============================================================================
// 4. Hash Noise
// ============================================================================

proptest! {
    /// Hash noise is a pure function of seed and coordinates.
    #[test]
    fn hash_noise_is_pure(seed in any::<i32>(), x in any::<i32>(), y in any::<i32>(), z in any::<i32>(), burn in 0usize..32) {
        let fresh = RandomProvider::new(seed);
        let mut used = RandomProvider::new(seed);
        draw_raw(&mut used, burn);

        prop_assert_eq!(fresh.hash_noise(x, y, z), used.hash_noise(x, y, z));
        prop_assert_eq!(fresh.noise_2d(x, y), used.noise_2d(x, y));
        prop_assert!((0.0..=1.0).contains(&fresh.hash_noise(x, y, z)));
    }
}

// ============================================================================
// 5. Examples
// ============================================================================

#[test]
fn golden_range_triple() {
    let mut rng = RandomProvider::new(12345);
    let triple = [
        rng.range(0, 10).unwrap(),
        rng.range(0, 10).unwrap(),
        rng.range(0, 10).unwrap(),
    ];
    assert_eq!(triple, [1, 3, 4]);
}

#[test]
fn weighted_pick_roughly_uniform() {
    let mut rng = RandomProvider::from_seed_str("weights");
    let items = ["a", "b", "c"];
    let mut counts = [0u32; 3];
    for _ in 0..100_000 {
        let picked = rng.pick_weighted(&items, &[1.0, 1.0, 1.0]).unwrap();
        counts[items.iter().position(|i| i == picked).unwrap()] += 1;
    }
    let expected = 100_000.0 / 3.0;
    for count in counts {
        let deviation = (count as f64 - expected).abs() / expected;
        assert!(deviation < 0.05, "counts = {:?}", counts);
    }
}

#[test]
fn weighted_pick_follows_weights() {
    let mut rng = RandomProvider::new(4242);
    let items = ["common", "rare"];
    let mut rare = 0u32;
    for _ in 0..50_000 {
        if *rng.pick_weighted(&items, &[9.0, 1.0]).unwrap() == "rare" {
            rare += 1;
        }
    }
    let share = rare as f64 / 50_000.0;
    assert!((share - 0.1).abs() < 0.01, "rare share = {}", share);
}
