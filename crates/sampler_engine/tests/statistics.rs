//! Statistical property tests for the derived samplers.
//!
//! These run against fixed seeds, so every assertion is deterministic; the
//! tolerances are still sized at several standard errors so the properties
//! hold for any reasonable seed rather than just the committed one.

use std::collections::HashMap;

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use sampler_engine::Random;

/// Every one of the 24 orderings of a length-4 sequence appears with
/// frequency close to 1/24 under the Fisher–Yates shuffle.
#[test]
fn test_shuffle_fairness() {
    let mut rng = Random::from_seed(0xC0FFEE);
    let rounds = 48_000;
    let expected = rounds / 24;
    let mut counts: HashMap<[u8; 4], u32> = HashMap::new();

    for _ in 0..rounds {
        let mut items = [0u8, 1, 2, 3];
        rng.shuffle(&mut items);
        *counts.entry(items).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), 24, "all permutations of length 4 observed");
    for (perm, count) in counts {
        let deviation = (count as i64 - expected as i64).abs();
        assert!(
            deviation < 250,
            "permutation {:?} occurred {} times, expected about {}",
            perm,
            count,
            expected
        );
    }
}

/// Observed weighted-selection frequencies track the weights.
#[test]
fn test_weighted_selection_frequencies() {
    let mut rng = Random::from_seed(0xBADA55);
    let items = ["low", "high", "low2"];
    let weights = [0.1, 0.8, 0.1];
    let rounds = 10_000;
    let mut counts = [0u32; 3];

    for _ in 0..rounds {
        let picked = rng.weighted_pick(&items, &weights).unwrap();
        let index = items.iter().position(|item| item == picked).unwrap();
        counts[index] += 1;
    }

    let frequency = |count: u32| count as f64 / rounds as f64;
    assert_abs_diff_eq!(frequency(counts[1]), 0.8, epsilon = 0.03);
    assert_abs_diff_eq!(frequency(counts[0]), 0.1, epsilon = 0.02);
    assert_abs_diff_eq!(frequency(counts[2]), 0.1, epsilon = 0.02);
}

/// Uniform picks hit every candidate at close to equal frequency.
#[test]
fn test_pick_uniformity() {
    let mut rng = Random::from_seed(0x5EED);
    let items = [0usize, 1, 2, 3, 4];
    let rounds = 25_000;
    let mut counts = [0u32; 5];

    for _ in 0..rounds {
        counts[*rng.pick(&items).unwrap()] += 1;
    }

    for count in counts {
        assert_abs_diff_eq!(count as f64 / rounds as f64, 0.2, epsilon = 0.02);
    }
}

/// Bounded draws stay inside their half-open ranges over a long sweep.
#[test]
fn test_range_correctness() {
    let mut rng = Random::from_seed(0xAB);

    for _ in 0..10_000 {
        let value = rng.int_between(-7, 13).unwrap();
        assert!((-7..13).contains(&value));
        let unit = rng.float();
        assert!((0.0..1.0).contains(&unit));
    }
}

/// Sample moments of the distribution surface match theory.
#[test]
fn test_distribution_moments() {
    let mut rng = Random::from_seed(0x1234);
    let n = 100_000;

    // Normal: mean and standard deviation
    let normals: Vec<f64> = (0..n).map(|_| rng.normal(3.0, 2.0).unwrap()).collect();
    let mean = normals.iter().sum::<f64>() / n as f64;
    let variance = normals.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n as f64;
    assert_abs_diff_eq!(mean, 3.0, epsilon = 0.1);
    assert_abs_diff_eq!(variance.sqrt(), 2.0, epsilon = 0.1);

    // Exponential: mean 1/rate
    let exp_mean = (0..n).map(|_| rng.exponential(2.0).unwrap()).sum::<f64>() / n as f64;
    assert_abs_diff_eq!(exp_mean, 0.5, epsilon = 0.02);

    // Binomial: mean n*p
    let rounds = 20_000;
    let binom_mean = (0..rounds)
        .map(|_| rng.binomial(20, 0.3).unwrap() as f64)
        .sum::<f64>()
        / rounds as f64;
    assert_abs_diff_eq!(binom_mean, 6.0, epsilon = 0.15);

    // Geometric: mean (1-p)/p
    let geo_mean = (0..n).map(|_| rng.geometric(0.5).unwrap() as f64).sum::<f64>() / n as f64;
    assert_abs_diff_eq!(geo_mean, 1.0, epsilon = 0.05);

    // Bernoulli: frequency p
    let hits = (0..n).filter(|_| rng.bernoulli(0.25).unwrap()).count();
    assert_abs_diff_eq!(hits as f64 / n as f64, 0.25, epsilon = 0.02);
}

/// Log-normal draws are strictly positive and their logs recover the
/// underlying normal's mean.
#[test]
fn test_log_normal_shape() {
    let mut rng = Random::from_seed(0x77);
    let n = 50_000;

    let samples: Vec<f64> = (0..n).map(|_| rng.log_normal(0.5, 0.25).unwrap()).collect();
    assert!(samples.iter().all(|&x| x > 0.0));

    let log_mean = samples.iter().map(|x| x.ln()).sum::<f64>() / n as f64;
    assert_abs_diff_eq!(log_mean, 0.5, epsilon = 0.01);
}

/// Repeated permutations of the same generator differ (independent draws,
/// not an idempotent first/second permutation).
#[test]
fn test_permutations_vary_across_calls() {
    let mut rng = Random::from_seed(0x88);

    let first = rng.permutation(12).unwrap();
    let second = rng.permutation(12).unwrap();
    let third = rng.permutation(12).unwrap();

    assert_ne!(first, second);
    assert_ne!(second, third);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// permutation(n) is a bijection on [0, n) for any size and seed.
    #[test]
    fn prop_permutation_is_bijection(seed in any::<u64>(), n in 0i64..200) {
        let mut rng = Random::from_seed(seed);
        let mut perm = rng.permutation(n).unwrap();
        perm.sort_unstable();
        prop_assert_eq!(perm, (0..n as usize).collect::<Vec<usize>>());
    }

    /// weighted_pick always returns a member of the candidate sequence for
    /// valid weight vectors.
    #[test]
    fn prop_weighted_pick_returns_member(
        seed in any::<u64>(),
        weights in prop::collection::vec(0.0f64..10.0, 1..20),
    ) {
        prop_assume!(weights.iter().sum::<f64>() > 0.0);

        let mut rng = Random::from_seed(seed);
        let candidates: Vec<usize> = (0..weights.len()).collect();
        let picked = *rng.weighted_pick(&candidates, &weights).unwrap();
        prop_assert!(picked < candidates.len());
        prop_assert!(weights[picked] > 0.0);
    }

    /// int_between covers its half-open bound contract for arbitrary seeds.
    #[test]
    fn prop_int_between_in_bounds(
        seed in any::<u64>(),
        min in -1_000i64..1_000,
        span in 1i64..1_000,
    ) {
        let mut rng = Random::from_seed(seed);
        let value = rng.int_between(min, min + span).unwrap();
        prop_assert!(value >= min && value < min + span);
    }
}
