//! Inverse-transform samplers: inversion consistency for fixed draws and
//! distributional sanity for seeded generators.

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use prob_core::{Budget, Error};
use prob_math::distributions::{chi_squared_cdf, normal_cdf};
use prob_math::random_numbers::{MersenneTwisterUniformRng, RandUniform};
use prob_math::sampling::{
    chi_squared_from_probability, exceeds_threshold, normal_bracket, normal_from_probability,
    sample_exponential, sample_normal, Sampler,
};

fn mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

#[test]
fn normal_draws_centre_on_mean() {
    let mut rng = MersenneTwisterUniformRng::new(42);
    let draws: Vec<f64> = (0..2_000)
        .map(|_| sample_normal(3.0, 2.0, 30, 200, &mut rng).unwrap())
        .collect();
    let m = mean(&draws);
    assert!((m - 3.0).abs() < 0.12, "mean {m}");
}

#[test]
fn exponential_draws_have_mean_one_over_rate() {
    let mut rng = RandUniform::new(StdRng::seed_from_u64(9));
    let draws: Vec<f64> = (0..5_000)
        .map(|_| sample_exponential(2.0, &mut rng).unwrap())
        .collect();
    let m = mean(&draws);
    assert!((m - 0.5).abs() < 0.03, "mean {m}");
    assert!(draws.iter().all(|&x| x >= 0.0));
}

#[test]
fn chi_squared_draws_have_mean_df() {
    let budget = Budget::new(25, 400).unwrap();
    let mut sampler = Sampler::new(MersenneTwisterUniformRng::new(3), budget).unwrap();
    let draws: Vec<f64> = (0..2_000)
        .map(|_| sampler.chi_squared(2).unwrap())
        .collect();
    let m = mean(&draws);
    assert!((m - 2.0).abs() < 0.25, "mean {m}");
}

#[test]
fn threshold_frequency() {
    let mut rng = MersenneTwisterUniformRng::new(77);
    let hits = (0..10_000)
        .filter(|_| exceeds_threshold(0.8, &mut rng).unwrap())
        .count();
    let rate = hits as f64 / 10_000.0;
    assert!((rate - 0.2).abs() < 0.02, "hit rate {rate}");
}

#[test]
fn coarse_budget_normal_stays_in_bracket() {
    let mut sampler = Sampler::new(MersenneTwisterUniformRng::new(1), Budget::default()).unwrap();
    let (low, high) = normal_bracket(0.2, 0.1);
    for _ in 0..500 {
        let x = sampler.normal(0.2, 0.1).unwrap();
        assert!(x > low && x < high, "got {x}");
    }
}

#[test]
fn errors_surface_through_samplers() {
    let mut rng = MersenneTwisterUniformRng::new(0);
    let mut sampler = Sampler::new(MersenneTwisterUniformRng::new(0), Budget::default()).unwrap();
    assert!(matches!(sampler.chi_squared(9), Err(Error::InvalidArgument(_))));
    assert!(matches!(sampler.normal(0.0, -1.0), Err(Error::InvalidArgument(_))));
    assert!(matches!(
        sample_normal(0.0, 1.0, 10, 0, &mut rng),
        Err(Error::InvalidArgument(_))
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn normal_inversion_consistency(
        mean in -5.0f64..5.0,
        variance in 0.5f64..3.0,
        u in 0.05f64..0.95,
    ) {
        let (iters, res) = (45, 400);
        let (low, _) = normal_bracket(mean, variance);
        let x = normal_from_probability(mean, variance, iters, res, u).unwrap();
        let p = normal_cdf(mean, variance, low, x, res).unwrap();
        prop_assert!((p - u).abs() < 1e-6, "u={} x={} p={}", u, x, p);
    }

    #[test]
    fn chi_squared_inversion_consistency(
        df in prop::sample::select(vec![2u32, 3, 4, 5, 6]),
        u in 0.05f64..0.85,
    ) {
        let (iters, res) = (45, 400);
        let x = chi_squared_from_probability(df, iters, res, u).unwrap();
        let p = chi_squared_cdf(df, x, res).unwrap();
        prop_assert!((p - u).abs() < 1e-6, "df={} u={} x={} p={}", df, u, x, p);
    }

    #[test]
    fn fixed_draw_is_deterministic(u in 0.0f64..1.0) {
        let a = sample_normal(0.0, 1.0, 20, 50, &mut || u).unwrap();
        let b = sample_normal(0.0, 1.0, 20, 50, &mut || u).unwrap();
        prop_assert_eq!(a, b);
    }
}
