//! Property tests across the pricing models.

use approx::assert_relative_eq;
use pricer_core::traits::OptionPricer;
use pricer_core::types::{ExerciseStyle, OptionParameters, OptionType};
use pricer_models::analytical::BlackScholes;
use pricer_models::lattice::BinomialTree;
use pricer_models::PricingEngine;
use proptest::prelude::*;

fn contract(
    spot: f64,
    strike: f64,
    vol: f64,
    rate: f64,
    maturity: f64,
    option_type: OptionType,
    style: ExerciseStyle,
) -> OptionParameters {
    OptionParameters::new(spot, strike, vol, rate, maturity, option_type, style).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// C - P = S - K·e^(-rT) for every European contract.
    #[test]
    fn prop_put_call_parity(
        spot in 20.0..200.0_f64,
        strike in 20.0..200.0_f64,
        vol in 0.05..0.8_f64,
        rate in 0.0..0.1_f64,
        maturity in 0.05..3.0_f64,
    ) {
        let call = contract(spot, strike, vol, rate, maturity, OptionType::Call, ExerciseStyle::European);
        let put = call.with_option_type(OptionType::Put);

        let c = BlackScholes.price(&call).unwrap();
        let p = BlackScholes.price(&put).unwrap();
        let forward = spot - strike * (-rate * maturity).exp();

        prop_assert!((c - p - forward).abs() <= 1e-6 * spot.max(strike));
    }

    /// Prices stay within no-arbitrage bounds.
    #[test]
    fn prop_call_bounds(
        spot in 20.0..200.0_f64,
        strike in 20.0..200.0_f64,
        vol in 0.05..0.8_f64,
        maturity in 0.05..3.0_f64,
    ) {
        let call = contract(spot, strike, vol, 0.03, maturity, OptionType::Call, ExerciseStyle::European);
        let price = BlackScholes.price(&call).unwrap();
        let lower = (spot - strike * (-0.03 * maturity).exp()).max(0.0);

        prop_assert!(price >= lower - 1e-6);
        prop_assert!(price <= spot + 1e-9);
    }

    /// Early exercise never reduces value on the same lattice.
    #[test]
    fn prop_american_at_least_european(
        spot in 50.0..150.0_f64,
        strike in 50.0..150.0_f64,
        vol in 0.1..0.5_f64,
        rate in 0.0..0.08_f64,
        maturity in 0.1..2.0_f64,
        is_call in any::<bool>(),
    ) {
        let option_type = if is_call { OptionType::Call } else { OptionType::Put };
        let tree = BinomialTree::new(60).unwrap();
        let eu = contract(spot, strike, vol, rate, maturity, option_type, ExerciseStyle::European);
        let am = eu.with_exercise_style(ExerciseStyle::American);

        prop_assert!(tree.price(&am).unwrap() >= tree.price(&eu).unwrap() - 1e-10);
    }

    /// An American option is worth at least its intrinsic value.
    #[test]
    fn prop_american_above_intrinsic(
        spot in 50.0..150.0_f64,
        strike in 50.0..150.0_f64,
        vol in 0.1..0.5_f64,
        maturity in 0.1..2.0_f64,
    ) {
        let engine = PricingEngine::default();
        let am = contract(spot, strike, vol, 0.05, maturity, OptionType::Put, ExerciseStyle::American);
        prop_assert!(engine.price(&am).unwrap() >= am.intrinsic() - 1e-10);
    }
}

#[test]
fn test_lattice_matches_analytic_across_moneyness() {
    let tree = BinomialTree::new(500).unwrap();
    for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
        for option_type in [OptionType::Call, OptionType::Put] {
            let p = contract(
                100.0,
                strike,
                0.25,
                0.03,
                1.0,
                option_type,
                ExerciseStyle::European,
            );
            let analytic = BlackScholes.price(&p).unwrap();
            let lattice = tree.price(&p).unwrap();
            assert_relative_eq!(lattice, analytic, max_relative = 5e-3);
        }
    }
}

#[test]
fn test_engine_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PricingEngine>();
    assert_send_sync::<BinomialTree>();
    assert_send_sync::<BlackScholes>();
}
