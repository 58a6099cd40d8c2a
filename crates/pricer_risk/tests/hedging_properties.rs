//! Integration tests for portfolio linearity and hedge behaviour.

use approx::assert_relative_eq;
use pricer_core::traits::OptionPricer;
use pricer_core::types::{ExerciseStyle, Greeks, OptionParameters, OptionType};
use pricer_models::PricingEngine;
use pricer_risk::config::{ScenarioConfig, SimulationConfig};
use pricer_risk::hedging::{HedgeStrategy, HedgingSimulator};
use pricer_risk::parallel::ParallelConfig;
use pricer_risk::portfolio::{Portfolio, Position};
use pricer_risk::valuation::PortfolioValuer;
use pricer_risk::HedgingError;
use proptest::prelude::*;

fn contract(strike: f64, maturity: f64, option_type: OptionType) -> OptionParameters {
    OptionParameters::new(
        100.0,
        strike,
        0.25,
        0.04,
        maturity,
        option_type,
        ExerciseStyle::European,
    )
    .unwrap()
}

fn seeded(seed: u64, parallel: ParallelConfig) -> HedgingSimulator {
    let config = SimulationConfig::builder()
        .scenarios(ScenarioConfig::builder().seed(seed).build().unwrap())
        .parallel(parallel)
        .build()
        .unwrap();
    HedgingSimulator::new(PricingEngine::default(), config).unwrap()
}

fn position_strategy() -> impl Strategy<Value = Position> {
    prop_oneof![
        (
            60.0..140.0_f64,
            0.1..2.0_f64,
            any::<bool>(),
            -20.0..20.0_f64
        )
            .prop_map(|(strike, maturity, is_call, quantity)| {
                let option_type = if is_call { OptionType::Call } else { OptionType::Put };
                Position::option(contract(strike, maturity, option_type), quantity)
            }),
        (-50.0..50.0_f64).prop_map(Position::underlying),
    ]
}

proptest! {
    /// Aggregate Greeks equal the quantity-weighted sum of unit Greeks.
    #[test]
    fn prop_aggregate_greeks_are_linear(
        positions in prop::collection::vec(position_strategy(), 1..12),
    ) {
        let engine = PricingEngine::default();
        let valuer = PortfolioValuer::new(engine);
        let book: Portfolio = positions.iter().copied().collect();

        let expected: Greeks = positions
            .iter()
            .map(|p| match p.option_params() {
                Some(params) => engine.greeks(params).unwrap().scale(p.quantity()),
                None => Greeks::underlying(p.quantity()),
            })
            .sum();
        let actual = valuer.aggregate_greeks(&book).unwrap();

        prop_assert!((actual.delta - expected.delta).abs() < 1e-9);
        prop_assert!((actual.gamma - expected.gamma).abs() < 1e-9);
        prop_assert!((actual.vega - expected.vega).abs() < 1e-9);
        prop_assert!((actual.theta - expected.theta).abs() < 1e-9);
        prop_assert!((actual.rho - expected.rho).abs() < 1e-9);
    }

    /// Delta hedging always leaves residual delta within the threshold.
    #[test]
    fn prop_delta_hedge_zeroes_delta(
        positions in prop::collection::vec(position_strategy(), 1..8),
    ) {
        let sim = HedgingSimulator::default();
        let book: Portfolio = positions.into_iter().collect();
        let hedged = sim.delta_hedge(&book).unwrap();

        let delta = sim.valuer().aggregate_greeks(&hedged).unwrap().delta;
        prop_assert!(delta.abs() <= 1e-3);
        prop_assert_eq!(hedged.without_hedges(), book.without_hedges());
    }
}

#[test]
fn test_gamma_hedge_neutralises_both() {
    let sim = HedgingSimulator::default();
    let book = Portfolio::builder()
        .option(contract(100.0, 1.0, OptionType::Call), 10.0)
        .option(contract(90.0, 0.5, OptionType::Put), -4.0)
        .build();
    let hedge = contract(110.0, 0.75, OptionType::Call);

    let hedged = sim.hedge(&book, HedgeStrategy::Gamma, Some(&hedge)).unwrap();
    let greeks = sim.valuer().aggregate_greeks(&hedged).unwrap();

    assert!(greeks.delta.abs() < 1e-3);
    assert!(greeks.gamma.abs() < 1e-10);
    assert_eq!(book.len(), 2);
}

#[test]
fn test_delta_hedge_reduces_variance_for_long_options() {
    let sim = seeded(2024, ParallelConfig::default());
    let book = Portfolio::builder()
        .option(contract(100.0, 1.0, OptionType::Call), 10.0)
        .option(contract(95.0, 1.0, OptionType::Put), 5.0)
        .build();

    let none = sim
        .simulate_effectiveness(&book, HedgeStrategy::None, 1_000, None)
        .unwrap();
    let delta = sim
        .simulate_effectiveness(&book, HedgeStrategy::Delta, 1_000, None)
        .unwrap();

    assert!(delta.statistics.variance < none.statistics.variance);
    // Common random numbers: both strategies see the same scenarios
    assert_eq!(none.scenarios, delta.scenarios);
}

#[test]
fn test_parallel_and_sequential_runs_agree() {
    let book = Portfolio::builder()
        .option(contract(100.0, 1.0, OptionType::Call), 3.0)
        .build();

    let parallel = seeded(5, ParallelConfig::new(1))
        .simulate_effectiveness(&book, HedgeStrategy::Delta, 400, None)
        .unwrap();
    let sequential = seeded(5, ParallelConfig::sequential())
        .simulate_effectiveness(&book, HedgeStrategy::Delta, 400, None)
        .unwrap();

    assert_eq!(parallel.pnl_series, sequential.pnl_series);
    assert_relative_eq!(
        parallel.statistics.variance,
        sequential.statistics.variance,
        max_relative = 1e-12
    );
}

#[test]
fn test_american_book_simulates_through_lattice() {
    let sim = seeded(9, ParallelConfig::default());
    let put = contract(100.0, 1.0, OptionType::Put).with_exercise_style(ExerciseStyle::American);
    let book = Portfolio::builder().option(put, 2.0).build();

    let result = sim
        .simulate_effectiveness(&book, HedgeStrategy::Delta, 50, None)
        .unwrap();

    assert_eq!(result.pnl_series.len(), 50);
    assert!(result.statistics.std_dev.is_finite());
    assert!(result.portfolio_greeks.delta.abs() < 1e-3);
}

#[test]
fn test_american_book_at_vol_floor_with_high_rate() {
    // σ = 2% and r = 12%: a fixed 100-step lattice would leave p > 1
    let put = OptionParameters::new(
        100.0,
        100.0,
        0.02,
        0.12,
        1.0,
        OptionType::Put,
        ExerciseStyle::American,
    )
    .unwrap();
    let book = Portfolio::builder().option(put, 1.0).build();

    let floored = PortfolioValuer::default()
        .value(&book, 100.0, Some(0.01), 0.0)
        .unwrap();
    assert!(floored.is_finite() && floored >= 0.0);

    // Shocks down to -90% put most scenarios on the 1% floor
    let scenarios = ScenarioConfig::builder()
        .vol_shock_range(-0.9, 0.5)
        .seed(21)
        .build()
        .unwrap();
    let config = SimulationConfig::builder().scenarios(scenarios).build().unwrap();
    let sim = HedgingSimulator::new(PricingEngine::default(), config).unwrap();

    let result = sim
        .simulate_effectiveness(&book, HedgeStrategy::Delta, 200, None)
        .unwrap();
    assert_eq!(result.pnl_series.len(), 200);
    assert!(result.pnl_series.iter().all(|pnl| pnl.is_finite()));
    assert!(result.scenarios.iter().any(|s| s.is_vol_floored(0.02)));
}

#[test]
fn test_zero_min_hedge_gamma_is_rejected() {
    let result = SimulationConfig::builder().min_hedge_gamma(0.0).build();
    assert!(matches!(result, Err(HedgingError::InvalidConfig(_))));
}

#[test]
fn test_underlying_only_book_is_rejected() {
    let sim = HedgingSimulator::default();
    let book = Portfolio::builder().underlying(10.0).build();

    assert!(matches!(
        sim.compare_strategies(&book, 100, None),
        Err(HedgingError::EmptyPortfolio)
    ));
}

#[test]
fn test_invalid_base_state_aborts_run() {
    let sim = seeded(1, ParallelConfig::default());
    let zero_vol = contract(100.0, 1.0, OptionType::Call).with_volatility(0.0).unwrap();
    let book = Portfolio::builder().option(zero_vol, 1.0).build();

    assert!(matches!(
        sim.simulate_effectiveness(&book, HedgeStrategy::None, 10, None),
        Err(HedgingError::Pricing(_))
    ));
}

#[cfg(feature = "serde")]
#[test]
fn test_comparison_serialises_flat_statistics() {
    let sim = seeded(8, ParallelConfig::default());
    let book = Portfolio::builder()
        .option(contract(100.0, 1.0, OptionType::Call), 1.0)
        .build();
    let comparison = sim.compare_strategies(&book, 50, None).unwrap();

    let json = serde_json::to_value(&comparison).unwrap();
    assert!(json["no_hedge"]["variance"].is_number());
    assert_eq!(json["delta_hedge"]["strategy"], "delta");
    assert!(json["gamma_hedge"].is_null());
}
