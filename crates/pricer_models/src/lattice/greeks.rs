//! Bump-and-revalue Greeks.
//!
//! Used for every model without closed-form sensitivities. The bump sizes
//! put the results in the same units as the analytical Greeks: vega and rho
//! per percentage point, theta per calendar day.

use pricer_core::types::{Greeks, OptionParameters, PricingError};

/// Relative spot bump for delta and gamma (1% of spot).
pub const SPOT_BUMP_FRACTION: f64 = 0.01;

/// Absolute volatility bump for vega (1 vol point).
pub const VOLATILITY_BUMP: f64 = 0.01;

/// Absolute rate bump for rho (1 percentage point).
pub const RATE_BUMP: f64 = 0.01;

/// Maturity decrement for theta (one calendar day).
pub const TIME_BUMP: f64 = 1.0 / 365.0;

/// Computes Greeks by repricing bumped copies of `params`.
///
/// - delta, gamma: central differences with `h = 1% · S`
/// - vega: one-sided, σ + 0.01
/// - theta: one-sided, T - 1 day; zero when T ≤ 1 day
/// - rho: one-sided, r + 0.01
///
/// # Errors
/// Propagates the first error returned by `price`.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionParameters, OptionType, ExerciseStyle};
/// use pricer_models::lattice::finite_difference_greeks;
///
/// let params = OptionParameters::new(100.0, 90.0, 0.2, 0.0, 1.0, OptionType::Call, ExerciseStyle::European).unwrap();
///
/// // Forward contract payoff S - K has delta 1 and no curvature
/// let greeks = finite_difference_greeks(&params, |p| Ok(p.spot() - p.strike())).unwrap();
/// assert!((greeks.delta - 1.0).abs() < 1e-12);
/// assert!(greeks.gamma.abs() < 1e-8);
/// ```
pub fn finite_difference_greeks<F>(params: &OptionParameters, price: F) -> Result<Greeks, PricingError>
where
    F: Fn(&OptionParameters) -> Result<f64, PricingError>,
{
    let base = price(params)?;

    let spot = params.spot();
    let h = SPOT_BUMP_FRACTION * spot;
    let up = price(&params.with_spot(spot + h)?)?;
    let down = price(&params.with_spot(spot - h)?)?;

    let delta = (up - down) / (2.0 * h);
    let gamma = (up - 2.0 * base + down) / (h * h);

    let vega = price(&params.with_volatility(params.volatility() + VOLATILITY_BUMP)?)? - base;

    let theta = if params.maturity() > TIME_BUMP {
        price(&params.with_maturity(params.maturity() - TIME_BUMP)?)? - base
    } else {
        0.0
    };

    let rho = price(&params.with_rate(params.rate() + RATE_BUMP)?)? - base;

    Ok(Greeks {
        delta,
        gamma,
        vega,
        theta,
        rho,
    })
}
