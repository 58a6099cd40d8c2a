//! Flat-argument pricing kernels.
//!
//! These are the inner loops of the batch pricer. They take plain `f64`
//! arguments and assume the caller has already validated the contract
//! (see [`crate::batch::BatchPricer`]), so they never allocate or branch on
//! error conditions except where the lattice itself can become unstable.
//!
//! The formulas match `pricer_models` exactly; only the memory access
//! pattern differs.

use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::types::{Greeks, OptionParameters, PricingError};
use pricer_models::analytical::{DAYS_PER_YEAR, PERCENT};
use pricer_models::lattice::{risk_neutral_probability, stable_steps};

/// Black-Scholes price for `σ > 0`, `T > 0`.
#[inline]
pub fn bs_price(spot: f64, strike: f64, vol: f64, rate: f64, maturity: f64, is_call: bool) -> f64 {
    let sqrt_t = maturity.sqrt();
    let vol_sqrt_t = vol * sqrt_t;
    let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * maturity) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    let discount = (-rate * maturity).exp();

    if is_call {
        spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    } else {
        strike * discount * norm_cdf(-d2) - spot * norm_cdf(-d1)
    }
}

/// Black-Scholes Greeks for `σ > 0`, `T > 0`, in desk units.
#[inline]
pub fn bs_greeks(
    spot: f64,
    strike: f64,
    vol: f64,
    rate: f64,
    maturity: f64,
    is_call: bool,
) -> Greeks {
    let sqrt_t = maturity.sqrt();
    let vol_sqrt_t = vol * sqrt_t;
    let d1 = ((spot / strike).ln() + (rate + 0.5 * vol * vol) * maturity) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    let discount = (-rate * maturity).exp();

    let pdf_d1 = norm_pdf(d1);
    let cdf_d1 = norm_cdf(d1);
    let gamma = pdf_d1 / (spot * vol_sqrt_t);
    let vega = spot * pdf_d1 * sqrt_t / PERCENT;
    let decay = -(spot * pdf_d1 * vol) / (2.0 * sqrt_t);

    if is_call {
        let cdf_d2 = norm_cdf(d2);
        Greeks {
            delta: cdf_d1,
            gamma,
            vega,
            theta: (decay - rate * strike * discount * cdf_d2) / DAYS_PER_YEAR,
            rho: strike * maturity * discount * cdf_d2 / PERCENT,
        }
    } else {
        let cdf_neg_d2 = norm_cdf(-d2);
        Greeks {
            delta: cdf_d1 - 1.0,
            gamma,
            vega,
            theta: (decay + rate * strike * discount * cdf_neg_d2) / DAYS_PER_YEAR,
            rho: -strike * maturity * discount * cdf_neg_d2 / PERCENT,
        }
    }
}

/// Contract terms for [`lattice_price`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticeInputs {
    /// Spot price.
    pub spot: f64,
    /// Strike price.
    pub strike: f64,
    /// Volatility.
    pub vol: f64,
    /// Risk-free rate.
    pub rate: f64,
    /// Time to maturity in years.
    pub maturity: f64,
    /// Call (`true`) or put.
    pub is_call: bool,
    /// Early exercise allowed.
    pub is_american: bool,
}

impl From<&OptionParameters> for LatticeInputs {
    fn from(params: &OptionParameters) -> Self {
        Self {
            spot: params.spot(),
            strike: params.strike(),
            vol: params.volatility(),
            rate: params.rate(),
            maturity: params.maturity(),
            is_call: params.is_call(),
            is_american: params.exercise_style().is_american(),
        }
    }
}

#[inline]
fn payoff(is_call: bool, spot: f64, strike: f64) -> f64 {
    if is_call {
        (spot - strike).max(0.0)
    } else {
        (strike - spot).max(0.0)
    }
}

/// CRR lattice price reusing `buffer` for node values.
///
/// Node prices are generated by a multiplicative recurrence (`·u²` per
/// node) instead of a power per node. `buffer` is resized to the step
/// count plus one and can be reused across calls without reallocating.
/// `steps` is raised the same way as in `BinomialTree` when low vol and a
/// large rate would push p out of [0, 1].
///
/// # Errors
/// - `PricingError::InvalidParameter` for `steps == 0` or σ ≤ 0 with T > 0
/// - `PricingError::NumericalInstability` if the stable step count is too
///   large or p is not finite
pub fn lattice_price(
    inputs: &LatticeInputs,
    steps: usize,
    buffer: &mut Vec<f64>,
) -> Result<f64, PricingError> {
    let LatticeInputs {
        spot,
        strike,
        vol,
        rate,
        maturity,
        is_call,
        is_american,
    } = *inputs;

    if steps == 0 {
        return Err(PricingError::invalid(
            "steps",
            0.0,
            "binomial steps must be > 0",
        ));
    }
    if maturity == 0.0 {
        return Ok(payoff(is_call, spot, strike));
    }
    if vol <= 0.0 {
        return Err(PricingError::invalid(
            "volatility",
            vol,
            "must be positive for the binomial lattice",
        ));
    }

    let steps = stable_steps(steps, vol, rate, maturity)?;
    let dt = maturity / steps as f64;
    let u = (vol * dt.sqrt()).exp();
    let d = 1.0 / u;
    let p = risk_neutral_probability(u, d, rate, dt)?;
    let q = 1.0 - p;
    let discount = (-rate * dt).exp();
    let u2 = u * u;

    // Index j counts down-moves, so node j at level i is S·u^(i-2j)
    buffer.clear();
    buffer.resize(steps + 1, 0.0);
    let mut s = spot * u.powi(steps as i32);
    for value in buffer.iter_mut() {
        *value = payoff(is_call, s, strike);
        s /= u2;
    }

    for level in (0..steps).rev() {
        let mut s = spot * u.powi(level as i32);
        for j in 0..=level {
            let continuation = discount * (p * buffer[j] + q * buffer[j + 1]);
            buffer[j] = if is_american {
                continuation.max(payoff(is_call, s, strike))
            } else {
                continuation
            };
            s /= u2;
        }
    }

    Ok(buffer[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::traits::OptionPricer;
    use pricer_core::types::{ExerciseStyle, OptionType};
    use pricer_models::analytical::BlackScholes;
    use pricer_models::lattice::BinomialTree;

    fn params(option_type: OptionType, style: ExerciseStyle) -> OptionParameters {
        OptionParameters::new(105.0, 100.0, 0.25, 0.04, 0.75, option_type, style).unwrap()
    }

    #[test]
    fn test_bs_kernels_match_model() {
        for option_type in [OptionType::Call, OptionType::Put] {
            let p = params(option_type, ExerciseStyle::European);
            let price = bs_price(105.0, 100.0, 0.25, 0.04, 0.75, p.is_call());
            let greeks = bs_greeks(105.0, 100.0, 0.25, 0.04, 0.75, p.is_call());

            assert_relative_eq!(price, BlackScholes.price(&p).unwrap(), max_relative = 1e-14);
            let reference = BlackScholes.greeks(&p).unwrap();
            assert_relative_eq!(greeks.delta, reference.delta, max_relative = 1e-14);
            assert_relative_eq!(greeks.theta, reference.theta, max_relative = 1e-12);
            assert_relative_eq!(greeks.rho, reference.rho, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_lattice_kernel_matches_baseline() {
        let mut buffer = Vec::new();
        for option_type in [OptionType::Call, OptionType::Put] {
            for style in [ExerciseStyle::European, ExerciseStyle::American] {
                let p = params(option_type, style);
                for steps in [1, 2, 57, 200] {
                    let fast = lattice_price(&LatticeInputs::from(&p), steps, &mut buffer).unwrap();
                    let baseline = BinomialTree::new(steps).unwrap().price(&p).unwrap();
                    assert_relative_eq!(fast, baseline, max_relative = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_buffer_reused_across_sizes() {
        let p = params(OptionType::Put, ExerciseStyle::American);
        let inputs = LatticeInputs::from(&p);
        let mut buffer = Vec::new();

        let large = lattice_price(&inputs, 300, &mut buffer).unwrap();
        let small = lattice_price(&inputs, 10, &mut buffer).unwrap();
        let again = lattice_price(&inputs, 300, &mut buffer).unwrap();

        assert_eq!(large, again);
        assert_eq!(buffer.len(), 301);
        let fresh = lattice_price(&inputs, 10, &mut Vec::new()).unwrap();
        assert_eq!(small, fresh);
    }

    #[test]
    fn test_lattice_errors() {
        let p = params(OptionType::Call, ExerciseStyle::American);
        let mut inputs = LatticeInputs::from(&p);
        assert!(lattice_price(&inputs, 0, &mut Vec::new()).is_err());

        inputs.vol = 0.0;
        assert!(matches!(
            lattice_price(&inputs, 10, &mut Vec::new()),
            Err(PricingError::InvalidParameter { .. })
        ));

        inputs.maturity = 0.0;
        assert_eq!(lattice_price(&inputs, 10, &mut Vec::new()).unwrap(), 5.0);
    }

    #[test]
    fn test_low_vol_high_rate_matches_baseline() {
        let p = OptionParameters::new(
            100.0,
            100.0,
            0.01,
            0.12,
            1.0,
            OptionType::Put,
            ExerciseStyle::American,
        )
        .unwrap();
        let mut buffer = Vec::new();

        let fast = lattice_price(&LatticeInputs::from(&p), 100, &mut buffer).unwrap();
        let baseline = BinomialTree::new(100).unwrap().price(&p).unwrap();
        assert_relative_eq!(fast, baseline, epsilon = 1e-12);
        // Raised to 145 steps
        assert_eq!(buffer.len(), 146);
    }
}
