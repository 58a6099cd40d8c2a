//! Black-Scholes pricing model for European options.
//!
//! This module provides the closed-form Black-Scholes price and analytical
//! Greeks. It is the reference oracle the lattice pricer converges to.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::traits::OptionPricer;
use pricer_core::types::{Greeks, OptionParameters, PricingError};

/// Calendar days per year used to express theta per day.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Scaling that expresses vega and rho per percentage point.
pub const PERCENT: f64 = 100.0;

/// Black-Scholes model for European option pricing.
///
/// Stateless; every call validates its parameters against the model's
/// domain before touching the formula.
///
/// # Examples
/// ```
/// use pricer_core::traits::OptionPricer;
/// use pricer_core::types::{OptionParameters, OptionType, ExerciseStyle};
/// use pricer_models::analytical::BlackScholes;
///
/// let call = OptionParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call, ExerciseStyle::European).unwrap();
/// let put = call.with_option_type(OptionType::Put);
///
/// let c = BlackScholes.price(&call).unwrap();
/// let p = BlackScholes.price(&put).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = c - p - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholes;

/// Intermediate terms shared by the price and all Greeks.
#[derive(Debug, Clone, Copy)]
struct Terms {
    d1: f64,
    d2: f64,
    sqrt_t: f64,
    discount: f64,
}

impl BlackScholes {
    /// Model name used in error messages.
    pub const NAME: &'static str = "Black-Scholes";

    /// Rejects parameters outside the closed-form domain.
    ///
    /// # Errors
    /// - `PricingError::UnsupportedExerciseStyle` for American exercise
    /// - `PricingError::InvalidParameter` for σ ≤ 0 or T ≤ 0
    pub fn check_domain(params: &OptionParameters) -> Result<(), PricingError> {
        if !params.exercise_style().is_european() {
            return Err(PricingError::UnsupportedExerciseStyle {
                style: params.exercise_style().to_string(),
                model: Self::NAME,
            });
        }
        if params.volatility() <= 0.0 {
            return Err(PricingError::invalid(
                "volatility",
                params.volatility(),
                "must be positive for Black-Scholes",
            ));
        }
        if params.maturity() <= 0.0 {
            return Err(PricingError::invalid(
                "maturity",
                params.maturity(),
                "must be positive for Black-Scholes",
            ));
        }
        Ok(())
    }

    /// Computes d₁ and d₂.
    ///
    /// # Errors
    /// Same conditions as [`BlackScholes::check_domain`].
    pub fn d1_d2(params: &OptionParameters) -> Result<(f64, f64), PricingError> {
        Self::check_domain(params)?;
        let terms = Self::terms(params);
        Ok((terms.d1, terms.d2))
    }

    fn terms(params: &OptionParameters) -> Terms {
        let s = params.spot();
        let k = params.strike();
        let sigma = params.volatility();
        let r = params.rate();
        let t = params.maturity();

        let sqrt_t = t.sqrt();
        let vol_sqrt_t = sigma * sqrt_t;
        let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / vol_sqrt_t;

        Terms {
            d1,
            d2: d1 - vol_sqrt_t,
            sqrt_t,
            discount: (-r * t).exp(),
        }
    }
}

impl OptionPricer for BlackScholes {
    fn price(&self, params: &OptionParameters) -> Result<f64, PricingError> {
        Self::check_domain(params)?;
        let Terms { d1, d2, discount, .. } = Self::terms(params);
        let s = params.spot();
        let k = params.strike();

        let price = if params.is_call() {
            s * norm_cdf(d1) - k * discount * norm_cdf(d2)
        } else {
            k * discount * norm_cdf(-d2) - s * norm_cdf(-d1)
        };
        Ok(price)
    }

    fn greeks(&self, params: &OptionParameters) -> Result<Greeks, PricingError> {
        Self::check_domain(params)?;
        let Terms {
            d1,
            d2,
            sqrt_t,
            discount,
        } = Self::terms(params);
        let s = params.spot();
        let k = params.strike();
        let sigma = params.volatility();
        let r = params.rate();
        let t = params.maturity();

        let pdf_d1 = norm_pdf(d1);
        let cdf_d1 = norm_cdf(d1);

        // Gamma and vega do not depend on the payoff side
        let gamma = pdf_d1 / (s * sigma * sqrt_t);
        let vega = s * pdf_d1 * sqrt_t / PERCENT;
        let decay = -(s * pdf_d1 * sigma) / (2.0 * sqrt_t);

        let greeks = if params.is_call() {
            let cdf_d2 = norm_cdf(d2);
            Greeks {
                delta: cdf_d1,
                gamma,
                vega,
                theta: (decay - r * k * discount * cdf_d2) / DAYS_PER_YEAR,
                rho: k * t * discount * cdf_d2 / PERCENT,
            }
        } else {
            let cdf_neg_d2 = norm_cdf(-d2);
            Greeks {
                delta: cdf_d1 - 1.0,
                gamma,
                vega,
                theta: (decay + r * k * discount * cdf_neg_d2) / DAYS_PER_YEAR,
                rho: -k * t * discount * cdf_neg_d2 / PERCENT,
            }
        };
        Ok(greeks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::{ExerciseStyle, OptionType};

    fn params(
        spot: f64,
        strike: f64,
        vol: f64,
        rate: f64,
        maturity: f64,
        option_type: OptionType,
    ) -> OptionParameters {
        OptionParameters::new(
            spot,
            strike,
            vol,
            rate,
            maturity,
            option_type,
            ExerciseStyle::European,
        )
        .unwrap()
    }

    // ==========================================================
    // Domain Tests
    // ==========================================================

    #[test]
    fn test_rejects_american() {
        let p = params(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call)
            .with_exercise_style(ExerciseStyle::American);
        match BlackScholes.price(&p).unwrap_err() {
            PricingError::UnsupportedExerciseStyle { style, model } => {
                assert_eq!(style, "American");
                assert_eq!(model, "Black-Scholes");
            }
            other => panic!("Expected UnsupportedExerciseStyle, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_zero_volatility() {
        let p = params(100.0, 100.0, 0.0, 0.05, 1.0, OptionType::Call);
        assert!(matches!(
            BlackScholes.price(&p),
            Err(PricingError::InvalidParameter {
                name: "volatility",
                ..
            })
        ));
        assert!(BlackScholes.greeks(&p).is_err());
    }

    #[test]
    fn test_rejects_zero_maturity() {
        let p = params(100.0, 100.0, 0.2, 0.05, 0.0, OptionType::Put);
        assert!(matches!(
            BlackScholes.price(&p),
            Err(PricingError::InvalidParameter {
                name: "maturity",
                ..
            })
        ));
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_atm_zero_rate() {
        // ATM with r=0: d1 = σ√T / 2
        let p = params(100.0, 100.0, 0.2, 0.0, 1.0, OptionType::Call);
        let (d1, d2) = BlackScholes::d1_d2(&p).unwrap();
        assert_relative_eq!(d1, 0.1, epsilon = 1e-12);
        assert_relative_eq!(d2, -0.1, epsilon = 1e-12);
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_atm_call_reference_price() {
        let p = params(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call);
        assert_relative_eq!(BlackScholes.price(&p).unwrap(), 10.4506, epsilon = 1e-3);
    }

    #[test]
    fn test_otm_put_reference_price() {
        let p = params(100.0, 95.0, 0.2, 0.05, 1.0, OptionType::Put);
        assert_relative_eq!(BlackScholes.price(&p).unwrap(), 3.7133, epsilon = 1e-3);
    }

    #[test]
    fn test_put_call_parity() {
        let call = params(110.0, 100.0, 0.25, 0.04, 0.5, OptionType::Call);
        let put = call.with_option_type(OptionType::Put);

        let c = BlackScholes.price(&call).unwrap();
        let p = BlackScholes.price(&put).unwrap();
        let forward = 110.0 - 100.0 * (-0.04_f64 * 0.5).exp();

        assert_relative_eq!(c - p, forward, max_relative = 1e-10);
    }

    #[test]
    fn test_deep_itm_call_approaches_forward_intrinsic() {
        let p = params(200.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call);
        let expected = 200.0 - 100.0 * (-0.05_f64).exp();
        assert_relative_eq!(BlackScholes.price(&p).unwrap(), expected, epsilon = 1e-2);
    }

    // ==========================================================
    // Greeks Tests
    // ==========================================================

    #[test]
    fn test_atm_call_greek_signs() {
        let g = BlackScholes
            .greeks(&params(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call))
            .unwrap();
        assert!((0.4..=0.7).contains(&g.delta));
        assert!(g.gamma > 0.0);
        assert!(g.vega > 0.0);
        assert!(g.theta < 0.0);
        assert!(g.rho > 0.0);
    }

    #[test]
    fn test_atm_call_greek_values() {
        let g = BlackScholes
            .greeks(&params(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call))
            .unwrap();
        assert_relative_eq!(g.delta, 0.636831, epsilon = 1e-5);
        assert_relative_eq!(g.gamma, 0.018762, epsilon = 1e-5);
        assert_relative_eq!(g.vega, 0.375240, epsilon = 1e-5);
        assert_relative_eq!(g.theta, -6.414028 / 365.0, epsilon = 1e-5);
        assert_relative_eq!(g.rho, 0.532325, epsilon = 1e-5);
    }

    #[test]
    fn test_put_greeks_relationships() {
        let call = params(100.0, 105.0, 0.3, 0.03, 0.75, OptionType::Call);
        let put = call.with_option_type(OptionType::Put);
        let gc = BlackScholes.greeks(&call).unwrap();
        let gp = BlackScholes.greeks(&put).unwrap();

        assert_relative_eq!(gc.delta - gp.delta, 1.0, epsilon = 1e-12);
        assert_relative_eq!(gc.gamma, gp.gamma, epsilon = 1e-15);
        assert_relative_eq!(gc.vega, gp.vega, epsilon = 1e-15);
        assert!(gp.rho < 0.0);
    }

    #[test]
    fn test_delta_matches_finite_difference() {
        let p = params(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Put);
        let h = 0.01;
        let up = BlackScholes.price(&p.with_spot(100.0 + h).unwrap()).unwrap();
        let down = BlackScholes.price(&p.with_spot(100.0 - h).unwrap()).unwrap();
        let fd_delta = (up - down) / (2.0 * h);

        assert_relative_eq!(BlackScholes.greeks(&p).unwrap().delta, fd_delta, epsilon = 1e-5);
    }
}
