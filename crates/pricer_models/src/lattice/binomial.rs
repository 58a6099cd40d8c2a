//! Cox-Ross-Rubinstein binomial tree.
//!
//! Prices European and American vanilla options by backward induction on a
//! recombining lattice:
//!
//! ```text
//! dt = T / N,  u = e^(σ√dt),  d = 1/u
//! p  = (e^(r·dt) - d) / (u - d)
//! V(i, j) = e^(-r·dt) · (p·V(i+1, j) + (1-p)·V(i+1, j+1))
//! ```
//!
//! American exercise replaces each continuation value with
//! `max(continuation, intrinsic)`. Convergence to Black-Scholes for European
//! contracts is first order with an odd/even oscillation, so comparisons
//! should use even step counts.
//!
//! p stays in [0, 1] only while `|r|·dt < σ√dt`, i.e. `n > (r/σ)²·T`. Low
//! volatility with a large rate (scenario vol floors reach this) would break
//! a fixed step count, so the configured count is raised to
//! [`min_stable_steps`] for that valuation.

use pricer_core::traits::OptionPricer;
use pricer_core::types::{Greeks, OptionParameters, PricingError};

use super::greeks::finite_difference_greeks;

/// Largest step count the lattice raises itself to for stability.
pub const MAX_STABLE_STEPS: usize = 100_000;

/// Smallest step count for which the CRR probability stays inside [0, 1].
///
/// Returns `usize::MAX` when `(r/σ)²·T` is not finite.
pub fn min_stable_steps(volatility: f64, rate: f64, maturity: f64) -> usize {
    let ratio = rate / volatility;
    let bound = ratio * ratio * maturity;
    if !bound.is_finite() {
        return usize::MAX;
    }
    // One extra step keeps a margin over rounding in exp()
    (bound.ceil() as usize).saturating_add(1)
}

/// Step count used for one valuation: `steps`, raised to
/// [`min_stable_steps`] when needed.
///
/// # Errors
/// `PricingError::NumericalInstability` if the stable count exceeds
/// [`MAX_STABLE_STEPS`].
pub fn stable_steps(
    steps: usize,
    volatility: f64,
    rate: f64,
    maturity: f64,
) -> Result<usize, PricingError> {
    let required = min_stable_steps(volatility, rate, maturity);
    if required <= steps {
        return Ok(steps);
    }
    if required > MAX_STABLE_STEPS {
        return Err(PricingError::NumericalInstability(format!(
            "lattice needs {} steps for σ = {}, r = {}, T = {} (limit {})",
            required, volatility, rate, maturity, MAX_STABLE_STEPS
        )));
    }
    Ok(required)
}

/// CRR risk-neutral up probability.
///
/// # Errors
/// `PricingError::NumericalInstability` if p is not finite.
pub fn risk_neutral_probability(u: f64, d: f64, rate: f64, dt: f64) -> Result<f64, PricingError> {
    let p = ((rate * dt).exp() - d) / (u - d);
    if !p.is_finite() {
        return Err(PricingError::NumericalInstability(format!(
            "risk-neutral probability p = {} is not finite",
            p
        )));
    }
    Ok(p.clamp(0.0, 1.0))
}

/// Binomial lattice pricer with a fixed number of time steps.
///
/// # Examples
/// ```
/// use pricer_core::traits::OptionPricer;
/// use pricer_core::types::{OptionParameters, OptionType, ExerciseStyle};
/// use pricer_models::lattice::BinomialTree;
///
/// let tree = BinomialTree::new(200).unwrap();
/// let put = OptionParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Put, ExerciseStyle::American).unwrap();
/// let european = put.with_exercise_style(ExerciseStyle::European);
///
/// // Early exercise is worth something for a put with positive rates
/// assert!(tree.price(&put).unwrap() > tree.price(&european).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialTree {
    steps: usize,
}

impl Default for BinomialTree {
    fn default() -> Self {
        Self {
            steps: Self::DEFAULT_STEPS,
        }
    }
}

impl BinomialTree {
    /// Step count used by the pricing engine unless configured otherwise.
    pub const DEFAULT_STEPS: usize = 100;

    /// Creates a tree with `steps` time steps.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if `steps == 0`.
    pub fn new(steps: usize) -> Result<Self, PricingError> {
        if steps == 0 {
            return Err(PricingError::invalid(
                "steps",
                steps as f64,
                "binomial steps must be > 0",
            ));
        }
        Ok(Self { steps })
    }

    /// Number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Prices the contract on the lattice, honouring its exercise style.
    ///
    /// Zero maturity returns the intrinsic value. The step count is raised
    /// to [`min_stable_steps`] when the configured count would push p out
    /// of [0, 1].
    ///
    /// # Errors
    /// - `PricingError::InvalidParameter` for σ ≤ 0 with positive maturity
    /// - `PricingError::NumericalInstability` if the stable step count
    ///   exceeds [`MAX_STABLE_STEPS`] or p is not finite
    pub fn price(&self, params: &OptionParameters) -> Result<f64, PricingError> {
        if params.maturity() == 0.0 {
            return Ok(params.intrinsic());
        }
        if params.volatility() <= 0.0 {
            return Err(PricingError::invalid(
                "volatility",
                params.volatility(),
                "must be positive for the binomial lattice",
            ));
        }

        let n = stable_steps(
            self.steps,
            params.volatility(),
            params.rate(),
            params.maturity(),
        )?;
        let spot = params.spot();
        let strike = params.strike();
        let option_type = params.option_type();
        let american = params.exercise_style().is_american();

        let dt = params.maturity() / n as f64;
        let u = (params.volatility() * dt.sqrt()).exp();
        let d = 1.0 / u;
        let p = risk_neutral_probability(u, d, params.rate(), dt)?;
        let discount = (-params.rate() * dt).exp();

        // Node j at level i sits at S·u^(i-j)·d^j = S·u^(i-2j)
        let node_price = |level: usize, j: usize| spot * u.powi(level as i32 - 2 * j as i32);

        let mut values: Vec<f64> = (0..=n)
            .map(|j| option_type.intrinsic(node_price(n, j), strike))
            .collect();

        for level in (0..n).rev() {
            for j in 0..=level {
                let continuation = discount * (p * values[j] + (1.0 - p) * values[j + 1]);
                values[j] = if american {
                    continuation.max(option_type.intrinsic(node_price(level, j), strike))
                } else {
                    continuation
                };
            }
        }

        Ok(values[0])
    }

    /// Bump-and-revalue Greeks on this lattice.
    ///
    /// Each Greek set costs five additional full tree evaluations.
    ///
    /// # Errors
    /// Propagates any pricing error from the base or bumped valuations.
    pub fn numerical_greeks(&self, params: &OptionParameters) -> Result<Greeks, PricingError> {
        finite_difference_greeks(params, |bumped| self.price(bumped))
    }
}

impl OptionPricer for BinomialTree {
    fn price(&self, params: &OptionParameters) -> Result<f64, PricingError> {
        BinomialTree::price(self, params)
    }

    fn greeks(&self, params: &OptionParameters) -> Result<Greeks, PricingError> {
        self.numerical_greeks(params)
    }
}
