//! Option sensitivities.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Sensitivity set for one option or an aggregated book.
///
/// Units follow desk convention:
/// - `vega` and `rho`: price change per 1 percentage point
/// - `theta`: price change per calendar day
///
/// Greeks combine linearly, so a portfolio's Greeks are a fold of
/// [`Greeks::scale`] and `+` over its positions.
///
/// # Examples
/// ```
/// use pricer_core::types::Greeks;
///
/// let call = Greeks::new(0.6, 0.02, 0.4, -0.01, 0.5);
/// let book: Greeks = [call.scale(10.0), Greeks::underlying(-6.0)].into_iter().sum();
///
/// assert!(book.delta.abs() < 1e-12);
/// assert!((book.gamma - 0.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ per 1% vol
    pub vega: f64,
    /// ∂V/∂t per day
    pub theta: f64,
    /// ∂V/∂r per 1% rate
    pub rho: f64,
}

impl Greeks {
    /// Creates a Greek set from explicit values.
    pub fn new(delta: f64, gamma: f64, vega: f64, theta: f64, rho: f64) -> Self {
        Self {
            delta,
            gamma,
            vega,
            theta,
            rho,
        }
    }

    /// All-zero Greek set.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Greeks of `quantity` shares of the underlying: delta only.
    pub fn underlying(quantity: f64) -> Self {
        Self {
            delta: quantity,
            ..Self::default()
        }
    }

    /// Scale all Greeks by a factor.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            vega: self.vega * factor,
            theta: self.theta * factor,
            rho: self.rho * factor,
        }
    }

    /// Returns `true` if every component is finite.
    pub fn is_finite(&self) -> bool {
        self.delta.is_finite()
            && self.gamma.is_finite()
            && self.vega.is_finite()
            && self.theta.is_finite()
            && self.rho.is_finite()
    }
}

impl Add for Greeks {
    type Output = Greeks;

    fn add(self, other: Greeks) -> Greeks {
        Greeks {
            delta: self.delta + other.delta,
            gamma: self.gamma + other.gamma,
            vega: self.vega + other.vega,
            theta: self.theta + other.theta,
            rho: self.rho + other.rho,
        }
    }
}

impl AddAssign for Greeks {
    fn add_assign(&mut self, other: Greeks) {
        *self = *self + other;
    }
}

impl Sum for Greeks {
    fn sum<I: Iterator<Item = Greeks>>(iter: I) -> Greeks {
        iter.fold(Greeks::zero(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_underlying_has_delta_only() {
        let g = Greeks::underlying(-3.5);
        assert_eq!(g.delta, -3.5);
        assert_eq!(g.gamma, 0.0);
        assert_eq!(g.vega, 0.0);
        assert_eq!(g.theta, 0.0);
        assert_eq!(g.rho, 0.0);
    }

    #[test]
    fn test_scale_and_add() {
        let a = Greeks::new(0.5, 0.02, 0.4, -0.01, 0.3);
        let b = Greeks::new(-0.4, 0.03, 0.2, -0.02, -0.1);
        let total = a.scale(2.0) + b;

        assert_relative_eq!(total.delta, 0.6, epsilon = 1e-12);
        assert_relative_eq!(total.gamma, 0.07, epsilon = 1e-12);
        assert_relative_eq!(total.vega, 1.0, epsilon = 1e-12);
        assert_relative_eq!(total.theta, -0.04, epsilon = 1e-12);
        assert_relative_eq!(total.rho, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: Greeks = Vec::<Greeks>::new().into_iter().sum();
        assert_eq!(total, Greeks::zero());
    }

    #[test]
    fn test_is_finite() {
        assert!(Greeks::new(1.0, 0.0, 0.0, 0.0, 0.0).is_finite());
        assert!(!Greeks::new(f64::INFINITY, 0.0, 0.0, 0.0, 0.0).is_finite());
    }
}
