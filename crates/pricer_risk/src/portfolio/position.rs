//! Positions in options and the underlying.

use pricer_core::types::{Greeks, OptionParameters};

/// Instrument held in a position.
///
/// Option terms live inside the `Option` variant, so an underlying position
/// can never carry contract parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Instrument {
    /// Vanilla option with the given terms.
    Option(OptionParameters),
    /// One share of the underlying.
    Underlying,
}

impl Instrument {
    /// Option terms, if this is an option.
    #[inline]
    pub fn option_params(&self) -> Option<&OptionParameters> {
        match self {
            Instrument::Option(params) => Some(params),
            Instrument::Underlying => None,
        }
    }

    /// Returns `true` for the underlying.
    #[inline]
    pub fn is_underlying(&self) -> bool {
        matches!(self, Instrument::Underlying)
    }
}

/// A signed quantity of one instrument.
///
/// The hedge flag is fixed at construction: use [`Position::option`] and
/// [`Position::underlying`] for book positions, and the `hedge_*`
/// constructors for overlays added by the hedging simulator.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{OptionParameters, OptionType, ExerciseStyle};
/// use pricer_risk::portfolio::Position;
///
/// let call = OptionParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call, ExerciseStyle::European).unwrap();
/// let long = Position::option(call, 10.0);
/// let hedge = Position::hedge_underlying(-6.4);
///
/// assert!(!long.is_hedge());
/// assert!(hedge.is_hedge());
/// assert!(hedge.instrument().is_underlying());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    instrument: Instrument,
    quantity: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    is_hedge: bool,
}

impl Position {
    /// Option position.
    #[inline]
    pub fn option(params: OptionParameters, quantity: f64) -> Self {
        Self {
            instrument: Instrument::Option(params),
            quantity,
            is_hedge: false,
        }
    }

    /// Underlying position.
    #[inline]
    pub fn underlying(quantity: f64) -> Self {
        Self {
            instrument: Instrument::Underlying,
            quantity,
            is_hedge: false,
        }
    }

    /// Option position added as a hedge.
    #[inline]
    pub fn hedge_option(params: OptionParameters, quantity: f64) -> Self {
        Self {
            is_hedge: true,
            ..Self::option(params, quantity)
        }
    }

    /// Underlying position added as a hedge.
    #[inline]
    pub fn hedge_underlying(quantity: f64) -> Self {
        Self {
            is_hedge: true,
            ..Self::underlying(quantity)
        }
    }

    /// Held instrument.
    #[inline]
    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    /// Signed quantity.
    #[inline]
    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Whether this position was added as a hedge overlay.
    #[inline]
    pub fn is_hedge(&self) -> bool {
        self.is_hedge
    }

    /// Option terms, if this is an option position.
    #[inline]
    pub fn option_params(&self) -> Option<&OptionParameters> {
        self.instrument.option_params()
    }

    /// Scales per-unit option Greeks by the quantity; the underlying
    /// contributes delta only.
    pub fn greeks_from_unit(&self, unit: Greeks) -> Greeks {
        match self.instrument {
            Instrument::Option(_) => unit.scale(self.quantity),
            Instrument::Underlying => Greeks::underlying(self.quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::{ExerciseStyle, OptionType};

    fn put() -> OptionParameters {
        OptionParameters::new(
            100.0,
            95.0,
            0.2,
            0.05,
            1.0,
            OptionType::Put,
            ExerciseStyle::European,
        )
        .unwrap()
    }

    #[test]
    fn test_constructors_fix_hedge_flag() {
        assert!(!Position::option(put(), 1.0).is_hedge());
        assert!(!Position::underlying(1.0).is_hedge());
        assert!(Position::hedge_option(put(), 1.0).is_hedge());
        assert!(Position::hedge_underlying(1.0).is_hedge());
    }

    #[test]
    fn test_option_params_only_for_options() {
        assert_eq!(Position::option(put(), 2.0).option_params(), Some(&put()));
        assert_eq!(Position::underlying(2.0).option_params(), None);
    }

    #[test]
    fn test_greeks_from_unit() {
        let unit = Greeks::new(-0.3, 0.02, 0.4, -0.01, -0.2);
        let g = Position::option(put(), -3.0).greeks_from_unit(unit);
        assert_eq!(g, unit.scale(-3.0));

        let stock = Position::underlying(5.0).greeks_from_unit(unit);
        assert_eq!(stock, Greeks::underlying(5.0));
    }
}
