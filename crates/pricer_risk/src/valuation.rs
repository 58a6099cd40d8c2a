//! Portfolio marking and Greek aggregation.

use pricer_core::traits::OptionPricer;
use pricer_core::types::{Greeks, OptionParameters, PricingError};
use pricer_models::PricingEngine;

use crate::config::DEFAULT_MATURITY_FLOOR;
use crate::portfolio::{Instrument, Portfolio};

/// Marks portfolios to a market state with an [`OptionPricer`].
///
/// Value and Greeks are linear in position quantities:
///
/// ```text
/// V = Σ qᵢ · Vᵢ,    Greeks = Σ qᵢ · Greeksᵢ
/// ```
///
/// with the underlying contributing `q · S` to value and `q` to delta.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{OptionParameters, OptionType, ExerciseStyle};
/// use pricer_risk::portfolio::Portfolio;
/// use pricer_risk::valuation::PortfolioValuer;
///
/// let call = OptionParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call, ExerciseStyle::European).unwrap();
/// let book = Portfolio::builder().option(call, 2.0).underlying(-1.0).build();
///
/// let valuer = PortfolioValuer::default();
/// let value = valuer.value(&book, 100.0, None, 0.0).unwrap();
/// assert!((value - (2.0 * 10.4506 - 100.0)).abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct PortfolioValuer<P = PricingEngine> {
    pricer: P,
    maturity_floor: f64,
}

impl Default for PortfolioValuer<PricingEngine> {
    fn default() -> Self {
        Self::new(PricingEngine::default())
    }
}

impl<P: OptionPricer> PortfolioValuer<P> {
    /// Creates a valuer with the default maturity floor (0.001y).
    pub fn new(pricer: P) -> Self {
        Self {
            pricer,
            maturity_floor: DEFAULT_MATURITY_FLOOR,
        }
    }

    /// Sets the lower bound on remaining maturity during revaluation.
    pub fn with_maturity_floor(mut self, maturity_floor: f64) -> Self {
        self.maturity_floor = maturity_floor;
        self
    }

    /// The underlying pricer.
    #[inline]
    pub fn pricer(&self) -> &P {
        &self.pricer
    }

    /// Remaining-maturity floor.
    #[inline]
    pub fn maturity_floor(&self) -> f64 {
        self.maturity_floor
    }

    /// Option terms re-marked to `spot`, optional `volatility`, and
    /// `time_elapsed` years later (maturity floored).
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` for a non-positive spot or negative
    /// volatility.
    pub fn remark(
        &self,
        params: &OptionParameters,
        spot: f64,
        volatility: Option<f64>,
        time_elapsed: f64,
    ) -> Result<OptionParameters, PricingError> {
        let maturity = (params.maturity() - time_elapsed).max(self.maturity_floor);
        let remarked = params.with_spot(spot)?.with_maturity(maturity)?;
        match volatility {
            Some(vol) => remarked.with_volatility(vol),
            None => Ok(remarked),
        }
    }

    /// Portfolio value at the given market state.
    ///
    /// # Errors
    /// Propagates parameter and pricing errors.
    pub fn value(
        &self,
        portfolio: &Portfolio,
        spot: f64,
        volatility: Option<f64>,
        time_elapsed: f64,
    ) -> Result<f64, PricingError> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(PricingError::invalid("spot", spot, "must be positive"));
        }
        portfolio
            .positions()
            .iter()
            .map(|position| -> Result<f64, PricingError> {
                let unit = match position.instrument() {
                    Instrument::Underlying => spot,
                    Instrument::Option(params) => self
                        .pricer
                        .price(&self.remark(params, spot, volatility, time_elapsed)?)?,
                };
                Ok(position.quantity() * unit)
            })
            .sum()
    }

    /// Aggregate Greeks at each option's own terms.
    ///
    /// # Errors
    /// Propagates pricing errors.
    pub fn aggregate_greeks(&self, portfolio: &Portfolio) -> Result<Greeks, PricingError> {
        portfolio
            .positions()
            .iter()
            .map(|position| -> Result<Greeks, PricingError> {
                let unit = match position.instrument() {
                    Instrument::Underlying => Greeks::zero(),
                    Instrument::Option(params) => self.pricer.greeks(params)?,
                };
                Ok(position.greeks_from_unit(unit))
            })
            .sum()
    }
}
