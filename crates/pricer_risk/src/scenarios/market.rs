//! Shocked market state.

/// One randomised market state used to revalue a portfolio.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketScenario {
    /// Shocked spot, `base_spot · (1 + spot_shock)`
    pub spot: f64,
    /// Shocked volatility, floored
    pub volatility: f64,
    /// Time elapsed since the base state, in years
    pub time_elapsed: f64,
    /// Relative spot shock drawn for this scenario
    pub spot_shock: f64,
    /// Relative volatility shock drawn for this scenario
    pub vol_shock: f64,
}

impl MarketScenario {
    /// Returns `true` if the volatility floor was applied.
    pub fn is_vol_floored(&self, base_vol: f64) -> bool {
        self.volatility > base_vol * (1.0 + self.vol_shock)
    }
}
