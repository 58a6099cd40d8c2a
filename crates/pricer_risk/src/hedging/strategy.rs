//! Hedging strategies.

use std::fmt;
use std::str::FromStr;

use crate::error::HedgingError;

/// Hedge overlay applied before simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HedgeStrategy {
    /// No hedge.
    #[default]
    None,
    /// Underlying position neutralising delta.
    Delta,
    /// Option position neutralising gamma, then an underlying position
    /// neutralising the combined delta.
    Gamma,
}

impl HedgeStrategy {
    /// All strategies in comparison order.
    pub const ALL: [HedgeStrategy; 3] = [HedgeStrategy::None, HedgeStrategy::Delta, HedgeStrategy::Gamma];

    /// Whether this strategy needs a hedge option.
    #[inline]
    pub fn requires_hedge_option(&self) -> bool {
        matches!(self, HedgeStrategy::Gamma)
    }

    /// Display label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            HedgeStrategy::None => "No Hedge",
            HedgeStrategy::Delta => "Delta Hedge",
            HedgeStrategy::Gamma => "Gamma Hedge",
        }
    }
}

impl fmt::Display for HedgeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HedgeStrategy::None => write!(f, "none"),
            HedgeStrategy::Delta => write!(f, "delta"),
            HedgeStrategy::Gamma => write!(f, "gamma"),
        }
    }
}

impl FromStr for HedgeStrategy {
    type Err = HedgingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(HedgeStrategy::None),
            "delta" => Ok(HedgeStrategy::Delta),
            "gamma" => Ok(HedgeStrategy::Gamma),
            other => Err(HedgingError::InvalidConfig(format!(
                "unknown hedge strategy '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for strategy in HedgeStrategy::ALL {
            assert_eq!(strategy.to_string().parse::<HedgeStrategy>().unwrap(), strategy);
        }
        assert_eq!("DELTA".parse::<HedgeStrategy>().unwrap(), HedgeStrategy::Delta);
        assert!("vega".parse::<HedgeStrategy>().is_err());
    }

    #[test]
    fn test_requires_hedge_option() {
        assert!(!HedgeStrategy::None.requires_hedge_option());
        assert!(!HedgeStrategy::Delta.requires_hedge_option());
        assert!(HedgeStrategy::Gamma.requires_hedge_option());
    }
}
