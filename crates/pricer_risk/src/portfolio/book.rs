//! Ordered collection of positions.

use pricer_core::types::OptionParameters;

use super::position::Position;

/// Ordered list of positions.
///
/// Portfolios are values: adding a position returns a new portfolio and
/// leaves the original untouched.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{OptionParameters, OptionType, ExerciseStyle};
/// use pricer_risk::portfolio::{Portfolio, Position};
///
/// let call = OptionParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call, ExerciseStyle::European).unwrap();
/// let book = Portfolio::builder().option(call, 10.0).build();
/// let hedged = book.with_position(Position::hedge_underlying(-6.4));
///
/// assert_eq!(book.len(), 1);
/// assert_eq!(hedged.len(), 2);
/// assert_eq!(hedged.without_hedges(), book);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Portfolio {
    positions: Vec<Position>,
}

impl Portfolio {
    /// Creates an empty portfolio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a portfolio builder.
    pub fn builder() -> PortfolioBuilder {
        PortfolioBuilder::default()
    }

    /// Positions in insertion order.
    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if there are no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Terms of the first option position, used as the base market state.
    pub fn first_option(&self) -> Option<&OptionParameters> {
        self.positions.iter().find_map(Position::option_params)
    }

    /// New portfolio with `position` appended.
    pub fn with_position(&self, position: Position) -> Self {
        let mut positions = Vec::with_capacity(self.positions.len() + 1);
        positions.extend_from_slice(&self.positions);
        positions.push(position);
        Self { positions }
    }

    /// New portfolio keeping only non-hedge positions.
    pub fn without_hedges(&self) -> Self {
        Self {
            positions: self
                .positions
                .iter()
                .filter(|p| !p.is_hedge())
                .copied()
                .collect(),
        }
    }

    /// Hedge positions in insertion order.
    pub fn hedges(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter().filter(|p| p.is_hedge())
    }
}

impl FromIterator<Position> for Portfolio {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

/// Builder for [`Portfolio`].
#[derive(Clone, Debug, Default)]
pub struct PortfolioBuilder {
    positions: Vec<Position>,
}

impl PortfolioBuilder {
    /// Adds an option position.
    pub fn option(mut self, params: OptionParameters, quantity: f64) -> Self {
        self.positions.push(Position::option(params, quantity));
        self
    }

    /// Adds an underlying position.
    pub fn underlying(mut self, quantity: f64) -> Self {
        self.positions.push(Position::underlying(quantity));
        self
    }

    /// Adds an arbitrary position.
    pub fn position(mut self, position: Position) -> Self {
        self.positions.push(position);
        self
    }

    /// Builds the portfolio.
    pub fn build(self) -> Portfolio {
        Portfolio {
            positions: self.positions,
        }
    }
}
