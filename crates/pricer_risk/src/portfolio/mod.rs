//! Positions and portfolios.
//!
//! - [`Position`]: signed quantity of an option or the underlying, with a
//!   construction-time hedge flag
//! - [`Portfolio`]: ordered, immutable collection of positions

mod book;
mod position;

pub use book::{Portfolio, PortfolioBuilder};
pub use position::{Instrument, Position};
