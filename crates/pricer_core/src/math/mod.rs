//! Numerical building blocks shared by the pricers.
//!
//! - `distributions`: Standard normal CDF and PDF

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
