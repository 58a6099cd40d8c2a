//! Benchmark validation of a pricer against closed-form reference prices.
//!
//! The reference set covers ATM, ITM, OTM, deep OTM and short-dated
//! European contracts. A case passes when the relative error is within
//! [`TOLERANCE_PCT`] percent.

use pricer_core::traits::OptionPricer;
use pricer_core::types::{ExerciseStyle, OptionParameters, OptionType, PricingError};

/// Maximum relative error, in percent, for a benchmark case to pass.
pub const TOLERANCE_PCT: f64 = 0.5;

/// One reference contract and its expected price.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BenchmarkCase {
    /// Display name.
    pub name: &'static str,
    /// Contract.
    pub params: OptionParameters,
    /// Reference price.
    pub expected: f64,
}

/// Outcome of pricing one benchmark case.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CaseResult {
    /// Case name.
    pub name: &'static str,
    /// Reference price.
    pub expected: f64,
    /// Price returned by the pricer.
    pub calculated: f64,
    /// `|calculated - expected| / expected` in percent.
    pub error_pct: f64,
    /// Whether `error_pct <= TOLERANCE_PCT`.
    pub passed: bool,
}

/// Summary over all benchmark cases.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationReport {
    /// Per-case results in benchmark order.
    pub results: Vec<CaseResult>,
    /// Largest error in percent.
    pub max_error_pct: f64,
    /// Mean error in percent.
    pub avg_error_pct: f64,
    /// Number of passing cases.
    pub passed: usize,
    /// Number of cases.
    pub total: usize,
}

impl ValidationReport {
    /// `true` when every case is within tolerance.
    pub fn target_met(&self) -> bool {
        self.max_error_pct <= TOLERANCE_PCT
    }
}

/// A named boolean check on a Greek.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SanityCheck {
    /// Check description.
    pub name: &'static str,
    /// Observed value.
    pub value: f64,
    /// Whether the check holds.
    pub passed: bool,
}

fn european(
    spot: f64,
    strike: f64,
    volatility: f64,
    rate: f64,
    maturity: f64,
    option_type: OptionType,
) -> Result<OptionParameters, PricingError> {
    OptionParameters::new(
        spot,
        strike,
        volatility,
        rate,
        maturity,
        option_type,
        ExerciseStyle::European,
    )
}

/// The reference contracts.
///
/// # Errors
/// Never fails for the built-in set; the `Result` comes from parameter
/// validation.
pub fn benchmark_cases() -> Result<Vec<BenchmarkCase>, PricingError> {
    Ok(vec![
        BenchmarkCase {
            name: "ATM European Call",
            params: european(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call)?,
            expected: 10.4506,
        },
        BenchmarkCase {
            name: "OTM European Put",
            params: european(100.0, 95.0, 0.2, 0.05, 1.0, OptionType::Put)?,
            expected: 3.7133,
        },
        BenchmarkCase {
            name: "ITM European Call",
            params: european(110.0, 100.0, 0.25, 0.04, 0.5, OptionType::Call)?,
            expected: 14.8152,
        },
        BenchmarkCase {
            name: "Deep OTM Put",
            params: european(100.0, 80.0, 0.3, 0.06, 2.0, OptionType::Put)?,
            expected: 4.1738,
        },
        BenchmarkCase {
            name: "Short-dated ATM Call",
            params: european(50.0, 50.0, 0.15, 0.03, 0.25, OptionType::Call)?,
            expected: 1.6843,
        },
    ])
}

/// Prices every benchmark case with `pricer` and summarises the errors.
///
/// # Errors
/// Propagates the first pricing error.
pub fn validate_pricing<P: OptionPricer + ?Sized>(
    pricer: &P,
) -> Result<ValidationReport, PricingError> {
    let results = benchmark_cases()?
        .into_iter()
        .map(|case| -> Result<CaseResult, PricingError> {
            let calculated = pricer.price(&case.params)?;
            let error_pct = ((calculated - case.expected) / case.expected).abs() * 100.0;
            Ok(CaseResult {
                name: case.name,
                expected: case.expected,
                calculated,
                error_pct,
                passed: error_pct <= TOLERANCE_PCT,
            })
        })
        .collect::<Result<Vec<_>, PricingError>>()?;

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    let max_error_pct = results.iter().map(|r| r.error_pct).fold(0.0, f64::max);
    let avg_error_pct = if total == 0 {
        0.0
    } else {
        results.iter().map(|r| r.error_pct).sum::<f64>() / total as f64
    };

    Ok(ValidationReport {
        results,
        max_error_pct,
        avg_error_pct,
        passed,
        total,
    })
}

/// Sign and range checks on the Greeks of the ATM European call
/// (S=K=100, σ=0.2, r=0.05, T=1).
///
/// # Errors
/// Propagates the pricing error if the Greeks cannot be computed.
pub fn greek_sanity_checks<P: OptionPricer + ?Sized>(
    pricer: &P,
) -> Result<Vec<SanityCheck>, PricingError> {
    let params = european(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call)?;
    let g = pricer.greeks(&params)?;

    Ok(vec![
        SanityCheck {
            name: "Delta in [0.4, 0.7]",
            value: g.delta,
            passed: (0.4..=0.7).contains(&g.delta),
        },
        SanityCheck {
            name: "Gamma positive",
            value: g.gamma,
            passed: g.gamma > 0.0,
        },
        SanityCheck {
            name: "Vega positive",
            value: g.vega,
            passed: g.vega > 0.0,
        },
        SanityCheck {
            name: "Theta negative",
            value: g.theta,
            passed: g.theta < 0.0,
        },
        SanityCheck {
            name: "Rho positive",
            value: g.rho,
            passed: g.rho > 0.0,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::BlackScholes;
    use crate::engine::PricingEngine;
    use pricer_core::types::Greeks;

    #[test]
    fn test_engine_passes_every_case() {
        let report = validate_pricing(&PricingEngine::default()).unwrap();
        assert_eq!(report.total, 5);
        assert_eq!(report.passed, 5, "{:#?}", report.results);
        assert!(report.target_met());
        assert!(report.max_error_pct < 0.01);
        assert!(report.avg_error_pct <= report.max_error_pct);
    }

    #[test]
    fn test_failing_pricer_is_reported() {
        struct Biased;
        impl OptionPricer for Biased {
            fn price(&self, params: &OptionParameters) -> Result<f64, PricingError> {
                Ok(BlackScholes.price(params)? * 1.01)
            }
            fn greeks(&self, params: &OptionParameters) -> Result<Greeks, PricingError> {
                BlackScholes.greeks(params)
            }
        }

        let report = validate_pricing(&Biased).unwrap();
        assert_eq!(report.passed, 0);
        assert!(!report.target_met());
        assert!((report.max_error_pct - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_sanity_checks_pass_for_engine() {
        let checks = greek_sanity_checks(&PricingEngine::default()).unwrap();
        assert_eq!(checks.len(), 5);
        assert!(checks.iter().all(|c| c.passed), "{:#?}", checks);
    }

    #[test]
    fn test_cases_are_european() {
        for case in benchmark_cases().unwrap() {
            assert!(case.params.exercise_style().is_european());
        }
    }
}
