//! Option contract parameters.
//!
//! [`OptionParameters`] is the immutable value object every pricer consumes.
//! Fields are private and validated once at construction; a changed input
//! (a finite-difference bump, a scenario re-mark) always produces a new
//! value through one of the `with_*` methods.

use std::fmt;

use super::error::PricingError;

/// Call or put payoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Returns `true` for calls.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns `true` for puts.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Immediate-exercise value at the given asset price.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionType;
    ///
    /// assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
    /// assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl std::str::FromStr for OptionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(format!("Unknown option type: {}. Expected call or put", other)),
        }
    }
}

/// When the holder may exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExerciseStyle {
    /// Exercisable at maturity only.
    #[default]
    European,
    /// Exercisable at any time up to maturity.
    American,
}

impl ExerciseStyle {
    /// Returns `true` for European exercise.
    #[inline]
    pub fn is_european(&self) -> bool {
        matches!(self, ExerciseStyle::European)
    }

    /// Returns `true` for American exercise.
    #[inline]
    pub fn is_american(&self) -> bool {
        matches!(self, ExerciseStyle::American)
    }
}

impl fmt::Display for ExerciseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseStyle::European => write!(f, "European"),
            ExerciseStyle::American => write!(f, "American"),
        }
    }
}

impl std::str::FromStr for ExerciseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "european" | "eu" => Ok(ExerciseStyle::European),
            "american" | "am" => Ok(ExerciseStyle::American),
            other => Err(format!(
                "Unknown exercise style: {}. Expected european or american",
                other
            )),
        }
    }
}

/// Pricing inputs for a single vanilla option contract.
///
/// # Invariants
/// - `spot > 0`, `strike > 0`
/// - `volatility >= 0`, `maturity >= 0`
/// - all numeric fields finite
///
/// The analytic model additionally requires strictly positive volatility and
/// maturity; that check belongs to the model, not to this type.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionParameters, OptionType, ExerciseStyle};
///
/// let params = OptionParameters::new(100.0, 100.0, 0.2, 0.05, 1.0, OptionType::Call, ExerciseStyle::European).unwrap();
/// let bumped = params.with_spot(101.0).unwrap();
///
/// assert_eq!(params.spot(), 100.0);
/// assert_eq!(bumped.spot(), 101.0);
/// assert_eq!(bumped.strike(), params.strike());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionParameters {
    spot: f64,
    strike: f64,
    volatility: f64,
    rate: f64,
    maturity: f64,
    option_type: OptionType,
    exercise_style: ExerciseStyle,
}

impl OptionParameters {
    /// Creates validated option parameters.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first field out of range.
    pub fn new(
        spot: f64,
        strike: f64,
        volatility: f64,
        rate: f64,
        maturity: f64,
        option_type: OptionType,
        exercise_style: ExerciseStyle,
    ) -> Result<Self, PricingError> {
        let params = Self {
            spot,
            strike,
            volatility,
            rate,
            maturity,
            option_type,
            exercise_style,
        };
        params.validate()?;
        Ok(params)
    }

    /// Starts a builder with European exercise and a call payoff.
    pub fn builder() -> OptionParametersBuilder {
        OptionParametersBuilder::default()
    }

    fn validate(&self) -> Result<(), PricingError> {
        if !(self.spot.is_finite() && self.spot > 0.0) {
            return Err(PricingError::invalid("spot", self.spot, "must be positive and finite"));
        }
        if !(self.strike.is_finite() && self.strike > 0.0) {
            return Err(PricingError::invalid(
                "strike",
                self.strike,
                "must be positive and finite",
            ));
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(PricingError::invalid(
                "volatility",
                self.volatility,
                "must be non-negative and finite",
            ));
        }
        if !self.rate.is_finite() {
            return Err(PricingError::invalid("rate", self.rate, "must be finite"));
        }
        if !(self.maturity.is_finite() && self.maturity >= 0.0) {
            return Err(PricingError::invalid(
                "maturity",
                self.maturity,
                "must be non-negative and finite",
            ));
        }
        Ok(())
    }

    /// Spot price of the underlying (S).
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike price (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Annualised volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Continuously compounded risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Time to maturity in years (T).
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Payoff type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Exercise style.
    #[inline]
    pub fn exercise_style(&self) -> ExerciseStyle {
        self.exercise_style
    }

    /// Returns `true` for calls.
    #[inline]
    pub fn is_call(&self) -> bool {
        self.option_type.is_call()
    }

    /// Immediate-exercise value at the current spot.
    #[inline]
    pub fn intrinsic(&self) -> f64 {
        self.option_type.intrinsic(self.spot, self.strike)
    }

    /// Copy with a new spot.
    pub fn with_spot(&self, spot: f64) -> Result<Self, PricingError> {
        Self { spot, ..*self }.validated()
    }

    /// Copy with a new strike.
    pub fn with_strike(&self, strike: f64) -> Result<Self, PricingError> {
        Self { strike, ..*self }.validated()
    }

    /// Copy with a new volatility.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, PricingError> {
        Self { volatility, ..*self }.validated()
    }

    /// Copy with a new rate.
    pub fn with_rate(&self, rate: f64) -> Result<Self, PricingError> {
        Self { rate, ..*self }.validated()
    }

    /// Copy with a new maturity.
    pub fn with_maturity(&self, maturity: f64) -> Result<Self, PricingError> {
        Self { maturity, ..*self }.validated()
    }

    /// Copy with a different exercise style.
    ///
    /// Infallible: the numeric fields are already validated.
    pub fn with_exercise_style(&self, exercise_style: ExerciseStyle) -> Self {
        Self {
            exercise_style,
            ..*self
        }
    }

    /// Copy with a different payoff type.
    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }

    fn validated(self) -> Result<Self, PricingError> {
        self.validate()?;
        Ok(self)
    }
}

/// Builder for [`OptionParameters`].
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionParameters, OptionType, ExerciseStyle};
///
/// let put = OptionParameters::builder()
///     .spot(100.0)
///     .strike(95.0)
///     .volatility(0.2)
///     .rate(0.05)
///     .maturity(1.0)
///     .option_type(OptionType::Put)
///     .exercise_style(ExerciseStyle::American)
///     .build()
///     .unwrap();
///
/// assert!(put.exercise_style().is_american());
/// ```
#[derive(Debug, Clone)]
pub struct OptionParametersBuilder {
    spot: Option<f64>,
    strike: Option<f64>,
    volatility: Option<f64>,
    rate: f64,
    maturity: Option<f64>,
    option_type: OptionType,
    exercise_style: ExerciseStyle,
}

impl Default for OptionParametersBuilder {
    fn default() -> Self {
        Self {
            spot: None,
            strike: None,
            volatility: None,
            rate: 0.0,
            maturity: None,
            option_type: OptionType::Call,
            exercise_style: ExerciseStyle::European,
        }
    }
}

impl OptionParametersBuilder {
    /// Sets the spot price.
    #[inline]
    pub fn spot(mut self, spot: f64) -> Self {
        self.spot = Some(spot);
        self
    }

    /// Sets the strike price.
    #[inline]
    pub fn strike(mut self, strike: f64) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the volatility.
    #[inline]
    pub fn volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the risk-free rate (defaults to zero).
    #[inline]
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Sets the time to maturity in years.
    #[inline]
    pub fn maturity(mut self, maturity: f64) -> Self {
        self.maturity = Some(maturity);
        self
    }

    /// Sets the payoff type.
    #[inline]
    pub fn option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Sets the exercise style.
    #[inline]
    pub fn exercise_style(mut self, exercise_style: ExerciseStyle) -> Self {
        self.exercise_style = exercise_style;
        self
    }

    /// Builds and validates the parameters.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` for a missing or out-of-range field.
    pub fn build(self) -> Result<OptionParameters, PricingError> {
        let spot = self
            .spot
            .ok_or_else(|| PricingError::invalid("spot", f64::NAN, "is required"))?;
        let strike = self
            .strike
            .ok_or_else(|| PricingError::invalid("strike", f64::NAN, "is required"))?;
        let volatility = self
            .volatility
            .ok_or_else(|| PricingError::invalid("volatility", f64::NAN, "is required"))?;
        let maturity = self
            .maturity
            .ok_or_else(|| PricingError::invalid("maturity", f64::NAN, "is required"))?;

        OptionParameters::new(
            spot,
            strike,
            volatility,
            self.rate,
            maturity,
            self.option_type,
            self.exercise_style,
        )
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for OptionParameters {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            spot: f64,
            strike: f64,
            volatility: f64,
            #[serde(default)]
            rate: f64,
            maturity: f64,
            option_type: OptionType,
            #[serde(default)]
            exercise_style: ExerciseStyle,
        }

        let raw = Raw::deserialize(deserializer)?;
        OptionParameters::new(
            raw.spot,
            raw.strike,
            raw.volatility,
            raw.rate,
            raw.maturity,
            raw.option_type,
            raw.exercise_style,
        )
        .map_err(serde::de::Error::custom)
    }
}
