//! Trait for option pricing models.

use crate::types::{Greeks, OptionParameters, PricingError};

/// A model that values a single option contract and its sensitivities.
///
/// Both methods are pure: the same parameters always produce the same
/// result and the pricer holds no mutable state, so implementors are
/// expected to be `Send + Sync` and shareable across worker threads.
///
/// # Examples
/// ```
/// use pricer_core::traits::OptionPricer;
/// use pricer_core::types::{Greeks, OptionParameters, OptionType, ExerciseStyle, PricingError};
///
/// struct Intrinsic;
///
/// impl OptionPricer for Intrinsic {
///     fn price(&self, params: &OptionParameters) -> Result<f64, PricingError> {
///         Ok(params.intrinsic())
///     }
///
///     fn greeks(&self, _params: &OptionParameters) -> Result<Greeks, PricingError> {
///         Ok(Greeks::zero())
///     }
/// }
///
/// let params = OptionParameters::new(110.0, 100.0, 0.2, 0.0, 1.0, OptionType::Call, ExerciseStyle::European).unwrap();
/// assert_eq!(Intrinsic.price(&params).unwrap(), 10.0);
/// ```
pub trait OptionPricer {
    /// Present value of one unit of the option.
    ///
    /// # Errors
    /// `PricingError` when the parameters fall outside the model's domain.
    fn price(&self, params: &OptionParameters) -> Result<f64, PricingError>;

    /// Greeks of one unit of the option, in [`Greeks`] units.
    ///
    /// # Errors
    /// `PricingError` when the parameters fall outside the model's domain.
    fn greeks(&self, params: &OptionParameters) -> Result<Greeks, PricingError>;
}
