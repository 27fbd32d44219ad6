use crate::interpreter::{
    evaluator::core::Context,
    value::core::{Number, PRECISION, ROUNDING},
};

impl Context {
    /// Computes the square root of a value.
    ///
    /// A negative argument has no real root and gives NaN; negative zero is
    /// returned unchanged.
    ///
    /// # Example
    /// ```
    /// use arbcalc::interpreter::{evaluator::core::Context, value::core::Number};
    ///
    /// assert_eq!(Context::eval_sqrt(&Number::from_i64(9)).to_string(), "3.000000000");
    /// assert!(Context::eval_sqrt(&Number::from_i64(-4)).is_nan());
    /// ```
    #[must_use]
    pub fn eval_sqrt(value: &Number) -> Number {
        if value.is_negative() && !value.is_zero() {
            tracing::warn!("square root of a negative number");
            return Number::nan();
        }
        Number::from(value.as_big_float().sqrt(PRECISION, ROUNDING))
    }
}
