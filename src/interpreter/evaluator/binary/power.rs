use astro_float::{BigFloat, Consts};

use crate::interpreter::{
    evaluator::core::Context,
    value::core::{Number, PRECISION, ROUNDING},
};

impl Context {
    /// Evaluates `base ^ exponent`.
    ///
    /// Non-integer exponents are allowed for non-negative bases. A negative
    /// base is raised to `|base| ^ exponent` and negated for odd integer
    /// exponents; a negative base with a fractional exponent has no real
    /// result and gives NaN.
    ///
    /// # Parameters
    /// - `base`: The base value.
    /// - `exponent`: The exponent value.
    /// - `consts`: Constants cache for the logarithm and exponential.
    ///
    /// # Example
    /// ```
    /// use arbcalc::interpreter::{evaluator::core::Context, value::core::Number};
    /// use astro_float::Consts;
    ///
    /// let mut consts = Consts::new().unwrap();
    /// let epsilon = Number::from(astro_float::BigFloat::from_f64(1e-30, 256));
    ///
    /// let cube = Context::eval_pow(&Number::from_i64(-2), &Number::from_i64(3), &mut consts);
    /// assert!(cube.is_close(&Number::from_i64(-8), &epsilon));
    ///
    /// let root = Context::eval_pow(&Number::from_i64(-2),
    ///                              &Number::from(astro_float::BigFloat::from_f64(0.5, 256)),
    ///                              &mut consts);
    /// assert!(root.is_nan());
    /// ```
    #[must_use]
    pub fn eval_pow(base: &Number, exponent: &Number, consts: &mut Consts) -> Number {
        let (b, e) = (base.as_big_float(), exponent.as_big_float());
        if !base.is_negative() || base.is_zero() {
            return Number::from(b.pow(e, PRECISION, ROUNDING, consts));
        }

        let one = BigFloat::from_i64(1, PRECISION);
        if !e.rem(&one).is_zero() {
            tracing::warn!("negative base raised to a non-integer power");
            return Number::nan();
        }

        let magnitude = b.abs().pow(e, PRECISION, ROUNDING, consts);
        let two = BigFloat::from_i64(2, PRECISION);
        if e.rem(&two).is_zero() {
            Number::from(magnitude)
        } else {
            let minus_one = BigFloat::from_i64(-1, PRECISION);
            Number::from(magnitude.mul(&minus_one, PRECISION, ROUNDING))
        }
    }
}
