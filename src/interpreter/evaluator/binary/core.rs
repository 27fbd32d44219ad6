use astro_float::Consts;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::TokenKind,
        value::core::{Number, PRECISION, ROUNDING},
    },
};

impl Context {
    /// Evaluates a binary arithmetic operation.
    ///
    /// Addition, subtraction and multiplication round to nearest. Division and
    /// remainder by an exact zero give NaN. The remainder is truncated, so it
    /// takes the sign of the dividend. Power is delegated to
    /// [`Context::eval_pow`]. NaN operands propagate.
    ///
    /// # Parameters
    /// - `kind`: The operator token kind.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `consts`: Constants cache used by exponentiation.
    ///
    /// # Returns
    /// The result, or [`EvalError::UnsupportedNode`] if `kind` is not a binary
    /// arithmetic operator.
    ///
    /// # Example
    /// ```
    /// use arbcalc::interpreter::{evaluator::core::Context, lexer::TokenKind, value::core::Number};
    /// use astro_float::Consts;
    ///
    /// let mut consts = Consts::new().unwrap();
    /// let seven = Number::from_i64(7);
    /// let three = Number::from_i64(-3);
    ///
    /// let rem = Context::eval_binary(TokenKind::Modulo, &seven, &three, &mut consts).unwrap();
    /// assert_eq!(rem, Number::from_i64(1));
    ///
    /// let zero = Number::zero();
    /// let div = Context::eval_binary(TokenKind::Divide, &seven, &zero, &mut consts).unwrap();
    /// assert!(div.is_nan());
    /// ```
    pub fn eval_binary(kind: TokenKind,
                       left: &Number,
                       right: &Number,
                       consts: &mut Consts)
                       -> EvalResult<Number> {
        let (a, b) = (left.as_big_float(), right.as_big_float());
        let result = match kind {
            TokenKind::Add => a.add(b, PRECISION, ROUNDING),
            TokenKind::Sub => a.sub(b, PRECISION, ROUNDING),
            TokenKind::Multiply => a.mul(b, PRECISION, ROUNDING),
            TokenKind::Divide | TokenKind::Modulo if right.is_zero() => {
                tracing::warn!(operator = %kind, "division by zero");
                return Ok(Number::nan());
            },
            TokenKind::Divide => a.div(b, PRECISION, ROUNDING),
            TokenKind::Modulo => a.rem(b),
            TokenKind::Power => return Ok(Self::eval_pow(left, right, consts)),
            _ => return Err(EvalError::UnsupportedNode { kind }),
        };
        Ok(Number::from(result))
    }
}
