use crate::{ast::BinaryOperator, interpreter::evaluator::core::Environment};

impl Environment {
    /// Evaluates a binary operation on two values.
    ///
    /// `+`, `-` and `*` compute directly on `f64`. Division performs no
    /// zero check: dividing by zero yields IEEE-754 infinity or NaN, unlike
    /// the strict `divide` operation in [`crate::ops`], which reports an
    /// error. `**` uses [`f64::powf`]. The bitwise operators truncate both
    /// operands to `i64` without validating integrality, again looser than
    /// their dispatcher counterparts. Both relaxations are deliberate and
    /// must stay: expression evaluation is the permissive path.
    ///
    /// # Parameters
    /// - `op`: The binary operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Example
    /// ```
    /// use tally::{ast::BinaryOperator, interpreter::evaluator::core::Environment};
    ///
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Pow, 2.0, 10.0),
    ///            1024.0);
    /// // Bitwise operands truncate silently.
    /// assert_eq!(Environment::eval_binary(BinaryOperator::BitAnd, 2.5, 3.0),
    ///            2.0);
    /// // Division by zero follows IEEE-754 semantics here.
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Div, 1.0, 0.0),
    ///            f64::INFINITY);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    #[allow(clippy::cast_possible_truncation)]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        use BinaryOperator::{Add, BitAnd, BitOr, BitXor, Div, Mul, Pow, Sub};

        match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => left / right,
            Pow => left.powf(right),
            BitAnd => ((left as i64) & (right as i64)) as f64,
            BitOr => ((left as i64) | (right as i64)) as f64,
            BitXor => ((left as i64) ^ (right as i64)) as f64,
        }
    }
}
