use crate::{error::RuntimeError, util::is_integral};

/// A named binary operation from the closed dispatcher set.
///
/// Each variant is reachable through one or more case-sensitive string
/// aliases; see [`Operation::resolve`]. The alias table deliberately differs
/// from the expression grammar: here `^` resolves to [`Operation::Power`]
/// and bitwise XOR is spelled `xor` or `^^`, whereas inside expressions `^`
/// is XOR and `**` is power.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operation {
    /// `add` / `+`
    Add,
    /// `subtract` / `-`
    Subtract,
    /// `multiply` / `*`
    Multiply,
    /// `divide` / `/`
    Divide,
    /// `power` / `pow` / `^` / `**`
    Power,
    /// `and` / `&`
    BitAnd,
    /// `or` / `|`
    BitOr,
    /// `xor` / `^^`
    BitXor,
    /// `sigma` / `sum` / `Σ`
    Sigma,
}

impl Operation {
    /// Resolves an operation alias to its [`Operation`] variant.
    ///
    /// Matching is case-sensitive; unrecognized aliases return `None` so
    /// the caller can fall through to expression evaluation.
    ///
    /// # Parameters
    /// - `alias`: The operation name or symbol as typed by the user.
    ///
    /// # Returns
    /// `Some(Operation)` if the alias is known, otherwise `None`.
    ///
    /// # Example
    /// ```
    /// use tally::ops::Operation;
    ///
    /// assert_eq!(Operation::resolve("pow"), Some(Operation::Power));
    /// assert_eq!(Operation::resolve("^"), Some(Operation::Power));
    /// assert_eq!(Operation::resolve("^^"), Some(Operation::BitXor));
    /// assert_eq!(Operation::resolve("ADD"), None);
    /// ```
    #[must_use]
    pub fn resolve(alias: &str) -> Option<Self> {
        match alias {
            "add" | "+" => Some(Self::Add),
            "subtract" | "-" => Some(Self::Subtract),
            "multiply" | "*" => Some(Self::Multiply),
            "divide" | "/" => Some(Self::Divide),
            "power" | "pow" | "^" | "**" => Some(Self::Power),
            "and" | "&" => Some(Self::BitAnd),
            "or" | "|" => Some(Self::BitOr),
            "xor" | "^^" => Some(Self::BitXor),
            "sigma" | "sum" | "Σ" => Some(Self::Sigma),
            _ => None,
        }
    }

    /// Applies the operation to two operands.
    ///
    /// Arithmetic variants compute directly on `f64`; `Power` uses
    /// [`f64::powf`] with full IEEE-754 semantics. `Divide` checks the
    /// divisor explicitly. The bitwise variants and `Sigma` first validate
    /// that both operands are integral, then truncate them to `i64` — the
    /// one sanctioned truncation point on this path.
    ///
    /// # Parameters
    /// - `a`: Left operand.
    /// - `b`: Right operand.
    ///
    /// # Returns
    /// The computed value as `f64`.
    ///
    /// # Errors
    /// - `DivisionByZero` for `Divide` when `b == 0`.
    /// - `NonIntegerOperand` for bitwise/sigma variants when either operand
    ///   has a fractional part.
    #[allow(clippy::cast_precision_loss)]
    #[allow(clippy::cast_possible_truncation)]
    pub fn apply(self, a: f64, b: f64) -> Result<f64, RuntimeError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide => {
                if b == 0.0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                Ok(a / b)
            },
            Self::Power => Ok(a.powf(b)),
            Self::BitAnd => {
                let (x, y) = (require_integral(a)?, require_integral(b)?);
                Ok((x & y) as f64)
            },
            Self::BitOr => {
                let (x, y) = (require_integral(a)?, require_integral(b)?);
                Ok((x | y) as f64)
            },
            Self::BitXor => {
                let (x, y) = (require_integral(a)?, require_integral(b)?);
                Ok((x ^ y) as f64)
            },
            Self::Sigma => {
                let (x, y) = (require_integral(a)?, require_integral(b)?);
                Ok(sigma(x, y))
            },
        }
    }
}

/// Resolves an alias and applies the operation to two operands.
///
/// This is the dispatcher's single entry point: a pure function of its
/// three inputs with no side effects.
///
/// # Errors
/// - `UnknownOperation` if the alias does not resolve.
/// - Any error produced by [`Operation::apply`].
///
/// # Example
/// ```
/// use tally::ops::apply;
///
/// assert_eq!(apply("pow", 2.0, 10.0).unwrap(), 1024.0);
/// assert_eq!(apply("&", 6.0, 3.0).unwrap(), 2.0);
/// assert_eq!(apply("sigma", 1.0, 5.0).unwrap(), 15.0);
/// assert!(apply("frobnicate", 1.0, 2.0).is_err());
/// ```
pub fn apply(alias: &str, a: f64, b: f64) -> Result<f64, RuntimeError> {
    let operation =
        Operation::resolve(alias).ok_or_else(|| RuntimeError::UnknownOperation { name:
                                                                                     alias.to_string(), })?;
    operation.apply(a, b)
}

/// Validates that `value` has no fractional part and truncates it to `i64`.
#[allow(clippy::cast_possible_truncation)]
fn require_integral(value: f64) -> Result<i64, RuntimeError> {
    if !is_integral(value) {
        return Err(RuntimeError::NonIntegerOperand { value });
    }
    Ok(value as i64)
}

/// Computes the inclusive sum of all integers between `a` and `b`,
/// whichever order they arrive in. Uses the closed-form arithmetic series
/// in `i128` so the intermediate product cannot overflow.
#[allow(clippy::cast_precision_loss)]
fn sigma(a: i64, b: i64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let count = i128::from(hi) - i128::from(lo) + 1;
    let total = (i128::from(lo) + i128::from(hi)) * count / 2;
    total as f64
}
