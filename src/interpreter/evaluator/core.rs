use std::collections::HashMap;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the variable environment for an interactive session.
///
/// The environment maps variable names to their last-assigned values. It is
/// created empty at session start, grows through assignment statements, is
/// never pruned, and is the only state that outlives a single evaluation
/// call.
///
/// ## Usage
///
/// An `Environment` is created once and passed `&mut` into each
/// [`crate::evaluate`] call, so assignments made by earlier calls stay
/// visible to later ones.
pub struct Environment {
    vars: HashMap<String, f64>,
}

#[allow(clippy::new_without_default)]
impl Environment {
    /// Creates a new, empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self { vars: HashMap::new() }
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Binds `name` to `value`, overwriting any prior binding.
    pub fn assign(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Returns the number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns `true` when no variables are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The
    /// evaluator walks the tree bottom-up and dispatches on the expression
    /// variant: literals, variables, unary and binary operations.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Errors
    /// `UndefinedVariable` if a referenced variable has no binding.
    ///
    /// # Example
    /// ```
    /// use tally::{ast::Expr, interpreter::evaluator::core::Environment};
    ///
    /// let mut env = Environment::new();
    /// env.assign("x", 4.0);
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 1, };
    /// assert_eq!(env.eval(&expr).unwrap(), 4.0);
    /// ```
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, .. } => {
                let value = self.eval(expr)?;
                Ok(Self::eval_unary(*op, value))
            },
            Expr::BinaryOp { left, op, right, .. } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Ok(Self::eval_binary(*op, left, right))
            },
        }
    }

    /// Evaluates a single statement.
    ///
    /// An assignment evaluates its right-hand side, stores the result under
    /// the target name (overwriting any prior value), and yields the stored
    /// value. An expression statement yields its computed value.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// The statement's result value.
    ///
    /// # Errors
    /// Propagates any evaluation error from the contained expression.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<f64> {
        match statement {
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.assign(name, value);
                Ok(value)
            },
            Statement::Expression { expr, .. } => self.eval(expr),
        }
    }

    /// Resolves a variable reference against the environment.
    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<f64> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }
}
