/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers the full restricted grammar: numeric literals, variable
/// references, unary sign operators, and binary arithmetic/bitwise
/// operations. Each variant carries the source line it came from so that
/// evaluation errors can point back at the offending input. Trees are
/// built once per input, never mutated, and discarded after evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal value.
    Literal {
        /// The constant value.
        value: f64,
        /// Line number in the source text.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source text.
        line: usize,
    },
    /// A unary operation (`-x` or `+x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source text.
        line: usize,
    },
    /// A binary operation (addition, bitwise AND, exponentiation, ...).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source text.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    ///
    /// ## Example
    /// ```
    /// use tally::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. } => *line,
        }
    }
}

/// Represents a top-level statement.
///
/// Statements are the units parsed from input lines: either a single-target
/// assignment or a bare expression evaluated for its result.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source text.
        line:  usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source text.
        line: usize,
    },
}

/// Represents a binary operator inside an expression.
///
/// Note the operator split with the named-operation alias table in
/// [`crate::ops`]: inside expressions `**` is exponentiation and `^` is
/// bitwise XOR, while the dispatcher resolves `^` to power and `^^` to XOR.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`**`)
    Pow,
    /// Bitwise AND (`&`)
    BitAnd,
    /// Bitwise OR (`|`)
    BitOr,
    /// Bitwise XOR (`^`)
    BitXor,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Identity sign (e.g. `+x`).
    Plus,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, BitAnd, BitOr, BitXor, Div, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "**",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Plus => "+",
        };
        write!(f, "{operator}")
    }
}
