#[derive(Debug)]
/// Represents all errors that can occur while applying a named operation or
/// evaluating an expression tree.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The operation alias did not match any known operation.
    UnknownOperation {
        /// The alias that failed to resolve.
        name: String,
    },
    /// A bitwise or summation operation received a fractional operand.
    NonIntegerOperand {
        /// The offending operand value.
        value: f64,
    },
    /// Attempted division by zero through the strict `divide` operation.
    DivisionByZero,
    /// A numeric prompt received text that is not a valid number.
    InvalidNumber {
        /// The original input text.
        text: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Undefined variable '{name}'.")
            },
            Self::UnknownOperation { name } => write!(f, "Unknown operation: {name}"),
            Self::NonIntegerOperand { value } => write!(f,
                                                        "Bitwise and sigma operations require integer values, but got {value}."),
            Self::DivisionByZero => write!(f, "Error: division by zero"),
            Self::InvalidNumber { text } => write!(f, "Invalid number: '{text}'"),
        }
    }
}

impl std::error::Error for RuntimeError {}
