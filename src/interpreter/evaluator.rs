/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// arithmetic, exponentiation, and the permissive bitwise operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the unary sign operators: negation and identity.
pub mod unary;

/// Core evaluation logic and environment management.
///
/// Contains the main evaluation engine, the variable environment, and error
/// propagation.
pub mod core;
