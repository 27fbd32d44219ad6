/// Binary operator evaluation.
///
/// Arithmetic on two numbers: the four basic operations, the remainder and
/// exponentiation.
pub mod binary;

/// Unary operator evaluation.
///
/// Implements `sqrt`, the only operator taking a single operand.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the tree walk, the runtime context that owns the symbol table and
/// the per-line buffers, and the end-to-end `eval_line` entry point.
pub mod core;

/// Scratch storage for intermediate results.
pub mod pool;
