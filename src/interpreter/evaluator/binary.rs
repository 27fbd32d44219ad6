/// Dispatch and the basic arithmetic operators.
pub mod core;
/// Exponentiation, including negative bases.
pub mod power;
