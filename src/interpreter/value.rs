/// The arbitrary-precision number type.
///
/// Defines [`core::Number`], a 256-bit binary floating-point value with NaN and
/// infinities, and the precision and rounding constants every operation uses.
pub mod core;
/// Human friendly rendering of numbers.
///
/// Chooses between fixed and scientific notation and limits the number of
/// printed digits. Used by [`core::Number`]'s `Display` implementation.
pub mod format;
