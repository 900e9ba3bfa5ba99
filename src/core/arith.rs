//! Pure arithmetic helpers.
//!
//! All three functions are total over their operand type. Overflow behaves the
//! way the host type does: fixed-width integers panic in debug builds and wrap
//! in release builds, floats round and saturate to infinity.

use std::ops::{Add, Mul, Sub};

/// Subtract `b` from `a`.
pub fn difference<T>(a: T, b: T) -> T
where
    T: Sub<Output = T>,
{
    a - b
}

/// Add two numbers.
pub fn sum<T>(a: T, b: T) -> T
where
    T: Add<Output = T>,
{
    a + b
}

/// Multiply two numbers.
pub fn product<T>(x: T, y: T) -> T
where
    T: Mul<Output = T>,
{
    x * y
}
