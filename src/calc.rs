//! Arithmetic helpers used by the test suite.

/// Sum of two integers.
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

/// Product of two integers.
pub fn multiply(a: i64, b: i64) -> i64 {
    a * b
}
