//! Guarded arithmetic shared by the calculators.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Divides `numerator` by `denominator`, failing with `DivisionByZero` when the
/// denominator is zero and `Overflow` when the quotient does not fit a `Decimal`.
///
/// `name` identifies the denominator in the error.
///
/// # Examples
///
/// ```
/// use roi_engine::calculation::divide;
/// use rust_decimal::Decimal;
///
/// let rate = divide(Decimal::new(120_000, 0), Decimal::new(2000, 0), "work_hours").unwrap();
/// assert_eq!(rate, Decimal::new(60, 0));
///
/// assert!(divide(Decimal::ONE, Decimal::ZERO, "work_hours").is_err());
/// ```
pub fn divide(numerator: Decimal, denominator: Decimal, name: &str) -> EngineResult<Decimal> {
    if denominator.is_zero() {
        return Err(EngineError::division_by_zero(name));
    }
    numerator
        .checked_div(denominator)
        .ok_or_else(|| EngineError::overflow(format!("division by {}", name)))
}

/// Multiplies two values, failing with `Overflow` naming `quantity` when the
/// product does not fit a `Decimal`.
pub fn multiply(lhs: Decimal, rhs: Decimal, quantity: &str) -> EngineResult<Decimal> {
    lhs.checked_mul(rhs).ok_or_else(|| EngineError::overflow(quantity))
}

/// Adds two values, failing with `Overflow` naming `quantity`.
pub fn add(lhs: Decimal, rhs: Decimal, quantity: &str) -> EngineResult<Decimal> {
    lhs.checked_add(rhs).ok_or_else(|| EngineError::overflow(quantity))
}

/// Subtracts `rhs` from `lhs`, failing with `Overflow` naming `quantity`.
pub fn subtract(lhs: Decimal, rhs: Decimal, quantity: &str) -> EngineResult<Decimal> {
    lhs.checked_sub(rhs).ok_or_else(|| EngineError::overflow(quantity))
}

/// Returns `percent`% of `value`, i.e. `value * (percent / 100)`.
pub fn percent_of(value: Decimal, percent: Decimal, quantity: &str) -> EngineResult<Decimal> {
    multiply(value, percent / Decimal::ONE_HUNDRED, quantity)
}

/// Expresses `net` as a percentage of `cost`: `net / cost * 100`.
pub fn return_on(net: Decimal, cost: Decimal, name: &str) -> EngineResult<Decimal> {
    multiply(divide(net, cost, name)?, Decimal::ONE_HUNDRED, "roi")
}
