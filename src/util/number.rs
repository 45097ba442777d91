//! Helpers for working with the decimal numbers used for wages and budgets.

/// Write a wage, budget or spend as a `Decimal` literal.
///
/// Hourly wages like `num!(22.5)`, junior wage ceilings and the expected
/// budgets in tests are all written this way, so the crate and its callers
/// never spell out `rust_decimal_macros` or go through a lossy float.
///
/// ```rust
/// use planning_core::num;
///
/// let wage = num!(22.5);
/// assert_eq!(wage * num!(8), num!(180));
/// ```
#[macro_export]
macro_rules! num {
    ($val:expr) => {
        rust_decimal_macros::dec!($val)
    }
}
