/// Returns `true` when `value` is a whole number.
///
/// Non-finite values are not integral: `fract()` on an infinity or NaN is
/// NaN, which compares unequal to zero.
///
/// ## Example
/// ```
/// use tally::util::is_integral;
///
/// assert!(is_integral(4.0));
/// assert!(is_integral(-7.0));
/// assert!(!is_integral(2.5));
/// assert!(!is_integral(f64::INFINITY));
/// ```
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.fract() == 0.0
}

/// Formats a result value for display.
///
/// A finite value with zero fractional part prints as an integer literal;
/// everything else prints in its full floating-point representation.
///
/// ## Example
/// ```
/// use tally::util::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(-3.0), "-3");
/// assert_eq!(format_number(2.5), "2.5");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_number(value: f64) -> String {
    if is_integral(value) && value >= i64::MIN as f64 && value <= i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
