/// Asserts that a numerical value lies in the closed interval `[a,b]`, panicking
/// with a message that names the offending parameter if not
///
/// ### Example
/// ```ignore
/// let alpha = 0.5;
/// assert_interval!(alpha, 0.0, 1.0);
/// ```
#[macro_export]
macro_rules! assert_interval {
    ($var:expr, $a:expr, $b:expr) => {
        assert!(
            $var >= $a && $var <= $b,
            "Invalid value for `{}`. Must be in the interval [{}, {}].",
            stringify!($var),
            $a,
            $b,
        );
    };
}
