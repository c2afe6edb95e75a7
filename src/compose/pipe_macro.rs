//! The `pipe!` macro for left-to-right value application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`: the value flows
/// through the transformations in the order they are written.
///
/// # Syntax
///
/// - `pipe!(x)` - returns `x` unchanged
/// - `pipe!(x, f)` - returns `f(x)`
/// - `pipe!(x, f, g, ...)` - returns `...g(f(x))`
///
/// Each function is called exactly once, so [`FnOnce`] suffices; steps
/// may consume their captured environment.
///
/// # Examples
///
/// ```rust
/// use preludium::pipe;
///
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// let result = pipe!(5, double, add_one);
/// assert_eq!(result, 11);
/// ```
///
/// Steps may change the type along the way:
///
/// ```rust
/// use preludium::pipe;
///
/// fn render(x: i32) -> String { x.to_string() }
/// fn length(s: String) -> usize { s.len() }
///
/// assert_eq!(pipe!(12345, render, length), 5);
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr) => {
        $value
    };

    // Single function: apply it
    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    // Multiple functions: apply left to right recursively
    ($value:expr, $function:expr, $($remaining:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining),+)
    };
}
