//! The `mdo!` macro for do-notation over any monad.

/// Sequential monadic composition written as a block.
///
/// Each `name <= computation;` step binds the inner value of a
/// computation via [`Monad::flat_map`](crate::typeclass::Monad), and
/// the final expression is the result of the whole block. Because
/// every step goes through `flat_map`, the short-circuit semantics of
/// the instance propagate automatically: a `None` or a `Left` anywhere
/// aborts the rest of the block.
///
/// # Syntax
///
/// - `name <= computation;` - bind the inner value
/// - `(a, b) <= computation;` - bind through a tuple pattern
/// - `_ <= computation;` - sequence, discarding the value
/// - `let name = expression;` - bind a plain value
/// - a trailing monadic expression produces the block's result
///
/// # Examples
///
/// ```rust
/// use preludium::mdo;
///
/// let result = mdo! {
///     a <= Some(1);
///     b <= Some(2);
///     let sum = a + b;
///     Some(sum * 10)
/// };
/// assert_eq!(result, Some(30));
///
/// let aborted = mdo! {
///     a <= Some(1);
///     _ <= None::<i32>;
///     Some(a)
/// };
/// assert_eq!(aborted, None);
/// ```
///
/// Over `Vec`, binds enumerate every combination, like a comprehension:
///
/// ```rust
/// use preludium::mdo;
///
/// let pairs = mdo! {
///     x <= vec![1, 2];
///     y <= vec![10, 20];
///     vec![x + y]
/// };
/// assert_eq!(pairs, vec![11, 21, 12, 22]);
/// ```
#[macro_export]
macro_rules! mdo {
    // Final expression: the result of the block
    ($monad:expr) => {
        $monad
    };

    // Plain value binding
    (let $binding:ident = $value:expr ; $($rest:tt)+) => {{
        let $binding = $value;
        $crate::mdo!($($rest)+)
    }};

    // Discarding bind
    (_ <= $monad:expr ; $($rest:tt)+) => {
        $crate::typeclass::Monad::flat_map($monad, move |_| $crate::mdo!($($rest)+))
    };

    // Tuple-destructuring bind
    (($($binding:ident),+) <= $monad:expr ; $($rest:tt)+) => {
        $crate::typeclass::Monad::flat_map($monad, move |($($binding),+)| $crate::mdo!($($rest)+))
    };

    // Value bind
    ($binding:ident <= $monad:expr ; $($rest:tt)+) => {
        $crate::typeclass::Monad::flat_map($monad, move |$binding| $crate::mdo!($($rest)+))
    };
}
