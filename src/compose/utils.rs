//! Basic combinators for function composition.

/// Returns the value unchanged.
///
/// The unit of function composition: `flow!(identity, f)` and
/// `flow!(f, identity)` both behave as `f`.
///
/// # Examples
///
/// ```rust
/// use preludium::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Builds a function that ignores its input and always returns the
/// given value.
///
/// # Examples
///
/// ```rust
/// use preludium::compose::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// `flip(f)(a, b) == f(b, a)`, and `flip(flip(f))` behaves as `f`.
///
/// # Examples
///
/// ```rust
/// use preludium::compose::flip;
///
/// let subtract = |a: i32, b: i32| a - b;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |b, a| function(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_returns_its_argument() {
        assert_eq!(identity(7), 7);
        assert_eq!(identity(vec![1]), vec![1]);
    }

    #[test]
    fn constant_ignores_its_input() {
        let always = constant::<_, &str>(5);
        assert_eq!(always("anything"), 5);
        assert_eq!(always("else"), 5);
    }

    #[test]
    fn flip_swaps_arguments() {
        let divide = |a: f64, b: f64| a / b;
        assert_eq!(flip(divide)(2.0, 10.0), 5.0);
    }
}
