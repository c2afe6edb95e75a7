//! The `flow!` macro for building left-to-right composed functions.

/// Composes functions left to right into a single closure.
///
/// `flow!(f, g, h)` builds `|x| h(g(f(x)))`: the same order as
/// [`pipe!`](crate::pipe), but producing a reusable function instead of
/// applying it to a value immediately. `flow!(f, g)(x)` equals
/// `pipe!(x, f, g)`.
///
/// # Examples
///
/// ```rust
/// use preludium::flow;
///
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// let transform = flow!(double, add_one);
/// assert_eq!(transform(5), 11);
/// assert_eq!(transform(10), 21);
/// ```
///
/// The composed closure can be handed to higher-order functions:
///
/// ```rust
/// use preludium::flow;
///
/// let render_length = flow!(|n: i32| n.to_string(), |s: String| s.len());
/// let lengths: Vec<usize> = vec![1, 22, 333].into_iter().map(render_length).collect();
/// assert_eq!(lengths, vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! flow {
    // Single function: the composition is the function itself
    ($function:expr $(,)?) => {
        $function
    };

    // Multiple functions: peel the first, compose the rest
    ($first:expr, $($remaining:expr),+ $(,)?) => {
        move |value| $crate::flow!($($remaining),+)($first(value))
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn single_function_is_itself() {
        let double = flow!(|x: i32| x * 2);
        assert_eq!(double(4), 8);
    }

    #[test]
    fn composes_left_to_right() {
        let double = |x: i32| x * 2;
        let add_one = |x: i32| x + 1;
        let composed = flow!(double, add_one);
        assert_eq!(composed(5), 11);
    }

    #[test]
    fn agrees_with_pipe() {
        let square = |x: i32| x * x;
        let add_one = |x: i32| x + 1;
        assert_eq!(flow!(square, add_one)(3), crate::pipe!(3, square, add_one));
    }

    #[test]
    fn composed_closure_is_reusable() {
        let shout = flow!(str::to_uppercase, |s: String| format!("{s}!"));
        assert_eq!(shout("hey"), "HEY!");
        assert_eq!(shout("ho"), "HO!");
    }
}
