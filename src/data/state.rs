//! State container - a computation threading mutable-looking state.
//!
//! `State<S, A>` wraps a function `S -> (A, S)`: given an initial
//! state it produces a result and the successor state. Sequencing with
//! [`State::flat_map`] threads the evolving state through each step, so
//! a chain reads like imperative code while staying a pure value until
//! [`State::run`] is called.
//!
//! The capability methods are inherent rather than trait impls: the
//! wrapped closure forces `Fn + 'static` bounds that the generic trait
//! signatures cannot express.
//!
//! # Examples
//!
//! ```rust
//! use preludium::data::State;
//! use preludium::data::state::{get, put};
//!
//! let bump: State<i32, i32> =
//!     get().flat_map(|n: i32| put(n + 1).fmap(move |()| n));
//!
//! let (previous, next) = bump.run(41);
//! assert_eq!((previous, next), (41, 42));
//! ```

use std::rc::Rc;

use super::either::Either;

/// A stateful computation `S -> (A, S)`.
pub struct State<S, A> {
    run_function: Rc<dyn Fn(S) -> (A, S)>,
}

/// A stateful computation whose result may be a failure.
pub type StateEither<S, E, A> = State<S, Either<E, A>>;

impl<S, A> Clone for State<S, A> {
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<S: 'static, A: 'static> State<S, A> {
    /// Wraps a state-transition function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation, returning the result and the final state.
    #[must_use]
    pub fn run(&self, initial: S) -> (A, S) {
        (self.run_function)(initial)
    }

    /// Runs the computation and keeps only the result.
    #[must_use]
    pub fn eval(&self, initial: S) -> A {
        self.run(initial).0
    }

    /// Runs the computation and keeps only the final state.
    #[must_use]
    pub fn exec(&self, initial: S) -> S {
        self.run(initial).1
    }

    /// Lifts a value into a computation that leaves the state alone.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Transforms the result, leaving the state thread untouched.
    pub fn fmap<B, F>(self, function: F) -> State<S, B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        State::new(move |state| {
            let (value, next) = self.run(state);
            (function(value), next)
        })
    }

    /// Sequences a dependent computation, threading the state through.
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        B: 'static,
        F: Fn(A) -> State<S, B> + 'static,
    {
        State::new(move |state| {
            let (value, next) = self.run(state);
            function(value).run(next)
        })
    }

    /// Alias for [`State::flat_map`] matching the container methods.
    pub fn and_then<B, F>(self, function: F) -> State<S, B>
    where
        B: 'static,
        F: Fn(A) -> State<S, B> + 'static,
    {
        self.flat_map(function)
    }

    /// Sequences an independent computation, discarding this result.
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Combines two computations run in order.
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        State::new(move |state| {
            let (first, middle) = self.run(state);
            let (second, last) = other.run(middle);
            (function(first, second), last)
        })
    }

    /// Pairs the results of two computations run in order.
    pub fn product<B>(self, other: State<S, B>) -> State<S, (A, B)>
    where
        B: 'static,
    {
        self.map2(other, |a, b| (a, b))
    }
}

/// Reads the current state as the result.
#[must_use]
pub fn get<S: Clone + 'static>() -> State<S, S> {
    State::new(|state: S| (state.clone(), state))
}

/// Replaces the state, yielding `()`.
#[must_use]
pub fn put<S: Clone + 'static>(next: S) -> State<S, ()> {
    State::new(move |_| ((), next.clone()))
}

/// Applies a function to the state, yielding `()`.
#[must_use]
pub fn modify<S: 'static, F>(function: F) -> State<S, ()>
where
    F: Fn(S) -> S + 'static,
{
    State::new(move |state| ((), function(state)))
}

/// Projects a value out of the state without changing it.
#[must_use]
pub fn gets<S: 'static, A: 'static, F>(function: F) -> State<S, A>
where
    F: Fn(&S) -> A + 'static,
{
    State::new(move |state| {
        let value = function(&state);
        (value, state)
    })
}
