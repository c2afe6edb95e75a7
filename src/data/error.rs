//! Tagged error values and boundary wrappers.
//!
//! Expected failure in this library is data, not exceptions: code
//! returns `Either`, `Option`, or `Datum`. [`TagError`] is the one
//! concrete error type for the boundary - a closed taxonomy of tagged
//! records (tag, message, optional JSON context) dispatched by tag with
//! [`TagMatcher`]. [`try_catch`] and [`try_catch_panic`] convert
//! fallible or panicking host code into [`Either`] values at that
//! boundary; past it, all error flow is ordinary data flow.
//!
//! # Examples
//!
//! ```rust
//! use preludium::data::{TagError, TagMatcher};
//!
//! let error = TagError::new("not_found", "no such user");
//! let status = TagMatcher::otherwise(|_| 500)
//!     .on("not_found", |_| 404)
//!     .on("forbidden", |_| 403)
//!     .run(&error);
//! assert_eq!(status, 404);
//! ```

use std::fmt::Display;
use std::panic::{catch_unwind, UnwindSafe};

use thiserror::Error;

use super::either::Either;

/// A tagged error record: a closed-variant taxonomy keyed by tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{tag}: {message}")]
pub struct TagError {
    /// The taxonomy key the error is dispatched on.
    pub tag: String,
    /// A human-readable description.
    pub message: String,
    /// Optional structured context attached at the raise site.
    pub context: Option<serde_json::Value>,
}

impl TagError {
    /// Builds an error with a tag and a message.
    pub fn new(tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            message: message.into(),
            context: None,
        }
    }

    /// Attaches structured context.
    #[must_use]
    pub fn with_context(mut self, context: serde_json::Value) -> Self {
        self.context = Some(context);
        self
    }

    /// Returns `true` when the error carries the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag == tag
    }
}

type Handler<'a, T> = Box<dyn FnMut(&TagError) -> T + 'a>;

/// A dispatcher over [`TagError`] values keyed by tag.
///
/// Built from a required fallback (so dispatch is total) plus one
/// handler per tag of interest.
pub struct TagMatcher<'a, T> {
    arms: Vec<(String, Handler<'a, T>)>,
    fallback: Handler<'a, T>,
}

impl<'a, T> TagMatcher<'a, T> {
    /// Starts a matcher with the fallback used for unhandled tags.
    pub fn otherwise<F>(fallback: F) -> Self
    where
        F: FnMut(&TagError) -> T + 'a,
    {
        Self {
            arms: Vec::new(),
            fallback: Box::new(fallback),
        }
    }

    /// Adds a handler for one tag. The first matching arm wins.
    #[must_use]
    pub fn on<F>(mut self, tag: impl Into<String>, handler: F) -> Self
    where
        F: FnMut(&TagError) -> T + 'a,
    {
        self.arms.push((tag.into(), Box::new(handler)));
        self
    }

    /// Dispatches an error to its handler, or to the fallback.
    pub fn run(&mut self, error: &TagError) -> T {
        for (tag, handler) in &mut self.arms {
            if error.has_tag(tag) {
                return handler(error);
            }
        }
        (self.fallback)(error)
    }
}

/// Runs a fallible operation, converting its error into a [`TagError`]
/// carrying the given tag.
pub fn try_catch<T, E, F>(tag: &str, operation: F) -> Either<TagError, T>
where
    E: Display,
    F: FnOnce() -> Result<T, E>,
{
    match operation() {
        Ok(value) => Either::Right(value),
        Err(error) => Either::Left(TagError::new(tag, error.to_string())),
    }
}

/// Runs an operation that may panic, converting the panic into a
/// [`TagError`] carrying the given tag.
///
/// The panic payload becomes the message when it is a string, which
/// covers every `panic!` with a literal or formatted message.
pub fn try_catch_panic<T, F>(tag: &str, operation: F) -> Either<TagError, T>
where
    F: FnOnce() -> T + UnwindSafe,
{
    match catch_unwind(operation) {
        Ok(value) => Either::Right(value),
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "panic with non-string payload".to_string());
            Either::Left(TagError::new(tag, message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn display_renders_tag_and_message() {
        let error = TagError::new("not_found", "no such user");
        assert_eq!(error.to_string(), "not_found: no such user");
    }

    #[rstest]
    fn context_rides_along() {
        let error = TagError::new("invalid", "bad field").with_context(json!({"field": "age"}));
        assert_eq!(error.context, Some(json!({"field": "age"})));
    }

    #[rstest]
    fn matcher_dispatches_on_tag() {
        let mut matcher = TagMatcher::otherwise(|_| "other")
            .on("not_found", |_| "missing")
            .on("forbidden", |_| "denied");

        assert_eq!(matcher.run(&TagError::new("not_found", "")), "missing");
        assert_eq!(matcher.run(&TagError::new("forbidden", "")), "denied");
        assert_eq!(matcher.run(&TagError::new("timeout", "")), "other");
    }

    #[rstest]
    fn matcher_handlers_can_read_the_error() {
        let mut matcher =
            TagMatcher::otherwise(|_| String::new()).on("invalid", |e: &TagError| e.message.clone());
        assert_eq!(matcher.run(&TagError::new("invalid", "bad age")), "bad age");
    }

    #[rstest]
    fn try_catch_wraps_errors_as_data() {
        let parsed = try_catch("parse", || "42".parse::<i32>());
        assert_eq!(parsed, Either::Right(42));

        let failed = try_catch("parse", || "no".parse::<i32>());
        assert!(matches!(failed, Either::Left(ref e) if e.tag == "parse"));
    }

    #[rstest]
    fn try_catch_panic_converts_the_payload() {
        let caught: Either<TagError, i32> = try_catch_panic("boundary", || panic!("blew up"));
        assert_eq!(
            caught,
            Either::Left(TagError::new("boundary", "blew up"))
        );

        let passed = try_catch_panic("boundary", || 7);
        assert_eq!(passed, Either::Right(7));
    }
}
