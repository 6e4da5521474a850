//! A fluent `when`/`then`/`default` dispatch over any comparable value.
//!
//! ```
//! use smartenum::switch_on;
//!
//! let mut hit = "";
//! switch_on(&2)
//!     .when(&1)
//!     .then(|| hit = "one")
//!     .when(&2)
//!     .then(|| hit = "two")
//!     .default(|| hit = "other");
//! assert_eq!(hit, "two");
//! ```
//!
//! Native `match` is usually the better tool; this helper exists for code
//! that compares against smart enum instances, which are not patterns.

/// Start a switch over `value`.
pub fn switch_on<T: PartialEq + ?Sized>(value: &T) -> Switch<'_, T> {
    Switch {
        value,
        handled: false,
        armed: false,
    }
}

/// Builder state for one switch.
///
/// At most one `then` action runs: the first whose preceding `when` matched.
#[must_use = "a switch does nothing until `then` or `default` is called"]
#[derive(Debug)]
pub struct Switch<'a, T: ?Sized> {
    /// The value being switched on.
    value: &'a T,
    /// Whether an action has already run.
    handled: bool,
    /// Whether the most recent `when` matched.
    armed: bool,
}

impl<T: PartialEq + ?Sized> Switch<'_, T> {
    /// Test the next case. Only arms the following [`Switch::then`].
    pub fn when(mut self, candidate: &T) -> Self {
        self.armed = !self.handled && self.value == candidate;
        self
    }

    /// Test the next case against several candidates at once.
    pub fn when_any<'c>(mut self, candidates: impl IntoIterator<Item = &'c T>) -> Self
    where
        T: 'c,
    {
        self.armed = !self.handled && candidates.into_iter().any(|c| self.value == c);
        self
    }

    /// Run `action` if the preceding `when` matched and nothing ran yet.
    pub fn then(mut self, action: impl FnOnce()) -> Self {
        if self.armed && !self.handled {
            action();
            self.handled = true;
        }
        self.armed = false;
        self
    }

    /// Run `action` if no case ran. Consumes the switch.
    pub fn default(self, action: impl FnOnce()) {
        if !self.handled {
            action();
        }
    }

    /// Whether some case's action ran.
    pub fn handled(&self) -> bool {
        self.handled
    }
}
