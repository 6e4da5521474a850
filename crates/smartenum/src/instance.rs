//! The named-constant abstraction both registries catalog.

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Requirements on the underlying value of an enum instance.
///
/// Blanket-implemented for every type that qualifies.
pub trait EnumValue: Eq + Ord + Hash + Clone + Debug + Display + Send + Sync + 'static {}

impl<T> EnumValue for T where T: Eq + Ord + Hash + Clone + Debug + Display + Send + Sync + 'static {}

/// One named constant of an enum type.
///
/// Instances are created once and live for the rest of the program; registries
/// hold `&'static` references to them.
pub trait Instance: Sync + 'static {
    /// Underlying value type.
    type Value: EnumValue;

    /// The instance name. Unique within its type.
    fn name(&self) -> &str;

    /// The underlying value.
    fn value(&self) -> &Self::Value;

    /// Value-based equality: two instances are the same iff their values are.
    ///
    /// Names are ignored, so an alias compares equal to its canonical twin.
    fn same_value(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}
