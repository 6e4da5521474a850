//! Registry for bitmask ("flag") smart enums.
//!
//! Flag values are expected to occupy one bit each. `0` and the all-ones
//! value (`-1` for signed types) are sentinels: they are exempt from
//! validation, and the all-ones value doubles as a wildcard for "every
//! defined flag" during decomposition.
//!
//! Decomposition of a combined value runs in this order:
//!
//! 1. exact match against a registered value (explicit aliases win here);
//! 2. negative input is rejected unless the type allows it;
//! 3. the all-ones wildcard expands to every non-zero instance;
//! 4. bits outside the union of single-bit flags are rejected;
//! 5. greedy matching from the largest flag down, which must consume every
//!    bit.
//!
//! Results are ordered by descending value.

use std::{fmt, sync::OnceLock};

use smallvec::{SmallVec, smallvec};

use crate::{
    Instance,
    bits::{self, FlagBits},
    catalog::Catalog,
    error::{Error, Result},
};

/// The flags resolved from a combined value or a name list.
pub type FlagList<E> = SmallVec<[&'static E; 8]>;

/// Compile-time behavior markers for a flag enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlagOptions {
    /// Accept negative composite input beyond the all-ones sentinel.
    allow_negative_input: bool,
    /// Skip the power-of-two and contiguity checks.
    relaxed_validation: bool,
}

impl FlagOptions {
    /// Default behavior: single-bit, contiguous flags; negative input rejected.
    pub const STRICT: Self = Self {
        allow_negative_input: false,
        relaxed_validation: false,
    };

    /// Accept negative composite input.
    pub const fn allow_negative_input(self) -> Self {
        Self {
            allow_negative_input: true,
            ..self
        }
    }

    /// Tolerate non-power-of-two and non-contiguous flag values.
    pub const fn relaxed_validation(self) -> Self {
        Self {
            relaxed_validation: true,
            ..self
        }
    }

    /// Whether negative composite input is accepted.
    pub const fn allows_negative_input(&self) -> bool {
        self.allow_negative_input
    }

    /// Whether flag validation is relaxed.
    pub const fn is_relaxed(&self) -> bool {
        self.relaxed_validation
    }
}

/// Derived views computed by a successful validation.
struct FlagIndex<E: 'static, V> {
    /// Every instance, ascending by value.
    ascending: Vec<&'static E>,
    /// Non-sentinel instances, descending by value; ties keep registration order.
    descending: Vec<&'static E>,
    /// Every non-zero instance, descending by value.
    wildcard: Vec<&'static E>,
    /// Union of the single-bit flag values.
    defined_bits: V,
}

/// The catalog of a flag enum type, with validation and bitmask decomposition.
///
/// Validation runs lazily before the first listing or lookup and is cached
/// until the next registration.
pub struct FlagRegistry<E: Instance<Value: FlagBits>> {
    /// Instances and indexes.
    catalog: Catalog<E>,
    /// Type-level behavior markers.
    options: FlagOptions,
    /// Memoized validation result.
    index: OnceLock<Result<FlagIndex<E, E::Value>>>,
}

impl<E: Instance<Value: FlagBits>> FlagRegistry<E> {
    /// Create an empty registry for the named type.
    pub fn new(type_name: &'static str, options: FlagOptions) -> Self {
        Self {
            catalog: Catalog::new(type_name),
            options,
            index: OnceLock::new(),
        }
    }

    /// Build and validate a registry from a complete table of instances.
    pub fn build(
        type_name: &'static str,
        options: FlagOptions,
        instances: impl IntoIterator<Item = &'static E>,
    ) -> Result<Self> {
        let mut registry = Self::new(type_name, options);
        for instance in instances {
            registry.register(instance)?;
        }
        registry.validate()?;
        Ok(registry)
    }

    /// Register one instance and invalidate the cached validation.
    pub fn register(&mut self, instance: &'static E) -> Result<()> {
        self.catalog.register(instance)?;
        self.index.take();
        Ok(())
    }

    /// Name of the enum type.
    pub fn type_name(&self) -> &'static str {
        self.catalog.type_name()
    }

    /// The behavior markers this registry was built with.
    pub fn options(&self) -> FlagOptions {
        self.options
    }

    /// Number of registered instances.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Whether the registry has no instances.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Check the flag definitions.
    ///
    /// Every value other than the sentinels must be a single bit, and the
    /// single-bit values must form the run 1, 2, 4, ... without gaps or
    /// repeats. Relaxed types skip both checks.
    pub fn validate(&self) -> Result<()> {
        self.index().map(|_| ())
    }

    /// All instances, ascending by value.
    pub fn list(&self) -> Result<&[&'static E]> {
        Ok(&self.index()?.ascending)
    }

    /// Resolve a single flag by name. `None` if the definitions are invalid.
    pub fn find_by_name(&self, name: &str, ignore_case: bool) -> Option<&'static E> {
        self.validate().ok()?;
        self.catalog.find_name(name, ignore_case)
    }

    /// Resolve a comma-separated list of exact flag names.
    ///
    /// Each segment is trimmed; empty segments are skipped. Every remaining
    /// segment must resolve, and at least one must be present.
    pub fn from_names(&self, names: &str) -> Result<FlagList<E>> {
        self.validate()?;
        self.resolve_names(names, false)
            .ok_or_else(|| self.parse_names_error(names))
    }

    /// Like [`Self::from_names`], matching names ignoring case.
    pub fn from_names_ignore_case(&self, names: &str) -> Result<FlagList<E>> {
        self.validate()?;
        self.resolve_names(names, true)
            .ok_or_else(|| self.parse_names_error(names))
    }

    /// Non-failing form of [`Self::from_names`].
    pub fn try_from_names(&self, names: &str) -> Option<FlagList<E>> {
        self.validate().ok()?;
        self.resolve_names(names, false)
    }

    /// Non-failing form of [`Self::from_names_ignore_case`].
    pub fn try_from_names_ignore_case(&self, names: &str) -> Option<FlagList<E>> {
        self.validate().ok()?;
        self.resolve_names(names, true)
    }

    /// Decompose a combined value into its constituent flags, largest first.
    pub fn from_value(&self, value: E::Value) -> Result<FlagList<E>> {
        let index = self.index()?;

        if let Some(exact) = self.catalog.find_value(&value) {
            return Ok(smallvec![exact]);
        }

        if value.is_negative() && !self.options.allow_negative_input {
            return Err(Error::NegativeValue {
                type_name: self.type_name(),
                value: value.to_string(),
            });
        }

        if value == E::Value::ALL {
            if index.wildcard.is_empty() {
                return Err(self.parse_value_error(value));
            }
            return Ok(index.wildcard.iter().copied().collect());
        }

        if bits::exceeds(value, index.defined_bits) {
            return Err(Error::OutOfRange {
                type_name: self.type_name(),
                value: value.to_string(),
            });
        }

        let mut remaining = value;
        let mut found = FlagList::new();
        for &flag in &index.descending {
            if remaining == E::Value::ZERO {
                break;
            }
            let flag_bits = *flag.value();
            if remaining.contains(flag_bits) {
                found.push(flag);
                remaining = remaining.without(flag_bits);
            }
        }

        if remaining != E::Value::ZERO || found.is_empty() {
            return Err(self.parse_value_error(value));
        }
        Ok(found)
    }

    /// Non-failing form of [`Self::from_value`].
    pub fn try_from_value(&self, value: E::Value) -> Option<FlagList<E>> {
        self.from_value(value).ok()
    }

    /// Render a combined value as flag names joined by `", "`.
    pub fn from_value_to_string(&self, value: E::Value) -> Result<String> {
        self.from_value(value).map(|flags| join_names(&flags))
    }

    /// Non-failing form of [`Self::from_value_to_string`].
    pub fn try_from_value_to_string(&self, value: E::Value) -> Option<String> {
        self.from_value_to_string(value).ok()
    }

    /// The validated index, computing it on first use.
    fn index(&self) -> Result<&FlagIndex<E, E::Value>> {
        self.index
            .get_or_init(|| self.build_index())
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Validate the definitions and derive the sorted views.
    fn build_index(&self) -> Result<FlagIndex<E, E::Value>> {
        let type_name = self.type_name();
        let relaxed = self.options.relaxed_validation;
        let entries = self.catalog.entries();

        let mut single_bits = Vec::new();
        for &entry in entries {
            let value = *entry.value();
            if value.is_sentinel() {
                continue;
            }
            if value.is_single_bit() {
                single_bits.push(value);
            } else if !relaxed {
                let err = Error::NotPowerOfTwo {
                    type_name,
                    name: entry.name().to_string(),
                    value: value.to_string(),
                };
                tracing::debug!(type_name, %err, "flag validation failed");
                return Err(err);
            }
        }

        if !relaxed {
            single_bits.sort_by_key(|v| v.bit_index());
            for (position, value) in (0u32..).zip(&single_bits) {
                if value.bit_index() != position {
                    let err = Error::MissingFlag {
                        type_name,
                        expected: bit_value_text(position),
                    };
                    tracing::debug!(type_name, %err, "flag validation failed");
                    return Err(err);
                }
            }
        }

        let mut ascending = entries.to_vec();
        ascending.sort_by(|a, b| a.value().cmp(b.value()));

        let mut wildcard: Vec<_> = entries
            .iter()
            .copied()
            .filter(|e| *e.value() != E::Value::ZERO)
            .collect();
        wildcard.sort_by(|a, b| b.value().cmp(a.value()));

        let descending: Vec<_> = wildcard
            .iter()
            .copied()
            .filter(|e| !e.value().is_sentinel())
            .collect();

        let defined_bits = bits::union(
            descending
                .iter()
                .map(|e| *e.value())
                .filter(|v| v.is_single_bit()),
        );

        tracing::debug!(
            type_name,
            count = entries.len(),
            flags = descending.len(),
            relaxed,
            "validated flag definitions"
        );

        Ok(FlagIndex {
            ascending,
            descending,
            wildcard,
            defined_bits,
        })
    }

    /// Resolve every non-empty segment of a comma-separated name list.
    fn resolve_names(&self, names: &str, ignore_case: bool) -> Option<FlagList<E>> {
        let mut found = FlagList::new();
        for part in names.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            found.push(self.catalog.find_name(part, ignore_case)?);
        }
        (!found.is_empty()).then_some(found)
    }

    /// Error for an unresolvable name list.
    fn parse_names_error(&self, names: &str) -> Error {
        Error::ParseNames {
            type_name: self.type_name(),
            input: names.to_string(),
        }
    }

    /// Error for an undecomposable value.
    fn parse_value_error(&self, value: E::Value) -> Error {
        Error::ParseValue {
            type_name: self.type_name(),
            value: value.to_string(),
        }
    }
}

impl<E: Instance<Value: FlagBits>> fmt::Debug for FlagRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagRegistry")
            .field("catalog", &self.catalog)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Join instance names with `", "`.
pub fn join_names<E: Instance>(flags: &[&'static E]) -> String {
    flags
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Decimal text of the single-bit value at `position`.
fn bit_value_text(position: u32) -> String {
    1u128
        .checked_shl(position)
        .map_or_else(|| format!("2^{position}"), |v| v.to_string())
}

/// A bitmask smart enum: instances are flags that combine into a raw value.
///
/// Implementors provide [`SmartFlagEnum::registry`], normally through the
/// [`crate::smart_flag_enum!`] macro, and may override [`SmartFlagEnum::OPTIONS`].
pub trait SmartFlagEnum: Instance<Value: FlagBits> + Sized {
    /// Type-level behavior markers.
    const OPTIONS: FlagOptions = FlagOptions::STRICT;

    /// The registry holding every flag of this type.
    fn registry() -> &'static FlagRegistry<Self>;

    /// All flags, ascending by value.
    fn list() -> Result<&'static [&'static Self]> {
        Self::registry().list()
    }

    /// Resolve a comma-separated list of exact names.
    fn from_names(names: &str) -> Result<FlagList<Self>> {
        Self::registry().from_names(names)
    }

    /// Resolve a comma-separated list of names ignoring case.
    fn from_names_ignore_case(names: &str) -> Result<FlagList<Self>> {
        Self::registry().from_names_ignore_case(names)
    }

    /// Resolve a comma-separated list of exact names, or `None`.
    fn try_from_names(names: &str) -> Option<FlagList<Self>> {
        Self::registry().try_from_names(names)
    }

    /// Resolve a comma-separated list of names ignoring case, or `None`.
    fn try_from_names_ignore_case(names: &str) -> Option<FlagList<Self>> {
        Self::registry().try_from_names_ignore_case(names)
    }

    /// Decompose a combined value.
    fn from_value(value: Self::Value) -> Result<FlagList<Self>> {
        Self::registry().from_value(value)
    }

    /// Decompose a combined value, or `None`.
    fn try_from_value(value: Self::Value) -> Option<FlagList<Self>> {
        Self::registry().try_from_value(value)
    }

    /// Render a combined value as `"C, A"`.
    fn from_value_to_string(value: Self::Value) -> Result<String> {
        Self::registry().from_value_to_string(value)
    }

    /// Render a combined value, or `None`.
    fn try_from_value_to_string(value: Self::Value) -> Option<String> {
        Self::registry().try_from_value_to_string(value)
    }

    /// OR together the values of `flags`.
    fn combine<'a>(flags: impl IntoIterator<Item = &'a Self>) -> Self::Value {
        bits::union(flags.into_iter().map(|f| *f.value()))
    }
}
