//! Smart enums: closed sets of named, strongly-typed singleton instances.
//!
//! Each instance carries a name and an underlying value, and may carry
//! behavior of its own. A per-type registry answers name and value lookups;
//! flag enums add bitmask validation, decomposition and composition.
//!
//! # Enum kinds
//!
//! - [`SmartEnum`] with its [`Registry`]: plain enums, listed alphabetically.
//! - [`SmartFlagEnum`] with its [`FlagRegistry`]: single-bit flags, listed by
//!   value, with combined values decomposed largest flag first.
//!
//! Types are usually declared with [`smart_enum!`] or [`smart_flag_enum!`];
//! hand-written types implement [`Instance`] plus one of the registry traits
//! and keep their registry in a `LazyLock`.
//!
//! [`switch_on`] offers a fluent `when`/`then`/`default` dispatch for code
//! that compares against instances.

/// Bit operations over flag value types.
pub mod bits;
/// Per-type instance catalog shared by both registries.
mod catalog;
/// Error types used across the crate.
pub mod error;
/// Flag enum registry and trait.
pub mod flags;
/// The named-constant abstraction.
mod instance;
/// Declaration macros.
mod macros;
/// Plain enum registry and trait.
pub mod registry;
/// Fluent dispatch helper.
pub mod switch;

pub use crate::{
    bits::FlagBits,
    error::{Error, ErrorKind, Result},
    flags::{FlagList, FlagOptions, FlagRegistry, SmartFlagEnum},
    instance::{EnumValue, Instance},
    registry::{Registry, SmartEnum},
    switch::{Switch, switch_on},
};
