//! Property-based tests for flag decomposition and name lookup.
//!
//! Every in-range composite value must decompose into distinct flags,
//! largest first, that combine back to the original value.

#![allow(missing_docs, clippy::tests_outside_test_module)]

use proptest::prelude::*;
use smartenum::{FlagBits, SmartEnum, SmartFlagEnum, smart_enum, smart_flag_enum};

smart_flag_enum! {
    pub struct Nibble: u32 {
        One = 1,
        Two = 2,
        Four = 4,
        Eight = 8,
    }
}

smart_flag_enum! {
    pub struct Signed: i16 where AllowNegativeInput {
        A = 1,
        B = 2,
        C = 4,
        D = 8,
        E = 16,
        F = 32,
    }
}

smart_enum! {
    pub struct Color: u8 {
        Red = 1,
        Green = 2,
        Blue = 3,
        Cyan = 4,
    }
}

/// Check that `flags` is non-empty, strictly descending and recombines to `value`.
fn assert_decomposes<E: SmartFlagEnum>(value: E::Value, flags: &[&'static E]) {
    assert!(!flags.is_empty(), "{value} decomposed to nothing");
    for pair in flags.windows(2) {
        assert!(
            pair[0].value() > pair[1].value(),
            "{value} not largest first: {} before {}",
            pair[0].value(),
            pair[1].value()
        );
    }
    assert_eq!(E::combine(flags.iter().copied()), value);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any value inside the defined bits round-trips through decomposition.
    #[test]
    fn nibble_decomposition(value in 1u32..16) {
        let flags = Nibble::from_value(value).expect("in range");
        assert_decomposes(value, &flags);
    }

    /// Values with any bit above the defined flags are rejected.
    #[test]
    fn nibble_out_of_range(value in 16u32..u32::MAX) {
        prop_assert!(Nibble::try_from_value(value).is_none());
    }

    /// Rendered names parse back to the same flags.
    #[test]
    fn names_round_trip(value in 1u32..16) {
        let text = Nibble::from_value_to_string(value).expect("in range");
        let parsed = Nibble::from_names(&text).expect("rendered names parse");
        prop_assert_eq!(Nibble::combine(parsed), value);
    }

    /// Case-insensitive name parsing ignores letter case entirely.
    #[test]
    fn names_ignore_case(value in 1u32..16, upper in any::<bool>()) {
        let text = Nibble::from_value_to_string(value).expect("in range");
        let text = if upper { text.to_uppercase() } else { text.to_lowercase() };
        let parsed = Nibble::from_names_ignore_case(&text).expect("case-folded names parse");
        prop_assert_eq!(Nibble::combine(parsed), value);
        prop_assert!(Nibble::try_from_names(&text).is_none());
    }

    /// Negative composites other than all-ones are out of range even when allowed.
    #[test]
    fn negative_composites(value in i16::MIN..-1) {
        prop_assert!(Signed::try_from_value(value).is_none());
    }

    /// Plain enum value lookups find exactly the declared values.
    #[test]
    fn plain_value_lookup(value in any::<u8>()) {
        match Color::try_from_value(&value) {
            Some(color) => prop_assert_eq!(color.value(), &value),
            None => prop_assert!(value == 0 || value > 4),
        }
    }

    /// Arbitrary strings resolve only to a declared name, modulo case.
    #[test]
    fn plain_name_lookup(name in "[a-zA-Z]{0,8}") {
        let known = ["red", "green", "blue", "cyan"];
        let expected = known.contains(&name.to_lowercase().as_str());
        prop_assert_eq!(Color::try_from_name_ignore_case(&name).is_some(), expected);
    }
}

#[test]
fn all_ones_selects_every_flag() {
    let flags = Signed::from_value(-1).expect("wildcard");
    assert_eq!(flags.len(), 6);
    assert_decomposes(0b11_1111, &flags);
    let flags = Nibble::from_value(u32::MAX).expect("wildcard");
    assert_eq!(flags.len(), 4);
}

#[test]
fn zero_without_sentinel_fails() {
    assert!(Nibble::try_from_value(0).is_none());
    assert!(Signed::try_from_value(0).is_none());
}

/// Declare one seven-flag enum per value type and check every composite.
macro_rules! width_tests {
    ($($ty:ident),* $(,)?) => {
        $(
            paste::paste! {
                smart_flag_enum! {
                    pub struct [<Seven $ty:camel>]: $ty {
                        B0 = 1,
                        B1 = 2,
                        B2 = 4,
                        B3 = 8,
                        B4 = 16,
                        B5 = 32,
                        B6 = 64,
                    }
                }

                #[test]
                fn [<every_composite_ $ty>]() {
                    for raw in 1..=127 {
                        let value: $ty = raw;
                        let flags = [<Seven $ty:camel>]::from_value(value).expect("in range");
                        assert_decomposes(value, &flags);
                    }
                    assert!([<Seven $ty:camel>]::try_from_value(0).is_none());
                }

                #[test]
                fn [<all_ones_ $ty>]() {
                    let all = <$ty as FlagBits>::ALL;
                    let result = [<Seven $ty:camel>]::try_from_value(all);
                    assert_eq!(result.is_some(), !all.is_negative());
                }
            }
        )*
    };
}

width_tests!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
