//! Declaration macros for smart enum types.

/// Declare a plain smart enum.
///
/// Each instance becomes an associated const whose name is also the instance
/// name. The registry is built from the instances in declaration order on
/// first use; an empty or duplicate name panics at that point.
///
/// ```
/// use smartenum::{SmartEnum, smart_enum};
///
/// smart_enum! {
///     /// Traffic light states.
///     pub struct Light: u8 {
///         Red = 1,
///         Amber = 2,
///         Green = 3,
///     }
/// }
///
/// assert_eq!(Light::from_value(&2).unwrap().name(), "Amber");
/// assert_eq!(Light::from_name_ignore_case("green").unwrap(), &Light::Green);
/// let names: Vec<_> = Light::list().iter().map(|l| l.name()).collect();
/// assert_eq!(names, ["Amber", "Green", "Red"]);
/// ```
#[macro_export]
macro_rules! smart_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $value:ty {
            $(
                $(#[$item_meta:meta])*
                $item:ident = $item_value:expr
            ),* $(,)?
        }
    ) => {
        $crate::__smart_enum_type! {
            [Clone, Debug]
            $(#[$meta])*
            $vis struct $name : $value {
                $($(#[$item_meta])* $item = $item_value),*
            }
        }

        impl $crate::SmartEnum for $name {
            fn registry() -> &'static $crate::Registry<Self> {
                static REGISTRY: ::std::sync::LazyLock<$crate::Registry<$name>> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::registry::expect_valid($crate::Registry::build(
                            ::core::stringify!($name),
                            $name::DECLARED.iter().copied(),
                        ))
                    });
                &REGISTRY
            }
        }
    };
}

/// Declare a flag (bitmask) smart enum.
///
/// The value type must implement [`crate::FlagBits`]. Behavior markers follow
/// `where`: `AllowNegativeInput` accepts negative composite values, and
/// `RelaxedValidation` tolerates non-power-of-two or gapped flag values.
/// Invalid definitions panic on first use.
///
/// ```
/// use smartenum::{SmartFlagEnum, smart_flag_enum};
///
/// smart_flag_enum! {
///     pub struct Access: u32 {
///         None = 0,
///         Read = 1,
///         Write = 2,
///         Execute = 4,
///     }
/// }
///
/// assert_eq!(Access::from_value_to_string(Access::Read | Access::Execute).unwrap(), "Execute, Read");
/// assert_eq!(Access::combine(Access::from_names("Read, Write").unwrap()), 3);
/// ```
#[macro_export]
macro_rules! smart_flag_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $value:ty $(where $($option:ident),+ $(,)?)? {
            $(
                $(#[$item_meta:meta])*
                $item:ident = $item_value:expr
            ),* $(,)?
        }
    ) => {
        $crate::__smart_enum_type! {
            [Clone, Copy, Debug]
            $(#[$meta])*
            $vis struct $name : $value {
                $($(#[$item_meta])* $item = $item_value),*
            }
        }

        impl $crate::SmartFlagEnum for $name {
            const OPTIONS: $crate::FlagOptions = {
                let options = $crate::FlagOptions::STRICT;
                $($(let options = $crate::__flag_option!(options, $option);)+)?
                options
            };

            fn registry() -> &'static $crate::FlagRegistry<Self> {
                static REGISTRY: ::std::sync::LazyLock<$crate::FlagRegistry<$name>> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::registry::expect_valid($crate::FlagRegistry::build(
                            ::core::stringify!($name),
                            <$name as $crate::SmartFlagEnum>::OPTIONS,
                            $name::DECLARED.iter().copied(),
                        ))
                    });
                &REGISTRY
            }
        }

        impl ::core::ops::BitOr for $name {
            type Output = $value;
            fn bitor(self, rhs: Self) -> $value {
                self.value | rhs.value
            }
        }

        impl ::core::ops::BitOr<$value> for $name {
            type Output = $value;
            fn bitor(self, rhs: $value) -> $value {
                self.value | rhs
            }
        }

        impl ::core::ops::BitOr<$name> for $value {
            type Output = $value;
            fn bitor(self, rhs: $name) -> $value {
                self | rhs.value
            }
        }

        impl ::core::convert::From<$name> for $value {
            fn from(flag: $name) -> $value {
                flag.value
            }
        }
    };
}

/// Shared expansion: the struct, its instances, value equality and display.
#[doc(hidden)]
#[macro_export]
macro_rules! __smart_enum_type {
    (
        [$($derive:ident),*]
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $value:ty {
            $($(#[$item_meta:meta])* $item:ident = $item_value:expr),*
        }
    ) => {
        $(#[$meta])*
        #[derive($($derive),*)]
        $vis struct $name {
            /// Instance name.
            name: &'static str,
            /// Underlying value.
            value: $value,
        }

        #[allow(dead_code, non_upper_case_globals, clippy::multiple_inherent_impl)]
        impl $name {
            $(
                #[doc = ::core::concat!("The `", ::core::stringify!($item), "` instance.")]
                $(#[$item_meta])*
                $vis const $item: Self = Self {
                    name: ::core::stringify!($item),
                    value: $item_value,
                };
            )*

            /// Every instance, in declaration order.
            #[doc(hidden)]
            const DECLARED: &'static [&'static Self] = &[$(&Self::$item),*];

            /// The instance name.
            $vis const fn name(&self) -> &'static str {
                self.name
            }

            /// The underlying value.
            $vis const fn value(&self) -> &$value {
                &self.value
            }
        }

        impl $crate::Instance for $name {
            type Value = $value;

            fn name(&self) -> &str {
                self.name
            }

            fn value(&self) -> &$value {
                &self.value
            }
        }

        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.value == other.value
            }
        }

        impl ::core::cmp::Eq for $name {}

        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                self.value.hash(state);
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.name)
            }
        }
    };
}

/// Apply one named behavior marker to a `FlagOptions` const expression.
#[doc(hidden)]
#[macro_export]
macro_rules! __flag_option {
    ($options:ident, AllowNegativeInput) => {
        $options.allow_negative_input()
    };
    ($options:ident, RelaxedValidation) => {
        $options.relaxed_validation()
    };
}
