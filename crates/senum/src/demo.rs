//! Built-in demo enums and the type-erased catalog the CLI inspects.

use std::{error::Error as StdError, fmt, marker::PhantomData, str::FromStr};

use anyhow::{Context, Result};
use smartenum::{
    FlagOptions, SmartEnum, SmartFlagEnum, flags::join_names, smart_enum,
    smart_flag_enum,
};

smart_enum! {
    /// Primary colors.
    pub struct Color: i32 {
        Red = 1,
        Green = 2,
        Blue = 3,
    }
}

smart_enum! {
    /// A few HTTP status codes.
    pub struct Status: u16 {
        Ok = 200,
        Created = 201,
        NotFound = 404,
        InternalServerError = 500,
    }
}

smart_flag_enum! {
    /// File permissions.
    pub struct Permissions: u32 {
        None = 0,
        Read = 1,
        Write = 2,
        Execute = 4,
        Delete = 8,
    }
}

smart_flag_enum! {
    /// Days of the week with named composites.
    pub struct Weekdays: u8 where RelaxedValidation {
        Monday = 1,
        Tuesday = 2,
        Wednesday = 4,
        Thursday = 8,
        Friday = 16,
        Saturday = 32,
        Sunday = 64,
        Workweek = 31,
        Weekend = 96,
    }
}

smart_flag_enum! {
    /// Access rights where `-1` selects everything.
    pub struct Access: i32 where AllowNegativeInput {
        Read = 1,
        Write = 2,
        Admin = 4,
    }
}

/// Which registry backs a catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// A plain enum with a scalar registry.
    Scalar,
    /// A flag enum.
    Flags(FlagOptions),
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => f.write_str("scalar"),
            Self::Flags(options) => {
                f.write_str("flags")?;
                if options.allows_negative_input() {
                    f.write_str(", negative input")?;
                }
                if options.is_relaxed() {
                    f.write_str(", relaxed")?;
                }
                Ok(())
            }
        }
    }
}

/// Type-erased view of one enum type's registry.
pub trait Inspect: Sync {
    /// Registry kind and options.
    fn kind(&self) -> Kind;

    /// Every instance as `(name, value)`, in listing order.
    fn entries(&self) -> Result<Vec<(String, String)>>;

    /// Resolve a name (or comma-separated names for flags) to `names = value`.
    fn by_names(&self, names: &str, ignore_case: bool) -> Result<String>;

    /// Resolve a textual value to the matching name(s).
    fn by_value(&self, raw: &str) -> Result<String>;
}

/// Parse a command-line value into an enum value type.
fn parse_value<V>(raw: &str) -> Result<V>
where
    V: FromStr,
    V::Err: StdError + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("invalid value '{raw}'"))
}

/// Inspector for a plain enum.
pub struct Plain<E>(PhantomData<fn() -> E>);

impl<E> Plain<E> {
    /// Create an inspector for `E`.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Inspect for Plain<E>
where
    E: SmartEnum,
    E::Value: FromStr,
    <E::Value as FromStr>::Err: StdError + Send + Sync + 'static,
{
    fn kind(&self) -> Kind {
        Kind::Scalar
    }

    fn entries(&self) -> Result<Vec<(String, String)>> {
        Ok(E::list()
            .iter()
            .map(|e| (e.name().to_string(), e.value().to_string()))
            .collect())
    }

    fn by_names(&self, names: &str, ignore_case: bool) -> Result<String> {
        let found = if ignore_case {
            E::from_name_ignore_case(names)?
        } else {
            E::from_name(names)?
        };
        Ok(format!("{} = {}", found.name(), found.value()))
    }

    fn by_value(&self, raw: &str) -> Result<String> {
        let value = parse_value::<E::Value>(raw)?;
        Ok(E::from_value(&value)?.name().to_string())
    }
}

/// Inspector for a flag enum.
pub struct Flags<E>(PhantomData<fn() -> E>);

impl<E> Flags<E> {
    /// Create an inspector for `E`.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Inspect for Flags<E>
where
    E: SmartFlagEnum,
    E::Value: FromStr,
    <E::Value as FromStr>::Err: StdError + Send + Sync + 'static,
{
    fn kind(&self) -> Kind {
        Kind::Flags(E::OPTIONS)
    }

    fn entries(&self) -> Result<Vec<(String, String)>> {
        Ok(E::list()?
            .iter()
            .map(|e| (e.name().to_string(), e.value().to_string()))
            .collect())
    }

    fn by_names(&self, names: &str, ignore_case: bool) -> Result<String> {
        let found = if ignore_case {
            E::from_names_ignore_case(names)?
        } else {
            E::from_names(names)?
        };
        let value = E::combine(found.iter().copied());
        Ok(format!("{} = {value}", join_names(&found)))
    }

    fn by_value(&self, raw: &str) -> Result<String> {
        let value = parse_value::<E::Value>(raw)?;
        Ok(E::from_value_to_string(value)?)
    }
}

/// A demo catalog entry.
pub struct DemoEntry {
    /// Command-line key.
    pub key: &'static str,
    /// Rust type name.
    pub display: &'static str,
    /// Registry access.
    pub inspect: &'static dyn Inspect,
}

impl fmt::Debug for DemoEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoEntry")
            .field("key", &self.key)
            .field("display", &self.display)
            .field("kind", &self.inspect.kind())
            .finish()
    }
}

/// Inspector for [`Color`].
static COLOR: Plain<Color> = Plain::new();
/// Inspector for [`Status`].
static STATUS: Plain<Status> = Plain::new();
/// Inspector for [`Permissions`].
static PERMISSIONS: Flags<Permissions> = Flags::new();
/// Inspector for [`Weekdays`].
static WEEKDAYS: Flags<Weekdays> = Flags::new();
/// Inspector for [`Access`].
static ACCESS: Flags<Access> = Flags::new();

/// All demo catalogs, in display order.
pub static REGISTRY: &[DemoEntry] = &[
    DemoEntry {
        key: "color",
        display: "Color",
        inspect: &COLOR,
    },
    DemoEntry {
        key: "status",
        display: "Status",
        inspect: &STATUS,
    },
    DemoEntry {
        key: "permissions",
        display: "Permissions",
        inspect: &PERMISSIONS,
    },
    DemoEntry {
        key: "weekdays",
        display: "Weekdays",
        inspect: &WEEKDAYS,
    },
    DemoEntry {
        key: "access",
        display: "Access",
        inspect: &ACCESS,
    },
];

/// Look up a demo catalog by key.
pub fn find(key: &str) -> Option<&'static DemoEntry> {
    REGISTRY.iter().find(|entry| entry.key == key)
}

/// Comma-separated list of catalog keys.
pub fn keys() -> String {
    REGISTRY
        .iter()
        .map(|entry| entry.key)
        .collect::<Vec<_>>()
        .join(", ")
}
