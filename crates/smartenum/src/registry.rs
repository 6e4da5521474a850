//! Registry for plain (scalar) smart enums.

use std::{fmt, sync::OnceLock};

use crate::{
    Instance,
    catalog::Catalog,
    error::{Error, Result},
};

/// The catalog of a plain enum type, with name and value lookup.
///
/// Registration needs `&mut self`; every query works through `&self`, so once
/// a registry is parked in a static it is frozen and freely shared between
/// threads. The alphabetical listing is computed on first use and memoized.
pub struct Registry<E: Instance> {
    /// Instances and indexes.
    catalog: Catalog<E>,
    /// Instances sorted by name, computed lazily.
    sorted: OnceLock<Vec<&'static E>>,
}

impl<E: Instance> Registry<E> {
    /// Create an empty registry for the named type.
    pub fn new(type_name: &'static str) -> Self {
        Self {
            catalog: Catalog::new(type_name),
            sorted: OnceLock::new(),
        }
    }

    /// Build a registry from a complete table of instances, in declaration order.
    pub fn build(
        type_name: &'static str,
        instances: impl IntoIterator<Item = &'static E>,
    ) -> Result<Self> {
        let mut registry = Self::new(type_name);
        for instance in instances {
            registry.register(instance)?;
        }
        Ok(registry)
    }

    /// Register one instance.
    ///
    /// Fails on an empty or duplicate name. The first instance registered for
    /// a given value owns that value for [`Self::from_value`]; later ones are
    /// still listed.
    pub fn register(&mut self, instance: &'static E) -> Result<()> {
        self.catalog.register(instance)?;
        self.sorted.take();
        Ok(())
    }

    /// Name of the enum type.
    pub fn type_name(&self) -> &'static str {
        self.catalog.type_name()
    }

    /// Number of registered instances.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Whether the registry has no instances.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// All instances, sorted alphabetically by name.
    pub fn list(&self) -> &[&'static E] {
        self.sorted.get_or_init(|| {
            let mut sorted = self.catalog.entries().to_vec();
            sorted.sort_by(|a, b| a.name().cmp(b.name()));
            tracing::debug!(
                type_name = self.type_name(),
                count = sorted.len(),
                "sorted enum listing"
            );
            sorted
        })
    }

    /// All instances in registration order.
    pub fn in_registration_order(&self) -> &[&'static E] {
        self.catalog.entries()
    }

    /// The instance with exactly this name.
    pub fn from_name(&self, name: &str) -> Result<&'static E> {
        self.try_from_name(name)
            .ok_or_else(|| self.catalog.name_not_found(name))
    }

    /// The first-registered instance whose name matches ignoring case.
    pub fn from_name_ignore_case(&self, name: &str) -> Result<&'static E> {
        self.try_from_name_ignore_case(name)
            .ok_or_else(|| self.catalog.name_not_found(name))
    }

    /// Non-failing form of [`Self::from_name`].
    pub fn try_from_name(&self, name: &str) -> Option<&'static E> {
        self.catalog.find_name(name, false)
    }

    /// Non-failing form of [`Self::from_name_ignore_case`].
    pub fn try_from_name_ignore_case(&self, name: &str) -> Option<&'static E> {
        self.catalog.find_name(name, true)
    }

    /// The first-registered instance with this value.
    pub fn from_value(&self, value: &E::Value) -> Result<&'static E> {
        self.try_from_value(value)
            .ok_or_else(|| self.catalog.value_not_found(value))
    }

    /// Non-failing form of [`Self::from_value`].
    pub fn try_from_value(&self, value: &E::Value) -> Option<&'static E> {
        self.catalog.find_value(value)
    }
}

impl<E: Instance> fmt::Debug for Registry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

/// A plain smart enum: a closed set of named instances with lookup by name and value.
///
/// Implementors provide [`SmartEnum::registry`], normally a `LazyLock` built
/// from the type's instances; the [`crate::smart_enum!`] macro does this.
pub trait SmartEnum: Instance + Sized {
    /// The registry holding every instance of this type.
    fn registry() -> &'static Registry<Self>;

    /// All instances, sorted by name.
    fn list() -> &'static [&'static Self] {
        Self::registry().list()
    }

    /// Resolve an exact name.
    fn from_name(name: &str) -> Result<&'static Self> {
        Self::registry().from_name(name)
    }

    /// Resolve a name ignoring case.
    fn from_name_ignore_case(name: &str) -> Result<&'static Self> {
        Self::registry().from_name_ignore_case(name)
    }

    /// Resolve an exact name, or `None`.
    fn try_from_name(name: &str) -> Option<&'static Self> {
        Self::registry().try_from_name(name)
    }

    /// Resolve a name ignoring case, or `None`.
    fn try_from_name_ignore_case(name: &str) -> Option<&'static Self> {
        Self::registry().try_from_name_ignore_case(name)
    }

    /// Resolve a value.
    fn from_value(value: &Self::Value) -> Result<&'static Self> {
        Self::registry().from_value(value)
    }

    /// Resolve a value, or `None`.
    fn try_from_value(value: &Self::Value) -> Option<&'static Self> {
        Self::registry().try_from_value(value)
    }
}

/// Build a registry or abort with its error.
///
/// Used by declaration macros: an invalid table must never become visible to
/// lookups, so the first access panics with the build error.
#[doc(hidden)]
pub fn expect_valid<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => invalid_definition(&err),
    }
}

/// Report an invalid enum definition.
#[cold]
fn invalid_definition(err: &Error) -> ! {
    tracing::error!(type_name = err.type_name(), %err, "invalid enum definition");
    panic!("invalid enum definition: {err}")
}

#[cfg(test)]
mod tests {
    use std::{ptr, thread};

    use super::*;
    use crate::error::ErrorKind;

    #[derive(Debug)]
    struct Planet {
        name: &'static str,
        value: i32,
    }

    impl Instance for Planet {
        type Value = i32;
        fn name(&self) -> &str {
            self.name
        }
        fn value(&self) -> &i32 {
            &self.value
        }
    }

    static MERCURY: Planet = Planet {
        name: "Mercury",
        value: 1,
    };
    static VENUS: Planet = Planet {
        name: "Venus",
        value: 2,
    };
    static EARTH: Planet = Planet {
        name: "Earth",
        value: 3,
    };
    static TERRA: Planet = Planet {
        name: "terra",
        value: 3,
    };
    static DUP_EARTH: Planet = Planet {
        name: "Earth",
        value: 30,
    };
    static EARTH_UPPER: Planet = Planet {
        name: "EARTH",
        value: 31,
    };
    static NAMELESS: Planet = Planet { name: "", value: 9 };

    fn planets() -> Registry<Planet> {
        Registry::build("Planet", [&MERCURY, &VENUS, &EARTH, &TERRA]).unwrap()
    }

    #[test]
    fn lists_alphabetically() {
        let reg = planets();
        let names: Vec<_> = reg.list().iter().map(|p| p.name()).collect();
        // Byte order: uppercase sorts before lowercase.
        assert_eq!(names, ["Earth", "Mercury", "Venus", "terra"]);
        let order: Vec<_> = reg.in_registration_order().iter().map(|p| p.name()).collect();
        assert_eq!(order, ["Mercury", "Venus", "Earth", "terra"]);
        assert!(ptr::eq(reg.list(), reg.list()));
    }

    #[test]
    fn register_resets_listing() {
        let mut reg = Registry::build("Planet", [&VENUS, &MERCURY]).unwrap();
        assert_eq!(reg.list()[0].name(), "Mercury");
        reg.register(&EARTH).unwrap();
        assert_eq!(reg.list()[0].name(), "Earth");
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn concurrent_first_listing() {
        let reg = &planets();
        let listings: Vec<&[&'static Planet]> = thread::scope(|s| {
            let handles: Vec<_> = (0..8).map(|_| s.spawn(move || reg.list())).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for listing in &listings {
            assert!(ptr::eq(*listing, listings[0]));
            let names: Vec<_> = listing.iter().map(|p| p.name()).collect();
            assert_eq!(names, ["Earth", "Mercury", "Venus", "terra"]);
        }
    }

    #[test]
    fn value_lookup_is_first_wins() {
        let reg = planets();
        assert_eq!(reg.from_value(&3).unwrap().name(), "Earth");
        assert!(reg.try_from_value(&4).is_none());
        let err = reg.from_value(&99).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "no Planet with value \"99\" found");
        assert!(EARTH.same_value(&TERRA));
    }

    #[test]
    fn name_lookup() {
        let reg = planets();
        assert_eq!(reg.from_name("Venus").unwrap().value, 2);
        assert!(reg.try_from_name("venus").is_none());
        assert_eq!(reg.from_name_ignore_case("VENUS").unwrap().value, 2);
        assert_eq!(reg.from_name_ignore_case("Terra").unwrap().value, 3);
        assert!(reg.try_from_name("").is_none());
        assert!(reg.try_from_name_ignore_case("").is_none());
        assert_eq!(
            reg.from_name("Pluto").unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn case_collision_keeps_first() {
        let reg = Registry::build("Planet", [&EARTH, &EARTH_UPPER]).unwrap();
        assert_eq!(reg.from_name_ignore_case("earth").unwrap().value, 3);
        assert_eq!(reg.from_name("EARTH").unwrap().value, 31);
    }

    #[test]
    fn rejects_bad_names() {
        let err = Registry::build("Planet", [&EARTH, &DUP_EARTH]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateName);

        let mut reg = Registry::build("Planet", [&EARTH]).unwrap();
        assert!(reg.register(&DUP_EARTH).is_err());
        // A failed registration leaves the catalog untouched.
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.from_name("Earth").unwrap().value, 3);
        assert!(reg.try_from_value(&30).is_none());

        let err = reg.register(&NAMELESS).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    #[should_panic(expected = "duplicate name")]
    fn expect_valid_panics() {
        expect_valid(Registry::build("Planet", [&EARTH, &DUP_EARTH]));
    }
}
