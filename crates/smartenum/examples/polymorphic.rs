//! Attach per-instance behavior through a shared capability handle.

use std::{error::Error, sync::LazyLock};

use smartenum::{Instance, Registry, SmartEnum, registry::expect_valid};

/// Shipping cost rule.
trait Pricing: Sync {
    /// Cost in cents for a parcel of `grams`.
    fn cost(&self, grams: u32) -> u32;
}

/// Flat fee regardless of weight.
struct Flat(u32);

impl Pricing for Flat {
    fn cost(&self, _grams: u32) -> u32 {
        self.0
    }
}

/// Base fee plus a per-kilogram rate.
struct Weighted {
    /// Base fee in cents.
    base: u32,
    /// Cents per started kilogram.
    per_kg: u32,
}

impl Pricing for Weighted {
    fn cost(&self, grams: u32) -> u32 {
        self.base + self.per_kg * grams.div_ceil(1000)
    }
}

/// A shipping method with its own pricing rule.
struct Shipping {
    /// Instance name.
    name: &'static str,
    /// Underlying value.
    value: u8,
    /// Pricing behavior.
    pricing: &'static dyn Pricing,
}

/// Fixed-price letter post.
static LETTER: Shipping = Shipping {
    name: "Letter",
    value: 1,
    pricing: &Flat(120),
};

/// Weight-priced parcel post.
static PARCEL: Shipping = Shipping {
    name: "Parcel",
    value: 2,
    pricing: &Weighted {
        base: 450,
        per_kg: 200,
    },
};

impl Instance for Shipping {
    type Value = u8;

    fn name(&self) -> &str {
        self.name
    }

    fn value(&self) -> &u8 {
        &self.value
    }
}

impl SmartEnum for Shipping {
    fn registry() -> &'static Registry<Self> {
        static REGISTRY: LazyLock<Registry<Shipping>> =
            LazyLock::new(|| expect_valid(Registry::build("Shipping", [&LETTER, &PARCEL])));
        &REGISTRY
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    for method in Shipping::list() {
        println!("{}: {} cents for 2.5kg", method.name, method.pricing.cost(2500));
    }

    let parcel = Shipping::from_value(&2)?;
    assert_eq!(parcel.pricing.cost(1000), 650);

    Ok(())
}
