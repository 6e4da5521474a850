//! Compose, decompose and parse flag enum values.

use std::error::Error;

use smartenum::{SmartFlagEnum, smart_flag_enum};

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

fn main() -> Result<(), Box<dyn Error>> {
    let granted = Permissions::Read | Permissions::Write | Permissions::Execute;
    println!("granted = {granted}: {}", Permissions::from_value_to_string(granted)?);

    let parsed = Permissions::from_names_ignore_case("read, delete")?;
    let value = Permissions::combine(parsed);
    println!("\"read, delete\" = {value}");

    println!("all = {}", Permissions::from_value_to_string(u32::MAX)?);

    if let Err(e) = Permissions::from_value(32) {
        println!("32 rejected: {e}");
    }

    Ok(())
}
