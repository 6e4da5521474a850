//! Declare a plain smart enum and look instances up by name and value.

use std::error::Error;

use smartenum::{SmartEnum, smart_enum};

smart_enum! {
    /// Order lifecycle states.
    pub struct OrderStatus: i32 {
        Pending = 1,
        Shipped = 2,
        Delivered = 3,
        Cancelled = 4,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    for status in OrderStatus::list() {
        println!("{status} = {}", status.value());
    }

    let shipped = OrderStatus::from_name_ignore_case("shipped")?;
    assert_eq!(shipped, &OrderStatus::Shipped);
    println!("Parsed {shipped} from \"shipped\"");

    match OrderStatus::from_value(&9) {
        Ok(status) => println!("Unexpected status {status}"),
        Err(e) => println!("Lookup failed: {e}"),
    }

    Ok(())
}
