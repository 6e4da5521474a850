//! Dispatch on smart enum instances with the fluent switch.

use smartenum::{SmartEnum, smart_enum, switch_on};

smart_enum! {
    /// Log severities.
    pub struct Severity: u8 {
        Debug = 0,
        Info = 1,
        Warning = 2,
        Error = 3,
    }
}

/// Describe how a severity is handled.
fn action(severity: &Severity) -> &'static str {
    let mut action = "ignore";
    switch_on(severity)
        .when_any([&Severity::Warning, &Severity::Error])
        .then(|| action = "alert")
        .when(&Severity::Info)
        .then(|| action = "record")
        .default(|| action = "drop");
    action
}

fn main() {
    for severity in Severity::list() {
        println!("{severity}: {}", action(severity));
    }
}
