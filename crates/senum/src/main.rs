//! Command‑line entry point for the `senum` tool.
//!
//! Inspects the built-in demo enum catalogs: list them, list their instances,
//! and resolve names or values through their registries.

use std::{fmt::Display, io, process};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// CLI command implementations.
mod cmd;
/// Demo enum catalogs.
mod demo;

use crate::demo::DemoEntry;

/// Resolve a catalog key against the known set.
fn parse_enum_name(s: &str) -> Result<&'static DemoEntry, String> {
    demo::find(s).ok_or_else(|| {
        format!(
            "Invalid enum name '{}'. Valid options: {}",
            s,
            demo::keys()
        )
    })
}

#[derive(Parser)]
#[command(name = "senum")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top‑level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
/// Subcommands supported by the `senum` tool.
enum Commands {
    #[command(name = "list-enums", about = "List the demo enums and their kinds")]
    /// List the demo catalogs.
    ListEnums,

    #[command(about = "List every instance of an enum")]
    /// List the instances of one catalog.
    List {
        #[arg(help = &format!("Enum name (options: {})", demo::keys()), value_parser = parse_enum_name)]
        /// Catalog to list.
        target: &'static DemoEntry,
    },

    #[command(about = "Look up an instance by name, or flags by a comma-separated name list")]
    /// Resolve names to instances.
    Name {
        #[arg(
            short = 'i',
            long = "ignore-case",
            help = "Match names case-insensitively"
        )]
        /// Compare names ignoring case.
        ignore_case: bool,

        #[arg(help = &format!("Enum name (options: {})", demo::keys()), value_parser = parse_enum_name)]
        /// Catalog to search.
        target: &'static DemoEntry,

        #[arg(help = "Name, or comma-separated names for flag enums")]
        /// Names to resolve.
        names: String,
    },

    #[command(about = "Look up an instance by value, decomposing flag values")]
    /// Resolve a value to instances.
    Value {
        #[arg(help = &format!("Enum name (options: {})", demo::keys()), value_parser = parse_enum_name)]
        /// Catalog to search.
        target: &'static DemoEntry,

        #[arg(allow_negative_numbers = true, help = "Value to resolve")]
        /// Raw value text.
        value: String,
    },
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Print the output of a handler or exit with an error.
fn report<T: Display>(result: Result<T>) {
    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

/// Handle the `list-enums` subcommand.
fn handle_list_enums() {
    println!("Demo enums (key: type (kind)):");
    for line in cmd::list_enums() {
        println!("- {line}");
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.v);

    match cli.command {
        Commands::ListEnums => handle_list_enums(),
        Commands::List { target } => report(cmd::list(target).map(|lines| lines.join("\n"))),
        Commands::Name {
            ignore_case,
            target,
            names,
        } => report(cmd::name(target, &names, ignore_case)),
        Commands::Value { target, value } => report(cmd::value(target, &value)),
    }
}
