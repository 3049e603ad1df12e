//! Argument parsing shared by the converter binaries.

use std::ffi::OsString;
use std::path::Path;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;

/// Parse the process arguments, printing `Usage: <program> <usage>` to stdout and
/// exiting with status 1 when a required argument is missing.
///
/// Help, version and other clap errors exit the way clap reports them.
pub fn parse_or_usage<P: Parser>(usage: &str) -> P {
    let args: Vec<OsString> = std::env::args_os().collect();

    match P::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            let program = program_name(args.first().map(Path::new));
            println!("{}", usage_line(&program, usage));
            process::exit(1);
        }
        Err(e) => e.exit(),
    }
}

/// File name of the invoked program, falling back to the package name.
pub fn program_name(argv0: Option<&Path>) -> String {
    argv0
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

pub fn usage_line(program: &str, usage: &str) -> String {
    format!("Usage: {} {}", program, usage)
}
