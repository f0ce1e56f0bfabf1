//! The greeting program.
//!
//! Output goes through whatever `Write` sink the caller hands in, so the process stdout
//! is only touched by [`main`]. Tests pass their own buffer instead of redirecting
//! anything global.

use log::debug;
use std::io::{self, Write};

/// The text written by the program, without its line terminator.
pub const GREETING: &str = "Hello World";

/// Writes [`GREETING`] followed by a line terminator to `out`.
///
/// `args` are accepted and ignored. The only error comes from the sink itself.
pub fn run<W: Write>(args: &[String], out: &mut W) -> io::Result<()> {
    debug!("Ignoring {} argument(s): '{:?}'", args.len(), args);
    writeln!(out, "{GREETING}")?;
    out.flush()?;
    debug!("Greeting written");
    Ok(())
}

/// Program entry point: [`run`] against the process stdout.
pub fn main(args: &[String]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run(args, &mut handle)
}
