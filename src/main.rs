// File: src/main.rs

use std::io::{self, Read, Write};
use std::process::ExitCode;

use tracejson::convert_to_writer;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Whole input first, whole output last. No flags, no arguments.
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    convert_to_writer(&input, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tracejson: {e}");
            ExitCode::FAILURE
        }
    }
}
