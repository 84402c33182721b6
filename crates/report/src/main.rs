//! Prints midpoint, trapezoid, and Simpson approximations of ∫[0,4] sin(x²) dx
//! for n = 10, 100, and 1000.
//!
//! Diagnostic logging goes to stderr and is controlled by `RUST_LOG`:
//!
//! ```sh
//! RUST_LOG=debug cargo run -p riemann-report
//! ```

use std::io::{self, Write};

use log::debug;
use riemann_core::SineOfSquare;
use riemann_report::{Config, Error, Report};

fn main() -> Result<(), Error> {
    env_logger::init();
    debug!("Logging configured from environment variables");

    let report = Report::compute(&SineOfSquare, &Config::default())?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{report}")?;
    stdout.flush()?;

    Ok(())
}
