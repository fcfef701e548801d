//! Prints a handful of canonical rationals, then shows the failure path for a
//! zero denominator on stderr.

use exact_rational::{Rational64, RationalError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RationalError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let r1 = Rational64::new(2, 4)?;
    println!("{r1}");

    let r2 = Rational64::from(3);
    println!("{r2}");

    let r3 = Rational64::from(0);
    println!("{r3}");

    println!("{}", r1 * r2);
    println!("{}", Rational64::new(5, 4)? + 3);
    println!("{}", 3 * Rational64::new(1, 2)?);

    if let Err(err) = Rational64::new(3, 0) {
        eprintln!("{err}");
    }

    Ok(())
}
