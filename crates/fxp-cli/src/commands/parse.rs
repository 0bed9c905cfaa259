//! Parse and from-raw commands.
//!
//! Both print the full breakdown of a single value: decimal, raw integer,
//! hex bit pattern and the nearest `f64`.

use anyhow::Result;
use fxp_core::Fixed;
use tracing::debug;

use super::{Settings, parse_raw, raw_repr};
use crate::{FromRawArgs, ParseArgs};

/// Runs the parse command.
pub fn run(args: ParseArgs, settings: &Settings) -> Result<()> {
    let value = settings.parse(&args.value, "value")?;
    debug!(input = %args.value, raw = value.to_bits(), "parsed");
    describe(value, settings);
    Ok(())
}

/// Runs the from-raw command.
pub fn run_from_raw(args: FromRawArgs, settings: &Settings) -> Result<()> {
    let raw = parse_raw(&args.raw)?;
    debug!(raw, "from raw");
    describe(Fixed::from_bits(raw), settings);
    Ok(())
}

fn describe(value: Fixed, settings: &Settings) {
    println!("value: {}", settings.show(value));
    println!("{}", raw_repr(value));
    println!("f64:   {}", value.to_f64());
    if settings.verbose {
        println!("int:   {}", value.to_int());
        println!("fract: {}", settings.show(value.fract()));
    }
}
