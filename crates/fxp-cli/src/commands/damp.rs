//! Damped spring command.
//!
//! Iterates `smooth_damp` and prints position and velocity after each step,
//! which makes it easy to compare traces across machines.

use anyhow::Result;
use fxp_core::{Fixed, smooth_damp_max_speed};
use tracing::{debug, info};

use super::Settings;
use crate::DampArgs;

/// Runs the damp command.
pub fn run(args: DampArgs, settings: &Settings) -> Result<()> {
    let mut position = settings.parse(&args.current, "current")?;
    let target = settings.parse(&args.target, "target")?;
    let smooth_time = settings.parse(&args.smooth_time, "smooth time")?;
    let dt = settings.parse(&args.dt, "time step")?;
    let mut velocity = settings.parse(&args.velocity, "velocity")?;
    let max_speed = match &args.max_speed {
        Some(text) => settings.parse(text, "max speed")?,
        None => Fixed::MAX,
    };

    debug!(
        smooth_time = %smooth_time,
        dt = %dt,
        steps = args.steps,
        "damp"
    );

    println!("{:>5}  {:>24}  {:>24}", "step", "position", "velocity");
    for step in 1..=args.steps {
        (position, velocity) =
            smooth_damp_max_speed(position, target, velocity, max_speed, smooth_time, dt);
        println!(
            "{:>5}  {:>24}  {:>24}",
            step,
            settings.show(position),
            settings.show(velocity)
        );
        if position == target && velocity.is_zero() {
            info!(step, "reached target");
            break;
        }
    }
    if settings.verbose {
        println!("final {}", super::raw_repr(position));
    }
    Ok(())
}
