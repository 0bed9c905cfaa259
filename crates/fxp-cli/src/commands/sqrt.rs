//! Square root commands.

use anyhow::{Context, Result};
use tracing::debug;

use super::Settings;
use crate::UnaryArgs;

/// Runs the sqrt command.
pub fn run_sqrt(args: UnaryArgs, settings: &Settings) -> Result<()> {
    let value = settings.parse(&args.value, "value")?;
    let root = value
        .sqrt()
        .with_context(|| format!("Cannot take sqrt of {}", args.value))?;
    debug!(raw = value.to_bits(), root = root.to_bits(), "sqrt");
    settings.print(root);
    Ok(())
}

/// Runs the inv-sqrt command.
pub fn run_inv_sqrt(args: UnaryArgs, settings: &Settings) -> Result<()> {
    let value = settings.parse(&args.value, "value")?;
    let inv = value
        .inv_sqrt()
        .with_context(|| format!("Cannot take inverse sqrt of {}", args.value))?;
    debug!(raw = value.to_bits(), inv = inv.to_bits(), "inv_sqrt");
    settings.print(inv);
    Ok(())
}
