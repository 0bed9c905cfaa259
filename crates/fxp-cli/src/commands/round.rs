//! Round command.

use anyhow::Result;
use fxp_core::Rounding;
use tracing::debug;

use super::Settings;
use crate::RoundArgs;

/// Runs the round command.
pub fn run(args: RoundArgs, settings: &Settings) -> Result<()> {
    let value = settings.parse(&args.value, "value")?;
    let mode = Rounding::from(args.mode);
    let rounded = value.round_with(mode);
    debug!(?mode, raw = value.to_bits(), "round");
    settings.print(rounded);
    Ok(())
}
