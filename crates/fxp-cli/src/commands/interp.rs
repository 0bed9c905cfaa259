//! Interpolation commands (lerp, smoothstep).

use anyhow::Result;
use fxp_core::{lerp, smoothstep};
use tracing::debug;

use super::Settings;
use crate::{LerpArgs, SmoothstepArgs};

/// Runs the lerp command.
pub fn run_lerp(args: LerpArgs, settings: &Settings) -> Result<()> {
    let a = settings.parse(&args.a, "start")?;
    let b = settings.parse(&args.b, "end")?;
    let t = settings.parse(&args.t, "factor")?;
    debug!(a = a.to_bits(), b = b.to_bits(), t = t.to_bits(), "lerp");
    settings.print(lerp(a, b, t));
    Ok(())
}

/// Runs the smoothstep command.
pub fn run_smoothstep(args: SmoothstepArgs, settings: &Settings) -> Result<()> {
    let e0 = settings.parse(&args.edge0, "edge0")?;
    let e1 = settings.parse(&args.edge1, "edge1")?;
    let x = settings.parse(&args.x, "x")?;
    if e0 == e1 {
        debug!("equal edges, smoothstep degenerates to step");
    }
    settings.print(smoothstep(e0, e1, x));
    Ok(())
}
