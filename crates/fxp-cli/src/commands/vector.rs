//! 3D vector command.
//!
//! Vectors are written `(x, y, z)` or `x,y,z` and always use `.` as the
//! decimal separator, since `,` separates components.

use anyhow::{Context, Result, bail};
use fxp_math::FVec3;
use tracing::debug;

use super::Settings;
use crate::{VecArgs, VecOp};

fn parse_vec(text: &str) -> Result<FVec3> {
    text.parse::<FVec3>()
        .with_context(|| format!("Invalid vector: {text}"))
}

/// Runs the vec command.
pub fn run(args: VecArgs, settings: &Settings) -> Result<()> {
    let a = parse_vec(&args.a)?;
    let b = args.b.as_deref().map(parse_vec).transpose()?;
    debug!(op = ?args.op, %a, "vec");

    match (args.op, b) {
        (VecOp::Length, _) => settings.print(a.length()),
        (VecOp::Normalize, _) => {
            let n = a
                .try_normalize()
                .with_context(|| format!("Cannot normalize {a}"))?;
            print_vec(n, settings);
        }
        (VecOp::Dot, Some(b)) => settings.print(a.dot(b)),
        (VecOp::Cross, Some(b)) => print_vec(a.cross(b), settings),
        (VecOp::Add, Some(b)) => print_vec(a + b, settings),
        (VecOp::Sub, Some(b)) => print_vec(a - b, settings),
        (VecOp::Distance, Some(b)) => settings.print(a.distance(b)),
        (op, None) => bail!("{op:?} needs a second vector"),
    }
    Ok(())
}

fn print_vec(v: FVec3, settings: &Settings) {
    match settings.precision {
        Some(p) => println!("{v:.p$}"),
        None => println!("{v}"),
    }
    if settings.verbose {
        for (axis, c) in ["x", "y", "z"].iter().zip(v.to_array()) {
            println!("  {axis}: {}", super::raw_repr(c));
        }
    }
}
