//! Binary arithmetic command.

use std::str::FromStr;

use anyhow::{Context, Result, bail};
use fxp_core::Fixed;
use tracing::debug;

use super::Settings;
use crate::EvalArgs;

/// Operators accepted by `fxp eval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Min,
    Max,
}

impl FromStr for Op {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "+" | "add" => Op::Add,
            "-" | "sub" => Op::Sub,
            "*" | "x" | "mul" => Op::Mul,
            "/" | "div" => Op::Div,
            "%" | "rem" => Op::Rem,
            "min" => Op::Min,
            "max" => Op::Max,
            other => bail!("Unknown operator: {other} (expected + - * x / % min max)"),
        })
    }
}

impl Op {
    /// Applies the operator. Division and remainder by zero are errors.
    pub fn apply(self, a: Fixed, b: Fixed) -> fxp_core::Result<Fixed> {
        Ok(match self {
            Op::Add => a + b,
            Op::Sub => a - b,
            Op::Mul => a * b,
            Op::Div => a.try_div(b)?,
            Op::Rem => a.try_rem(b)?,
            Op::Min => a.min(b),
            Op::Max => a.max(b),
        })
    }
}

/// Runs the eval command.
pub fn run(args: EvalArgs, settings: &Settings) -> Result<()> {
    let a = settings.parse(&args.a, "left operand")?;
    let op: Op = args.op.parse()?;
    let b = settings.parse(&args.b, "right operand")?;
    debug!(?op, a = a.to_bits(), b = b.to_bits(), "eval");

    let result = op
        .apply(a, b)
        .with_context(|| format!("Cannot evaluate {} {} {}", args.a, args.op, args.b))?;
    settings.print(result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_parse() {
        assert_eq!("x".parse::<Op>().unwrap(), Op::Mul);
        assert_eq!("*".parse::<Op>().unwrap(), Op::Mul);
        assert_eq!("%".parse::<Op>().unwrap(), Op::Rem);
        assert!("^".parse::<Op>().is_err());
    }

    #[test]
    fn test_apply() {
        let five = Fixed::from(5);
        let two = Fixed::TWO;
        assert_eq!(Op::Div.apply(five, two).unwrap().to_f64(), 2.5);
        assert_eq!(Op::Rem.apply(five, two).unwrap(), Fixed::ONE);
        assert_eq!(Op::Max.apply(five, two).unwrap(), five);
        assert!(Op::Div.apply(five, Fixed::ZERO).is_err());
        assert!(Op::Rem.apply(five, Fixed::ZERO).is_err());
    }
}
