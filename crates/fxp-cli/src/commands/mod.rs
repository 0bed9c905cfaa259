//! CLI command implementations

pub mod damp;
pub mod eval;
pub mod interp;
pub mod parse;
pub mod round;
pub mod sqrt;
pub mod vector;

use anyhow::{Context, Result, bail};
use fxp_core::{Fixed, NumberFormat};

/// Output and locale settings shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    /// Separators used for parsing operands and printing results
    pub format: NumberFormat,
    /// Exact number of decimal places, or shortest round-trip when `None`
    pub precision: Option<usize>,
    /// Print raw bits alongside values
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: NumberFormat::INVARIANT,
            precision: None,
            verbose: false,
        }
    }
}

impl Settings {
    /// Rejects separator combinations that would make literals ambiguous.
    pub fn validate(&self) -> Result<()> {
        let dec = self.format.decimal_separator;
        if dec.is_ascii_digit() || dec == '-' || dec == '+' {
            bail!("decimal separator {dec:?} cannot be a digit or sign");
        }
        if let Some(group) = self.format.group_separator {
            if group == dec {
                bail!("group separator {group:?} is the same as the decimal separator");
            }
            if group.is_ascii_digit() || group == '-' || group == '+' {
                bail!("group separator {group:?} cannot be a digit or sign");
            }
        }
        Ok(())
    }

    /// Parses an operand with the configured separators.
    pub fn parse(&self, text: &str, what: &str) -> Result<Fixed> {
        Fixed::parse_with(text, &self.format).with_context(|| format!("Invalid {what}: {text}"))
    }

    /// Formats a value with the configured separators and precision.
    pub fn show(&self, value: Fixed) -> String {
        let shown = value.display_with(self.format);
        match self.precision {
            Some(p) => format!("{shown:.p$}"),
            None => shown.to_string(),
        }
    }

    /// Prints a result line, with the raw bits when verbose.
    pub fn print(&self, value: Fixed) {
        if self.verbose {
            println!("{}  [{}]", self.show(value), raw_repr(value));
        } else {
            println!("{}", self.show(value));
        }
    }
}

/// Raw integer as decimal and zero-padded two's complement hex.
pub fn raw_repr(value: Fixed) -> String {
    let raw = value.to_bits();
    format!("raw {raw} = {:#018x}", raw as u64)
}

/// Parses a raw integer: signed decimal, or a `0x` hex 64-bit pattern.
pub fn parse_raw(text: &str) -> Result<i64> {
    let text = text.trim();
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        let hex: String = hex.chars().filter(|&c| c != '_').collect();
        let bits = u64::from_str_radix(&hex, 16)
            .with_context(|| format!("Invalid hex raw value: {text}"))?;
        // Hex is a bit pattern; reinterpret as two's complement.
        let raw = bits as i64;
        return Ok(if negative { raw.wrapping_neg() } else { raw });
    }
    text.parse::<i64>()
        .with_context(|| format!("Invalid raw value: {text}"))
}
