//! fxp - Q32.32 fixed-point calculator
//!
//! Parses, evaluates and inspects deterministic fixed-point values, showing
//! the exact raw bits behind every result.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use fxp_core::{NumberFormat, Rounding};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::Settings;

#[derive(Parser)]
#[command(name = "fxp")]
#[command(author, version, about = "Q32.32 fixed-point calculator")]
#[command(long_about = "
Inspect and evaluate deterministic Q32.32 fixed-point values.
Every result is printed as the shortest exact decimal; --verbose adds
the raw 64-bit representation.

Examples:
  fxp parse 0.1                         # Nearest representable value
  fxp eval 5 / 2                        # Arithmetic
  fxp eval 1.5 x 4 -p 3                 # Multiply, 3 decimal places
  fxp sqrt 2 -v                         # Square root with raw bits
  fxp round -2.5 --mode even
  fxp smoothstep 0 1 0.25
  fxp damp 0 10 --smooth-time 0.5 --dt 0.1 --steps 20
  fxp from-raw 0x0000000180000000
  fxp vec cross '(1, 0, 0)' '(0, 1, 0)'
  fxp --decimal-separator , --group-separator . parse 1.234,5
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (raw bits, debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Fixed number of decimal places for printed values
    #[arg(short, long, global = true)]
    precision: Option<usize>,

    /// Decimal separator for parsing and printing
    #[arg(long, global = true, default_value_t = '.')]
    decimal_separator: char,

    /// Digit group separator for parsing and printing
    #[arg(long, global = true)]
    group_separator: Option<char>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a decimal literal and show the stored value
    #[command(visible_alias = "p")]
    Parse(ParseArgs),

    /// Evaluate a binary operation: + - * x / % min max
    #[command(visible_alias = "e")]
    Eval(EvalArgs),

    /// Square root
    Sqrt(UnaryArgs),

    /// Inverse square root 1/sqrt(x)
    #[command(name = "inv-sqrt")]
    InvSqrt(UnaryArgs),

    /// Round to an integer
    Round(RoundArgs),

    /// Linear interpolation a + (b - a) * t
    Lerp(LerpArgs),

    /// Hermite smoothstep between two edges
    Smoothstep(SmoothstepArgs),

    /// Iterate a damped spring toward a target
    Damp(DampArgs),

    /// Interpret a raw 64-bit integer (decimal or 0x hex)
    #[command(name = "from-raw")]
    FromRaw(FromRawArgs),

    /// 3D vector operations
    #[command(visible_alias = "v")]
    Vec(VecArgs),
}

#[derive(Args)]
struct ParseArgs {
    /// Decimal literal
    #[arg(allow_hyphen_values = true)]
    value: String,
}

#[derive(Args)]
struct EvalArgs {
    /// Left operand
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// Operator
    #[arg(allow_hyphen_values = true)]
    op: String,

    /// Right operand
    #[arg(allow_hyphen_values = true)]
    b: String,
}

#[derive(Args)]
struct UnaryArgs {
    /// Operand
    #[arg(allow_hyphen_values = true)]
    value: String,
}

/// Rounding mode names accepted on the command line.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum RoundMode {
    Floor,
    Ceil,
    #[default]
    Nearest,
    Even,
    Trunc,
}

impl From<RoundMode> for Rounding {
    fn from(mode: RoundMode) -> Self {
        match mode {
            RoundMode::Floor => Rounding::Floor,
            RoundMode::Ceil => Rounding::Ceil,
            RoundMode::Nearest => Rounding::Nearest,
            RoundMode::Even => Rounding::NearestEven,
            RoundMode::Trunc => Rounding::Trunc,
        }
    }
}

#[derive(Args)]
struct RoundArgs {
    /// Value to round
    #[arg(allow_hyphen_values = true)]
    value: String,

    /// Rounding mode
    #[arg(short, long, value_enum, default_value_t)]
    mode: RoundMode,
}

#[derive(Args)]
struct LerpArgs {
    /// Start value
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// End value
    #[arg(allow_hyphen_values = true)]
    b: String,

    /// Interpolation factor (not clamped)
    #[arg(allow_hyphen_values = true)]
    t: String,
}

#[derive(Args)]
struct SmoothstepArgs {
    /// Lower edge
    #[arg(allow_hyphen_values = true)]
    edge0: String,

    /// Upper edge
    #[arg(allow_hyphen_values = true)]
    edge1: String,

    /// Input value
    #[arg(allow_hyphen_values = true)]
    x: String,
}

#[derive(Args)]
struct DampArgs {
    /// Starting position
    #[arg(allow_hyphen_values = true)]
    current: String,

    /// Target position
    #[arg(allow_hyphen_values = true)]
    target: String,

    /// Approximate time to reach the target
    #[arg(short, long, default_value = "0.3")]
    smooth_time: String,

    /// Time step per iteration
    #[arg(short, long, default_value = "0.0166666667")]
    dt: String,

    /// Number of iterations
    #[arg(short = 'n', long, default_value_t = 10)]
    steps: usize,

    /// Initial velocity
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    velocity: String,

    /// Maximum speed (unlimited when omitted)
    #[arg(long)]
    max_speed: Option<String>,
}

#[derive(Args)]
struct FromRawArgs {
    /// Raw integer: decimal i64, or 0x-prefixed 64-bit pattern
    #[arg(allow_hyphen_values = true)]
    raw: String,
}

/// Vector operations for `fxp vec`.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum VecOp {
    Length,
    Normalize,
    Dot,
    Cross,
    Add,
    Sub,
    Distance,
}

#[derive(Args)]
struct VecArgs {
    /// Operation
    #[arg(value_enum)]
    op: VecOp,

    /// First vector, e.g. "(1, 2, 3)"
    #[arg(allow_hyphen_values = true)]
    a: String,

    /// Second vector for binary operations
    #[arg(allow_hyphen_values = true)]
    b: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "fxp=debug,fxp_core=debug" } else { "fxp=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings {
        format: NumberFormat::new(cli.decimal_separator).with_group_separator(cli.group_separator),
        precision: cli.precision,
        verbose: cli.verbose,
    };
    settings.validate()?;

    match cli.command {
        Commands::Parse(args) => commands::parse::run(args, &settings),
        Commands::Eval(args) => commands::eval::run(args, &settings),
        Commands::Sqrt(args) => commands::sqrt::run_sqrt(args, &settings),
        Commands::InvSqrt(args) => commands::sqrt::run_inv_sqrt(args, &settings),
        Commands::Round(args) => commands::round::run(args, &settings),
        Commands::Lerp(args) => commands::interp::run_lerp(args, &settings),
        Commands::Smoothstep(args) => commands::interp::run_smoothstep(args, &settings),
        Commands::Damp(args) => commands::damp::run(args, &settings),
        Commands::FromRaw(args) => commands::parse::run_from_raw(args, &settings),
        Commands::Vec(args) => commands::vector::run(args, &settings),
    }
}
