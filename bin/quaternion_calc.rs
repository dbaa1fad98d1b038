//! Quaternion Calculator Binary
//!
//! Evaluates one quaternion operation on operands given on the command line and
//! prints the result in the `"t + ui + vj + wk"` form.
//!
//! Operands are written either as a comma-separated list of 1, 2 or 4
//! components (real, complex, full) or in the rendered form.
//!
//! # Usage
//! ```bash
//! cargo run --bin quaternion_calc -- mul -a 1,2,3,4 -b 1,2,3,4
//! cargo run --bin quaternion_calc -- div -a "1 + 2i + 3j + 4k" -b 0,1
//! cargo run --bin quaternion_calc -- scale -a -1,2,-3,4 --scalar 0.5
//! cargo run --bin quaternion_calc -- norm -a 1,2,3,4 --precision 3
//!
//! # Show the operands and rejected divisions:
//! cargo run --bin quaternion_calc -- inverse -a 0 --verbose
//! ```

use clap::{Parser, ValueEnum};
use quaternion_algebra::quaternion::{conjugate, inverse, norm};
use quaternion_algebra::{
    Quaternion64, QuaternionError, QuaternionResult, init_logger, init_logger_with_level,
};
use std::error::Error;
use std::fmt;
use tracing::{Level, debug, error, info};

/// Operation to evaluate
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Operation {
    /// lhs + rhs
    Add,
    /// lhs - rhs
    Sub,
    /// Hamilton product lhs * rhs
    Mul,
    /// lhs * rhs⁻¹
    Div,
    /// lhs * scalar
    Scale,
    /// lhs / scalar
    DivScalar,
    /// -lhs
    Neg,
    /// |lhs|
    Norm,
    /// Conjugate of lhs
    Conjugate,
    /// Inverse of lhs
    Inverse,
    /// Exact equality of lhs and rhs
    Equal,
}

impl Operation {
    fn needs_rhs(self) -> bool {
        matches!(
            self,
            Operation::Add | Operation::Sub | Operation::Mul | Operation::Div | Operation::Equal
        )
    }

    fn needs_scalar(self) -> bool {
        matches!(self, Operation::Scale | Operation::DivScalar)
    }
}

/// Evaluate quaternion algebra from the command line
#[derive(Parser)]
#[command(name = "quaternion_calc")]
#[command(about = "Evaluate quaternion operations")]
struct Args {
    /// Operation to evaluate
    #[arg(value_enum)]
    operation: Operation,

    /// Left operand, e.g. "1,2,3,4" or "1 + 2i + 3j + 4k"
    #[arg(short = 'a', long, allow_hyphen_values = true)]
    lhs: String,

    /// Right operand for add, sub, mul, div and equal
    #[arg(short = 'b', long, allow_hyphen_values = true)]
    rhs: Option<String>,

    /// Scalar for scale and div-scalar
    #[arg(short, long, allow_hyphen_values = true)]
    scalar: Option<String>,

    /// Number of decimals to print
    #[arg(short, long)]
    precision: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Result of an evaluated operation
#[derive(Debug, Clone, Copy, PartialEq)]
enum Outcome {
    Quaternion(Quaternion64),
    Scalar(f64),
    Bool(bool),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, f.precision()) {
            (Outcome::Quaternion(q), Some(p)) => write!(f, "{q:.p$}"),
            (Outcome::Quaternion(q), None) => write!(f, "{q}"),
            (Outcome::Scalar(x), Some(p)) => write!(f, "{x:.p$}"),
            (Outcome::Scalar(x), None) => write!(f, "{x}"),
            (Outcome::Bool(b), _) => write!(f, "{b}"),
        }
    }
}

fn evaluate(
    operation: Operation,
    lhs: Quaternion64,
    rhs: Option<Quaternion64>,
    scalar: Option<f64>,
) -> QuaternionResult<Outcome> {
    let rhs = || {
        rhs.ok_or_else(|| {
            QuaternionError::InvalidInput(format!("{operation:?} needs a right operand"))
        })
    };
    let scalar = || {
        scalar.ok_or_else(|| {
            QuaternionError::InvalidInput(format!("{operation:?} needs --scalar"))
        })
    };

    let outcome = match operation {
        Operation::Add => Outcome::Quaternion(lhs + rhs()?),
        Operation::Sub => Outcome::Quaternion(lhs - rhs()?),
        Operation::Mul => Outcome::Quaternion(lhs * rhs()?),
        Operation::Div => Outcome::Quaternion((lhs / rhs()?)?),
        Operation::Scale => Outcome::Quaternion(lhs * scalar()?),
        Operation::DivScalar => Outcome::Quaternion((lhs / scalar()?)?),
        Operation::Neg => Outcome::Quaternion(-lhs),
        Operation::Norm => Outcome::Scalar(norm(&lhs)),
        Operation::Conjugate => Outcome::Quaternion(conjugate(&lhs)),
        Operation::Inverse => Outcome::Quaternion(inverse(&lhs)?),
        Operation::Equal => Outcome::Bool(lhs == rhs()?),
    };

    Ok(outcome)
}

fn run(args: &Args) -> QuaternionResult<Outcome> {
    let lhs: Quaternion64 = args.lhs.parse()?;
    let rhs = args
        .rhs
        .as_deref()
        .map(str::parse::<Quaternion64>)
        .transpose()?;
    let scalar = args
        .scalar
        .as_deref()
        .map(|s| s.trim().parse::<f64>())
        .transpose()?;

    if rhs.is_some() && !args.operation.needs_rhs() {
        debug!("Ignoring right operand for {:?}", args.operation);
    }
    if scalar.is_some() && !args.operation.needs_scalar() {
        debug!("Ignoring --scalar for {:?}", args.operation);
    }

    debug!("lhs    = {}", lhs);
    if let Some(rhs) = rhs {
        debug!("rhs    = {}", rhs);
    }
    if let Some(scalar) = scalar {
        debug!("scalar = {}", scalar);
    }

    evaluate(args.operation, lhs, rhs, scalar)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if args.verbose {
        init_logger_with_level(Level::DEBUG);
    } else {
        init_logger();
    }

    match run(&args) {
        Ok(outcome) => {
            let rendered = match args.precision {
                Some(p) => format!("{outcome:.p$}"),
                None => outcome.to_string(),
            };
            info!("{:?} = {}", args.operation, rendered);
            println!("{rendered}");
            Ok(())
        }
        Err(e) => {
            error!("{:?} failed", args.operation);
            error!("Error: {}", e);
            Err(e.into())
        }
    }
}
