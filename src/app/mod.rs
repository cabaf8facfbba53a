use crate::config::{CliConfig, Mode, OutputFormat};
use crate::core::adder::add_binary;
use crate::core::batch::{run_batch, BatchInput};
use crate::utils::error::Result;
use std::io::Write;

/// Runs the requested mode, writing the result to `out`.
///
/// Returns the process exit code: 0 on success, 1 when any batch pair was
/// rejected. Errors carry their own code via `AdderError::exit_code`.
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<i32> {
    match config.mode()? {
        Mode::Single { a, b } => {
            let sum = add_binary(a, b)?;
            match config.format {
                OutputFormat::Text => writeln!(out, "{}", sum)?,
                OutputFormat::Json => writeln!(
                    out,
                    "{}",
                    serde_json::json!({ "a": a, "b": b, "sum": sum })
                )?,
            }
            Ok(0)
        }
        Mode::Batch { input } => {
            tracing::info!("📂 Loading operand pairs from {}", input);
            let batch = BatchInput::from_file(input)?;
            let report = run_batch(&batch.pairs);

            match config.format {
                OutputFormat::Text => {
                    if !report.outcomes.is_empty() {
                        writeln!(out, "{}", report.to_text())?;
                    }
                }
                OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
            }

            Ok(if report.has_failures() { 1 } else { 0 })
        }
    }
}
