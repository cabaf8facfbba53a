use crate::core::adder::add_binary;
use crate::domain::model::{BatchReport, OperandPair, PairOutcome};
use crate::utils::error::{AdderError, Result};
use crate::utils::validation::{validate_file_extension, validate_path};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["csv", "toml"];

/// Operand pairs loaded from a batch file.
///
/// CSV files carry a header row with `a` and `b` columns. TOML files list
/// `[[pairs]]` tables with `a` and `b` keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchInput {
    #[serde(default)]
    pub pairs: Vec<OperandPair>,
}

impl BatchInput {
    /// 依副檔名選擇格式載入
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy();
        validate_path("input", &path_str)?;
        let extension = validate_file_extension("input", &path_str, &SUPPORTED_EXTENSIONS)?;

        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Read {} bytes from {}", content.len(), path_str);

        match extension.as_str() {
            "csv" => Self::from_csv_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    pub fn from_csv_str(content: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let pairs = reader
            .deserialize()
            .collect::<std::result::Result<Vec<OperandPair>, csv::Error>>()?;

        Ok(Self { pairs })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| AdderError::ParseError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// Adds every pair. A pair that fails validation records its error and the
/// rest of the batch still runs.
pub fn run_batch(pairs: &[OperandPair]) -> BatchReport {
    let mut report = BatchReport::default();

    for (index, pair) in pairs.iter().enumerate() {
        let outcome = match add_binary(&pair.a, &pair.b) {
            Ok(sum) => {
                report.succeeded += 1;
                PairOutcome {
                    a: pair.a.clone(),
                    b: pair.b.clone(),
                    sum: Some(sum),
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!("Pair #{} rejected: {}", index + 1, e);
                report.failed += 1;
                PairOutcome {
                    a: pair.a.clone(),
                    b: pair.b.clone(),
                    sum: None,
                    error: Some(e.to_string()),
                }
            }
        };
        report.outcomes.push(outcome);
    }

    tracing::info!(
        "Batch finished: {} succeeded, {} failed",
        report.succeeded,
        report.failed
    );
    report
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_text(&self) -> String {
        self.outcomes
            .iter()
            .map(|o| match (&o.sum, &o.error) {
                (Some(sum), _) => format!("{} + {} = {}", o.a, o.b, sum),
                (None, Some(error)) => format!("{} + {}: error: {}", o.a, o.b, error),
                (None, None) => format!("{} + {}: no result", o.a, o.b),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
