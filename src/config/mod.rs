use crate::core::batch::SUPPORTED_EXTENSIONS;
use crate::utils::error::{AdderError, Result};
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "binary-adder")]
#[command(about = "Add binary numbers given as strings of '0' and '1'")]
pub struct CliConfig {
    #[arg(help = "First operand, e.g. 1010", conflicts_with = "input")]
    pub a: Option<String>,

    #[arg(help = "Second operand, e.g. 1011", conflicts_with = "input")]
    pub b: Option<String>,

    #[arg(long, short, help = "Batch file of operand pairs (.csv or .toml)")]
    pub input: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

/// What the CLI has been asked to do, once the arguments have been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode<'a> {
    Single { a: &'a str, b: &'a str },
    Batch { input: &'a str },
}

impl CliConfig {
    pub fn mode(&self) -> Result<Mode<'_>> {
        match (&self.input, &self.a, &self.b) {
            (Some(input), None, None) => Ok(Mode::Batch {
                input: input.as_str(),
            }),
            (None, Some(a), Some(b)) => Ok(Mode::Single {
                a: a.as_str(),
                b: b.as_str(),
            }),
            (Some(_), _, _) => Err(AdderError::ConfigError {
                message: "--input cannot be combined with positional operands".to_string(),
            }),
            (None, _, _) => Err(AdderError::ConfigError {
                message: "expected two operands or --input <FILE>".to_string(),
            }),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Mode::Batch { input } = self.mode()? {
            let as_config_error = |e: AdderError| AdderError::ConfigError {
                message: e.to_string(),
            };
            validate_path("input", input).map_err(as_config_error)?;
            validate_file_extension("input", input, &SUPPORTED_EXTENSIONS)
                .map_err(as_config_error)?;
        }
        Ok(())
    }
}
