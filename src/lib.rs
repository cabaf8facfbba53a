#[cfg(feature = "cli")]
pub mod app;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Mode, OutputFormat};

pub use crate::core::{
    adder::add_binary,
    batch::{run_batch, BatchInput},
};
pub use crate::domain::model::{BatchReport, BitString, OperandPair, PairOutcome};
pub use crate::utils::error::{AdderError, Result};
