// Domain layer: the bit string value type and batch records. No I/O here.

pub mod model;

pub use model::{BatchReport, BitString, OperandPair, PairOutcome};
