use crate::utils::error::{AdderError, Result};
use crate::utils::validation::validate_bit_string;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// A validated, non-empty sequence of '0'/'1' digits, most significant first.
///
/// Leading zeros given on input are kept, so equality is digit-wise:
/// `"01" != "1"`. Compare [`BitString::normalized`] values to compare numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BitString(String);

impl BitString {
    /// Validates `value`, naming `field` in the error if it is not a bit string.
    pub fn parse(field: &str, value: &str) -> Result<Self> {
        validate_bit_string(field, value)?;
        Ok(BitString(value.to_string()))
    }

    pub fn zero() -> Self {
        BitString("0".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a `BitString` holds at least one digit.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.0.bytes().all(|d| d == b'0')
    }

    /// Same number with leading zeros removed, keeping at least one digit.
    pub fn normalized(&self) -> BitString {
        BitString(strip_leading_zeros(&self.0).to_string())
    }

    /// Right-to-left ripple-carry addition. The shorter operand reads as
    /// zero beyond its most significant digit; the sum is normalized.
    pub fn add(&self, other: &BitString) -> BitString {
        let n = self.len().max(other.len());
        let mut lhs = self.0.bytes().rev();
        let mut rhs = other.0.bytes().rev();

        // least significant digit first
        let mut digits: Vec<u8> = Vec::with_capacity(n + 1);
        let mut carry = 0u8;
        for _ in 0..n {
            let x = lhs.next().map_or(0, |d| d - b'0');
            let y = rhs.next().map_or(0, |d| d - b'0');
            let sum = x + y + carry;
            digits.push(sum % 2);
            carry = sum / 2;
        }
        if carry == 1 {
            digits.push(1);
        }

        while digits.len() > 1 && digits.last() == Some(&0) {
            digits.pop();
        }

        BitString(
            digits
                .iter()
                .rev()
                .map(|&d| if d == 1 { '1' } else { '0' })
                .collect(),
        )
    }
}

fn strip_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

impl<'a> Add<&'a BitString> for &'a BitString {
    type Output = BitString;

    fn add(self, rhs: &'a BitString) -> BitString {
        BitString::add(self, rhs)
    }
}

impl FromStr for BitString {
    type Err = AdderError;

    fn from_str(s: &str) -> Result<Self> {
        BitString::parse("value", s)
    }
}

impl TryFrom<String> for BitString {
    type Error = AdderError;

    fn try_from(value: String) -> Result<Self> {
        validate_bit_string("value", &value)?;
        Ok(BitString(value))
    }
}

impl From<BitString> for String {
    fn from(bits: BitString) -> Self {
        bits.0
    }
}

impl AsRef<str> for BitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of a batch file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperandPair {
    pub a: String,
    pub b: String,
}

impl OperandPair {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairOutcome {
    pub a: String,
    pub b: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PairOutcome {
    pub fn is_ok(&self) -> bool {
        self.sum.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failed: usize,
    pub outcomes: Vec<PairOutcome>,
}
