use crate::domain::model::BitString;
use crate::utils::error::Result;

/// Adds two binary numbers given as '0'/'1' strings and returns the sum as a
/// bit string without leading zeros ("0" for a zero sum).
///
/// Operands may differ in length and may carry leading zeros. Fails with
/// `AdderError::InvalidArgument` if either operand is empty or holds a
/// character other than '0' or '1'.
pub fn add_binary(a: &str, b: &str) -> Result<String> {
    let lhs = BitString::parse("a", a)?;
    let rhs = BitString::parse("b", b)?;

    let sum = lhs.add(&rhs);
    tracing::debug!("{} + {} = {}", lhs, rhs, sum);

    Ok(sum.into())
}
