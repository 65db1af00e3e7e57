use crate::core::U256;
use crate::errors::StakingError;

/// computes `floor(a * b / c)`
///
/// The product is computed in 256 bits, i.e., double the operand width, which means `a * b`
/// never wraps. The result is always rounded down, which means rounding dust stays with the pool.
///
/// ## Errors
/// - [StakingError::DivideByZero] if `c` is zero
/// - [StakingError::ArithmeticOverflow] if the quotient does not fit into a `u128`
pub fn mul_div(a: u128, b: u128, c: u128) -> Result<u128, StakingError> {
    if c == 0 {
        return Err(StakingError::DivideByZero);
    }
    let product = U256::from(a)
        .checked_mul(U256::from(b))
        .ok_or(StakingError::ArithmeticOverflow)?;
    let quotient = product / U256::from(c);
    if quotient > U256::from(u128::MAX) {
        return Err(StakingError::ArithmeticOverflow);
    }
    Ok(quotient.low_u128())
}
