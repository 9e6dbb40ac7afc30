//! Gas limit and EIP-1559 fee policy.
//!
//! The estimate gets a 20% margin; a failed estimate falls back to
//! [`DEFAULT_GAS_LIMIT`] instead of aborting the mint. The fallback can mask a
//! contract revert, so it is logged and counted by the caller.

/// Limit used when the node cannot estimate the call.
pub const DEFAULT_GAS_LIMIT: u64 = 300_000;

/// Fixed priority tip: 0.1 gwei.
pub const PRIORITY_FEE_WEI: u128 = 100_000_000;

/// `ceil(estimate * 1.2)` in integer arithmetic.
pub fn with_safety_margin(estimate: u64) -> u64 {
    let scaled = (u128::from(estimate) * 6).div_ceil(5);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

/// Gas limit for an estimate result: margin on success, default on failure.
pub fn gas_limit_for(estimate: Option<u64>) -> u64 {
    match estimate {
        Some(estimate) => with_safety_margin(estimate),
        None => DEFAULT_GAS_LIMIT,
    }
}

/// EIP-1559 fee fields derived from the current base fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeQuote {
    pub max_fee_per_gas: u128,
    pub max_priority_fee_per_gas: u128,
}

impl FeeQuote {
    pub fn from_base_fee(base_fee: u128) -> Self {
        Self {
            max_fee_per_gas: base_fee.saturating_add(PRIORITY_FEE_WEI),
            max_priority_fee_per_gas: PRIORITY_FEE_WEI,
        }
    }
}
