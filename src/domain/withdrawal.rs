use crate::domain::{YoctoNear, YoctoShares};

/// Outcome of redeeming shares.
///
/// `net_payout` is what the holder receives. `fee` is withheld from the holder and stays in the
/// contract; it is tracked as the pool's retained fees.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Withdrawal {
    pub shares: YoctoShares,
    /// `shares * total_balance / total_shares` rounded down
    pub gross: YoctoNear,
    pub principal: YoctoNear,
    /// `gross - principal`, floored at zero
    pub reward: YoctoNear,
    pub fee: YoctoNear,
    pub net_payout: YoctoNear,
}

impl Withdrawal {
    /// true if the redeemed shares are worth less than what was paid for them, i.e., the reward
    /// was floored at zero
    pub fn has_principal_shortfall(&self) -> bool {
        self.gross < self.principal
    }
}
