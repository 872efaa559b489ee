use crate::error::{DeployError, Result};

/// Pre-flight balance rule applied before any deployment work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundingPolicy {
    pub min_balance: u64,
}

impl FundingPolicy {
    pub fn new(min_balance: u64) -> Self {
        Self { min_balance }
    }

    /// A balance equal to the minimum is sufficient.
    pub fn check(&self, balance: u64) -> Result<()> {
        if balance < self.min_balance {
            return Err(DeployError::InsufficientFunds {
                balance,
                required: self.min_balance,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_is_rejected() {
        let policy = FundingPolicy::new(9_000_000_000);
        match policy.check(8_999_999_999) {
            Err(DeployError::InsufficientFunds { balance, required }) => {
                assert_eq!(balance, 8_999_999_999);
                assert_eq!(required, 9_000_000_000);
            }
            other => panic!("expected InsufficientFunds, got {:?}", other),
        }
    }

    #[test]
    fn threshold_itself_passes() {
        let policy = FundingPolicy::new(9_000_000_000);
        assert!(policy.check(9_000_000_000).is_ok());
        assert!(policy.check(u64::MAX).is_ok());
    }

    #[test]
    fn zero_threshold_accepts_empty_payer() {
        assert!(FundingPolicy::new(0).check(0).is_ok());
    }
}
