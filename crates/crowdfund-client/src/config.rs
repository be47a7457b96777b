use crate::errors::{ClientError, ClientResult};
use crowdfund_sdk::{AccountLayout, MAX_SEED_LEN, PROGRAM_ID, SEED_ENTROPY_CHARS};
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey};
use std::time::Duration;

/// Configuration for campaign client operations
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Program that owns campaign accounts
    pub program_id: Pubkey,

    /// Commitment level a create must reach before it is reported as done
    pub commitment: CommitmentConfig,

    /// Upper bound on waiting for confirmation
    pub confirmation_timeout: Duration,

    /// Delay between signature status polls
    pub poll_interval: Duration,

    /// Account data layout used when encoding and decoding
    pub layout: AccountLayout,

    /// Prefix for generated account seeds
    pub seed_prefix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            program_id: PROGRAM_ID,
            commitment: CommitmentConfig::confirmed(),
            confirmation_timeout: Duration::from_secs(60),
            poll_interval: Duration::from_millis(500),
            layout: AccountLayout::Canonical,
            seed_prefix: "cmp".to_string(),
        }
    }
}

impl ClientConfig {
    /// Rejects settings under which confirmation could never succeed
    pub fn validate(&self) -> ClientResult<()> {
        if self.poll_interval.is_zero() {
            return Err(ClientError::InvalidConfig(
                "poll_interval must be greater than zero".to_string(),
            ));
        }
        if self.confirmation_timeout <= self.poll_interval {
            return Err(ClientError::InvalidConfig(format!(
                "confirmation_timeout ({:?}) must exceed poll_interval ({:?})",
                self.confirmation_timeout, self.poll_interval
            )));
        }
        if self.seed_prefix.len() + SEED_ENTROPY_CHARS > MAX_SEED_LEN {
            return Err(ClientError::InvalidConfig(format!(
                "seed_prefix '{}' is longer than {} bytes",
                self.seed_prefix,
                MAX_SEED_LEN - SEED_ENTROPY_CHARS
            )));
        }
        Ok(())
    }
}
