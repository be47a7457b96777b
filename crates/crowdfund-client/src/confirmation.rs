use crate::{
    errors::{ClientError, ClientResult},
    rpc::{LedgerRpc, SignatureStatus},
};
use solana_sdk::{commitment_config::CommitmentConfig, signature::Signature};
use std::{sync::Arc, time::Duration};
use tracing::{debug, info};

/// Polls the node until a signature reaches a commitment level
pub struct ConfirmationWaiter<R> {
    rpc: Arc<R>,
    poll_interval: Duration,
}

impl<R: LedgerRpc> ConfirmationWaiter<R> {
    pub fn new(rpc: Arc<R>, poll_interval: Duration) -> Self {
        Self { rpc, poll_interval }
    }

    /// Resolves once the transaction landed at `commitment`, failed on chain,
    /// or `timeout` ran out. RPC errors while polling end the wait immediately.
    pub async fn confirm(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
        timeout: Duration,
    ) -> ClientResult<()> {
        tokio::time::timeout(timeout, self.poll_until_terminal(signature, commitment))
            .await
            .map_err(|_| ClientError::ConfirmationTimeout {
                signature: *signature,
                timeout,
            })??;

        info!("Transaction {} confirmed", signature);
        Ok(())
    }

    async fn poll_until_terminal(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> ClientResult<()> {
        loop {
            match self.rpc.signature_status(signature, commitment).await? {
                SignatureStatus::Succeeded => return Ok(()),
                SignatureStatus::Failed(error) => {
                    return Err(ClientError::TransactionFailed {
                        signature: *signature,
                        error,
                    })
                }
                SignatureStatus::Pending => {
                    debug!(
                        "Transaction {} not yet {:?}",
                        signature, commitment.commitment
                    );
                    tokio::time::sleep(self.poll_interval).await;
                }
            }
        }
    }
}
