/*!
# Ledger RPC Seam

The subset of node operations the campaign client needs. Implemented for the
nonblocking `RpcClient`; tests provide their own in-memory ledger.
*/

use crate::errors::{ClientError, ClientResult};
use async_trait::async_trait;
use solana_client::{nonblocking::rpc_client::RpcClient, rpc_config::RpcSendTransactionConfig};
use solana_sdk::{
    account::Account, commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey,
    signature::Signature, transaction::Transaction, transaction::TransactionError,
};

/// Where a submitted transaction stands at a given commitment level
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureStatus {
    /// Unknown to the node, or not yet at the requested commitment
    Pending,
    Succeeded,
    Failed(TransactionError),
}

#[async_trait]
pub trait LedgerRpc: Send + Sync {
    async fn latest_blockhash(&self) -> ClientResult<Hash>;

    async fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> ClientResult<u64>;

    /// Submits a signed transaction. No retries.
    async fn send_transaction(&self, transaction: &Transaction) -> ClientResult<Signature>;

    async fn signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> ClientResult<SignatureStatus>;

    /// Every account owned by `program_id`, in the order the node returns them.
    async fn program_accounts(&self, program_id: &Pubkey) -> ClientResult<Vec<(Pubkey, Account)>>;
}

#[async_trait]
impl LedgerRpc for RpcClient {
    async fn latest_blockhash(&self) -> ClientResult<Hash> {
        self.get_latest_blockhash()
            .await
            .map_err(ClientError::connection)
    }

    async fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> ClientResult<u64> {
        self.get_minimum_balance_for_rent_exemption(data_len)
            .await
            .map_err(ClientError::connection)
    }

    async fn send_transaction(&self, transaction: &Transaction) -> ClientResult<Signature> {
        let config = RpcSendTransactionConfig {
            skip_preflight: false,
            preflight_commitment: Some(self.commitment().commitment),
            ..Default::default()
        };

        self.send_transaction_with_config(transaction, config)
            .await
            .map_err(ClientError::submission)
    }

    async fn signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> ClientResult<SignatureStatus> {
        let statuses = self
            .get_signature_statuses(std::slice::from_ref(signature))
            .await
            .map_err(ClientError::connection)?
            .value;

        let status = match statuses.into_iter().next().flatten() {
            Some(status) => status,
            None => return Ok(SignatureStatus::Pending),
        };

        if let Some(err) = status.err {
            return Ok(SignatureStatus::Failed(err));
        }
        if status.satisfies_commitment(commitment) {
            Ok(SignatureStatus::Succeeded)
        } else {
            Ok(SignatureStatus::Pending)
        }
    }

    async fn program_accounts(&self, program_id: &Pubkey) -> ClientResult<Vec<(Pubkey, Account)>> {
        self.get_program_accounts(program_id)
            .await
            .map_err(ClientError::connection)
    }
}
