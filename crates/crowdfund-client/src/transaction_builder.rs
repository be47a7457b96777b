use crate::{errors::ClientResult, rpc::LedgerRpc};
use crowdfund_sdk::build_multi_instruction_tx;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey, transaction::Transaction};
use std::sync::Arc;
use tracing::debug;

/// Assembles unsigned transactions paid for by one identity
pub struct TransactionBuilder<R> {
    rpc: Arc<R>,
    fee_payer: Pubkey,
}

impl<R: LedgerRpc> TransactionBuilder<R> {
    pub fn new(rpc: Arc<R>, fee_payer: Pubkey) -> Self {
        Self { rpc, fee_payer }
    }

    pub fn fee_payer(&self) -> &Pubkey {
        &self.fee_payer
    }

    /// Builds an unsigned transaction over a freshly fetched blockhash.
    ///
    /// Blockhashes expire quickly, so every call asks the node again.
    pub async fn build(&self, instructions: &[Instruction]) -> ClientResult<Transaction> {
        let recent_blockhash = self.rpc.latest_blockhash().await?;
        debug!("Latest blockhash: {}", recent_blockhash);

        Ok(build_multi_instruction_tx(
            instructions,
            &self.fee_payer,
            recent_blockhash,
        )?)
    }
}
