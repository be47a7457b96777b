use crate::{errors::ClientResult, rpc::LedgerRpc, wallet::WalletSigner};
use solana_sdk::{signature::Signature, transaction::Transaction};
use std::sync::Arc;
use tracing::info;

/// Gets transactions signed by the wallet and hands them to the node
pub struct SigningBroadcaster<R, W> {
    rpc: Arc<R>,
    wallet: Arc<W>,
}

impl<R: LedgerRpc, W: WalletSigner> SigningBroadcaster<R, W> {
    pub fn new(rpc: Arc<R>, wallet: Arc<W>) -> Self {
        Self { rpc, wallet }
    }

    pub async fn sign(&self, transaction: Transaction) -> ClientResult<Transaction> {
        self.wallet.sign_transaction(transaction).await
    }

    /// Single submission attempt; rebuilding and resending is up to the caller.
    pub async fn broadcast(&self, transaction: &Transaction) -> ClientResult<Signature> {
        info!(
            "Sending transaction with {} instructions",
            transaction.message.instructions.len()
        );
        let signature = self.rpc.send_transaction(transaction).await?;
        info!("Transaction submitted: {}", signature);
        Ok(signature)
    }

    pub async fn sign_and_broadcast(&self, transaction: Transaction) -> ClientResult<Signature> {
        let signed = self.sign(transaction).await?;
        self.broadcast(&signed).await
    }
}
