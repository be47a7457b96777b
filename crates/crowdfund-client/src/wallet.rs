use crate::errors::{ClientError, ClientResult};
use async_trait::async_trait;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use std::sync::atomic::{AtomicBool, Ordering};

/// Holder of the signing key for the acting identity.
///
/// The identity returned by `pubkey` must stay the same for the wallet's
/// lifetime; it is used as fee payer, derivation base and campaign admin.
#[async_trait]
pub trait WalletSigner: Send + Sync {
    fn pubkey(&self) -> Pubkey;

    fn is_connected(&self) -> bool;

    async fn connect(&self) -> ClientResult<()>;

    /// Signs over the transaction's current blockhash.
    async fn sign_transaction(&self, transaction: Transaction) -> ClientResult<Transaction>;
}

/// Wallet backed by a local keypair, e.g. one read from `~/.config/solana/id.json`
pub struct KeypairWallet {
    keypair: Keypair,
    connected: AtomicBool,
}

impl KeypairWallet {
    /// Starts disconnected; the client connects on first use
    pub fn new(keypair: Keypair) -> Self {
        Self {
            keypair,
            connected: AtomicBool::new(false),
        }
    }

    pub fn connected(keypair: Keypair) -> Self {
        Self {
            keypair,
            connected: AtomicBool::new(true),
        }
    }

    pub fn disconnect(&self) {
        self.connected.store(false, Ordering::SeqCst);
    }
}

#[async_trait]
impl WalletSigner for KeypairWallet {
    fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn connect(&self) -> ClientResult<()> {
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn sign_transaction(&self, mut transaction: Transaction) -> ClientResult<Transaction> {
        if !self.is_connected() {
            return Err(ClientError::SigningRejected(
                "wallet is not connected".to_string(),
            ));
        }

        let blockhash = transaction.message.recent_blockhash;
        transaction
            .try_sign(&[&self.keypair], blockhash)
            .map_err(|e| ClientError::SigningRejected(e.to_string()))?;
        Ok(transaction)
    }
}
