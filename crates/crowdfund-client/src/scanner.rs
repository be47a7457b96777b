use crate::{errors::ClientResult, rpc::LedgerRpc, types::CampaignAccount};
use crowdfund_sdk::CampaignCodec;
use solana_sdk::pubkey::Pubkey;
use std::sync::Arc;
use tracing::{info, warn};

/// Lists and decodes every campaign account a program owns
pub struct AccountScanner<R> {
    rpc: Arc<R>,
    codec: CampaignCodec,
}

impl<R: LedgerRpc> AccountScanner<R> {
    pub fn new(rpc: Arc<R>, codec: CampaignCodec) -> Self {
        Self { rpc, codec }
    }

    /// Best-effort listing: accounts that fail to decode are skipped, the
    /// rest keep the node's order. Only a failed RPC call fails the listing.
    pub async fn list_all(&self, program_id: &Pubkey) -> ClientResult<Vec<CampaignAccount>> {
        let accounts = self.rpc.program_accounts(program_id).await?;
        let total = accounts.len();

        let campaigns: Vec<CampaignAccount> = accounts
            .into_iter()
            .filter_map(|(address, account)| match self.codec.decode(&account.data) {
                Ok(record) => Some(CampaignAccount { address, record }),
                Err(e) => {
                    warn!("Skipping account {}: {}", address, e);
                    None
                }
            })
            .collect();

        info!(
            "Decoded {} of {} accounts owned by {}",
            campaigns.len(),
            total,
            program_id
        );
        Ok(campaigns)
    }
}
