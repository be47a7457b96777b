/*!
# Crowdfund Client Implementation

Wires the write path (encode, derive, build, sign, broadcast, confirm) and the
read path (scan, decode) over one node connection and one wallet.
*/

use crate::{
    broadcaster::SigningBroadcaster,
    config::ClientConfig,
    confirmation::ConfirmationWaiter,
    errors::{ClientError, ClientResult},
    rpc::LedgerRpc,
    scanner::AccountScanner,
    transaction_builder::TransactionBuilder,
    types::{CampaignAccount, CreatedCampaign, NewCampaign},
    wallet::{KeypairWallet, WalletSigner},
};
use crowdfund_sdk::{
    build_create_campaign_ixs, AddressFinder, CampaignCodec, CampaignRecord, RandomSeedGenerator,
    SeedGenerator,
};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::signature::Keypair;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Campaign client over a ledger node and a wallet
pub struct CrowdfundClient<R, W> {
    config: ClientConfig,
    address_finder: AddressFinder,
    codec: CampaignCodec,
    rpc: Arc<R>,
    wallet: Arc<W>,
    seeds: Mutex<Box<dyn SeedGenerator>>,
    builder: TransactionBuilder<R>,
    broadcaster: SigningBroadcaster<R, W>,
    waiter: ConfirmationWaiter<R>,
    scanner: AccountScanner<R>,
}

impl CrowdfundClient<RpcClient, KeypairWallet> {
    /// Client talking to `rpc_url` and signing with a local keypair
    pub fn from_url(rpc_url: String, keypair: Keypair, config: ClientConfig) -> ClientResult<Self> {
        let rpc = RpcClient::new_with_commitment(rpc_url, config.commitment);
        Self::new(Arc::new(rpc), Arc::new(KeypairWallet::new(keypair)), config)
    }
}

impl<R: LedgerRpc, W: WalletSigner> CrowdfundClient<R, W> {
    /// Create new client drawing seeds from OS entropy
    pub fn new(rpc: Arc<R>, wallet: Arc<W>, config: ClientConfig) -> ClientResult<Self> {
        let seeds = RandomSeedGenerator::new(config.seed_prefix.clone())
            .map_err(|e| ClientError::InvalidConfig(format!("seed_prefix: {}", e)))?;
        Self::with_seed_generator(rpc, wallet, config, seeds)
    }

    /// Create new client with a specific seed source
    pub fn with_seed_generator(
        rpc: Arc<R>,
        wallet: Arc<W>,
        config: ClientConfig,
        seeds: impl SeedGenerator + 'static,
    ) -> ClientResult<Self> {
        config.validate()?;
        let codec = CampaignCodec::new(config.layout);
        Ok(Self {
            address_finder: AddressFinder::new(config.program_id),
            codec,
            builder: TransactionBuilder::new(rpc.clone(), wallet.pubkey()),
            broadcaster: SigningBroadcaster::new(rpc.clone(), wallet.clone()),
            waiter: ConfirmationWaiter::new(rpc.clone(), config.poll_interval),
            scanner: AccountScanner::new(rpc.clone(), codec),
            seeds: Mutex::new(Box::new(seeds)),
            rpc,
            wallet,
            config,
        })
    }

    /// Creates a campaign account administered by the wallet identity and
    /// waits for confirmation. Any failure is returned as is; nothing is
    /// retried.
    pub async fn create_campaign(&self, campaign: NewCampaign) -> ClientResult<CreatedCampaign> {
        self.ensure_connected().await?;
        let admin = self.wallet.pubkey();

        let record = CampaignRecord::new(
            admin,
            campaign.name,
            campaign.description,
            campaign.image_link,
        );
        let data = self.codec.encode(&record)?;

        let seed = self.next_seed();
        let address = self.address_finder.find_campaign_address(&admin, &seed)?;
        info!("Creating campaign account {} (seed: {})", address, seed);

        let lamports = self
            .rpc
            .minimum_balance_for_rent_exemption(data.len())
            .await?;
        debug!(
            "Rent-exempt balance for {} bytes: {} lamports",
            data.len(),
            lamports
        );

        let instructions = build_create_campaign_ixs(
            &self.address_finder,
            &admin,
            &address,
            &seed,
            lamports,
            &data,
        );
        let transaction = self.builder.build(&instructions).await?;
        let signature = self.broadcaster.sign_and_broadcast(transaction).await?;
        self.waiter
            .confirm(
                &signature,
                self.config.commitment,
                self.config.confirmation_timeout,
            )
            .await?;

        Ok(CreatedCampaign {
            address,
            seed,
            signature,
            record,
        })
    }

    /// Every decodable campaign owned by the configured program
    pub async fn list_campaigns(&self) -> ClientResult<Vec<CampaignAccount>> {
        self.scanner.list_all(&self.config.program_id).await
    }

    async fn ensure_connected(&self) -> ClientResult<()> {
        if !self.wallet.is_connected() {
            debug!("Connecting wallet {}", self.wallet.pubkey());
            self.wallet.connect().await?;
        }
        Ok(())
    }

    fn next_seed(&self) -> String {
        let mut seeds = self
            .seeds
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        seeds.next_seed()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn address_finder(&self) -> &AddressFinder {
        &self.address_finder
    }

    pub fn codec(&self) -> &CampaignCodec {
        &self.codec
    }

    /// Get the RPC client (for advanced operations)
    pub fn rpc(&self) -> &Arc<R> {
        &self.rpc
    }

    pub fn wallet(&self) -> &Arc<W> {
        &self.wallet
    }

    pub fn transaction_builder(&self) -> &TransactionBuilder<R> {
        &self.builder
    }

    pub fn broadcaster(&self) -> &SigningBroadcaster<R, W> {
        &self.broadcaster
    }

    pub fn confirmation_waiter(&self) -> &ConfirmationWaiter<R> {
        &self.waiter
    }

    pub fn scanner(&self) -> &AccountScanner<R> {
        &self.scanner
    }
}
