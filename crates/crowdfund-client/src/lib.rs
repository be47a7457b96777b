/*!
# Crowdfund Client

Async client for the crowdfund program: creates campaign accounts and lists
the campaigns already on chain.

## Write path

A campaign record is encoded, a fresh account address is derived from the
wallet key and a random seed, and a single transaction carrying the
create-account and write-record instructions is built over a fresh blockhash,
signed by the wallet, submitted and awaited until it reaches the configured
commitment. Every error surfaces to the caller; nothing is retried.

## Read path

All accounts owned by the program are fetched and decoded. Accounts that do
not decode are skipped with a warning.

## Usage

```rust,no_run
use crowdfund_client::{ClientConfig, ClientResult, CrowdfundClient, NewCampaign};
use solana_sdk::signature::Keypair;

# async fn example() -> ClientResult<()> {
let client = CrowdfundClient::from_url(
    "https://api.devnet.solana.com".to_string(),
    Keypair::new(),
    ClientConfig::default(),
)?;

let created = client
    .create_campaign(NewCampaign {
        name: "Help".to_string(),
        description: "desc".to_string(),
        image_link: "http://x".to_string(),
    })
    .await?;
println!("Campaign account: {}", created.address);

for campaign in client.list_campaigns().await? {
    println!("{}: {}", campaign.address, campaign.record.name);
}
# Ok(())
# }
```
*/

pub mod broadcaster;
pub mod client;
pub mod config;
pub mod confirmation;
pub mod errors;
pub mod rpc;
pub mod scanner;
pub mod transaction_builder;
pub mod types;
pub mod wallet;

// Re-export main types for convenience
pub use broadcaster::SigningBroadcaster;
pub use client::CrowdfundClient;
pub use config::ClientConfig;
pub use confirmation::ConfirmationWaiter;
pub use errors::{ClientError, ClientResult};
pub use rpc::{LedgerRpc, SignatureStatus};
pub use scanner::AccountScanner;
pub use transaction_builder::TransactionBuilder;
pub use types::{CampaignAccount, CreatedCampaign, NewCampaign};
pub use wallet::{KeypairWallet, WalletSigner};

pub use crowdfund_sdk::{AccountLayout, CampaignCodec, CampaignRecord};
