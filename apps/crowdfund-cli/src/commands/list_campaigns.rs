use crate::{config::Settings, error::CliResult};
use crowdfund_client::{AccountScanner, CampaignAccount, CampaignCodec};
use serde::Serialize;
use solana_client::nonblocking::rpc_client::RpcClient;
use std::sync::Arc;

/// JSON shape of one listed campaign
#[derive(Debug, Serialize)]
struct CampaignView {
    address: String,
    admin: String,
    name: String,
    description: String,
    image_link: String,
    amount_donated: u64,
}

impl From<&CampaignAccount> for CampaignView {
    fn from(campaign: &CampaignAccount) -> Self {
        Self {
            address: campaign.address.to_string(),
            admin: campaign.record.admin.to_string(),
            name: campaign.record.name.clone(),
            description: campaign.record.description.clone(),
            image_link: campaign.record.image_link.clone(),
            amount_donated: campaign.record.amount_donated,
        }
    }
}

pub async fn execute(settings: Settings, json: bool) -> CliResult<()> {
    let rpc = RpcClient::new_with_commitment(settings.rpc_url.clone(), settings.client.commitment);
    let scanner = AccountScanner::new(Arc::new(rpc), CampaignCodec::new(settings.client.layout));
    let campaigns = scanner.list_all(&settings.client.program_id).await?;

    if json {
        let views: Vec<CampaignView> = campaigns.iter().map(CampaignView::from).collect();
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    println!("🔍 Campaigns owned by {}", settings.client.program_id);
    if campaigns.is_empty() {
        println!("   No campaigns found.");
        return Ok(());
    }

    println!("✅ Found {} campaign(s):\n", campaigns.len());
    for (i, campaign) in campaigns.iter().enumerate() {
        let record = &campaign.record;
        println!("{}. {}", i + 1, record.name);
        println!("   Account: {}", campaign.address);
        println!("   Admin: {}", record.admin);
        println!("   Description: {}", record.description);
        println!("   Image: {}", record.image_link);
        println!("   Donated: {} lamports", record.amount_donated);
        println!();
    }
    Ok(())
}
