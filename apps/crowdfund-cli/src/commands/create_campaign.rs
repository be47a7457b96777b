use crate::{
    config::Settings,
    error::{CliError, CliResult},
};
use crowdfund_client::{CrowdfundClient, NewCampaign};
use solana_sdk::signature::{read_keypair_file, Signer};

pub async fn execute(campaign: NewCampaign, settings: Settings) -> CliResult<()> {
    println!("🔑 Loading admin keypair...");
    let keypair = read_keypair_file(&settings.keypair_path).map_err(|e| {
        CliError::InvalidConfig(format!(
            "Failed to read keypair from '{}': {}",
            settings.keypair_path.display(),
            e
        ))
    })?;
    println!("✅ Admin public key: {}", keypair.pubkey());

    let client = CrowdfundClient::from_url(settings.rpc_url.clone(), keypair, settings.client)?;
    println!("🌐 RPC: {}", settings.rpc_url);
    println!("   Program: {}", client.config().program_id);

    println!("🚀 Creating campaign '{}'...", campaign.name);
    let created = client.create_campaign(campaign).await?;

    println!("✅ Campaign created!");
    println!("   Account: {}", created.address);
    println!("   Seed: {}", created.seed);
    println!("   Signature: {}", created.signature);
    Ok(())
}
