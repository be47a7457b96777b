/*!
# Client Data Types

Results handed back by the campaign client.
*/

use crowdfund_sdk::CampaignRecord;
use solana_sdk::{pubkey::Pubkey, signature::Signature};

/// A decoded campaign together with the account it lives in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignAccount {
    pub address: Pubkey,
    pub record: CampaignRecord,
}

/// Outcome of a confirmed create-campaign transaction
#[derive(Debug, Clone)]
pub struct CreatedCampaign {
    /// Derived campaign account address
    pub address: Pubkey,
    /// Seed the address was derived with
    pub seed: String,
    pub signature: Signature,
    /// Record as it was written
    pub record: CampaignRecord,
}

/// Input for a new campaign; the admin is always the wallet identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCampaign {
    pub name: String,
    pub description: String,
    pub image_link: String,
}
