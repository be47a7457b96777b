mod address_finder;
mod campaign_record;
mod errors;
mod instruction_builders;
mod transaction_builders;

pub use address_finder::{
    AddressFinder, FixedSeedGenerator, RandomSeedGenerator, SeedGenerator, MAX_SEED_LEN,
    SEED_ENTROPY_CHARS,
};
pub use campaign_record::{AccountLayout, CampaignCodec, CampaignRecord};
pub use errors::{AddressError, DecodeError, EncodeError};
pub use instruction_builders::*;
pub use transaction_builders::*;

use solana_sdk::pubkey::Pubkey;

/// Deployed address of the crowdfund program.
pub const PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("5mpHLcQKE91D18QkYKsRwcJrV6DMv82zzfZJHDQd6BVv");
