use crate::AddressFinder;
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_instruction,
};

/// First byte of the crowdfund program's instruction data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CrowdfundInstruction {
    CreateCampaign = 0,
    Withdraw = 1,
    Donate = 2,
}

impl CrowdfundInstruction {
    pub fn tag(self) -> u8 {
        self as u8
    }
}

/// Allocates the campaign account at `campaign` and assigns it to the program.
///
/// `admin` pays for the account and is also the derivation base, so it is the
/// only signer required.
pub fn build_create_campaign_account_ix(
    address_finder: &AddressFinder,
    admin: &Pubkey,
    campaign: &Pubkey,
    seed: &str,
    lamports: u64,
    space: u64,
) -> Instruction {
    system_instruction::create_account_with_seed(
        admin,
        campaign,
        admin,
        seed,
        lamports,
        space,
        &address_finder.program_id,
    )
}

/// Asks the program to store `record_data` into the campaign account.
pub fn build_write_campaign_ix(
    address_finder: &AddressFinder,
    admin: &Pubkey,
    campaign: &Pubkey,
    record_data: &[u8],
) -> Instruction {
    let mut data = Vec::with_capacity(record_data.len() + 1);
    data.push(CrowdfundInstruction::CreateCampaign.tag());
    data.extend_from_slice(record_data);

    Instruction {
        program_id: address_finder.program_id,
        accounts: vec![
            AccountMeta::new(*campaign, false),
            AccountMeta::new_readonly(*admin, true),
        ],
        data,
    }
}

/// Both instructions needed to create a campaign, in execution order.
pub fn build_create_campaign_ixs(
    address_finder: &AddressFinder,
    admin: &Pubkey,
    campaign: &Pubkey,
    seed: &str,
    lamports: u64,
    record_data: &[u8],
) -> Vec<Instruction> {
    vec![
        build_create_campaign_account_ix(
            address_finder,
            admin,
            campaign,
            seed,
            lamports,
            record_data.len() as u64,
        ),
        build_write_campaign_ix(address_finder, admin, campaign, record_data),
    ]
}
