/*!
# Transaction Builders

Offline transaction assembly for crowdfund operations. Functions follow the
`build_*_tx` naming pattern and return unsigned transactions; the caller
supplies the recent blockhash and is responsible for signing and sending.

## Usage

```rust
use crowdfund_sdk::{build_create_campaign_tx, AddressFinder, CampaignCodec, CampaignRecord};
use solana_sdk::{hash::Hash, pubkey::Pubkey};

let finder = AddressFinder::default();
let admin = Pubkey::new_unique();
let data = CampaignCodec::default()
    .encode(&CampaignRecord::new(admin, "Help", "desc", "http://x"))
    .unwrap();
let campaign = finder.find_campaign_address(&admin, "seed").unwrap();

let tx = build_create_campaign_tx(
    &finder,
    &admin,
    &campaign,
    "seed",
    1_000_000,
    &data,
    Hash::default(), // Get from RPC
)
.unwrap();
assert_eq!(tx.message.instructions.len(), 2);
```
*/

use crate::{build_create_campaign_ixs, AddressFinder};
use solana_sdk::{
    hash::Hash, instruction::Instruction, message::Message, pubkey::Pubkey,
    transaction::Transaction,
};
use thiserror::Error;

/// Errors that can occur during transaction building
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionBuilderError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type TransactionBuilderResult<T> = Result<T, TransactionBuilderError>;

/// Build multi-instruction transaction from instruction list.
/// Instructions keep the given order.
pub fn build_multi_instruction_tx(
    instructions: &[Instruction],
    payer: &Pubkey,
    recent_blockhash: Hash,
) -> TransactionBuilderResult<Transaction> {
    if instructions.is_empty() {
        return Err(TransactionBuilderError::InvalidInput(
            "Cannot create transaction with no instructions".to_string(),
        ));
    }

    let message = Message::new_with_blockhash(instructions, Some(payer), &recent_blockhash);
    Ok(Transaction::new_unsigned(message))
}

/// Build transaction that creates and fills a campaign account
pub fn build_create_campaign_tx(
    address_finder: &AddressFinder,
    admin: &Pubkey,
    campaign: &Pubkey,
    seed: &str,
    lamports: u64,
    record_data: &[u8],
    recent_blockhash: Hash,
) -> TransactionBuilderResult<Transaction> {
    let instructions =
        build_create_campaign_ixs(address_finder, admin, campaign, seed, lamports, record_data);
    build_multi_instruction_tx(&instructions, admin, recent_blockhash)
}
