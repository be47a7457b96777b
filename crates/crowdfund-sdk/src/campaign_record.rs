/*!
# Campaign Account Schema

Byte layout shared with the on-chain crowdfund program. Fields are written in
declared order using Borsh rules: strings carry a little-endian `u32` length
prefix, `u64` is little-endian, the admin key is 32 raw bytes.

The layout must never drift from the program's `CampaignDetails` struct.
*/

use crate::errors::{DecodeError, EncodeError};
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

const PUBKEY_LEN: usize = 32;
const STRING_PREFIX_LEN: usize = 4;
const U64_LEN: usize = 8;
const STRING_FIELD_COUNT: usize = 3;

/// A crowdfunding campaign as stored in a program-owned account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignRecord {
    pub admin: Pubkey,
    pub name: String,
    pub description: String,
    pub image_link: String,
    /// Running total of lamports donated, maintained by the program.
    pub amount_donated: u64,
}

impl CampaignRecord {
    /// New campaign with nothing donated yet
    pub fn new(
        admin: Pubkey,
        name: impl Into<String>,
        description: impl Into<String>,
        image_link: impl Into<String>,
    ) -> Self {
        Self {
            admin,
            name: name.into(),
            description: description.into(),
            image_link: image_link.into(),
            amount_donated: 0,
        }
    }
}

/// Which admin layout the account data uses.
///
/// The deployed program reads a single `admin` key. An early web client wrote
/// the key twice in a row; `DuplicatedAdmin` reads and writes that shape for
/// accounts created against a program built from the same schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccountLayout {
    #[default]
    Canonical,
    DuplicatedAdmin,
}

impl AccountLayout {
    fn admin_copies(self) -> usize {
        match self {
            AccountLayout::Canonical => 1,
            AccountLayout::DuplicatedAdmin => 2,
        }
    }
}

#[derive(BorshSerialize, BorshDeserialize)]
struct CampaignDetails {
    admin: [u8; 32],
    name: String,
    description: String,
    image_link: String,
    amount_donated: u64,
}

#[derive(BorshSerialize, BorshDeserialize)]
struct DuplicatedAdminCampaignDetails {
    admin: [u8; 32],
    admin_copy: [u8; 32],
    name: String,
    description: String,
    image_link: String,
    amount_donated: u64,
}

/// Encoder/decoder for campaign account data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CampaignCodec {
    layout: AccountLayout,
}

impl CampaignCodec {
    pub fn new(layout: AccountLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> AccountLayout {
        self.layout
    }

    /// Smallest buffer that can hold a record: every string empty.
    pub fn min_len(&self) -> usize {
        PUBKEY_LEN * self.layout.admin_copies() + STRING_PREFIX_LEN * STRING_FIELD_COUNT + U64_LEN
    }

    /// Exact number of bytes `encode` produces for `record`.
    pub fn encoded_len(&self, record: &CampaignRecord) -> usize {
        self.min_len() + record.name.len() + record.description.len() + record.image_link.len()
    }

    pub fn encode(&self, record: &CampaignRecord) -> Result<Vec<u8>, EncodeError> {
        let admin = record.admin.to_bytes();
        let data = match self.layout {
            AccountLayout::Canonical => borsh::to_vec(&CampaignDetails {
                admin,
                name: record.name.clone(),
                description: record.description.clone(),
                image_link: record.image_link.clone(),
                amount_donated: record.amount_donated,
            })?,
            AccountLayout::DuplicatedAdmin => borsh::to_vec(&DuplicatedAdminCampaignDetails {
                admin,
                admin_copy: admin,
                name: record.name.clone(),
                description: record.description.clone(),
                image_link: record.image_link.clone(),
                amount_donated: record.amount_donated,
            })?,
        };
        Ok(data)
    }

    /// Decodes account data, rejecting truncated input and trailing bytes.
    pub fn decode(&self, data: &[u8]) -> Result<CampaignRecord, DecodeError> {
        let required = self.min_len();
        if data.len() < required {
            return Err(DecodeError::TooShort {
                required,
                actual: data.len(),
            });
        }

        match self.layout {
            AccountLayout::Canonical => {
                let details: CampaignDetails = borsh::from_slice(data)
                    .map_err(|e| DecodeError::Malformed(e.to_string()))?;
                Ok(CampaignRecord {
                    admin: Pubkey::new_from_array(details.admin),
                    name: details.name,
                    description: details.description,
                    image_link: details.image_link,
                    amount_donated: details.amount_donated,
                })
            }
            AccountLayout::DuplicatedAdmin => {
                let details: DuplicatedAdminCampaignDetails = borsh::from_slice(data)
                    .map_err(|e| DecodeError::Malformed(e.to_string()))?;
                if details.admin != details.admin_copy {
                    return Err(DecodeError::AdminMismatch);
                }
                Ok(CampaignRecord {
                    admin: Pubkey::new_from_array(details.admin),
                    name: details.name,
                    description: details.description,
                    image_link: details.image_link,
                    amount_donated: details.amount_donated,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn help_record() -> CampaignRecord {
        CampaignRecord {
            admin: Pubkey::new_from_array([0u8; 32]),
            name: "Help".to_string(),
            description: "desc".to_string(),
            image_link: "http://x".to_string(),
            amount_donated: 0,
        }
    }

    #[test]
    fn test_help_campaign_round_trip() {
        let codec = CampaignCodec::default();
        let record = help_record();

        let data = codec.encode(&record).unwrap();
        assert_eq!(codec.decode(&data).unwrap(), record);
    }

    #[test]
    fn test_byte_layout_is_field_ordered() {
        let codec = CampaignCodec::default();
        let record = CampaignRecord {
            admin: Pubkey::new_from_array([7u8; 32]),
            name: "ab".to_string(),
            description: String::new(),
            image_link: "c".to_string(),
            amount_donated: 0x0102,
        };

        let data = codec.encode(&record).unwrap();

        let mut expected = vec![7u8; 32];
        expected.extend_from_slice(&[2, 0, 0, 0, b'a', b'b']);
        expected.extend_from_slice(&[0, 0, 0, 0]);
        expected.extend_from_slice(&[1, 0, 0, 0, b'c']);
        expected.extend_from_slice(&[0x02, 0x01, 0, 0, 0, 0, 0, 0]);
        assert_eq!(data, expected);
    }

    #[test]
    fn test_encoded_len_tracks_utf8_lengths() {
        let codec = CampaignCodec::default();
        let record = CampaignRecord::new(Pubkey::new_unique(), "Ünïcödé", "δ", "");

        let data = codec.encode(&record).unwrap();
        assert_eq!(data.len(), codec.encoded_len(&record));
        assert_eq!(
            codec.encoded_len(&record),
            32 + 12 + 8 + "Ünïcödé".len() + "δ".len()
        );
        assert_eq!(codec.min_len(), 52);
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let codec = CampaignCodec::default();
        let err = codec.decode(&[0u8; 51]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TooShort {
                required: 52,
                actual: 51
            }
        );
    }

    #[test]
    fn test_length_prefix_past_end_is_rejected() {
        let codec = CampaignCodec::default();
        let mut data = codec.encode(&help_record()).unwrap();
        // Name claims 200 bytes while the whole buffer is far smaller.
        data[32] = 200;

        assert!(matches!(
            codec.decode(&data),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn test_truncated_account_is_rejected() {
        let codec = CampaignCodec::default();
        let data = codec.encode(&help_record()).unwrap();

        assert!(codec.decode(&data[..data.len() - 3]).is_err());
    }

    #[test]
    fn test_trailing_bytes_are_rejected() {
        let codec = CampaignCodec::default();
        let mut data = codec.encode(&help_record()).unwrap();
        data.push(0);

        assert!(matches!(
            codec.decode(&data),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let codec = CampaignCodec::default();
        let mut data = codec.encode(&help_record()).unwrap();
        // First byte of "Help"
        data[36] = 0xff;

        assert!(matches!(
            codec.decode(&data),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn test_duplicated_admin_layout() {
        let codec = CampaignCodec::new(AccountLayout::DuplicatedAdmin);
        let admin = Pubkey::new_from_array([9u8; 32]);
        let record = CampaignRecord::new(admin, "Help", "desc", "http://x");

        let data = codec.encode(&record).unwrap();
        assert_eq!(data.len(), CampaignCodec::default().encoded_len(&record) + 32);
        assert_eq!(&data[..32], admin.as_ref());
        assert_eq!(&data[32..64], admin.as_ref());
        assert_eq!(codec.decode(&data).unwrap(), record);

        // Canonical reader cannot make sense of the extra key.
        assert!(CampaignCodec::default().decode(&data).is_err());
    }

    #[test]
    fn test_duplicated_admin_mismatch() {
        let codec = CampaignCodec::new(AccountLayout::DuplicatedAdmin);
        let mut data = codec
            .encode(&CampaignRecord::new(Pubkey::new_unique(), "a", "b", "c"))
            .unwrap();
        data[40] ^= 0xff;

        assert_eq!(codec.decode(&data), Err(DecodeError::AdminMismatch));
    }

    const SAMPLE_CHARS: &[char] = &['a', 'Z', '7', ' ', '/', 'é', 'ß', 'δ', '中', '🚀'];

    fn random_text(rng: &mut StdRng) -> String {
        let len = match rng.gen_range(0..4) {
            0 => 0,
            1 => rng.gen_range(1..8),
            2 => rng.gen_range(8..64),
            _ => rng.gen_range(256..1024),
        };
        (0..len)
            .map(|_| SAMPLE_CHARS[rng.gen_range(0..SAMPLE_CHARS.len())])
            .collect()
    }

    fn random_record(rng: &mut StdRng) -> CampaignRecord {
        let amount_donated = match rng.gen_range(0..4) {
            0 => 0,
            1 => u64::MAX,
            _ => rng.gen(),
        };
        CampaignRecord {
            admin: Pubkey::new_from_array(rng.gen()),
            name: random_text(rng),
            description: random_text(rng),
            image_link: random_text(rng),
            amount_donated,
        }
    }

    #[test]
    fn test_sampled_records_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);

        for layout in [AccountLayout::Canonical, AccountLayout::DuplicatedAdmin] {
            let codec = CampaignCodec::new(layout);
            for _ in 0..200 {
                let record = random_record(&mut rng);

                let data = codec.encode(&record).unwrap();
                assert_eq!(data.len(), codec.encoded_len(&record));
                assert!(data.len() >= codec.min_len());
                assert_eq!(codec.decode(&data).unwrap(), record);
            }
        }
    }

    #[test]
    fn test_empty_strings_with_max_amount_round_trip() {
        let record = CampaignRecord {
            admin: Pubkey::new_from_array([3u8; 32]),
            name: String::new(),
            description: String::new(),
            image_link: String::new(),
            amount_donated: u64::MAX,
        };

        for layout in [AccountLayout::Canonical, AccountLayout::DuplicatedAdmin] {
            let codec = CampaignCodec::new(layout);
            let data = codec.encode(&record).unwrap();
            assert_eq!(data.len(), codec.min_len());
            assert_eq!(codec.decode(&data).unwrap(), record);
        }
    }
}
