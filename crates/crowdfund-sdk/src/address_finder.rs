use crate::{errors::AddressError, PROGRAM_ID};
use rand::{distributions::Alphanumeric, rngs::StdRng, Rng, SeedableRng};
use solana_sdk::pubkey::Pubkey;

pub use solana_sdk::pubkey::MAX_SEED_LEN;

/// Number of random characters appended to the seed prefix
pub const SEED_ENTROPY_CHARS: usize = 24;

const DEFAULT_SEED_PREFIX: &str = "cmp";

pub struct AddressFinder {
    pub program_id: Pubkey,
}

impl AddressFinder {
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    /// Address of the campaign account created by `base` with `seed`.
    ///
    /// Same inputs always give the same address. Nothing is checked on chain,
    /// an account may already live there if the seed was reused.
    pub fn find_campaign_address(&self, base: &Pubkey, seed: &str) -> Result<Pubkey, AddressError> {
        if seed.len() > MAX_SEED_LEN {
            return Err(AddressError::SeedTooLong {
                len: seed.len(),
                max: MAX_SEED_LEN,
            });
        }

        Pubkey::create_with_seed(base, seed, &self.program_id)
            .map_err(|e| AddressError::Derivation(e.to_string()))
    }
}

impl Default for AddressFinder {
    fn default() -> Self {
        Self::new(PROGRAM_ID)
    }
}

/// Source of seeds for new campaign accounts.
///
/// Seeds must not repeat for the same base key, otherwise account creation
/// fails because the derived address is already in use.
pub trait SeedGenerator: Send {
    fn next_seed(&mut self) -> String;
}

/// Prefix followed by random alphanumeric characters.
pub struct RandomSeedGenerator {
    prefix: String,
    rng: StdRng,
}

impl RandomSeedGenerator {
    /// Generator seeded from OS entropy
    pub fn new(prefix: impl Into<String>) -> Result<Self, AddressError> {
        Self::with_rng(prefix, StdRng::from_entropy())
    }

    /// Reproducible generator for tests
    pub fn from_seed(prefix: impl Into<String>, seed: u64) -> Result<Self, AddressError> {
        Self::with_rng(prefix, StdRng::seed_from_u64(seed))
    }

    fn with_rng(prefix: impl Into<String>, rng: StdRng) -> Result<Self, AddressError> {
        let prefix = prefix.into();
        let len = prefix.len() + SEED_ENTROPY_CHARS;
        if len > MAX_SEED_LEN {
            return Err(AddressError::SeedTooLong {
                len,
                max: MAX_SEED_LEN,
            });
        }
        Ok(Self { prefix, rng })
    }
}

impl Default for RandomSeedGenerator {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_SEED_PREFIX.to_string(),
            rng: StdRng::from_entropy(),
        }
    }
}

impl SeedGenerator for RandomSeedGenerator {
    fn next_seed(&mut self) -> String {
        let suffix: String = (&mut self.rng)
            .sample_iter(&Alphanumeric)
            .take(SEED_ENTROPY_CHARS)
            .map(char::from)
            .collect();
        format!("{}{}", self.prefix, suffix)
    }
}

/// Always hands out the same seed.
#[derive(Debug, Clone)]
pub struct FixedSeedGenerator(pub String);

impl SeedGenerator for FixedSeedGenerator {
    fn next_seed(&mut self) -> String {
        self.0.clone()
    }
}
