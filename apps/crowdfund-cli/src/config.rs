use crate::error::{CliError, CliResult};
use crowdfund_client::{AccountLayout, ClientConfig};
use serde::{Deserialize, Serialize};
use solana_sdk::{
    commitment_config::{CommitmentConfig, CommitmentLevel},
    pubkey::Pubkey,
};
use std::{
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};
use url::Url;

pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";

/// Optional YAML configuration file. Every field may be omitted; command-line
/// flags take precedence over whatever is set here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// JSON-RPC endpoint of the node
    pub rpc_url: Option<String>,

    /// Keypair file signing as campaign admin
    pub keypair_path: Option<PathBuf>,

    /// Base58 id of the crowdfund program
    pub program_id: Option<String>,

    /// processed, confirmed or finalized
    pub commitment: Option<String>,

    pub confirmation_timeout_secs: Option<u64>,

    pub layout: Option<AccountLayout>,
}

/// Fully resolved settings for one command invocation
#[derive(Debug, Clone)]
pub struct Settings {
    pub rpc_url: String,
    pub keypair_path: PathBuf,
    pub client: ClientConfig,
}

impl CliConfig {
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise starts from an empty configuration
    pub fn load_optional(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies flag overrides and defaults, validating every value
    pub fn resolve(
        self,
        rpc_url: Option<String>,
        keypair_path: Option<PathBuf>,
    ) -> CliResult<Settings> {
        let rpc_url = rpc_url
            .or(self.rpc_url)
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_string());
        validate_rpc_url(&rpc_url)?;

        let keypair_path = keypair_path
            .or(self.keypair_path)
            .unwrap_or_else(default_keypair_path);

        let mut client = ClientConfig::default();
        if let Some(program_id) = self.program_id {
            client.program_id = Pubkey::from_str(&program_id).map_err(|e| {
                CliError::InvalidConfig(format!("Invalid program id '{}': {}", program_id, e))
            })?;
        }
        if let Some(commitment) = self.commitment {
            let level = CommitmentLevel::from_str(&commitment).map_err(|_| {
                CliError::InvalidConfig(format!("Unknown commitment level '{}'", commitment))
            })?;
            client.commitment = CommitmentConfig { commitment: level };
        }
        if let Some(secs) = self.confirmation_timeout_secs {
            if secs == 0 {
                return Err(CliError::InvalidConfig(
                    "confirmation_timeout_secs must be greater than zero".to_string(),
                ));
            }
            client.confirmation_timeout = Duration::from_secs(secs);
        }
        if let Some(layout) = self.layout {
            client.layout = layout;
        }

        Ok(Settings {
            rpc_url,
            keypair_path,
            client,
        })
    }
}

fn validate_rpc_url(rpc_url: &str) -> CliResult<()> {
    let url = Url::parse(rpc_url)
        .map_err(|e| CliError::InvalidConfig(format!("Invalid RPC URL '{}': {}", rpc_url, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(CliError::InvalidConfig(format!(
            "Unsupported RPC URL scheme '{}'",
            scheme
        ))),
    }
}

/// The Solana CLI's default keypair location
fn default_keypair_path() -> PathBuf {
    let home = std::env::var_os("HOME").unwrap_or_default();
    PathBuf::from(home)
        .join(".config")
        .join("solana")
        .join("id.json")
}
