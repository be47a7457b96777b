use clap::{Parser, Subcommand};
use crowdfund_client::NewCampaign;
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use config::CliConfig;
use error::CliResult;

#[derive(Parser)]
#[command(name = "crowdfund")]
#[command(about = "Crowdfund CLI - Create and browse campaign accounts on Solana")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a campaign account administered by the keypair
    CreateCampaign {
        /// Campaign name
        #[arg(short, long)]
        name: String,

        /// Campaign description
        #[arg(short, long)]
        description: String,

        /// Link to the campaign image
        #[arg(short, long)]
        image_link: String,

        /// Admin keypair file [default: ~/.config/solana/id.json]
        #[arg(short, long)]
        keypair: Option<PathBuf>,

        /// Solana RPC URL [default: https://api.devnet.solana.com]
        #[arg(short, long)]
        rpc_url: Option<String>,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List every campaign owned by the program
    ListCampaigns {
        /// Solana RPC URL [default: https://api.devnet.solana.com]
        #[arg(short, long)]
        rpc_url: Option<String>,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print campaigns as a JSON array
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::CreateCampaign {
            name,
            description,
            image_link,
            keypair,
            rpc_url,
            config,
        } => {
            let settings = CliConfig::load_optional(config.as_deref())?.resolve(rpc_url, keypair)?;
            let campaign = NewCampaign {
                name,
                description,
                image_link,
            };
            commands::create_campaign::execute(campaign, settings).await
        }

        Commands::ListCampaigns {
            rpc_url,
            config,
            json,
        } => {
            let settings = CliConfig::load_optional(config.as_deref())?.resolve(rpc_url, None)?;
            commands::list_campaigns::execute(settings, json).await
        }
    }
}
