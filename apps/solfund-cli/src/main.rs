use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use solana_sdk::pubkey::Pubkey;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;

use error::CliResult;

#[derive(Parser)]
#[command(name = "solfund")]
#[command(about = "Solfund CLI - milestone-based crowdfunding on Solana")]
#[command(version)]
struct Cli {
    /// Solana RPC URL
    #[arg(
        short,
        long,
        global = true,
        env = "SOLFUND_RPC_URL",
        default_value = "http://127.0.0.1:8899"
    )]
    rpc_url: String,

    /// Signing keypair file (defaults to the Solana CLI keypair)
    #[arg(short, long, global = true, env = "SOLFUND_KEYPAIR")]
    keypair: Option<PathBuf>,

    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a campaign from a YAML definition
    CreateCampaign {
        /// Campaign definition file
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Change a campaign's description or links
    UpdateCampaign {
        /// Campaign address
        campaign: Pubkey,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        image_url: Option<String>,

        #[arg(long)]
        website_url: Option<String>,
    },

    /// Post a progress update to funders
    AddUpdate {
        /// Campaign address
        campaign: Pubkey,

        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        content: String,
    },

    /// Contribute to a campaign
    Fund {
        /// Campaign address
        campaign: Pubkey,

        /// Amount in SOL
        amount: Decimal,
    },

    /// Withdraw the next milestone tranche
    WithdrawMilestone {
        /// Campaign address
        campaign: Pubkey,
    },

    /// Claim a refund from a failed or shut down campaign
    Refund {
        /// Campaign address
        campaign: Pubkey,
    },

    /// Pause new contributions
    Pause {
        /// Campaign address
        campaign: Pubkey,
    },

    /// Accept contributions again
    Resume {
        /// Campaign address
        campaign: Pubkey,
    },

    /// Permanently shut a campaign down and open refunds
    EmergencyShutdown {
        /// Campaign address
        campaign: Pubkey,

        /// Skip the confirmation notice
        #[arg(long)]
        yes: bool,
    },

    /// Show a campaign
    Status {
        /// Campaign address
        campaign: Pubkey,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let context = commands::Context::new(cli.rpc_url, cli.keypair);

    match cli.command {
        Commands::CreateCampaign { config } => {
            commands::create_campaign::execute(&context, config).await
        }

        Commands::UpdateCampaign {
            campaign,
            description,
            image_url,
            website_url,
        } => {
            commands::update_campaign::execute(
                &context,
                campaign,
                description,
                image_url,
                website_url,
            )
            .await
        }

        Commands::AddUpdate {
            campaign,
            title,
            content,
        } => commands::add_update::execute(&context, campaign, title, content).await,

        Commands::Fund { campaign, amount } => {
            commands::fund::execute(&context, campaign, amount).await
        }

        Commands::WithdrawMilestone { campaign } => {
            commands::withdraw_milestone::execute(&context, campaign).await
        }

        Commands::Refund { campaign } => commands::refund::execute(&context, campaign).await,

        Commands::Pause { campaign } => commands::pause::execute(&context, campaign).await,

        Commands::Resume { campaign } => commands::resume::execute(&context, campaign).await,

        Commands::EmergencyShutdown { campaign, yes } => {
            commands::emergency_shutdown::execute(&context, campaign, yes).await
        }

        Commands::Status { campaign, json } => {
            commands::campaign_status::execute(&context, campaign, json).await
        }
    }
}
