use super::Context;
use crate::config::{lamports_to_sol, CampaignFile};
use crate::error::CliResult;
use solana_sdk::signature::Signer;
use solfund_sdk::validate_campaign_params;
use std::path::PathBuf;
use tracing::debug;

pub async fn execute(context: &Context, config: PathBuf) -> CliResult<()> {
    println!("🚀 Creating campaign...");
    println!("Config: {}", config.display());
    println!("RPC URL: {}", context.rpc_url);

    let campaign_file = CampaignFile::load(&config)?;
    let creator = context.signer()?;
    println!("✅ Creator: {}", creator.pubkey());

    let client = context.client();
    let now = client.get_cluster_time().await?;
    let (campaign_config, milestones) = campaign_file.to_program_params(now)?;

    validate_campaign_params(&campaign_config, &milestones, now)
        .map_err(solfund_client::ClientError::from)?;
    debug!("Campaign parameters validated at cluster time {}", now);

    println!(
        "\n📋 {}: goal {} SOL, minimum {} SOL, {} milestone(s)",
        campaign_config.name,
        lamports_to_sol(campaign_config.goal_amount),
        lamports_to_sol(campaign_config.min_contribution),
        milestones.len()
    );

    let (campaign, signature) = client
        .initialize_campaign(&creator, campaign_config, milestones)
        .await?;

    println!("\n🎉 Campaign created!");
    println!("Address: {}", campaign);
    println!("Signature: {}", signature);
    Ok(())
}
