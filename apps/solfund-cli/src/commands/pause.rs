use super::Context;
use crate::error::CliResult;
use solana_sdk::pubkey::Pubkey;

pub async fn execute(context: &Context, campaign: Pubkey) -> CliResult<()> {
    let creator = context.signer()?;
    let signature = context.client().pause_campaign(&creator, &campaign).await?;

    println!("⏸️  Campaign {} paused", campaign);
    println!("Signature: {}", signature);
    Ok(())
}
