use super::Context;
use crate::error::CliResult;
use solana_sdk::pubkey::Pubkey;

pub async fn execute(context: &Context, campaign: Pubkey) -> CliResult<()> {
    let creator = context.signer()?;
    let signature = context.client().resume_campaign(&creator, &campaign).await?;

    println!("▶️  Campaign {} resumed", campaign);
    println!("Signature: {}", signature);
    Ok(())
}
