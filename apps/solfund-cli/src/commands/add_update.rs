use super::Context;
use crate::error::CliResult;
use solana_sdk::pubkey::Pubkey;

pub async fn execute(
    context: &Context,
    campaign: Pubkey,
    title: String,
    content: String,
) -> CliResult<()> {
    let creator = context.signer()?;
    let signature = context
        .client()
        .add_campaign_update(&creator, &campaign, title, content)
        .await?;

    println!("📣 Update posted to {}", campaign);
    println!("Signature: {}", signature);
    Ok(())
}
