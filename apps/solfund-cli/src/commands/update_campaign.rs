use super::Context;
use crate::error::{CliError, CliResult};
use solana_sdk::pubkey::Pubkey;

pub async fn execute(
    context: &Context,
    campaign: Pubkey,
    description: Option<String>,
    image_url: Option<String>,
    website_url: Option<String>,
) -> CliResult<()> {
    if description.is_none() && image_url.is_none() && website_url.is_none() {
        return Err(CliError::InvalidConfig(
            "nothing to update: pass --description, --image-url or --website-url".to_string(),
        ));
    }

    let creator = context.signer()?;
    let signature = context
        .client()
        .update_campaign(&creator, &campaign, description, image_url, website_url)
        .await?;

    println!("✅ Campaign {} updated", campaign);
    println!("Signature: {}", signature);
    Ok(())
}
