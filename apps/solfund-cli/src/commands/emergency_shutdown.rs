use super::Context;
use crate::error::{CliError, CliResult};
use solana_sdk::pubkey::Pubkey;

pub async fn execute(context: &Context, campaign: Pubkey, yes: bool) -> CliResult<()> {
    if !yes {
        return Err(CliError::InvalidConfig(
            "emergency shutdown cannot be undone; re-run with --yes".to_string(),
        ));
    }

    let creator = context.signer()?;
    let signature = context
        .client()
        .emergency_shutdown(&creator, &campaign)
        .await?;

    println!("🛑 Campaign {} shut down. Funders can now claim refunds.", campaign);
    println!("Signature: {}", signature);
    Ok(())
}
