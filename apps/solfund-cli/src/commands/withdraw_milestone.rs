use super::Context;
use crate::config::lamports_to_sol;
use crate::error::CliResult;
use solana_sdk::pubkey::Pubkey;

pub async fn execute(context: &Context, campaign: Pubkey) -> CliResult<()> {
    let creator = context.signer()?;
    let client = context.client();

    let before = client.get_campaign(&campaign).await?;
    let signature = client.withdraw_milestone(&creator, &campaign).await?;
    let after = client.get_campaign(&campaign).await?;

    let released = after.withdrawn_amount.saturating_sub(before.withdrawn_amount);
    println!(
        "✅ Milestone {} of {} released: {} SOL",
        after.current_milestone,
        after.milestones.len(),
        lamports_to_sol(released)
    );
    println!("Signature: {}", signature);
    Ok(())
}
