use super::Context;
use crate::config::lamports_to_sol;
use crate::error::CliResult;
use solana_sdk::{pubkey::Pubkey, signature::Signer};

pub async fn execute(context: &Context, campaign: Pubkey) -> CliResult<()> {
    let funder = context.signer()?;
    let client = context.client();

    let snapshot = client.get_campaign(&campaign).await?;
    if let Some(record) = snapshot.funder(&funder.pubkey()) {
        println!(
            "↩️  Requesting refund of up to {} SOL ({} SOL left in escrow)",
            lamports_to_sol(record.amount),
            lamports_to_sol(snapshot.refundable_pool)
        );
    }

    let signature = client.request_refund(&funder, &campaign).await?;

    println!("✅ Refund claimed");
    println!("Signature: {}", signature);
    Ok(())
}
