use super::Context;
use crate::config::sol_to_lamports;
use crate::error::CliResult;
use rust_decimal::Decimal;
use solana_sdk::{pubkey::Pubkey, signature::Signer};

pub async fn execute(context: &Context, campaign: Pubkey, amount: Decimal) -> CliResult<()> {
    let lamports = sol_to_lamports(amount)?;
    let funder = context.signer()?;

    println!("💸 Funding {} with {} SOL from {}", campaign, amount, funder.pubkey());
    let signature = context
        .client()
        .fund_campaign(&funder, &campaign, lamports)
        .await?;

    println!("✅ Contribution recorded");
    println!("Signature: {}", signature);
    Ok(())
}
