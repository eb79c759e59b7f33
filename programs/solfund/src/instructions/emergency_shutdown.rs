use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::Campaign, CAMPAIGN_SEED_PREFIX};

#[derive(Accounts)]
pub struct EmergencyShutdown<'info> {
    #[account(
        mut,
        seeds = [
            CAMPAIGN_SEED_PREFIX,
            campaign.creator.as_ref(),
            campaign.name.as_bytes(),
        ],
        bump = campaign.bump,
        has_one = creator @ ErrorCode::UnauthorizedOperation,
    )]
    pub campaign: Box<Account<'info, Campaign>>,

    pub creator: Signer<'info>,
}

#[event]
pub struct EmergencyShutdownTriggered {
    pub campaign: Pubkey,
    pub timestamp: i64,
}

/// Permanently deactivates the campaign. Funding and withdrawals stop; refunds
/// open for every funder with a positive contribution.
pub fn handle_emergency_shutdown(ctx: Context<EmergencyShutdown>) -> Result<()> {
    let timestamp = Clock::get()?.unix_timestamp;
    let campaign = &mut ctx.accounts.campaign;

    campaign.shut_down(&ctx.accounts.creator.key())?;

    emit!(EmergencyShutdownTriggered {
        campaign: campaign.key(),
        timestamp,
    });

    msg!(
        "Campaign {} shut down with {} lamports in escrow",
        campaign.key(),
        campaign.escrow_balance()
    );

    Ok(())
}
