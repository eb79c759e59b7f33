use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::Campaign, CAMPAIGN_SEED_PREFIX};

#[derive(Accounts)]
pub struct PauseCampaign<'info> {
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
pub struct CampaignPaused {
    pub campaign: Pubkey,
    pub timestamp: i64,
}

pub fn handle_pause_campaign(ctx: Context<PauseCampaign>) -> Result<()> {
    let campaign = &mut ctx.accounts.campaign;

    campaign.pause(&ctx.accounts.creator.key())?;

    emit!(CampaignPaused {
        campaign: campaign.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Campaign {} paused", campaign.key());

    Ok(())
}
