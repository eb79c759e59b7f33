use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::Campaign, CAMPAIGN_SEED_PREFIX};

#[derive(Accounts)]
pub struct ResumeCampaign<'info> {
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
pub struct CampaignResumed {
    pub campaign: Pubkey,
    pub timestamp: i64,
}

pub fn handle_resume_campaign(ctx: Context<ResumeCampaign>) -> Result<()> {
    ctx.accounts
        .campaign
        .resume(&ctx.accounts.creator.key())?;

    let campaign = &ctx.accounts.campaign;
    emit!(CampaignResumed {
        campaign: campaign.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Campaign {} resumed", campaign.key());

    Ok(())
}
