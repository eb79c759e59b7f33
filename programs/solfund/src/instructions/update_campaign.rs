use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::Campaign, CAMPAIGN_SEED_PREFIX};

#[derive(Accounts)]
pub struct UpdateCampaign<'info> {
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
pub struct CampaignUpdated {
    pub campaign: Pubkey,
    pub timestamp: i64,
}

pub fn handle_update_campaign(
    ctx: Context<UpdateCampaign>,
    description: Option<String>,
    image_url: Option<String>,
    website_url: Option<String>,
) -> Result<()> {
    let campaign = &mut ctx.accounts.campaign;

    campaign.update_metadata(
        &ctx.accounts.creator.key(),
        description,
        image_url,
        website_url,
    )?;

    emit!(CampaignUpdated {
        campaign: campaign.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Campaign {} metadata updated", campaign.key());

    Ok(())
}
