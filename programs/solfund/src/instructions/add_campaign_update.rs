use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::Campaign, CAMPAIGN_SEED_PREFIX};

#[derive(Accounts)]
pub struct AddCampaignUpdate<'info> {
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
pub struct UpdateAdded {
    pub campaign: Pubkey,
    pub timestamp: i64,
}

pub fn handle_add_campaign_update(
    ctx: Context<AddCampaignUpdate>,
    title: String,
    content: String,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let campaign = &mut ctx.accounts.campaign;

    campaign.push_update(&ctx.accounts.creator.key(), title, content, now)?;

    emit!(UpdateAdded {
        campaign: campaign.key(),
        timestamp: now,
    });

    msg!(
        "Campaign {} update posted ({} retained)",
        campaign.key(),
        campaign.updates.len()
    );

    Ok(())
}
