use anchor_lang::prelude::*;

use crate::{
    state::{Campaign, CampaignConfig, Milestone},
    CAMPAIGN_SEED_PREFIX,
};

#[derive(Accounts)]
#[instruction(config: CampaignConfig)]
pub struct InitializeCampaign<'info> {
    #[account(
        init,
        payer = creator,
        space = 8 + Campaign::INIT_SPACE,
        seeds = [
            CAMPAIGN_SEED_PREFIX,
            creator.key().as_ref(),
            config.name.as_bytes(),
        ],
        bump
    )]
    pub campaign: Box<Account<'info, Campaign>>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct CampaignCreated {
    pub campaign: Pubkey,
    pub creator: Pubkey,
    pub goal_amount: u64,
    pub end_time: i64,
}

pub fn handle_initialize_campaign(
    ctx: Context<InitializeCampaign>,
    config: CampaignConfig,
    milestones: Vec<Milestone>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let creator = ctx.accounts.creator.key();

    let campaign = &mut ctx.accounts.campaign;
    campaign.set_inner(Campaign::new(
        creator,
        config,
        milestones,
        now,
        ctx.bumps.campaign,
    )?);

    emit!(CampaignCreated {
        campaign: campaign.key(),
        creator,
        goal_amount: campaign.goal_amount,
        end_time: campaign.end_time,
    });

    msg!(
        "Campaign {} created: goal {} lamports, {} milestones, ends at {}",
        campaign.key(),
        campaign.goal_amount,
        campaign.milestones.len(),
        campaign.end_time
    );

    Ok(())
}
