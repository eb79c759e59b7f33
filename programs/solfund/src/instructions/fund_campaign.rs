use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::{state::Campaign, CAMPAIGN_SEED_PREFIX};

#[derive(Accounts)]
pub struct FundCampaign<'info> {
    #[account(
        mut,
        seeds = [
            CAMPAIGN_SEED_PREFIX,
            campaign.creator.as_ref(),
            campaign.name.as_bytes(),
        ],
        bump = campaign.bump,
    )]
    pub campaign: Box<Account<'info, Campaign>>,

    #[account(mut)]
    pub funder: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct FundingReceived {
    pub campaign: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
}

pub fn handle_fund_campaign(ctx: Context<FundCampaign>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let funder = ctx.accounts.funder.key();

    ctx.accounts
        .campaign
        .record_contribution(funder, amount, now)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.funder.to_account_info(),
                to: ctx.accounts.campaign.to_account_info(),
            },
        ),
        amount,
    )?;

    let campaign = &ctx.accounts.campaign;

    emit!(FundingReceived {
        campaign: campaign.key(),
        funder,
        amount,
    });

    msg!(
        "Campaign {} funded by {}: {} lamports ({} of {} raised)",
        campaign.key(),
        funder,
        amount,
        campaign.amount_raised,
        campaign.goal_amount
    );

    Ok(())
}
