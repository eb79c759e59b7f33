use anchor_lang::prelude::*;

use super::escrow::release_from_escrow;
use crate::{error::ErrorCode, state::Campaign, CAMPAIGN_SEED_PREFIX};

#[derive(Accounts)]
pub struct WithdrawMilestone<'info> {
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

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct MilestoneWithdrawn {
    pub campaign: Pubkey,
    pub milestone_index: u8,
    pub amount: u64,
}

pub fn handle_withdraw_milestone(ctx: Context<WithdrawMilestone>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let release = ctx
        .accounts
        .campaign
        .release_next_milestone(&ctx.accounts.creator.key(), now)?;

    release_from_escrow(
        &ctx.accounts.campaign.to_account_info(),
        &ctx.accounts.creator.to_account_info(),
        release.amount,
    )?;

    let campaign = &ctx.accounts.campaign;

    emit!(MilestoneWithdrawn {
        campaign: campaign.key(),
        milestone_index: release.milestone_index,
        amount: release.amount,
    });

    msg!(
        "Campaign {} milestone {} withdrawn: {} lamports ({} withdrawn in total)",
        campaign.key(),
        release.milestone_index,
        release.amount,
        campaign.withdrawn_amount
    );

    Ok(())
}
