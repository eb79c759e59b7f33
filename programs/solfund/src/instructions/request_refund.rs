use anchor_lang::prelude::*;

use super::escrow::release_from_escrow;
use crate::{state::Campaign, CAMPAIGN_SEED_PREFIX};

#[derive(Accounts)]
pub struct RequestRefund<'info> {
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
pub struct RefundClaimed {
    pub campaign: Pubkey,
    pub funder: Pubkey,
    pub amount: u64,
}

pub fn handle_request_refund(ctx: Context<RequestRefund>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let funder = ctx.accounts.funder.key();

    let amount = ctx.accounts.campaign.claim_refund(&funder, now)?;

    release_from_escrow(
        &ctx.accounts.campaign.to_account_info(),
        &ctx.accounts.funder.to_account_info(),
        amount,
    )?;

    let campaign = &ctx.accounts.campaign;

    emit!(RefundClaimed {
        campaign: campaign.key(),
        funder,
        amount,
    });

    msg!(
        "Campaign {} refunded {} lamports to {}",
        campaign.key(),
        amount,
        funder
    );

    Ok(())
}
