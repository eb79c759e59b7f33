pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::ErrorCode;
pub use instructions::*;
pub use state::*;

use anchor_lang::prelude::*;

declare_id!("816C7G5Jsi85t2z6TWQKsmDVXCReyRnW6w6WQx5LJnQR");

#[program]
pub mod solfund {
    use super::instructions;
    use super::*;

    // creator
    pub fn initialize_campaign(
        ctx: Context<InitializeCampaign>,
        config: CampaignConfig,
        milestones: Vec<Milestone>,
    ) -> Result<()> {
        instructions::handle_initialize_campaign(ctx, config, milestones)
    }

    // creator
    pub fn update_campaign(
        ctx: Context<UpdateCampaign>,
        description: Option<String>,
        image_url: Option<String>,
        website_url: Option<String>,
    ) -> Result<()> {
        instructions::handle_update_campaign(ctx, description, image_url, website_url)
    }

    // creator
    pub fn add_campaign_update(
        ctx: Context<AddCampaignUpdate>,
        title: String,
        content: String,
    ) -> Result<()> {
        instructions::handle_add_campaign_update(ctx, title, content)
    }

    // funder
    pub fn fund_campaign(ctx: Context<FundCampaign>, amount: u64) -> Result<()> {
        instructions::handle_fund_campaign(ctx, amount)
    }

    // creator
    pub fn withdraw_milestone(ctx: Context<WithdrawMilestone>) -> Result<()> {
        instructions::handle_withdraw_milestone(ctx)
    }

    // funder
    pub fn request_refund(ctx: Context<RequestRefund>) -> Result<()> {
        instructions::handle_request_refund(ctx)
    }

    // creator
    pub fn pause_campaign(ctx: Context<PauseCampaign>) -> Result<()> {
        instructions::handle_pause_campaign(ctx)
    }

    // creator
    pub fn resume_campaign(ctx: Context<ResumeCampaign>) -> Result<()> {
        instructions::handle_resume_campaign(ctx)
    }

    // creator
    pub fn emergency_shutdown(ctx: Context<EmergencyShutdown>) -> Result<()> {
        instructions::handle_emergency_shutdown(ctx)
    }
}
