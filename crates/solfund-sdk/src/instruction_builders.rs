use crate::AddressFinder;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::{prelude::*, InstructionData as _};
use solfund::{CampaignConfig, Milestone};

/// Builds `initialize_campaign`. The campaign address is derived from the
/// creator and `config.name`, so an over-long name fails here.
pub fn build_initialize_campaign_ix(
    address_finder: &AddressFinder,
    creator: Pubkey,
    config: CampaignConfig,
    milestones: Vec<Milestone>,
) -> crate::SdkResult<(
    Instruction,
    solfund::accounts::InitializeCampaign,
    solfund::instruction::InitializeCampaign,
)> {
    let (campaign, _) = address_finder.find_campaign_address(&creator, &config.name)?;

    let ix_accounts = solfund::accounts::InitializeCampaign {
        campaign,
        creator,
        system_program: address_finder.system_program_id,
    };

    let ix_data = solfund::instruction::InitializeCampaign { config, milestones };

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_update_campaign_ix(
    address_finder: &AddressFinder,
    campaign: Pubkey,
    creator: Pubkey,
    description: Option<String>,
    image_url: Option<String>,
    website_url: Option<String>,
) -> Result<(
    Instruction,
    solfund::accounts::UpdateCampaign,
    solfund::instruction::UpdateCampaign,
)> {
    let ix_accounts = solfund::accounts::UpdateCampaign { campaign, creator };

    let ix_data = solfund::instruction::UpdateCampaign {
        description,
        image_url,
        website_url,
    };

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_add_campaign_update_ix(
    address_finder: &AddressFinder,
    campaign: Pubkey,
    creator: Pubkey,
    title: String,
    content: String,
) -> Result<(
    Instruction,
    solfund::accounts::AddCampaignUpdate,
    solfund::instruction::AddCampaignUpdate,
)> {
    let ix_accounts = solfund::accounts::AddCampaignUpdate { campaign, creator };

    let ix_data = solfund::instruction::AddCampaignUpdate { title, content };

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_fund_campaign_ix(
    address_finder: &AddressFinder,
    campaign: Pubkey,
    funder: Pubkey,
    amount: u64,
) -> Result<(
    Instruction,
    solfund::accounts::FundCampaign,
    solfund::instruction::FundCampaign,
)> {
    let ix_accounts = solfund::accounts::FundCampaign {
        campaign,
        funder,
        system_program: address_finder.system_program_id,
    };

    let ix_data = solfund::instruction::FundCampaign { amount };

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_withdraw_milestone_ix(
    address_finder: &AddressFinder,
    campaign: Pubkey,
    creator: Pubkey,
) -> Result<(
    Instruction,
    solfund::accounts::WithdrawMilestone,
    solfund::instruction::WithdrawMilestone,
)> {
    let ix_accounts = solfund::accounts::WithdrawMilestone {
        campaign,
        creator,
        system_program: address_finder.system_program_id,
    };

    let ix_data = solfund::instruction::WithdrawMilestone {};

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_request_refund_ix(
    address_finder: &AddressFinder,
    campaign: Pubkey,
    funder: Pubkey,
) -> Result<(
    Instruction,
    solfund::accounts::RequestRefund,
    solfund::instruction::RequestRefund,
)> {
    let ix_accounts = solfund::accounts::RequestRefund {
        campaign,
        funder,
        system_program: address_finder.system_program_id,
    };

    let ix_data = solfund::instruction::RequestRefund {};

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_pause_campaign_ix(
    address_finder: &AddressFinder,
    campaign: Pubkey,
    creator: Pubkey,
) -> Result<(
    Instruction,
    solfund::accounts::PauseCampaign,
    solfund::instruction::PauseCampaign,
)> {
    let ix_accounts = solfund::accounts::PauseCampaign { campaign, creator };

    let ix_data = solfund::instruction::PauseCampaign {};

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_resume_campaign_ix(
    address_finder: &AddressFinder,
    campaign: Pubkey,
    creator: Pubkey,
) -> Result<(
    Instruction,
    solfund::accounts::ResumeCampaign,
    solfund::instruction::ResumeCampaign,
)> {
    let ix_accounts = solfund::accounts::ResumeCampaign { campaign, creator };

    let ix_data = solfund::instruction::ResumeCampaign {};

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}

pub fn build_emergency_shutdown_ix(
    address_finder: &AddressFinder,
    campaign: Pubkey,
    creator: Pubkey,
) -> Result<(
    Instruction,
    solfund::accounts::EmergencyShutdown,
    solfund::instruction::EmergencyShutdown,
)> {
    let ix_accounts = solfund::accounts::EmergencyShutdown { campaign, creator };

    let ix_data = solfund::instruction::EmergencyShutdown {};

    let ix = Instruction {
        program_id: address_finder.program_id,
        accounts: ix_accounts.to_account_metas(None),
        data: ix_data.data(),
    };

    Ok((ix, ix_accounts, ix_data))
}
