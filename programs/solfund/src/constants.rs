use anchor_lang::prelude::*;

/// Seed prefix for campaign PDA derivation: [CAMPAIGN_SEED_PREFIX, creator, name]
#[constant]
pub const CAMPAIGN_SEED_PREFIX: &[u8] = b"campaign";

/// Campaign names double as a PDA seed, so they are capped at the seed limit.
pub const MAX_NAME_LEN: usize = 32;

pub const MAX_CATEGORY_LEN: usize = 32;
pub const MAX_DESCRIPTION_LEN: usize = 256;
pub const MAX_URL_LEN: usize = 128;

/// Maximum number of milestones a campaign can declare.
pub const MAX_MILESTONES: usize = 5;

pub const MAX_MILESTONE_TITLE_LEN: usize = 64;
pub const MAX_MILESTONE_DESCRIPTION_LEN: usize = 128;

/// Number of creator updates retained on the account; older entries are evicted.
pub const MAX_CAMPAIGN_UPDATES: usize = 5;

pub const MAX_UPDATE_TITLE_LEN: usize = 64;
pub const MAX_UPDATE_CONTENT_LEN: usize = 256;

/// Maximum number of unique funders tracked per campaign.
pub const MAX_FUNDERS: usize = 100;

/// The final milestone must release the full goal.
pub const FINAL_MILESTONE_PERCENTAGE: u8 = 100;
