mod address_finder;
mod campaign_snapshot;
mod error;
mod instruction_builders;
mod program_error;

pub use address_finder::AddressFinder;
pub use campaign_snapshot::*;
pub use error::{SdkError, SdkResult};
pub use instruction_builders::*;
pub use program_error::{decode_program_error, program_error_code, validate_campaign_params};

pub use solfund::{
    Campaign, CampaignConfig, CampaignUpdate, ErrorCode, Funder, Milestone, MAX_MILESTONES,
};

// Re-export program ID
pub use solfund::ID as PROGRAM_ID;
