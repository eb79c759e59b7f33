use solfund::ErrorCode;
use thiserror::Error;

pub type SdkResult<T> = Result<T, SdkError>;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Campaign name must be 1..={max} bytes, got {len}")]
    InvalidCampaignName { len: usize, max: usize },

    #[error("Campaign parameters rejected: {0:?}")]
    InvalidCampaign(ErrorCode),

    #[error("Failed to decode campaign account: {0}")]
    Decode(String),

    #[error("Account is not owned by the campaign program (owner: {0})")]
    WrongOwner(String),
}
