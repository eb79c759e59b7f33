use anchor_lang::error::{Error as AnchorError, ERROR_CODE_OFFSET};
use solfund::{validate_milestones, CampaignConfig, ErrorCode, Milestone};

use crate::{SdkError, SdkResult};

const PROGRAM_ERRORS: [ErrorCode; 21] = [
    ErrorCode::CampaignNotActive,
    ErrorCode::CampaignPaused,
    ErrorCode::CampaignNotPaused,
    ErrorCode::CampaignAlreadyPaused,
    ErrorCode::CampaignEnded,
    ErrorCode::CampaignStillActive,
    ErrorCode::UnauthorizedOperation,
    ErrorCode::InsufficientFunds,
    ErrorCode::CalculationOverflow,
    ErrorCode::InvalidParameters,
    ErrorCode::TooManyMilestones,
    ErrorCode::BelowMinimumContribution,
    ErrorCode::GoalNotReached,
    ErrorCode::NoMoreMilestones,
    ErrorCode::MilestoneTooEarly,
    ErrorCode::RefundsNotAllowed,
    ErrorCode::RefundNotEligible,
    ErrorCode::NoFunderRecord,
    ErrorCode::RefundAlreadyClaimed,
    ErrorCode::FunderLimitReached,
    ErrorCode::StringTooLong,
];

/// Maps a custom instruction error code (6000..) back to the program's error.
pub fn decode_program_error(code: u32) -> Option<ErrorCode> {
    if code < ERROR_CODE_OFFSET {
        return None;
    }
    PROGRAM_ERRORS
        .iter()
        .copied()
        .find(|error| u32::from(*error) == code)
}

/// Extracts the program error from an anchor error, if it is one of ours.
pub fn program_error_code(error: &AnchorError) -> Option<ErrorCode> {
    match error {
        AnchorError::AnchorError(err) => decode_program_error(err.error_code_number),
        AnchorError::ProgramError(_) => None,
    }
}

/// Runs the program's creation checks locally so bad parameters never reach
/// the network. `now` stands in for the on-chain start time.
pub fn validate_campaign_params(
    config: &CampaignConfig,
    milestones: &[Milestone],
    now: i64,
) -> SdkResult<()> {
    let reject = |error: AnchorError| {
        SdkError::InvalidCampaign(
            program_error_code(&error).unwrap_or(ErrorCode::InvalidParameters),
        )
    };

    config.validate().map_err(reject)?;
    validate_milestones(milestones, now).map_err(reject)?;
    Ok(())
}
