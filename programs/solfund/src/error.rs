use anchor_lang::prelude::*;

// Variant order is part of the wire interface (6000..). Append only.
#[error_code]
pub enum ErrorCode {
    #[msg("Campaign is not active")]
    CampaignNotActive,
    #[msg("Campaign is paused")]
    CampaignPaused,
    #[msg("Campaign is not paused")]
    CampaignNotPaused,
    #[msg("Campaign has already been paused")]
    CampaignAlreadyPaused,
    #[msg("Campaign has ended")]
    CampaignEnded,
    #[msg("Campaign is still active")]
    CampaignStillActive,
    #[msg("Unauthorized operation")]
    UnauthorizedOperation,
    #[msg("Insufficient funds")]
    InsufficientFunds,
    #[msg("Calculation overflow")]
    CalculationOverflow,
    #[msg("Invalid parameters provided")]
    InvalidParameters,
    #[msg("Too many milestones")]
    TooManyMilestones,
    #[msg("Below minimum contribution")]
    BelowMinimumContribution,
    #[msg("Goal amount not reached")]
    GoalNotReached,
    #[msg("No more milestones")]
    NoMoreMilestones,
    #[msg("Milestone withdrawal too early")]
    MilestoneTooEarly,
    #[msg("Refunds not allowed")]
    RefundsNotAllowed,
    #[msg("Not eligible for refund")]
    RefundNotEligible,
    #[msg("No funder record found")]
    NoFunderRecord,
    #[msg("Refund already claimed")]
    RefundAlreadyClaimed,

    #[msg("Campaign has reached its maximum number of funders")]
    FunderLimitReached,
    #[msg("String parameter is too long")]
    StringTooLong,
}
