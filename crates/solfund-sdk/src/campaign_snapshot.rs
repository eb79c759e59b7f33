use anchor_lang::prelude::*;
use anchor_lang::AccountDeserialize;
use serde::{Serialize, Serializer};
use solfund::Campaign;

use crate::{SdkError, SdkResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Paused,
    /// Window closed with the goal met; the creator may keep withdrawing.
    Ended,
    /// Window closed below goal; funders may be refunded.
    Failed,
    Shutdown,
}

impl CampaignStatus {
    pub fn of(campaign: &Campaign, now: i64) -> Self {
        if !campaign.is_active {
            CampaignStatus::Shutdown
        } else if campaign.is_expired(now) {
            if campaign.goal_reached() {
                CampaignStatus::Ended
            } else {
                CampaignStatus::Failed
            }
        } else if campaign.is_paused {
            CampaignStatus::Paused
        } else {
            CampaignStatus::Active
        }
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Ended => "ended",
            CampaignStatus::Failed => "failed",
            CampaignStatus::Shutdown => "shutdown",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneSnapshot {
    pub title: String,
    pub description: String,
    pub percentage: u8,
    pub expected_completion_time: i64,
    pub is_completed: bool,
    pub threshold: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunderSnapshot {
    #[serde(serialize_with = "serialize_pubkey")]
    pub address: Pubkey,
    pub amount: u64,
    pub has_claimed_refund: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSnapshot {
    pub timestamp: i64,
    pub title: String,
    pub content: String,
}

/// Read-only view of a campaign account, with the values a client would
/// otherwise recompute from the raw record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSnapshot {
    #[serde(serialize_with = "serialize_pubkey")]
    pub address: Pubkey,
    #[serde(serialize_with = "serialize_pubkey")]
    pub creator: Pubkey,
    pub name: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub website_url: String,
    pub goal_amount: u64,
    pub min_contribution: u64,
    pub amount_raised: u64,
    pub withdrawn_amount: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub is_active: bool,
    pub is_paused: bool,
    pub allows_refund: bool,
    pub auto_refund_on_failure: bool,
    pub current_milestone: u8,
    pub milestones: Vec<MilestoneSnapshot>,
    pub updates: Vec<UpdateSnapshot>,
    pub funders: Vec<FunderSnapshot>,

    pub status: CampaignStatus,
    pub is_expired: bool,
    /// Raised amount relative to the goal in basis points, capped at 10_000.
    pub progress_bps: u16,
    pub next_milestone_threshold: Option<u64>,
    /// Escrow still held by the campaign (raised minus withdrawn).
    pub refundable_pool: u64,
}

impl CampaignSnapshot {
    pub fn new(address: Pubkey, campaign: &Campaign, now: i64) -> Self {
        let milestones = campaign
            .milestones
            .iter()
            .enumerate()
            .map(|(index, milestone)| MilestoneSnapshot {
                title: milestone.title.clone(),
                description: milestone.description.clone(),
                percentage: milestone.percentage,
                expected_completion_time: milestone.expected_completion_time,
                is_completed: milestone.is_completed,
                threshold: campaign.milestone_threshold(index).unwrap_or(u64::MAX),
            })
            .collect();

        let next_milestone_threshold = campaign
            .milestone_threshold(usize::from(campaign.current_milestone))
            .ok();

        Self {
            address,
            creator: campaign.creator,
            name: campaign.name.clone(),
            description: campaign.description.clone(),
            category: campaign.category.clone(),
            image_url: campaign.image_url.clone(),
            website_url: campaign.website_url.clone(),
            goal_amount: campaign.goal_amount,
            min_contribution: campaign.min_contribution,
            amount_raised: campaign.amount_raised,
            withdrawn_amount: campaign.withdrawn_amount,
            start_time: campaign.start_time,
            end_time: campaign.end_time,
            is_active: campaign.is_active,
            is_paused: campaign.is_paused,
            allows_refund: campaign.allows_refund,
            auto_refund_on_failure: campaign.auto_refund_on_failure,
            current_milestone: campaign.current_milestone,
            milestones,
            updates: campaign
                .updates
                .iter()
                .map(|update| UpdateSnapshot {
                    timestamp: update.timestamp,
                    title: update.title.clone(),
                    content: update.content.clone(),
                })
                .collect(),
            funders: campaign
                .funders
                .iter()
                .map(|funder| FunderSnapshot {
                    address: funder.address,
                    amount: funder.amount,
                    has_claimed_refund: funder.has_claimed_refund,
                })
                .collect(),
            status: CampaignStatus::of(campaign, now),
            is_expired: campaign.is_expired(now),
            progress_bps: progress_bps(campaign.amount_raised, campaign.goal_amount),
            next_milestone_threshold,
            refundable_pool: campaign.escrow_balance(),
        }
    }

    pub fn funder(&self, address: &Pubkey) -> Option<&FunderSnapshot> {
        self.funders.iter().find(|funder| funder.address == *address)
    }
}

fn progress_bps(raised: u64, goal: u64) -> u16 {
    if goal == 0 {
        return 0;
    }
    let bps = (u128::from(raised) * 10_000 / u128::from(goal)).min(10_000);
    bps as u16
}

fn serialize_pubkey<S>(pubkey: &Pubkey, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(pubkey)
}

/// Decodes raw campaign account data, checking the account discriminator.
pub fn decode_campaign(data: &[u8]) -> SdkResult<Campaign> {
    let mut slice = data;
    Campaign::try_deserialize(&mut slice).map_err(|e| SdkError::Decode(e.to_string()))
}

/// Decodes a fetched account, rejecting accounts owned by another program.
pub fn decode_campaign_account(
    program_id: &Pubkey,
    owner: &Pubkey,
    data: &[u8],
) -> SdkResult<Campaign> {
    if owner != program_id {
        return Err(SdkError::WrongOwner(owner.to_string()));
    }
    decode_campaign(data)
}
