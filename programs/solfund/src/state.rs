use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode, FINAL_MILESTONE_PERCENTAGE, MAX_CAMPAIGN_UPDATES, MAX_CATEGORY_LEN,
    MAX_DESCRIPTION_LEN, MAX_FUNDERS, MAX_MILESTONES, MAX_MILESTONE_DESCRIPTION_LEN,
    MAX_MILESTONE_TITLE_LEN, MAX_NAME_LEN, MAX_UPDATE_CONTENT_LEN, MAX_UPDATE_TITLE_LEN,
    MAX_URL_LEN,
};

/// Creation parameters for a campaign. Only the metadata fields can change later.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CampaignConfig {
    pub name: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    pub website_url: String,
    pub goal_amount: u64,
    pub min_contribution: u64,
    /// Length of the funding window in seconds.
    pub campaign_duration: i64,
    pub allows_refund: bool,
    pub auto_refund_on_failure: bool,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct Milestone {
    #[max_len(MAX_MILESTONE_TITLE_LEN)]
    pub title: String,

    #[max_len(MAX_MILESTONE_DESCRIPTION_LEN)]
    pub description: String,

    /// Share of the goal (1..=100) that must be raised before this tranche unlocks.
    pub percentage: u8,

    pub expected_completion_time: i64,

    pub is_completed: bool,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct CampaignUpdate {
    pub timestamp: i64,

    #[max_len(MAX_UPDATE_TITLE_LEN)]
    pub title: String,

    #[max_len(MAX_UPDATE_CONTENT_LEN)]
    pub content: String,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct Funder {
    pub address: Pubkey,
    pub amount: u64,
    pub has_claimed_refund: bool,
}

#[account] // seed [CAMPAIGN_SEED_PREFIX, creator, name]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Campaign {
    /// The only key allowed to run creator operations.
    pub creator: Pubkey,

    #[max_len(MAX_NAME_LEN)]
    pub name: String,

    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,

    #[max_len(MAX_CATEGORY_LEN)]
    pub category: String,

    #[max_len(MAX_URL_LEN)]
    pub image_url: String,

    #[max_len(MAX_URL_LEN)]
    pub website_url: String,

    pub goal_amount: u64,

    pub min_contribution: u64,

    /// Sum of contributions, reduced only by refunds.
    pub amount_raised: u64,

    /// Sum of milestone tranches paid to the creator. Never exceeds `amount_raised`.
    pub withdrawn_amount: u64,

    pub start_time: i64,

    pub end_time: i64,

    /// Cleared by emergency shutdown, never set again.
    pub is_active: bool,

    pub is_paused: bool,

    pub allows_refund: bool,

    pub auto_refund_on_failure: bool,

    #[max_len(MAX_MILESTONES)]
    pub milestones: Vec<Milestone>,

    /// Index of the next milestone eligible for withdrawal.
    pub current_milestone: u8,

    /// Most recent creator updates, oldest first.
    #[max_len(MAX_CAMPAIGN_UPDATES)]
    pub updates: Vec<CampaignUpdate>,

    #[max_len(MAX_FUNDERS)]
    pub funders: Vec<Funder>,

    /// Bump seed for the Campaign PDA.
    pub bump: u8,
}

/// Outcome of a successful milestone withdrawal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MilestoneRelease {
    pub milestone_index: u8,
    pub amount: u64,
}

pub fn is_expired(now: i64, end_time: i64) -> bool {
    now > end_time
}

fn require_max_len(value: &str, max_len: usize) -> Result<()> {
    require!(value.len() <= max_len, ErrorCode::StringTooLong);
    Ok(())
}

impl CampaignConfig {
    pub fn validate(&self) -> Result<()> {
        require!(!self.name.is_empty(), ErrorCode::InvalidParameters);
        require_max_len(&self.name, MAX_NAME_LEN)?;
        require_max_len(&self.description, MAX_DESCRIPTION_LEN)?;
        require_max_len(&self.category, MAX_CATEGORY_LEN)?;
        require_max_len(&self.image_url, MAX_URL_LEN)?;
        require_max_len(&self.website_url, MAX_URL_LEN)?;

        require!(self.goal_amount > 0, ErrorCode::InvalidParameters);
        require!(self.min_contribution > 0, ErrorCode::InvalidParameters);
        require!(
            self.min_contribution <= self.goal_amount,
            ErrorCode::InvalidParameters
        );
        require!(self.campaign_duration > 0, ErrorCode::InvalidParameters);

        Ok(())
    }
}

/// Checks a milestone schedule against a campaign starting at `start_time`.
pub fn validate_milestones(milestones: &[Milestone], start_time: i64) -> Result<()> {
    require!(!milestones.is_empty(), ErrorCode::InvalidParameters);
    require!(
        milestones.len() <= MAX_MILESTONES,
        ErrorCode::TooManyMilestones
    );

    let mut previous_percentage = 0u8;
    for milestone in milestones {
        require_max_len(&milestone.title, MAX_MILESTONE_TITLE_LEN)?;
        require_max_len(&milestone.description, MAX_MILESTONE_DESCRIPTION_LEN)?;
        require!(
            milestone.percentage > previous_percentage,
            ErrorCode::InvalidParameters
        );
        require!(
            milestone.percentage <= FINAL_MILESTONE_PERCENTAGE,
            ErrorCode::InvalidParameters
        );
        require!(
            milestone.expected_completion_time >= start_time,
            ErrorCode::InvalidParameters
        );
        previous_percentage = milestone.percentage;
    }

    require!(
        previous_percentage == FINAL_MILESTONE_PERCENTAGE,
        ErrorCode::InvalidParameters
    );

    Ok(())
}

impl Campaign {
    /// Builds a fresh campaign record. Every check runs before anything is allocated.
    pub fn new(
        creator: Pubkey,
        config: CampaignConfig,
        milestones: Vec<Milestone>,
        now: i64,
        bump: u8,
    ) -> Result<Self> {
        config.validate()?;
        validate_milestones(&milestones, now)?;

        let end_time = now
            .checked_add(config.campaign_duration)
            .ok_or(ErrorCode::CalculationOverflow)?;

        let milestones = milestones
            .into_iter()
            .map(|milestone| Milestone {
                is_completed: false,
                ..milestone
            })
            .collect();

        Ok(Self {
            creator,
            name: config.name,
            description: config.description,
            category: config.category,
            image_url: config.image_url,
            website_url: config.website_url,
            goal_amount: config.goal_amount,
            min_contribution: config.min_contribution,
            amount_raised: 0,
            withdrawn_amount: 0,
            start_time: now,
            end_time,
            is_active: true,
            is_paused: false,
            allows_refund: config.allows_refund,
            auto_refund_on_failure: config.auto_refund_on_failure,
            milestones,
            current_milestone: 0,
            updates: Vec::new(),
            funders: Vec::new(),
            bump,
        })
    }

    pub fn is_expired(&self, now: i64) -> bool {
        is_expired(now, self.end_time)
    }

    /// Accepting contributions: not shut down and still inside the window.
    pub fn is_live(&self, now: i64) -> bool {
        self.is_active && !self.is_expired(now)
    }

    pub fn goal_reached(&self) -> bool {
        self.amount_raised >= self.goal_amount
    }

    /// Shut down, or the window closed below goal.
    pub fn has_failed(&self, now: i64) -> bool {
        !self.is_active || (self.is_expired(now) && !self.goal_reached())
    }

    /// `auto_refund_on_failure` is informational and does not open refunds.
    pub fn refunds_enabled(&self) -> bool {
        self.allows_refund
    }

    /// Escrowed funds not yet paid out to the creator.
    pub fn escrow_balance(&self) -> u64 {
        self.amount_raised.saturating_sub(self.withdrawn_amount)
    }

    pub fn funder(&self, address: &Pubkey) -> Option<&Funder> {
        self.funders.iter().find(|funder| funder.address == *address)
    }

    /// Amount of the goal that must be raised to unlock milestone `index`.
    pub fn milestone_threshold(&self, index: usize) -> Result<u64> {
        let milestone = self
            .milestones
            .get(index)
            .ok_or(ErrorCode::NoMoreMilestones)?;
        let threshold =
            u128::from(self.goal_amount) * u128::from(milestone.percentage) / 100;
        u64::try_from(threshold).map_err(|_| error!(ErrorCode::CalculationOverflow))
    }

    fn require_creator(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.creator, ErrorCode::UnauthorizedOperation);
        Ok(())
    }

    pub fn update_metadata(
        &mut self,
        caller: &Pubkey,
        description: Option<String>,
        image_url: Option<String>,
        website_url: Option<String>,
    ) -> Result<()> {
        self.require_creator(caller)?;

        if let Some(description) = &description {
            require_max_len(description, MAX_DESCRIPTION_LEN)?;
        }
        if let Some(image_url) = &image_url {
            require_max_len(image_url, MAX_URL_LEN)?;
        }
        if let Some(website_url) = &website_url {
            require_max_len(website_url, MAX_URL_LEN)?;
        }

        if let Some(description) = description {
            self.description = description;
        }
        if let Some(image_url) = image_url {
            self.image_url = image_url;
        }
        if let Some(website_url) = website_url {
            self.website_url = website_url;
        }

        Ok(())
    }

    /// Appends a creator update, evicting the oldest one once the log is full.
    pub fn push_update(
        &mut self,
        caller: &Pubkey,
        title: String,
        content: String,
        now: i64,
    ) -> Result<()> {
        self.require_creator(caller)?;
        require_max_len(&title, MAX_UPDATE_TITLE_LEN)?;
        require_max_len(&content, MAX_UPDATE_CONTENT_LEN)?;

        if self.updates.len() >= MAX_CAMPAIGN_UPDATES {
            self.updates.remove(0);
        }
        self.updates.push(CampaignUpdate {
            timestamp: now,
            title,
            content,
        });

        Ok(())
    }

    pub fn record_contribution(&mut self, funder: Pubkey, amount: u64, now: i64) -> Result<()> {
        require!(self.is_active, ErrorCode::CampaignNotActive);
        require!(!self.is_paused, ErrorCode::CampaignPaused);
        require!(!self.is_expired(now), ErrorCode::CampaignEnded);
        require!(
            amount >= self.min_contribution,
            ErrorCode::BelowMinimumContribution
        );

        let amount_raised = self
            .amount_raised
            .checked_add(amount)
            .ok_or(ErrorCode::CalculationOverflow)?;

        match self
            .funders
            .iter()
            .position(|record| record.address == funder)
        {
            Some(index) => {
                let record = &mut self.funders[index];
                record.amount = record
                    .amount
                    .checked_add(amount)
                    .ok_or(ErrorCode::CalculationOverflow)?;
            }
            None => {
                require!(
                    self.funders.len() < MAX_FUNDERS,
                    ErrorCode::FunderLimitReached
                );
                self.funders.push(Funder {
                    address: funder,
                    amount,
                    has_claimed_refund: false,
                });
            }
        }

        self.amount_raised = amount_raised;
        Ok(())
    }

    /// Completes the current milestone and returns the tranche owed to the creator.
    pub fn release_next_milestone(
        &mut self,
        caller: &Pubkey,
        now: i64,
    ) -> Result<MilestoneRelease> {
        self.require_creator(caller)?;
        require!(self.is_active, ErrorCode::CampaignNotActive);

        let index = usize::from(self.current_milestone);
        require!(index < self.milestones.len(), ErrorCode::NoMoreMilestones);

        // a closed window below goal belongs to the refunders
        require!(
            !self.is_expired(now) || self.goal_reached(),
            ErrorCode::CampaignEnded
        );

        let threshold = self.milestone_threshold(index)?;
        require!(
            self.amount_raised >= threshold,
            ErrorCode::MilestoneTooEarly
        );
        require!(
            self.withdrawn_amount < self.amount_raised,
            ErrorCode::InsufficientFunds
        );

        let amount = self
            .amount_raised
            .min(threshold)
            .checked_sub(self.withdrawn_amount)
            .ok_or(ErrorCode::InsufficientFunds)?;
        require!(amount > 0, ErrorCode::InsufficientFunds);

        let withdrawn_amount = self
            .withdrawn_amount
            .checked_add(amount)
            .ok_or(ErrorCode::CalculationOverflow)?;
        let next_milestone = self
            .current_milestone
            .checked_add(1)
            .ok_or(ErrorCode::CalculationOverflow)?;

        self.withdrawn_amount = withdrawn_amount;
        self.milestones[index].is_completed = true;
        self.current_milestone = next_milestone;

        Ok(MilestoneRelease {
            milestone_index: index as u8,
            amount,
        })
    }

    /// Marks the funder refunded and returns the amount to pay back.
    ///
    /// Payouts are first come, first served: each refund is capped by what is
    /// still escrowed, so funders who claim after the creator withdrew may be
    /// paid only in part.
    pub fn claim_refund(&mut self, funder: &Pubkey, now: i64) -> Result<u64> {
        require!(self.refunds_enabled(), ErrorCode::RefundsNotAllowed);

        let has_failed = self.has_failed(now);
        let expired = self.is_expired(now);
        let escrow_balance = self.escrow_balance();

        let record = self
            .funders
            .iter_mut()
            .find(|record| record.address == *funder)
            .ok_or(ErrorCode::NoFunderRecord)?;
        require!(!record.has_claimed_refund, ErrorCode::RefundAlreadyClaimed);
        require!(record.amount > 0, ErrorCode::RefundNotEligible);

        if !has_failed {
            return if expired {
                err!(ErrorCode::GoalNotReached)
            } else {
                err!(ErrorCode::CampaignStillActive)
            };
        }

        let payout = record.amount.min(escrow_balance);
        require!(payout > 0, ErrorCode::InsufficientFunds);

        let amount_raised = self
            .amount_raised
            .checked_sub(payout)
            .ok_or(ErrorCode::CalculationOverflow)?;

        record.has_claimed_refund = true;
        self.amount_raised = amount_raised;

        Ok(payout)
    }

    pub fn pause(&mut self, caller: &Pubkey) -> Result<()> {
        self.require_creator(caller)?;
        require!(self.is_active, ErrorCode::CampaignNotActive);
        require!(!self.is_paused, ErrorCode::CampaignAlreadyPaused);

        self.is_paused = true;
        Ok(())
    }

    pub fn resume(&mut self, caller: &Pubkey) -> Result<()> {
        self.require_creator(caller)?;
        require!(self.is_active, ErrorCode::CampaignNotActive);
        require!(self.is_paused, ErrorCode::CampaignNotPaused);

        self.is_paused = false;
        Ok(())
    }

    /// One-way: the campaign stops taking funds and every funder may claim a refund.
    pub fn shut_down(&mut self, caller: &Pubkey) -> Result<()> {
        self.require_creator(caller)?;
        require!(self.is_active, ErrorCode::CampaignNotActive);

        self.is_active = false;
        Ok(())
    }
}
