use crate::error::{CliError, CliResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use solana_sdk::{
    native_token::LAMPORTS_PER_SOL,
    signature::{read_keypair_file, Keypair},
};
use solfund_sdk::{CampaignConfig, Milestone};
use std::path::{Path, PathBuf};

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Campaign definition read by `create-campaign`. Amounts are in SOL and
/// durations in days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignFile {
    /// Also part of the campaign address, so at most 32 bytes
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub website_url: String,

    pub goal_sol: Decimal,

    pub min_contribution_sol: Decimal,

    #[serde(default = "default_duration_days")]
    pub duration_days: u32,

    #[serde(default = "default_allows_refund")]
    pub allows_refund: bool,

    #[serde(default)]
    pub auto_refund_on_failure: bool,

    /// Release schedule. Without one the whole goal unlocks as a single
    /// milestone.
    #[serde(default)]
    pub milestones: Vec<MilestoneFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneFile {
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Cumulative share of the goal, 1..=100
    pub percentage: u8,

    /// Expected completion in days after campaign creation, at least 1
    #[serde(default = "default_due_in_days")]
    pub due_in_days: u32,
}

impl CampaignFile {
    pub fn load(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Converts to the program's creation arguments for a campaign starting at `now`.
    pub fn to_program_params(&self, now: i64) -> CliResult<(CampaignConfig, Vec<Milestone>)> {
        let config = CampaignConfig {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            image_url: self.image_url.clone(),
            website_url: self.website_url.clone(),
            goal_amount: sol_to_lamports(self.goal_sol)?,
            min_contribution: sol_to_lamports(self.min_contribution_sol)?,
            campaign_duration: days_to_seconds(self.duration_days),
            allows_refund: self.allows_refund,
            auto_refund_on_failure: self.auto_refund_on_failure,
        };

        // `now` is read before sending, so a zero-day milestone precedes the on-chain start
        if let Some(milestone) = self.milestones.iter().find(|m| m.due_in_days == 0) {
            return Err(CliError::InvalidConfig(format!(
                "milestone '{}' must be due at least one day after creation",
                milestone.title
            )));
        }

        let milestones = if self.milestones.is_empty() {
            vec![Milestone {
                title: "Campaign goal".to_string(),
                description: String::new(),
                percentage: 100,
                expected_completion_time: now + days_to_seconds(default_due_in_days()),
                is_completed: false,
            }]
        } else {
            self.milestones
                .iter()
                .map(|milestone| Milestone {
                    title: milestone.title.clone(),
                    description: milestone.description.clone(),
                    percentage: milestone.percentage,
                    expected_completion_time: now + days_to_seconds(milestone.due_in_days),
                    is_completed: false,
                })
                .collect()
        };

        Ok((config, milestones))
    }
}

/// Converts a SOL amount to lamports. Fractions of a lamport are rejected.
pub fn sol_to_lamports(sol: Decimal) -> CliResult<u64> {
    if sol.is_sign_negative() {
        return Err(CliError::InvalidAmount(format!("{sol} SOL is negative")));
    }

    let lamports = sol
        .checked_mul(Decimal::from(LAMPORTS_PER_SOL))
        .ok_or_else(|| CliError::InvalidAmount(format!("{sol} SOL is too large")))?;

    if lamports.fract() != Decimal::ZERO {
        return Err(CliError::InvalidAmount(format!(
            "{sol} SOL is not a whole number of lamports"
        )));
    }

    lamports
        .to_u64()
        .ok_or_else(|| CliError::InvalidAmount(format!("{sol} SOL is too large")))
}

pub fn lamports_to_sol(lamports: u64) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(lamports), 9).normalize()
}

pub fn days_to_seconds(days: u32) -> i64 {
    i64::from(days) * SECONDS_PER_DAY
}

pub fn load_keypair(path: &Path) -> CliResult<Keypair> {
    read_keypair_file(path).map_err(|e| CliError::Keypair {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// The Solana CLI's default keypair location.
pub fn default_keypair_path() -> PathBuf {
    let home = std::env::var_os("HOME").unwrap_or_else(|| ".".into());
    PathBuf::from(home)
        .join(".config")
        .join("solana")
        .join("id.json")
}

fn default_duration_days() -> u32 {
    30
}

fn default_due_in_days() -> u32 {
    7
}

fn default_allows_refund() -> bool {
    true
}
