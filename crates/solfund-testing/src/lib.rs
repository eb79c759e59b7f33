mod test_fixture;

pub use test_fixture::*;

use solana_pubkey::Pubkey;
use solfund::{CampaignConfig, Milestone};
use std::path::PathBuf;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Cluster time the fixture starts at.
pub const TEST_START_TIME: i64 = 1_700_000_000;
pub const DAY: i64 = 86_400;

/// Path of the compiled program: `$SBF_OUT_DIR/solfund.so`, falling back to
/// the workspace `target/deploy`.
pub fn program_so_path() -> PathBuf {
    let deploy_dir = std::env::var_os("SBF_OUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("..")
                .join("..")
                .join("target")
                .join("deploy")
        });
    deploy_dir.join("solfund.so")
}

pub fn load_solfund_program(svm: &mut litesvm::LiteSVM, program_id: Pubkey) {
    let path = program_so_path();
    svm.add_program_from_file(program_id, &path)
        .unwrap_or_else(|e| panic!("Failed to load {}: {e} (run cargo build-sbf)", path.display()));
}

/// One-week campaign with refunds allowed.
pub fn test_campaign_config(name: &str, goal_amount: u64, min_contribution: u64) -> CampaignConfig {
    CampaignConfig {
        name: name.to_string(),
        description: format!("{name} test campaign"),
        category: "Testing".to_string(),
        image_url: String::new(),
        website_url: String::new(),
        goal_amount,
        min_contribution,
        campaign_duration: 7 * DAY,
        allows_refund: true,
        auto_refund_on_failure: false,
    }
}

/// Milestones at the given cumulative percentages, all due a week after start.
pub fn test_milestones(percentages: &[u8]) -> Vec<Milestone> {
    percentages
        .iter()
        .enumerate()
        .map(|(index, &percentage)| Milestone {
            title: format!("Milestone {}", index + 1),
            description: String::new(),
            percentage,
            expected_completion_time: TEST_START_TIME + 7 * DAY,
            is_completed: false,
        })
        .collect()
}
