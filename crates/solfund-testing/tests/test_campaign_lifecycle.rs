#![cfg(feature = "sbf")]

use solana_signer::Signer;
use solfund::ErrorCode;
use solfund_testing::{
    assert_program_error, test_campaign_config, test_milestones, TestFixture, DAY,
    LAMPORTS_PER_SOL,
};

/// Create, fully fund and withdraw a single-milestone campaign.
#[test]
fn test_single_milestone_campaign_pays_out_goal() {
    let mut test = TestFixture::new();
    let goal = LAMPORTS_PER_SOL;

    let campaign = test
        .create_campaign(
            test_campaign_config("Lifecycle", goal, LAMPORTS_PER_SOL / 100),
            test_milestones(&[100]),
        )
        .expect("campaign creation failed");

    let record = test.campaign(&campaign);
    assert_eq!(record.creator, test.creator.pubkey());
    assert_eq!(record.end_time, record.start_time + 7 * DAY);
    assert!(record.is_active);

    let alice = test.funded_keypair(2 * LAMPORTS_PER_SOL);
    let bob = test.funded_keypair(2 * LAMPORTS_PER_SOL);

    let escrow_before = test.balance(&campaign);
    test.fund(&alice, &campaign, goal * 6 / 10).expect("alice funding failed");
    test.fund(&bob, &campaign, goal * 4 / 10).expect("bob funding failed");

    let record = test.campaign(&campaign);
    assert_eq!(record.amount_raised, goal);
    assert_eq!(record.funders.len(), 2);
    assert_eq!(test.balance(&campaign), escrow_before + goal);

    let creator = test.creator.insecure_clone();
    test.withdraw_milestone(&creator, &campaign)
        .expect("milestone withdrawal failed");

    let record = test.campaign(&campaign);
    assert_eq!(record.withdrawn_amount, goal);
    assert_eq!(record.current_milestone, 1);
    assert!(record.milestones[0].is_completed);
    assert_eq!(test.balance(&campaign), escrow_before);

    assert_program_error(
        test.withdraw_milestone(&creator, &campaign),
        ErrorCode::NoMoreMilestones,
    );
}

/// Tranches unlock as the raised amount crosses each threshold.
#[test]
fn test_milestones_unlock_progressively() {
    let mut test = TestFixture::new();
    let goal = 10 * LAMPORTS_PER_SOL;

    let campaign = test
        .create_campaign(
            test_campaign_config("Progressive", goal, LAMPORTS_PER_SOL),
            test_milestones(&[30, 60, 100]),
        )
        .expect("campaign creation failed");

    let creator = test.creator.insecure_clone();
    let funder = test.funded_keypair(20 * LAMPORTS_PER_SOL);

    assert_program_error(
        test.withdraw_milestone(&creator, &campaign),
        ErrorCode::MilestoneTooEarly,
    );

    test.fund(&funder, &campaign, 4 * LAMPORTS_PER_SOL).unwrap();
    test.withdraw_milestone(&creator, &campaign).unwrap();
    assert_eq!(test.campaign(&campaign).withdrawn_amount, 3 * LAMPORTS_PER_SOL);

    assert_program_error(
        test.withdraw_milestone(&creator, &campaign),
        ErrorCode::MilestoneTooEarly,
    );

    test.fund(&funder, &campaign, 3 * LAMPORTS_PER_SOL).unwrap();
    test.withdraw_milestone(&creator, &campaign).unwrap();

    let record = test.campaign(&campaign);
    assert_eq!(record.withdrawn_amount, 6 * LAMPORTS_PER_SOL);
    assert_eq!(record.current_milestone, 2);
    assert_eq!(record.funders.len(), 1);
    assert_eq!(record.funders[0].amount, 7 * LAMPORTS_PER_SOL);
}

#[test]
fn test_only_creator_can_withdraw() {
    let mut test = TestFixture::new();

    let campaign = test
        .create_campaign(
            test_campaign_config("Guarded", LAMPORTS_PER_SOL, 1_000),
            test_milestones(&[100]),
        )
        .unwrap();

    let funder = test.funded_keypair(2 * LAMPORTS_PER_SOL);
    test.fund(&funder, &campaign, LAMPORTS_PER_SOL).unwrap();

    assert_program_error(
        test.withdraw_milestone(&funder, &campaign),
        ErrorCode::UnauthorizedOperation,
    );
    assert_eq!(test.campaign(&campaign).withdrawn_amount, 0);
}

#[test]
fn test_funding_rules() {
    let mut test = TestFixture::new();

    let campaign = test
        .create_campaign(
            test_campaign_config("Rules", LAMPORTS_PER_SOL, LAMPORTS_PER_SOL / 10),
            test_milestones(&[100]),
        )
        .unwrap();

    let funder = test.funded_keypair(5 * LAMPORTS_PER_SOL);

    assert_program_error(
        test.fund(&funder, &campaign, LAMPORTS_PER_SOL / 10 - 1),
        ErrorCode::BelowMinimumContribution,
    );

    // funding past the goal is accepted
    test.fund(&funder, &campaign, 2 * LAMPORTS_PER_SOL).unwrap();
    assert_eq!(test.campaign(&campaign).amount_raised, 2 * LAMPORTS_PER_SOL);

    test.advance_time_by(7 * DAY + 1);
    assert_program_error(
        test.fund(&funder, &campaign, LAMPORTS_PER_SOL),
        ErrorCode::CampaignEnded,
    );
}

#[test]
fn test_invalid_campaign_is_rejected() {
    let mut test = TestFixture::new();

    let mut zero_goal = test_campaign_config("ZeroGoal", LAMPORTS_PER_SOL, 1);
    zero_goal.goal_amount = 0;
    let result = test.create_campaign(zero_goal, test_milestones(&[100]));
    assert_program_error(result, ErrorCode::InvalidParameters);

    let result = test.create_campaign(
        test_campaign_config("TooMany", LAMPORTS_PER_SOL, 1),
        test_milestones(&[10, 20, 30, 40, 50, 100]),
    );
    assert_program_error(result, ErrorCode::TooManyMilestones);

    let result = test.create_campaign(
        test_campaign_config("NoFinal", LAMPORTS_PER_SOL, 1),
        test_milestones(&[50, 90]),
    );
    assert_program_error(result, ErrorCode::InvalidParameters);

    assert!(!test.account_exists(&test.campaign_address("ZeroGoal")));
}

/// A creator cannot reuse a campaign name; the existing ledger is untouched.
#[test]
fn test_duplicate_campaign_name_is_rejected() {
    let mut test = TestFixture::new();

    let campaign = test
        .create_campaign(
            test_campaign_config("Duplicate", LAMPORTS_PER_SOL, 1_000),
            test_milestones(&[100]),
        )
        .unwrap();

    let funder = test.funded_keypair(LAMPORTS_PER_SOL);
    test.fund(&funder, &campaign, LAMPORTS_PER_SOL / 4).unwrap();
    let before = test.campaign(&campaign);

    test.advance_time_by(60);
    let result = test.create_campaign(
        test_campaign_config("Duplicate", 2 * LAMPORTS_PER_SOL, 1_000),
        test_milestones(&[100]),
    );
    assert!(result.is_err());

    let after = test.campaign(&campaign);
    assert_eq!(after.start_time, before.start_time);
    assert_eq!(after.goal_amount, LAMPORTS_PER_SOL);
    assert_eq!(after.amount_raised, LAMPORTS_PER_SOL / 4);
    assert_eq!(after.funders.len(), 1);
    assert_eq!(after.funders[0].address, funder.pubkey());
    assert_eq!(after.funders[0].amount, LAMPORTS_PER_SOL / 4);
}

#[test]
fn test_metadata_and_updates() {
    let mut test = TestFixture::new();
    let creator = test.creator.insecure_clone();

    let campaign = test
        .create_campaign(
            test_campaign_config("Metadata", LAMPORTS_PER_SOL, 1),
            test_milestones(&[100]),
        )
        .unwrap();

    test.update_campaign(
        &creator,
        &campaign,
        Some("New description".to_string()),
        None,
        Some("https://example.org".to_string()),
    )
    .unwrap();

    for i in 0..6 {
        test.add_campaign_update(&creator, &campaign, &format!("Update {i}"), "progress")
            .unwrap();
    }

    let record = test.campaign(&campaign);
    assert_eq!(record.description, "New description");
    assert_eq!(record.website_url, "https://example.org");
    assert_eq!(record.image_url, "");
    assert_eq!(record.updates.len(), 5);
    assert_eq!(record.updates[0].title, "Update 1");
    assert_eq!(record.updates[4].title, "Update 5");

    let stranger = test.funded_keypair(LAMPORTS_PER_SOL);
    assert_program_error(
        test.add_campaign_update(&stranger, &campaign, "Spam", "spam"),
        ErrorCode::UnauthorizedOperation,
    );
}
