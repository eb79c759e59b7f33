#![cfg(feature = "sbf")]

use solfund::ErrorCode;
use solfund_testing::{
    assert_program_error, test_campaign_config, test_milestones, TestFixture, LAMPORTS_PER_SOL,
};

#[test]
fn test_pause_blocks_funding_until_resumed() {
    let mut test = TestFixture::new();
    let creator = test.creator.insecure_clone();

    let campaign = test
        .create_campaign(
            test_campaign_config("Pausable", 2 * LAMPORTS_PER_SOL, 1_000),
            test_milestones(&[50, 100]),
        )
        .unwrap();

    let funder = test.funded_keypair(5 * LAMPORTS_PER_SOL);
    test.fund(&funder, &campaign, LAMPORTS_PER_SOL).unwrap();

    assert_program_error(test.pause(&funder, &campaign), ErrorCode::UnauthorizedOperation);

    test.pause(&creator, &campaign).unwrap();
    assert!(test.campaign(&campaign).is_paused);

    assert_program_error(test.pause(&creator, &campaign), ErrorCode::CampaignAlreadyPaused);
    assert_program_error(
        test.fund(&funder, &campaign, LAMPORTS_PER_SOL / 2),
        ErrorCode::CampaignPaused,
    );

    // pausing only stops contributions
    test.withdraw_milestone(&creator, &campaign).unwrap();

    test.resume(&creator, &campaign).unwrap();
    assert_program_error(test.resume(&creator, &campaign), ErrorCode::CampaignNotPaused);

    test.fund(&funder, &campaign, LAMPORTS_PER_SOL / 2).unwrap();
    assert_eq!(
        test.campaign(&campaign).amount_raised,
        LAMPORTS_PER_SOL + LAMPORTS_PER_SOL / 2
    );
}

#[test]
fn test_emergency_shutdown_is_terminal() {
    let mut test = TestFixture::new();
    let creator = test.creator.insecure_clone();

    let campaign = test
        .create_campaign(
            test_campaign_config("Shutdown", 10 * LAMPORTS_PER_SOL, 1_000),
            test_milestones(&[100]),
        )
        .unwrap();

    let funder = test.funded_keypair(5 * LAMPORTS_PER_SOL);
    test.fund(&funder, &campaign, 2 * LAMPORTS_PER_SOL).unwrap();

    assert_program_error(
        test.emergency_shutdown(&funder, &campaign),
        ErrorCode::UnauthorizedOperation,
    );

    test.emergency_shutdown(&creator, &campaign).unwrap();
    assert!(!test.campaign(&campaign).is_active);

    assert_program_error(
        test.fund(&funder, &campaign, LAMPORTS_PER_SOL),
        ErrorCode::CampaignNotActive,
    );
    assert_program_error(test.pause(&creator, &campaign), ErrorCode::CampaignNotActive);
    assert_program_error(
        test.withdraw_milestone(&creator, &campaign),
        ErrorCode::CampaignNotActive,
    );
    assert_program_error(
        test.emergency_shutdown(&creator, &campaign),
        ErrorCode::CampaignNotActive,
    );

    // refunds open immediately, inside the funding window
    let funder_before = test.balance(&funder);
    test.request_refund(&funder, &campaign).unwrap();
    assert!(test.balance(&funder) > funder_before);
    assert_eq!(test.campaign(&campaign).amount_raised, 0);
}
