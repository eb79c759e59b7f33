#![cfg(feature = "sbf")]

use solfund::ErrorCode;
use solfund_testing::{
    assert_program_error, test_campaign_config, test_milestones, TestFixture, DAY,
    LAMPORTS_PER_SOL,
};

/// A campaign that closes below goal refunds each funder exactly once.
#[test]
fn test_refund_after_failed_campaign() {
    let mut test = TestFixture::new();
    test.disable_send_transaction_logging();

    let campaign = test
        .create_campaign(
            test_campaign_config("Failed", 10 * LAMPORTS_PER_SOL, LAMPORTS_PER_SOL / 10),
            test_milestones(&[100]),
        )
        .unwrap();

    let alice = test.funded_keypair(5 * LAMPORTS_PER_SOL);
    let bob = test.funded_keypair(5 * LAMPORTS_PER_SOL);
    test.fund(&alice, &campaign, 3 * LAMPORTS_PER_SOL).unwrap();
    test.fund(&bob, &campaign, LAMPORTS_PER_SOL).unwrap();

    assert_program_error(
        test.request_refund(&alice, &campaign),
        ErrorCode::CampaignStillActive,
    );

    test.advance_time_by(7 * DAY + 1);

    let escrow_before = test.balance(&campaign);
    test.request_refund(&alice, &campaign).unwrap();

    let record = test.campaign(&campaign);
    assert_eq!(record.amount_raised, LAMPORTS_PER_SOL);
    assert!(record.funders[0].has_claimed_refund);
    assert!(!record.funders[1].has_claimed_refund);
    assert_eq!(test.balance(&campaign), escrow_before - 3 * LAMPORTS_PER_SOL);

    assert_program_error(
        test.request_refund(&alice, &campaign),
        ErrorCode::RefundAlreadyClaimed,
    );

    test.request_refund(&bob, &campaign).unwrap();
    assert_eq!(test.campaign(&campaign).amount_raised, 0);

    let stranger = test.funded_keypair(LAMPORTS_PER_SOL);
    assert_program_error(
        test.request_refund(&stranger, &campaign),
        ErrorCode::NoFunderRecord,
    );
}

#[test]
fn test_successful_campaign_is_not_refundable() {
    let mut test = TestFixture::new();

    let campaign = test
        .create_campaign(
            test_campaign_config("Funded", LAMPORTS_PER_SOL, 1_000),
            test_milestones(&[100]),
        )
        .unwrap();

    let funder = test.funded_keypair(3 * LAMPORTS_PER_SOL);
    test.fund(&funder, &campaign, LAMPORTS_PER_SOL).unwrap();

    test.advance_time_by(7 * DAY + 1);
    assert_program_error(
        test.request_refund(&funder, &campaign),
        ErrorCode::GoalNotReached,
    );

    // the creator can still collect after the window closes
    let creator = test.creator.insecure_clone();
    test.withdraw_milestone(&creator, &campaign).unwrap();
}

#[test]
fn test_refunds_disabled() {
    let mut test = TestFixture::new();

    let mut config = test_campaign_config("NoRefunds", 10 * LAMPORTS_PER_SOL, 1_000);
    config.allows_refund = false;
    config.auto_refund_on_failure = false;
    let campaign = test.create_campaign(config, test_milestones(&[100])).unwrap();

    let funder = test.funded_keypair(3 * LAMPORTS_PER_SOL);
    test.fund(&funder, &campaign, LAMPORTS_PER_SOL).unwrap();
    test.advance_time_by(7 * DAY + 1);

    assert_program_error(
        test.request_refund(&funder, &campaign),
        ErrorCode::RefundsNotAllowed,
    );
}

/// `auto_refund_on_failure` is advertised to clients but does not open refunds.
#[test]
fn test_auto_refund_flag_without_allows_refund_is_rejected() {
    let mut test = TestFixture::new();
    let creator = test.creator.insecure_clone();

    let mut config = test_campaign_config("AutoOnly", 10 * LAMPORTS_PER_SOL, 1_000);
    config.allows_refund = false;
    config.auto_refund_on_failure = true;
    let campaign = test.create_campaign(config, test_milestones(&[100])).unwrap();

    let funder = test.funded_keypair(3 * LAMPORTS_PER_SOL);
    test.fund(&funder, &campaign, LAMPORTS_PER_SOL).unwrap();
    test.emergency_shutdown(&creator, &campaign).unwrap();

    assert_program_error(
        test.request_refund(&funder, &campaign),
        ErrorCode::RefundsNotAllowed,
    );
    let state = test.campaign(&campaign);
    assert_eq!(state.amount_raised, LAMPORTS_PER_SOL);
    assert!(!state.funders[0].has_claimed_refund);
}

/// After a partial withdrawal the remaining escrow is paid out first come,
/// first served.
#[test]
fn test_refunds_are_capped_by_escrow_after_shutdown() {
    let mut test = TestFixture::new();
    let creator = test.creator.insecure_clone();

    let campaign = test
        .create_campaign(
            test_campaign_config("Partial", 10 * LAMPORTS_PER_SOL, 1_000),
            test_milestones(&[50, 100]),
        )
        .unwrap();

    let alice = test.funded_keypair(10 * LAMPORTS_PER_SOL);
    let bob = test.funded_keypair(10 * LAMPORTS_PER_SOL);
    test.fund(&alice, &campaign, 4 * LAMPORTS_PER_SOL).unwrap();
    test.fund(&bob, &campaign, 2 * LAMPORTS_PER_SOL).unwrap();

    // 5 SOL released, 1 SOL left in escrow
    test.withdraw_milestone(&creator, &campaign).unwrap();
    test.emergency_shutdown(&creator, &campaign).unwrap();

    let escrow_before = test.balance(&campaign);
    test.request_refund(&bob, &campaign).unwrap();
    assert_eq!(test.balance(&campaign), escrow_before - LAMPORTS_PER_SOL);

    let record = test.campaign(&campaign);
    assert_eq!(record.amount_raised, record.withdrawn_amount);

    assert_program_error(
        test.request_refund(&alice, &campaign),
        ErrorCode::InsufficientFunds,
    );
}
