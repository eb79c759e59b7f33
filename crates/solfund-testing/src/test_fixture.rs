use {
    crate::{load_solfund_program, LAMPORTS_PER_SOL, TEST_START_TIME},
    litesvm::{
        types::{FailedTransactionMetadata, TransactionResult},
        LiteSVM,
    },
    solana_instruction::{error::InstructionError, Instruction},
    solana_keypair::Keypair,
    solana_message::Message,
    solana_pubkey::Pubkey,
    solana_signer::Signer as _,
    solana_sysvar::clock::Clock,
    solana_transaction::Transaction,
    solana_transaction_error::TransactionError,
    solfund::{Campaign, CampaignConfig, ErrorCode, Milestone},
    solfund_sdk::{
        build_add_campaign_update_ix, build_emergency_shutdown_ix, build_fund_campaign_ix,
        build_initialize_campaign_ix, build_pause_campaign_ix, build_request_refund_ix,
        build_resume_campaign_ix, build_update_campaign_ix, build_withdraw_milestone_ix,
        decode_campaign, AddressFinder,
    },
};

/// A LiteSVM instance with the solfund program loaded, a funded creator and
/// the clock set to [`TEST_START_TIME`].
pub struct TestFixture {
    pub address_finder: AddressFinder,
    pub creator: Keypair,

    log_send_transaction_results: bool,
    svm: LiteSVM,
}

impl TestFixture {
    pub fn new() -> Self {
        Self::with_svm(LiteSVM::new())
    }

    pub fn with_svm(mut svm: LiteSVM) -> Self {
        let address_finder = AddressFinder::default();
        load_solfund_program(&mut svm, address_finder.program_id);

        let creator = Keypair::new();
        svm.airdrop(&creator.pubkey(), LAMPORTS_PER_SOL * 100)
            .unwrap_or_else(|e| panic!("Failed to airdrop to creator: {e:?}"));

        let mut fixture = Self {
            address_finder,
            creator,
            log_send_transaction_results: true,
            svm,
        };
        fixture.set_time(TEST_START_TIME);
        fixture
    }

    pub fn disable_send_transaction_logging(&mut self) {
        self.log_send_transaction_results = false;
    }

    pub fn airdrop(&mut self, to: &Pubkey, amount: u64) {
        self.svm
            .airdrop(to, amount)
            .unwrap_or_else(|e| panic!("Failed to airdrop {amount} to {to}: {e:?}"));
    }

    /// A new keypair holding `lamports`.
    pub fn funded_keypair(&mut self, lamports: u64) -> Keypair {
        let keypair = Keypair::new();
        self.airdrop(&keypair.pubkey(), lamports);
        keypair
    }

    pub fn now(&self) -> i64 {
        self.svm.get_sysvar::<Clock>().unix_timestamp
    }

    pub fn set_time(&mut self, unix_timestamp: i64) {
        let mut clock = self.svm.get_sysvar::<Clock>();
        clock.unix_timestamp = unix_timestamp;
        self.svm.set_sysvar::<Clock>(&clock);
    }

    pub fn advance_time_by(&mut self, seconds: i64) {
        let now = self.now();
        self.set_time(now + seconds);
    }

    pub fn balance(&self, address: &Pubkey) -> u64 {
        self.svm.get_balance(address).unwrap_or(0)
    }

    pub fn account_exists(&self, address: &Pubkey) -> bool {
        self.svm.get_account(address).is_some_and(|account| account.lamports > 0)
    }

    pub fn campaign(&self, address: &Pubkey) -> Campaign {
        let account = self
            .svm
            .get_account(address)
            .unwrap_or_else(|| panic!("Campaign account {address} not found"));
        decode_campaign(&account.data).expect("Failed to decode campaign account")
    }

    pub fn campaign_address(&self, name: &str) -> Pubkey {
        self.address_finder
            .find_campaign_address(&self.creator.pubkey(), name)
            .expect("Invalid campaign name")
            .0
    }

    // ============================================================================================
    // Instructions
    // ============================================================================================

    pub fn create_campaign(
        &mut self,
        config: CampaignConfig,
        milestones: Vec<Milestone>,
    ) -> Result<Pubkey, FailedTransactionMetadata> {
        let (ix, accounts, _) = build_initialize_campaign_ix(
            &self.address_finder,
            self.creator.pubkey(),
            config,
            milestones,
        )
        .expect("Failed to build initialize_campaign instruction");

        self.send_as_creator(ix)?;
        Ok(accounts.campaign)
    }

    pub fn update_campaign(
        &mut self,
        signer: &Keypair,
        campaign: &Pubkey,
        description: Option<String>,
        image_url: Option<String>,
        website_url: Option<String>,
    ) -> TransactionResult {
        let (ix, _, _) = build_update_campaign_ix(
            &self.address_finder,
            *campaign,
            signer.pubkey(),
            description,
            image_url,
            website_url,
        )
        .expect("Failed to build update_campaign instruction");
        self.send_instructions(&[ix], signer)
    }

    pub fn add_campaign_update(
        &mut self,
        signer: &Keypair,
        campaign: &Pubkey,
        title: &str,
        content: &str,
    ) -> TransactionResult {
        let (ix, _, _) = build_add_campaign_update_ix(
            &self.address_finder,
            *campaign,
            signer.pubkey(),
            title.to_string(),
            content.to_string(),
        )
        .expect("Failed to build add_campaign_update instruction");
        self.send_instructions(&[ix], signer)
    }

    pub fn fund(&mut self, funder: &Keypair, campaign: &Pubkey, amount: u64) -> TransactionResult {
        let (ix, _, _) =
            build_fund_campaign_ix(&self.address_finder, *campaign, funder.pubkey(), amount)
                .expect("Failed to build fund_campaign instruction");
        self.send_instructions(&[ix], funder)
    }

    pub fn withdraw_milestone(&mut self, signer: &Keypair, campaign: &Pubkey) -> TransactionResult {
        let (ix, _, _) =
            build_withdraw_milestone_ix(&self.address_finder, *campaign, signer.pubkey())
                .expect("Failed to build withdraw_milestone instruction");
        self.send_instructions(&[ix], signer)
    }

    pub fn request_refund(&mut self, funder: &Keypair, campaign: &Pubkey) -> TransactionResult {
        let (ix, _, _) = build_request_refund_ix(&self.address_finder, *campaign, funder.pubkey())
            .expect("Failed to build request_refund instruction");
        self.send_instructions(&[ix], funder)
    }

    pub fn pause(&mut self, signer: &Keypair, campaign: &Pubkey) -> TransactionResult {
        let (ix, _, _) = build_pause_campaign_ix(&self.address_finder, *campaign, signer.pubkey())
            .expect("Failed to build pause_campaign instruction");
        self.send_instructions(&[ix], signer)
    }

    pub fn resume(&mut self, signer: &Keypair, campaign: &Pubkey) -> TransactionResult {
        let (ix, _, _) = build_resume_campaign_ix(&self.address_finder, *campaign, signer.pubkey())
            .expect("Failed to build resume_campaign instruction");
        self.send_instructions(&[ix], signer)
    }

    pub fn emergency_shutdown(&mut self, signer: &Keypair, campaign: &Pubkey) -> TransactionResult {
        let (ix, _, _) =
            build_emergency_shutdown_ix(&self.address_finder, *campaign, signer.pubkey())
                .expect("Failed to build emergency_shutdown instruction");
        self.send_instructions(&[ix], signer)
    }

    // ============================================================================================
    // Sending
    // ============================================================================================

    fn send_as_creator(&mut self, ix: Instruction) -> TransactionResult {
        let creator = self.creator.insecure_clone();
        self.send_instructions(&[ix], &creator)
    }

    /// Sends with `signer` as the fee payer. The blockhash is expired after
    /// every send so repeating an identical instruction is a new transaction.
    pub fn send_instructions(
        &mut self,
        instructions: &[Instruction],
        signer: &Keypair,
    ) -> TransactionResult {
        let tx = Transaction::new(
            &[signer],
            Message::new(instructions, Some(&signer.pubkey())),
            self.svm.latest_blockhash(),
        );

        let result = self.send_transaction(tx);
        self.svm.expire_blockhash();
        result
    }

    /// Send a transaction and optionally print its logs
    pub fn send_transaction(&mut self, tx: Transaction) -> TransactionResult {
        let result = self.svm.send_transaction(tx);

        if self.log_send_transaction_results {
            match &result {
                Ok(meta) => {
                    println!("=== Transaction Logs (Success) ===");
                    for (i, log) in meta.logs.iter().enumerate() {
                        println!("{}: {}", i, log);
                    }
                    println!("=== End Logs ===\n");
                }
                Err(failed_meta) => {
                    println!("=== Transaction Logs (Failed) ===");
                    for (i, log) in failed_meta.meta.logs.iter().enumerate() {
                        println!("{}: {}", i, log);
                    }
                    println!("Error: {:?}", failed_meta.err);
                    println!("=== End Logs ===\n");
                }
            }
        }

        result
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Asserts that a transaction failed with the given program error.
pub fn assert_program_error<T: std::fmt::Debug>(
    result: Result<T, FailedTransactionMetadata>,
    expected: ErrorCode,
) {
    let expected_code = u32::from(expected);
    match result {
        Ok(_) => panic!("Expected {expected:?} ({expected_code}), but the transaction succeeded"),
        Err(failed_meta) => match failed_meta.err {
            TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
                assert_eq!(
                    code, expected_code,
                    "Expected {expected:?} ({expected_code}), got custom error {code}"
                );
            }
            other => panic!("Expected {expected:?} ({expected_code}), got: {other:?}"),
        },
    }
}
