use crate::{
    error::{is_transient, ClientError, ClientResult},
    ClientConfig,
};
use backoff::future::retry;
use solana_client::{
    client_error::{ClientError as RpcClientError, ClientErrorKind},
    nonblocking::rpc_client::RpcClient,
    rpc_config::RpcSendTransactionConfig,
};
use solana_sdk::{
    account::from_account,
    clock::Clock,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    sysvar,
    transaction::{Transaction, TransactionError},
};
use solfund_sdk::{
    build_add_campaign_update_ix, build_emergency_shutdown_ix, build_fund_campaign_ix,
    build_initialize_campaign_ix, build_pause_campaign_ix, build_request_refund_ix,
    build_resume_campaign_ix, build_update_campaign_ix, build_withdraw_milestone_ix,
    decode_campaign_account, validate_campaign_params, AddressFinder, Campaign, CampaignConfig,
    CampaignSnapshot, Milestone,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex, PoisonError,
};
use tracing::{debug, info, warn};

/// Client for the solfund program. Every write method sends a single
/// transaction signed (and paid for) by the acting keypair.
pub struct SolfundClient {
    rpc_client: Arc<RpcClient>,
    address_finder: AddressFinder,
    config: ClientConfig,
}

impl SolfundClient {
    pub fn new(rpc_url: String) -> Self {
        let config = ClientConfig::default();
        let rpc_client = RpcClient::new_with_commitment(rpc_url, config.commitment);
        Self::with_config(Arc::new(rpc_client), config)
    }

    pub fn with_config(rpc_client: Arc<RpcClient>, config: ClientConfig) -> Self {
        Self {
            rpc_client,
            address_finder: AddressFinder::default(),
            config,
        }
    }

    pub fn find_campaign_address(&self, creator: &Pubkey, name: &str) -> ClientResult<Pubkey> {
        let (campaign, _) = self.address_finder.find_campaign_address(creator, name)?;
        Ok(campaign)
    }

    // ============================================================================================
    // Reads
    // ============================================================================================

    /// Fetches and decodes the raw campaign account.
    pub async fn get_campaign_account(&self, campaign: &Pubkey) -> ClientResult<Campaign> {
        let account = self
            .rpc_client
            .get_account_with_commitment(campaign, self.config.commitment)
            .await?
            .value
            .ok_or(ClientError::CampaignNotFound(*campaign))?;

        Ok(decode_campaign_account(
            &self.address_finder.program_id,
            &account.owner,
            &account.data,
        )?)
    }

    /// Campaign snapshot evaluated against the cluster clock.
    pub async fn get_campaign(&self, campaign: &Pubkey) -> ClientResult<CampaignSnapshot> {
        let record = self.get_campaign_account(campaign).await?;
        let now = self.get_cluster_time().await?;
        debug!("Fetched campaign {} at cluster time {}", campaign, now);
        Ok(CampaignSnapshot::new(*campaign, &record, now))
    }

    /// Current `unix_timestamp` of the cluster, which is what the program
    /// compares deadlines against.
    pub async fn get_cluster_time(&self) -> ClientResult<i64> {
        let account = self.rpc_client.get_account(&sysvar::clock::ID).await?;
        let clock: Clock = from_account(&account).ok_or_else(|| {
            ClientError::InvalidAccountData("Failed to decode clock sysvar".to_string())
        })?;
        Ok(clock.unix_timestamp)
    }

    // ============================================================================================
    // Creator operations
    // ============================================================================================

    /// Creates a campaign and returns its address.
    pub async fn initialize_campaign(
        &self,
        creator: &Keypair,
        config: CampaignConfig,
        milestones: Vec<Milestone>,
    ) -> ClientResult<(Pubkey, Signature)> {
        let (ix, accounts, data) = build_initialize_campaign_ix(
            &self.address_finder,
            creator.pubkey(),
            config,
            milestones,
        )?;

        // same checks the program applies, against the cluster clock
        let now = self.get_cluster_time().await?;
        validate_campaign_params(&data.config, &data.milestones, now)?;

        let signature = self.send_instruction(ix, creator).await?;
        info!("Created campaign {}", accounts.campaign);
        Ok((accounts.campaign, signature))
    }

    pub async fn update_campaign(
        &self,
        creator: &Keypair,
        campaign: &Pubkey,
        description: Option<String>,
        image_url: Option<String>,
        website_url: Option<String>,
    ) -> ClientResult<Signature> {
        let (ix, _, _) = build_update_campaign_ix(
            &self.address_finder,
            *campaign,
            creator.pubkey(),
            description,
            image_url,
            website_url,
        )
        .map_err(ClientError::from_anchor)?;
        self.send_instruction(ix, creator).await
    }

    pub async fn add_campaign_update(
        &self,
        creator: &Keypair,
        campaign: &Pubkey,
        title: String,
        content: String,
    ) -> ClientResult<Signature> {
        let (ix, _, _) = build_add_campaign_update_ix(
            &self.address_finder,
            *campaign,
            creator.pubkey(),
            title,
            content,
        )
        .map_err(ClientError::from_anchor)?;
        self.send_instruction(ix, creator).await
    }

    pub async fn withdraw_milestone(
        &self,
        creator: &Keypair,
        campaign: &Pubkey,
    ) -> ClientResult<Signature> {
        let (ix, _, _) =
            build_withdraw_milestone_ix(&self.address_finder, *campaign, creator.pubkey())
                .map_err(ClientError::from_anchor)?;
        self.send_instruction(ix, creator).await
    }

    pub async fn pause_campaign(
        &self,
        creator: &Keypair,
        campaign: &Pubkey,
    ) -> ClientResult<Signature> {
        let (ix, _, _) = build_pause_campaign_ix(&self.address_finder, *campaign, creator.pubkey())
            .map_err(ClientError::from_anchor)?;
        self.send_instruction(ix, creator).await
    }

    pub async fn resume_campaign(
        &self,
        creator: &Keypair,
        campaign: &Pubkey,
    ) -> ClientResult<Signature> {
        let (ix, _, _) =
            build_resume_campaign_ix(&self.address_finder, *campaign, creator.pubkey())
                .map_err(ClientError::from_anchor)?;
        self.send_instruction(ix, creator).await
    }

    pub async fn emergency_shutdown(
        &self,
        creator: &Keypair,
        campaign: &Pubkey,
    ) -> ClientResult<Signature> {
        let (ix, _, _) =
            build_emergency_shutdown_ix(&self.address_finder, *campaign, creator.pubkey())
                .map_err(ClientError::from_anchor)?;
        warn!("Shutting down campaign {}", campaign);
        self.send_instruction(ix, creator).await
    }

    // ============================================================================================
    // Funder operations
    // ============================================================================================

    pub async fn fund_campaign(
        &self,
        funder: &Keypair,
        campaign: &Pubkey,
        amount: u64,
    ) -> ClientResult<Signature> {
        let (ix, _, _) =
            build_fund_campaign_ix(&self.address_finder, *campaign, funder.pubkey(), amount)
                .map_err(ClientError::from_anchor)?;
        self.send_instruction(ix, funder).await
    }

    pub async fn request_refund(
        &self,
        funder: &Keypair,
        campaign: &Pubkey,
    ) -> ClientResult<Signature> {
        let (ix, _, _) = build_request_refund_ix(&self.address_finder, *campaign, funder.pubkey())
            .map_err(ClientError::from_anchor)?;
        self.send_instruction(ix, funder).await
    }

    // ============================================================================================
    // Sending
    // ============================================================================================

    /// Signs with `signer` (also the fee payer) and sends until confirmed.
    ///
    /// Only transient failures are retried, and at most `max_retries` times.
    /// A failed send may still land, so before each retry the previous
    /// transaction's signature is looked up. The same signed transaction is
    /// resent while its blockhash is valid and re-signed only once it has
    /// expired unprocessed, so a funding transfer never executes twice.
    async fn send_instruction(&self, ix: Instruction, signer: &Keypair) -> ClientResult<Signature> {
        let backoff = self.config.retry_backoff.clone();
        let rpc_client = self.rpc_client.clone();
        let commitment = self.config.commitment;
        let send_config = RpcSendTransactionConfig {
            skip_preflight: self.config.skip_preflight,
            preflight_commitment: Some(commitment.commitment),
            ..RpcSendTransactionConfig::default()
        };
        let max_retries = self.config.max_retries;
        let attempts = AtomicUsize::new(0);
        let pending: Mutex<Option<Transaction>> = Mutex::new(None);
        let instructions = [ix];

        let result = retry(backoff, || {
            let rpc_client = rpc_client.clone();
            let attempt = attempts.fetch_add(1, Ordering::Relaxed);
            let instructions = &instructions;
            let pending = &pending;
            let send_config = send_config.clone();

            async move {
                let previous = pending
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .clone();

                let transaction = match previous {
                    Some(previous) => {
                        let signature = previous.signatures[0];
                        let status = rpc_client
                            .get_signature_status_with_commitment(&signature, commitment)
                            .await
                            .map_err(|e| classify(e, attempt, max_retries))?;
                        let blockhash_valid = match status {
                            Some(_) => true,
                            None => rpc_client
                                .is_blockhash_valid(&previous.message.recent_blockhash, commitment)
                                .await
                                .map_err(|e| classify(e, attempt, max_retries))?,
                        };

                        match prior_attempt(status, blockhash_valid) {
                            PriorAttempt::Landed => {
                                info!("Transaction {} landed before attempt {}", signature, attempt + 1);
                                return Ok(signature);
                            }
                            PriorAttempt::Failed(error) => {
                                return Err(backoff::Error::Permanent(ClientError::from_rpc(
                                    RpcClientError::from(ClientErrorKind::TransactionError(error)),
                                )));
                            }
                            PriorAttempt::Pending => {
                                debug!("Resending transaction {}", signature);
                                previous
                            }
                            PriorAttempt::Expired => {
                                debug!("Transaction {} expired unprocessed, signing again", signature);
                                sign(&rpc_client, instructions, signer)
                                    .await
                                    .map_err(|e| classify(e, attempt, max_retries))?
                            }
                        }
                    }
                    None => sign(&rpc_client, instructions, signer)
                        .await
                        .map_err(|e| classify(e, attempt, max_retries))?,
                };

                *pending.lock().unwrap_or_else(PoisonError::into_inner) = Some(transaction.clone());

                match rpc_client
                    .send_and_confirm_transaction_with_spinner_and_config(
                        &transaction,
                        commitment,
                        send_config,
                    )
                    .await
                {
                    Ok(signature) => {
                        debug!("Transaction {} confirmed on attempt {}", signature, attempt + 1);
                        Ok(signature)
                    }
                    Err(e) => {
                        warn!("Transaction attempt {} failed: {}", attempt + 1, e);
                        Err(classify(e, attempt, max_retries))
                    }
                }
            }
        })
        .await;

        result.map_err(|e| match e {
            ClientError::Rpc(rpc_err) if is_transient(&rpc_err) => ClientError::RetriesExhausted {
                retries: attempts.load(Ordering::Relaxed).saturating_sub(1),
                last_error: rpc_err.to_string(),
            },
            other => other,
        })
    }
}

async fn sign(
    rpc_client: &RpcClient,
    instructions: &[Instruction],
    signer: &Keypair,
) -> Result<Transaction, RpcClientError> {
    let recent_blockhash = rpc_client.get_latest_blockhash().await?;
    Ok(Transaction::new_signed_with_payer(
        instructions,
        Some(&signer.pubkey()),
        &[signer],
        recent_blockhash,
    ))
}

/// What became of a transaction whose send reported an error.
#[derive(Debug, PartialEq)]
enum PriorAttempt {
    /// Executed successfully; its signature is the result.
    Landed,
    /// Executed and failed on chain.
    Failed(TransactionError),
    /// Not seen yet, blockhash still valid: resend the same signed bytes.
    Pending,
    /// Not seen and can no longer land: safe to sign a new transaction.
    Expired,
}

fn prior_attempt(
    status: Option<Result<(), TransactionError>>,
    blockhash_valid: bool,
) -> PriorAttempt {
    match status {
        Some(Ok(())) => PriorAttempt::Landed,
        Some(Err(error)) => PriorAttempt::Failed(error),
        None if blockhash_valid => PriorAttempt::Pending,
        None => PriorAttempt::Expired,
    }
}

fn classify(
    error: solana_client::client_error::ClientError,
    attempt: usize,
    max_retries: usize,
) -> backoff::Error<ClientError> {
    if is_transient(&error) && attempt < max_retries {
        backoff::Error::Transient {
            err: ClientError::Rpc(error),
            retry_after: None,
        }
    } else {
        backoff::Error::Permanent(ClientError::from_rpc(error))
    }
}
