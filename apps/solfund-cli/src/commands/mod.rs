use crate::config::{default_keypair_path, load_keypair};
use crate::error::CliResult;
use solana_sdk::signature::Keypair;
use solfund_client::SolfundClient;
use std::path::PathBuf;

pub mod add_update;
pub mod campaign_status;
pub mod create_campaign;
pub mod emergency_shutdown;
pub mod fund;
pub mod pause;
pub mod refund;
pub mod resume;
pub mod update_campaign;
pub mod withdraw_milestone;

/// Connection and signer shared by every subcommand.
pub struct Context {
    pub rpc_url: String,
    keypair_path: PathBuf,
    client: SolfundClient,
}

impl Context {
    pub fn new(rpc_url: String, keypair_path: Option<PathBuf>) -> Self {
        Self {
            client: SolfundClient::new(rpc_url.clone()),
            keypair_path: keypair_path.unwrap_or_else(default_keypair_path),
            rpc_url,
        }
    }

    pub fn client(&self) -> &SolfundClient {
        &self.client
    }

    pub fn signer(&self) -> CliResult<Keypair> {
        load_keypair(&self.keypair_path)
    }
}
