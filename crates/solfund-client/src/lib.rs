/*!
# Solfund Client

Async client for the solfund crowdfunding program. Reads campaign accounts into
[`CampaignSnapshot`]s and submits one transaction per program instruction,
retrying transient RPC failures with exponential backoff.

```rust,no_run
use solfund_client::{ClientConfig, RpcClient, SolfundClient};
use solana_sdk::signature::Keypair;
use std::sync::Arc;

# async fn example() -> Result<(), Box<dyn std::error::Error>> {
let rpc_client = Arc::new(RpcClient::new("http://127.0.0.1:8899".to_string()));
let client = SolfundClient::with_config(rpc_client, ClientConfig::default());

let funder = Keypair::new();
let campaign = solana_sdk::pubkey::Pubkey::new_unique();
let signature = client.fund_campaign(&funder, &campaign, 50_000_000).await?;
println!("funded: {signature}");
# Ok(())
# }
```
*/

mod client;
mod config;
mod error;

pub use client::SolfundClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};

pub use solana_client::nonblocking::rpc_client::RpcClient;
pub use solana_sdk::signature::{Keypair, Signature};
pub use solfund_sdk::{CampaignSnapshot, CampaignStatus};
