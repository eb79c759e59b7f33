use solana_client::client_error::{ClientError as RpcClientError, ClientErrorKind};
use solana_sdk::{instruction::InstructionError, pubkey::Pubkey, transaction::TransactionError};
use solfund_sdk::{decode_program_error, ErrorCode, SdkError};
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("RPC client error: {0}")]
    Rpc(#[from] RpcClientError),

    #[error("Campaign program rejected the transaction: {0}")]
    Program(ErrorCode),

    #[error("Transaction failed after {retries} retries: {last_error}")]
    RetriesExhausted { retries: usize, last_error: String },

    #[error("Campaign not found: {0}")]
    CampaignNotFound(Pubkey),

    #[error("Invalid account data: {0}")]
    InvalidAccountData(String),

    #[error("Failed to build instruction: {0}")]
    InstructionBuild(String),

    #[error(transparent)]
    Sdk(#[from] SdkError),
}

impl ClientError {
    /// Wraps an RPC error, lifting campaign program failures into
    /// [`ClientError::Program`].
    pub fn from_rpc(error: RpcClientError) -> Self {
        match program_error(&error) {
            Some(code) => ClientError::Program(code),
            None => ClientError::Rpc(error),
        }
    }

    pub fn from_anchor(error: anchor_lang::error::Error) -> Self {
        ClientError::InstructionBuild(error.to_string())
    }

    pub fn program_error(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Program(code) => Some(*code),
            _ => None,
        }
    }
}

/// Finds the custom program error carried by a failed send or simulation.
pub(crate) fn program_error(error: &RpcClientError) -> Option<ErrorCode> {
    match error.get_transaction_error()? {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
            decode_program_error(code)
        }
        _ => None,
    }
}

/// Network hiccups and stale blockhashes are worth another attempt. Anything
/// the runtime or program decided is not.
pub(crate) fn is_transient(error: &RpcClientError) -> bool {
    if let Some(transaction_error) = error.get_transaction_error() {
        return matches!(transaction_error, TransactionError::BlockhashNotFound);
    }

    match error.kind() {
        ClientErrorKind::Io(_) | ClientErrorKind::Reqwest(_) => true,
        _ => {
            let message = error.to_string();
            message.contains("blockhash") || message.contains("timeout")
        }
    }
}
