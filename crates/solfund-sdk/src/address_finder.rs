use anchor_lang::prelude::*;
use anchor_lang::solana_program::system_program::ID as SYSTEM_PROGRAM_ID;
use solfund::{CAMPAIGN_SEED_PREFIX, ID as SOLFUND_PROGRAM_ID, MAX_NAME_LEN};

use crate::{SdkError, SdkResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressFinder {
    pub program_id: Pubkey,
    pub system_program_id: Pubkey,
}

impl AddressFinder {
    pub fn new(program_id: Pubkey, system_program_id: Pubkey) -> Self {
        Self {
            program_id,
            system_program_id,
        }
    }

    /// Campaign PDA: [CAMPAIGN_SEED_PREFIX, creator, name].
    ///
    /// Names longer than a single seed are rejected here rather than letting
    /// the derivation panic.
    pub fn find_campaign_address(&self, creator: &Pubkey, name: &str) -> SdkResult<(Pubkey, u8)> {
        if name.is_empty() || name.len() > MAX_NAME_LEN {
            return Err(SdkError::InvalidCampaignName {
                len: name.len(),
                max: MAX_NAME_LEN,
            });
        }

        Ok(Pubkey::find_program_address(
            &[CAMPAIGN_SEED_PREFIX, creator.as_ref(), name.as_bytes()],
            &self.program_id,
        ))
    }
}

impl Default for AddressFinder {
    fn default() -> Self {
        Self::new(SOLFUND_PROGRAM_ID, SYSTEM_PROGRAM_ID)
    }
}
