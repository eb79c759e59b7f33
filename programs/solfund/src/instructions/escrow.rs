use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Moves lamports out of the program-owned campaign account.
///
/// The campaign PDA carries account data, so the System Program cannot debit
/// it; the balance is adjusted directly instead. The account must stay rent
/// exempt after the debit.
pub(crate) fn release_from_escrow<'info>(
    campaign: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let rent_floor = Rent::get()?.minimum_balance(campaign.data_len());
    let campaign_lamports = campaign
        .lamports()
        .checked_sub(amount)
        .ok_or(ErrorCode::InsufficientFunds)?;
    require!(
        campaign_lamports >= rent_floor,
        ErrorCode::InsufficientFunds
    );
    let recipient_lamports = recipient
        .lamports()
        .checked_add(amount)
        .ok_or(ErrorCode::CalculationOverflow)?;

    **campaign.try_borrow_mut_lamports()? = campaign_lamports;
    **recipient.try_borrow_mut_lamports()? = recipient_lamports;

    Ok(())
}
