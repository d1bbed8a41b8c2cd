use anchor_lang::prelude::*;

use crate::{constants::MAX_BASIS_POINTS, errors::ErrorCode};

/// Amounts owed to each recipient for one withdrawal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Withdrawal {
    pub client: u64,
    pub service: u64,
    pub referrer: u64,
}

impl Withdrawal {
    /// Returns None on overflow
    pub fn total(&self) -> Option<u64> {
        self.client.checked_add(self.service)?.checked_add(self.referrer)
    }
}

/// Calculate a recipient's share of the total amount
/// Returns None on overflow
pub fn calculate_share(total: u64, basis_points: u16) -> Option<u64> {
    (total as u128)
        .checked_mul(basis_points as u128)?
        .checked_div(MAX_BASIS_POINTS as u128)?
        .try_into()
        .ok()
}

/// Splits `total` between client, referrer and service
///
/// Client and referrer shares round down; the service receives the remainder,
/// so the three amounts always sum to `total`.
pub fn split_amount(total: u64, client_bps: u16, referrer_bps: u16) -> Result<Withdrawal> {
    require!(
        client_bps as u32 + referrer_bps as u32 <= MAX_BASIS_POINTS as u32,
        ErrorCode::SharesExceedTotal
    );

    let client = calculate_share(total, client_bps).ok_or(ErrorCode::MathOverflow)?;
    let referrer = calculate_share(total, referrer_bps).ok_or(ErrorCode::MathOverflow)?;
    let service = total
        .checked_sub(client)
        .ok_or(ErrorCode::MathUnderflow)?
        .checked_sub(referrer)
        .ok_or(ErrorCode::MathUnderflow)?;

    Ok(Withdrawal { client, service, referrer })
}

/// Whether any later credit to this account would succeed
///
/// An empty account only accepts a credit that lifts it to the rent-exempt
/// minimum, so small payouts would abort the whole withdrawal. Recipients
/// must already exist with a balance.
pub fn can_receive(recipient: &AccountInfo) -> bool {
    recipient.is_writable && !recipient.executable && recipient.lamports() > 0
}

/// Validates that a configured recipient was supplied and can be paid
/// Used at configuration time so funds can never be stranded later
pub fn probe_recipient(recipient: &AccountInfo, expected: &Pubkey) -> Result<()> {
    require_keys_eq!(recipient.key(), *expected, ErrorCode::RecipientMismatch);
    require!(can_receive(recipient), ErrorCode::RecipientCannotReceive);
    Ok(())
}

/// Moves lamports out of a program-owned account
pub fn transfer_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let from_balance = from
        .lamports()
        .checked_sub(amount)
        .ok_or(ErrorCode::MathUnderflow)?;
    let to_balance = to
        .lamports()
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;

    **from.try_borrow_mut_lamports()? = from_balance;
    **to.try_borrow_mut_lamports()? = to_balance;

    Ok(())
}
