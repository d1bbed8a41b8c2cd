use anchor_lang::prelude::*;

use crate::{
    constants::FEE_DISTRIBUTOR_SEED,
    errors::ErrorCode,
    events::Withdrawn,
    state::FeeDistributor,
    utils::transfer_lamports,
};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [
            FEE_DISTRIBUTOR_SEED,
            fee_distributor.load()?.template.as_ref(),
            fee_distributor.load()?.client.address.as_ref(),
            fee_distributor.load()?.referrer.address.as_ref()
        ],
        bump = fee_distributor.load()?.bump
    )]
    pub fee_distributor: AccountLoader<'info, FeeDistributor>,

    /// CHECK: Validated against stored client
    #[account(
        mut,
        constraint = client.key() == fee_distributor.load()?.client.address @ ErrorCode::RecipientMismatch
    )]
    pub client: AccountInfo<'info>,

    /// CHECK: Validated against stored service
    #[account(
        mut,
        constraint = service.key() == fee_distributor.load()?.service @ ErrorCode::RecipientMismatch
    )]
    pub service: AccountInfo<'info>,

    /// CHECK: Intentionally not a Signer - permissionless execution allows anyone to trigger
    /// distribution. The executor field is used only for event attribution.
    pub executor: AccountInfo<'info>,
}

/// Splits the withdrawable balance between client, service and referrer
///
/// remaining_accounts: referrer recipient (writable) when a referrer is configured
pub fn handler<'info>(ctx: Context<'_, '_, 'info, 'info, Withdraw<'info>>) -> Result<()> {
    let distributor_info = ctx.accounts.fee_distributor.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(distributor_info.data_len());
    let available = distributor_info.lamports().saturating_sub(rent_floor);

    // Phase 1: mark the withdrawal pending before any lamports move
    let (withdrawal, referrer) = {
        let mut fee_distributor = ctx.accounts.fee_distributor.load_mut()?;
        let withdrawal = fee_distributor.begin_withdrawal(available)?;
        (withdrawal, fee_distributor.referrer)
    }; // ← Borrow DROPPED here

    // Phase 2: transfers
    transfer_lamports(&distributor_info, &ctx.accounts.client, withdrawal.client)?;
    transfer_lamports(&distributor_info, &ctx.accounts.service, withdrawal.service)?;

    if referrer.is_set() {
        let referrer_info = ctx
            .remaining_accounts
            .first()
            .ok_or(ErrorCode::InsufficientRemainingAccounts)?;
        require_keys_eq!(referrer_info.key(), referrer.address, ErrorCode::RecipientMismatch);
        transfer_lamports(&distributor_info, referrer_info, withdrawal.referrer)?;
    }

    // Phase 3: settle
    ctx.accounts
        .fee_distributor
        .load_mut()?
        .settle_withdrawal(&withdrawal)?;

    #[cfg(feature = "verbose")]
    msg!(
        "Withdrawn: client {} service {} referrer {}",
        withdrawal.client,
        withdrawal.service,
        withdrawal.referrer
    );

    emit!(Withdrawn {
        fee_distributor: ctx.accounts.fee_distributor.key(),
        client_amount: withdrawal.client,
        service_amount: withdrawal.service,
        referrer_amount: withdrawal.referrer,
        executor: ctx.accounts.executor.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
