use anchor_lang::prelude::*;

use crate::{
    constants::{FEE_DISTRIBUTOR_SEED, MAX_EXIT_VALIDATORS},
    errors::ErrorCode,
    events::VoluntaryExitRequested,
    state::FeeDistributor,
};

#[derive(Accounts)]
pub struct VoluntaryExit<'info> {
    #[account(
        seeds = [
            FEE_DISTRIBUTOR_SEED,
            fee_distributor.load()?.template.as_ref(),
            fee_distributor.load()?.client.address.as_ref(),
            fee_distributor.load()?.referrer.address.as_ref()
        ],
        bump = fee_distributor.load()?.bump,
        constraint = fee_distributor.load()?.is_initialized() @ ErrorCode::NotInitialized,
        constraint = fee_distributor.load()?.client() == client.key() @ ErrorCode::Unauthorized
    )]
    pub fee_distributor: AccountLoader<'info, FeeDistributor>,

    pub client: Signer<'info>,
}

/// Signals that the client wants the listed validators exited
/// No accounting effect; the service acts on the emitted event
pub fn handler(ctx: Context<VoluntaryExit>, validator_ids: Vec<u64>) -> Result<()> {
    require!(
        (1..=MAX_EXIT_VALIDATORS).contains(&validator_ids.len()),
        ErrorCode::InvalidValidatorCount
    );

    emit!(VoluntaryExitRequested {
        fee_distributor: ctx.accounts.fee_distributor.key(),
        client: ctx.accounts.client.key(),
        validator_ids,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
