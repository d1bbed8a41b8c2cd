use anchor_lang::prelude::*;

use crate::{
    constants::FACTORY_CONFIG_SEED, errors::ErrorCode, events::FactoryOwnershipTransferProposed,
    state::FactoryConfig,
};

#[derive(Accounts)]
pub struct TransferFactoryOwnership<'info> {
    #[account(
        mut,
        seeds = [FACTORY_CONFIG_SEED],
        bump = factory_config.load()?.bump,
        constraint = factory_config.load()?.is_owner(&owner.key()) @ ErrorCode::Unauthorized
    )]
    pub factory_config: AccountLoader<'info, FactoryConfig>,

    pub owner: Signer<'info>,
}

/// Proposes factory ownership transfer to a new address (two-step pattern)
/// New owner must call accept_factory_ownership to complete transfer
/// Can be overwritten by calling again with different address
/// Set to Pubkey::default() to cancel pending transfer
pub fn handler(ctx: Context<TransferFactoryOwnership>, new_owner: Pubkey) -> Result<()> {
    let factory_config = &mut ctx.accounts.factory_config.load_mut()?;

    factory_config.pending_owner = new_owner;

    emit!(FactoryOwnershipTransferProposed {
        owner: ctx.accounts.owner.key(),
        pending_owner: new_owner,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
