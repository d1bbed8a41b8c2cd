use anchor_lang::prelude::*;

use crate::{
    constants::FACTORY_CONFIG_SEED, errors::ErrorCode, events::FactoryOwnershipTransferAccepted,
    state::FactoryConfig,
};

#[derive(Accounts)]
pub struct AcceptFactoryOwnership<'info> {
    #[account(
        mut,
        seeds = [FACTORY_CONFIG_SEED],
        bump = factory_config.load()?.bump,
    )]
    pub factory_config: AccountLoader<'info, FactoryConfig>,

    pub new_owner: Signer<'info>,
}

/// Accepts a pending factory ownership transfer
/// Every fee distributor follows, since each one resolves its owner through the factory
pub fn handler(ctx: Context<AcceptFactoryOwnership>) -> Result<()> {
    let factory_config = &mut ctx.accounts.factory_config.load_mut()?;

    require!(
        factory_config.pending_owner != Pubkey::default(),
        ErrorCode::NoPendingTransfer
    );
    require!(
        factory_config.pending_owner == ctx.accounts.new_owner.key(),
        ErrorCode::Unauthorized
    );

    let old_owner = factory_config.owner;
    let new_owner = ctx.accounts.new_owner.key();

    factory_config.owner = new_owner;
    factory_config.pending_owner = Pubkey::default();

    emit!(FactoryOwnershipTransferAccepted {
        old_owner,
        new_owner,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
