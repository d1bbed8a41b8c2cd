use anchor_lang::prelude::*;

use crate::{
    constants::FACTORY_CONFIG_SEED,
    errors::ErrorCode,
    events::ReferenceInstanceSet,
    state::{FactoryConfig, FeeDistributor},
};

#[derive(Accounts)]
pub struct SetReferenceInstance<'info> {
    #[account(
        mut,
        seeds = [FACTORY_CONFIG_SEED],
        bump = factory_config.load()?.bump,
        constraint = factory_config.load()?.is_owner(&owner.key()) @ ErrorCode::Unauthorized
    )]
    pub factory_config: AccountLoader<'info, FactoryConfig>,

    /// Factory binding and status validated in handler
    pub reference_instance: AccountLoader<'info, FeeDistributor>,

    pub owner: Signer<'info>,
}

/// Selects the template used by create_fee_distributor
/// The candidate must be a FeeDistributor of this factory that was never initialized
pub fn handler(ctx: Context<SetReferenceInstance>) -> Result<()> {
    let factory_key = ctx.accounts.factory_config.key();
    let candidate = *ctx.accounts.reference_instance.load()?;

    require_keys_eq!(candidate.factory(), factory_key, ErrorCode::InvalidReferenceInstance);
    require!(!candidate.is_initialized(), ErrorCode::InvalidReferenceInstance);

    let factory_config = &mut ctx.accounts.factory_config.load_mut()?;
    let old_reference_instance = factory_config.reference_instance;
    let new_reference_instance = ctx.accounts.reference_instance.key();

    factory_config.reference_instance = new_reference_instance;

    emit!(ReferenceInstanceSet {
        factory: factory_key,
        old_reference_instance,
        new_reference_instance,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
