use anchor_lang::prelude::*;

use crate::{
    constants::{FACTORY_CONFIG_SEED, MAX_BASIS_POINTS},
    errors::ErrorCode,
    events::DefaultClientBasisPointsUpdated,
    state::FactoryConfig,
};

#[derive(Accounts)]
pub struct SetDefaultClientBasisPoints<'info> {
    #[account(
        mut,
        seeds = [FACTORY_CONFIG_SEED],
        bump = factory_config.load()?.bump,
        constraint = factory_config.load()?.is_owner(&owner.key()) @ ErrorCode::Unauthorized
    )]
    pub factory_config: AccountLoader<'info, FactoryConfig>,

    pub owner: Signer<'info>,
}

/// Sets the client share used when create_fee_distributor receives zero
pub fn handler(ctx: Context<SetDefaultClientBasisPoints>, basis_points: u16) -> Result<()> {
    require!(
        (1..=MAX_BASIS_POINTS).contains(&basis_points),
        ErrorCode::InvalidBasisPoints
    );

    let factory_config = &mut ctx.accounts.factory_config.load_mut()?;
    let old_basis_points = factory_config.default_client_basis_points;

    factory_config.default_client_basis_points = basis_points;

    emit!(DefaultClientBasisPointsUpdated {
        owner: ctx.accounts.owner.key(),
        old_basis_points,
        new_basis_points: basis_points,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
