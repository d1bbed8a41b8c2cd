use anchor_lang::prelude::*;

use crate::{
    constants::FACTORY_CONFIG_SEED, errors::ErrorCode, events::OperatorUpdated,
    state::FactoryConfig,
};

#[derive(Accounts)]
pub struct SetOperator<'info> {
    #[account(
        mut,
        seeds = [FACTORY_CONFIG_SEED],
        bump = factory_config.load()?.bump,
        constraint = factory_config.load()?.is_owner(&owner.key()) @ ErrorCode::Unauthorized
    )]
    pub factory_config: AccountLoader<'info, FactoryConfig>,

    pub owner: Signer<'info>,
}

/// Replaces the operator; Pubkey::default() leaves the owner as the only operator
pub fn handler(ctx: Context<SetOperator>, new_operator: Pubkey) -> Result<()> {
    let factory_config = &mut ctx.accounts.factory_config.load_mut()?;
    let old_operator = factory_config.operator;

    factory_config.operator = new_operator;

    emit!(OperatorUpdated {
        owner: ctx.accounts.owner.key(),
        old_operator,
        new_operator,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
