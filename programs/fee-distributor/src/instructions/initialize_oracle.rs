use anchor_lang::prelude::*;

use crate::{
    constants::{COMMITMENT_ORACLE_SEED, COMMITMENT_ORACLE_SIZE, FACTORY_CONFIG_SEED},
    errors::ErrorCode,
    events::OracleInitialized,
    state::{CommitmentOracle, FactoryConfig},
};

#[derive(Accounts)]
pub struct InitializeOracle<'info> {
    #[account(
        seeds = [FACTORY_CONFIG_SEED],
        bump = factory_config.load()?.bump,
        constraint = factory_config.load()?.is_owner(&owner.key()) @ ErrorCode::Unauthorized
    )]
    pub factory_config: AccountLoader<'info, FactoryConfig>,

    #[account(
        init,
        payer = owner,
        space = COMMITMENT_ORACLE_SIZE,
        seeds = [COMMITMENT_ORACLE_SEED],
        bump
    )]
    pub oracle: AccountLoader<'info, CommitmentOracle>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates the commitment oracle with an empty root
/// Nothing verifies until the first report
pub fn handler(ctx: Context<InitializeOracle>) -> Result<()> {
    let oracle = &mut ctx.accounts.oracle.load_init()?;

    oracle.root = [0u8; 32];
    oracle.report_count = 0;
    oracle.bump = ctx.bumps.oracle;

    emit!(OracleInitialized {
        oracle: ctx.accounts.oracle.key(),
        owner: ctx.accounts.owner.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
