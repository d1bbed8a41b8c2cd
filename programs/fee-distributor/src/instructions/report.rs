use anchor_lang::prelude::*;

use crate::{
    constants::{COMMITMENT_ORACLE_SEED, FACTORY_CONFIG_SEED},
    errors::ErrorCode,
    events::RootReported,
    state::{CommitmentOracle, FactoryConfig},
};

#[derive(Accounts)]
pub struct Report<'info> {
    #[account(
        seeds = [FACTORY_CONFIG_SEED],
        bump = factory_config.load()?.bump,
        constraint = factory_config.load()?.is_operator_or_owner(&reporter.key())
            @ ErrorCode::Unauthorized
    )]
    pub factory_config: AccountLoader<'info, FactoryConfig>,

    #[account(
        mut,
        seeds = [COMMITMENT_ORACLE_SEED],
        bump = oracle.load()?.bump
    )]
    pub oracle: AccountLoader<'info, CommitmentOracle>,

    pub reporter: Signer<'info>,
}

/// Replaces the commitment root; proofs against the previous root stop verifying
pub fn handler(ctx: Context<Report>, root: [u8; 32]) -> Result<()> {
    let oracle = &mut ctx.accounts.oracle.load_mut()?;

    oracle.root = root;
    oracle.report_count = oracle
        .report_count
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow)?;

    emit!(RootReported {
        oracle: ctx.accounts.oracle.key(),
        reporter: ctx.accounts.reporter.key(),
        root,
        report_count: oracle.report_count,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
