use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::{
    constants::FEE_DISTRIBUTOR_SEED, errors::ErrorCode, events::Deposited, state::FeeDistributor,
};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [
            FEE_DISTRIBUTOR_SEED,
            fee_distributor.load()?.template.as_ref(),
            fee_distributor.load()?.client.address.as_ref(),
            fee_distributor.load()?.referrer.address.as_ref()
        ],
        bump = fee_distributor.load()?.bump,
        constraint = fee_distributor.load()?.is_initialized() @ ErrorCode::NotInitialized
    )]
    pub fee_distributor: AccountLoader<'info, FeeDistributor>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Funds a fee distributor with lamports
/// Reference instances are never initialized and so can never be funded here
pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::ZeroAmount);

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor.to_account_info(),
                to: ctx.accounts.fee_distributor.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(Deposited {
        fee_distributor: ctx.accounts.fee_distributor.key(),
        depositor: ctx.accounts.depositor.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
