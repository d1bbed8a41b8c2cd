use anchor_lang::prelude::*;
use anchor_spl::{
    token::spl_token,
    token_2022::spl_token_2022,
    token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::{
    constants::{FACTORY_CONFIG_SEED, FEE_DISTRIBUTOR_SEED},
    errors::ErrorCode,
    events::TokenRecovered,
    state::{FactoryConfig, FeeDistributor},
};

#[derive(Accounts)]
pub struct RecoverToken<'info> {
    #[account(
        seeds = [FACTORY_CONFIG_SEED],
        bump = factory_config.load()?.bump,
        constraint = factory_config.load()?.is_owner(&owner.key()) @ ErrorCode::Unauthorized
    )]
    pub factory_config: AccountLoader<'info, FactoryConfig>,

    // Owner is resolved through the factory back-reference, never stored locally
    #[account(
        seeds = [
            FEE_DISTRIBUTOR_SEED,
            fee_distributor.load()?.template.as_ref(),
            fee_distributor.load()?.client.address.as_ref(),
            fee_distributor.load()?.referrer.address.as_ref()
        ],
        bump = fee_distributor.load()?.bump,
        constraint = fee_distributor.load()?.factory == factory_config.key() @ ErrorCode::Unauthorized
    )]
    pub fee_distributor: AccountLoader<'info, FeeDistributor>,

    #[account(
        constraint = mint.key() != spl_token::native_mint::ID
            && mint.key() != spl_token_2022::native_mint::ID
            @ ErrorCode::NativeAssetNotRecoverable
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = fee_distributor,
        token::token_program = token_program,
    )]
    pub source: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = mint,
        token::token_program = token_program,
    )]
    pub destination: InterfaceAccount<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Sends tokens mistakenly held by a fee distributor to any token account
/// Lamports are the split asset and only leave through withdraw
pub fn handler(ctx: Context<RecoverToken>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::ZeroAmount);

    let (template, client, referrer, bump) = {
        let fee_distributor = ctx.accounts.fee_distributor.load()?;
        (
            fee_distributor.template,
            fee_distributor.client.address,
            fee_distributor.referrer.address,
            fee_distributor.bump,
        )
    }; // ← Borrow DROPPED here

    let seeds = &[
        FEE_DISTRIBUTOR_SEED,
        template.as_ref(),
        client.as_ref(),
        referrer.as_ref(),
        &[bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = TransferChecked {
        from: ctx.accounts.source.to_account_info(),
        mint: ctx.accounts.mint.to_account_info(),
        to: ctx.accounts.destination.to_account_info(),
        authority: ctx.accounts.fee_distributor.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token_interface::transfer_checked(cpi_ctx, amount, ctx.accounts.mint.decimals)?;

    emit!(TokenRecovered {
        fee_distributor: ctx.accounts.fee_distributor.key(),
        mint: ctx.accounts.mint.key(),
        destination: ctx.accounts.destination.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
