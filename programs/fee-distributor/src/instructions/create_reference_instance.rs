use anchor_lang::prelude::*;

use crate::{
    constants::{FACTORY_CONFIG_SEED, FEE_DISTRIBUTOR_SEED, FEE_DISTRIBUTOR_SIZE, FEE_DISTRIBUTOR_VERSION},
    errors::ErrorCode,
    events::ReferenceInstanceCreated,
    state::{DistributorStatus, FactoryConfig, FeeDistributor},
    utils::probe_recipient,
};

#[derive(Accounts)]
pub struct CreateReferenceInstance<'info> {
    #[account(
        seeds = [FACTORY_CONFIG_SEED],
        bump = factory_config.load()?.bump,
        constraint = factory_config.load()?.is_owner(&owner.key()) @ ErrorCode::Unauthorized
    )]
    pub factory_config: AccountLoader<'info, FactoryConfig>,

    // Reference instances have no client or referrer, so both seeds are zero
    #[account(
        init,
        payer = owner,
        space = FEE_DISTRIBUTOR_SIZE,
        seeds = [
            FEE_DISTRIBUTOR_SEED,
            unique_id.key().as_ref(),
            Pubkey::default().as_ref(),
            Pubkey::default().as_ref()
        ],
        bump
    )]
    pub reference_instance: AccountLoader<'info, FeeDistributor>,

    /// CHECK: Used only as PDA seed for uniqueness
    pub unique_id: AccountInfo<'info>,

    /// CHECK: Service payee, probed in handler
    #[account(mut)]
    pub service: AccountInfo<'info>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates an uninitialized template bound to this factory with a fixed service payee
pub fn handler(ctx: Context<CreateReferenceInstance>) -> Result<()> {
    let service = ctx.accounts.service.key();

    require!(service != Pubkey::default(), ErrorCode::ZeroAddress);
    probe_recipient(&ctx.accounts.service, &service)?;

    let reference_instance = &mut ctx.accounts.reference_instance.load_init()?;

    reference_instance.version = FEE_DISTRIBUTOR_VERSION;
    reference_instance.factory = ctx.accounts.factory_config.key();
    reference_instance.template = ctx.accounts.unique_id.key();
    reference_instance.service = service;
    reference_instance.status = DistributorStatus::Uninitialized as u8;
    reference_instance.bump = ctx.bumps.reference_instance;

    emit!(ReferenceInstanceCreated {
        reference_instance: ctx.accounts.reference_instance.key(),
        factory: ctx.accounts.factory_config.key(),
        service,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
