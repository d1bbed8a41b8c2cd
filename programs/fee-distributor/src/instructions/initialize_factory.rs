use anchor_lang::prelude::*;

use crate::{
    constants::{FACTORY_CONFIG_SEED, FACTORY_CONFIG_SIZE, MAX_BASIS_POINTS},
    errors::ErrorCode,
    events::FactoryInitialized,
    state::FactoryConfig,
    ID,
};

#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    #[account(
        init,
        payer = owner,
        space = FACTORY_CONFIG_SIZE,
        seeds = [FACTORY_CONFIG_SEED],
        bump
    )]
    pub factory_config: AccountLoader<'info, FactoryConfig>,

    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: The program's executable data account - validated in handler
    #[account(
        constraint = program_data.owner == &anchor_lang::solana_program::bpf_loader_upgradeable::id()
            @ ErrorCode::Unauthorized
    )]
    pub program_data: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

/// Initializes the factory and its role store
/// Can only be called once by the program's upgrade authority
pub fn handler(
    ctx: Context<InitializeFactory>,
    operator: Pubkey,
    default_client_basis_points: u16,
) -> Result<()> {
    require!(
        (1..=MAX_BASIS_POINTS).contains(&default_client_basis_points),
        ErrorCode::InvalidBasisPoints
    );

    // Verify program_data is the correct PDA for our program
    let (expected_program_data, _) = Pubkey::find_program_address(
        &[ID.as_ref()],
        &anchor_lang::solana_program::bpf_loader_upgradeable::id(),
    );
    require!(
        ctx.accounts.program_data.key() == expected_program_data,
        ErrorCode::Unauthorized
    );

    let data = ctx.accounts.program_data.try_borrow_data()?;

    // UpgradeableLoaderState::ProgramData layout:
    // - 4 bytes: discriminant
    // - 8 bytes: slot
    // - 1 byte: Option discriminant for upgrade_authority
    // - 32 bytes: upgrade_authority pubkey (if Some)
    require!(data.len() >= 45, ErrorCode::Unauthorized);
    require!(data[12] == 1, ErrorCode::Unauthorized); // Must have upgrade authority

    let upgrade_authority = Pubkey::try_from(&data[13..45])
        .map_err(|_| ErrorCode::Unauthorized)?;

    require!(
        upgrade_authority == ctx.accounts.owner.key(),
        ErrorCode::Unauthorized
    );

    let factory_config = &mut ctx.accounts.factory_config.load_init()?;

    factory_config.owner = ctx.accounts.owner.key();
    factory_config.pending_owner = Pubkey::default(); // No pending transfer initially
    factory_config.operator = operator;
    factory_config.reference_instance = Pubkey::default();
    factory_config.default_client_basis_points = default_client_basis_points;
    factory_config.bump = ctx.bumps.factory_config;

    emit!(FactoryInitialized {
        factory: ctx.accounts.factory_config.key(),
        owner: ctx.accounts.owner.key(),
        operator,
        default_client_basis_points,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
