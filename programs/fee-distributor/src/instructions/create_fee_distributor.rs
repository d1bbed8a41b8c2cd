use anchor_lang::prelude::*;

use crate::{
    constants::{FACTORY_CONFIG_SEED, FEE_DISTRIBUTOR_SEED, FEE_DISTRIBUTOR_SIZE, FEE_DISTRIBUTOR_VERSION},
    errors::ErrorCode,
    events::{FeeDistributorCreated, FeeDistributorInitialized},
    state::{DistributorStatus, FactoryConfig, FeeDistributor, FeeRecipient},
    utils::probe_recipient,
};

#[derive(Accounts)]
#[instruction(client: FeeRecipientInput, referrer: FeeRecipientInput)]
pub struct CreateFeeDistributor<'info> {
    #[account(
        seeds = [FACTORY_CONFIG_SEED],
        bump = factory_config.load()?.bump,
        constraint = factory_config.load()?.is_operator_or_owner(&authority.key())
            @ ErrorCode::Unauthorized
    )]
    pub factory_config: AccountLoader<'info, FactoryConfig>,

    /// Must match factory_config.reference_instance - validated in handler
    pub reference_instance: AccountLoader<'info, FeeDistributor>,

    #[account(
        init,
        payer = authority,
        space = FEE_DISTRIBUTOR_SIZE,
        seeds = [
            FEE_DISTRIBUTOR_SEED,
            reference_instance.key().as_ref(),
            client.address.as_ref(),
            referrer.address.as_ref()
        ],
        bump
    )]
    pub fee_distributor: AccountLoader<'info, FeeDistributor>,

    /// Operator or owner; pays rent for the new fee distributor
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Input struct for fee recipients (used in instruction parameters)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default)]
pub struct FeeRecipientInput {
    pub address: Pubkey,
    pub basis_points: u16,
}

/// Validator bookkeeping stored alongside the split configuration
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default)]
pub struct ValidatorData {
    pub client_only_cl_rewards: u64,
    pub first_validator_id: u64,
    pub validator_count: u16,
}

/// Creates a fee distributor from the reference instance and initializes it
///
/// remaining_accounts: client recipient (writable), then referrer recipient
/// (writable) when a referrer is configured
pub fn handler(
    ctx: Context<CreateFeeDistributor>,
    client: FeeRecipientInput,
    referrer: FeeRecipientInput,
    validator_data: ValidatorData,
) -> Result<()> {
    let (factory_key, reference_key, client_basis_points) = {
        let factory_config = ctx.accounts.factory_config.load()?;
        let reference_key = factory_config
            .reference_instance()
            .ok_or(ErrorCode::ReferenceInstanceNotSet)?;
        (
            ctx.accounts.factory_config.key(),
            reference_key,
            factory_config.effective_client_basis_points(client.basis_points),
        )
    };

    require_keys_eq!(
        ctx.accounts.reference_instance.key(),
        reference_key,
        ErrorCode::InvalidReferenceInstance
    );

    // Copy only the template's immutable parameters, never its storage
    let template = *ctx.accounts.reference_instance.load()?;
    require_keys_eq!(template.factory(), factory_key, ErrorCode::InvalidReferenceInstance);

    let client = FeeRecipient {
        address: client.address,
        basis_points: client_basis_points,
    };
    let referrer = FeeRecipient {
        address: referrer.address,
        basis_points: referrer.basis_points,
    };

    // A fee distributor cannot pay itself
    let fee_distributor_key = ctx.accounts.fee_distributor.key();
    require!(
        client.address != fee_distributor_key && referrer.address != fee_distributor_key,
        ErrorCode::DuplicateRecipient
    );

    {
        let fee_distributor = &mut ctx.accounts.fee_distributor.load_init()?;

        fee_distributor.version = FEE_DISTRIBUTOR_VERSION;
        fee_distributor.factory = template.factory();
        fee_distributor.template = reference_key;
        fee_distributor.service = template.service();
        fee_distributor.status = DistributorStatus::Uninitialized as u8;
        fee_distributor.bump = ctx.bumps.fee_distributor;
        fee_distributor.client_only_cl_rewards = validator_data.client_only_cl_rewards;
        fee_distributor.first_validator_id = validator_data.first_validator_id;
        fee_distributor.validator_count = validator_data.validator_count;

        fee_distributor.initialize(client, referrer)?;
    }

    let timestamp = Clock::get()?.unix_timestamp;

    emit!(FeeDistributorCreated {
        fee_distributor: fee_distributor_key,
        client: client.address,
        reference_instance: reference_key,
        timestamp,
    });

    emit!(FeeDistributorInitialized {
        fee_distributor: fee_distributor_key,
        client: client.address,
        client_basis_points: client.basis_points,
        referrer: referrer.address,
        referrer_basis_points: referrer.basis_points,
        timestamp,
    });

    // Probe last; a failure here aborts the whole instruction, including the init above
    let client_info = ctx
        .remaining_accounts
        .first()
        .ok_or(ErrorCode::InsufficientRemainingAccounts)?;
    probe_recipient(client_info, &client.address)?;

    if referrer.is_set() {
        let referrer_info = ctx
            .remaining_accounts
            .get(1)
            .ok_or(ErrorCode::InsufficientRemainingAccounts)?;
        probe_recipient(referrer_info, &referrer.address)?;
    }

    #[cfg(feature = "verbose")]
    msg!(
        "Fee distributor {} created for client {}",
        fee_distributor_key,
        client.address
    );

    Ok(())
}
