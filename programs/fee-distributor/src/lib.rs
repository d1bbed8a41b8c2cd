use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod merkle;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("FnwLxkJbBa4R6CLfSPwgrprmMS27J267LVR8XJLtZfvt");

// Security contact information (embedded on-chain)
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Fee Distributor",
    project_url: "https://github.com/fee-distributor/fee-distributor",
    contacts: "link:https://github.com/fee-distributor/fee-distributor/security",
    policy: "https://github.com/fee-distributor/fee-distributor/blob/main/SECURITY.md",
    source_code: "https://github.com/fee-distributor/fee-distributor",
    source_release: "v0.1.0"
}

#[program]
pub mod fee_distributor {
    use super::*;

    /// Initializes the factory role store
    /// Can only be called once by the program's upgrade authority
    pub fn initialize_factory(
        ctx: Context<InitializeFactory>,
        operator: Pubkey,
        default_client_basis_points: u16,
    ) -> Result<()> {
        instructions::initialize_factory::handler(ctx, operator, default_client_basis_points)
    }

    /// Proposes factory ownership transfer to a new address (two-step pattern)
    /// Only callable by the current owner
    pub fn transfer_factory_ownership(
        ctx: Context<TransferFactoryOwnership>,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::transfer_factory_ownership::handler(ctx, new_owner)
    }

    /// Accepts a pending factory ownership transfer
    /// Only callable by the pending owner
    pub fn accept_factory_ownership(ctx: Context<AcceptFactoryOwnership>) -> Result<()> {
        instructions::accept_factory_ownership::handler(ctx)
    }

    /// Replaces the operator; the default key disables the role
    pub fn set_operator(ctx: Context<SetOperator>, new_operator: Pubkey) -> Result<()> {
        instructions::set_operator::handler(ctx, new_operator)
    }

    /// Sets the client share used when a creation request passes zero
    pub fn set_default_client_basis_points(
        ctx: Context<SetDefaultClientBasisPoints>,
        basis_points: u16,
    ) -> Result<()> {
        instructions::set_default_client_basis_points::handler(ctx, basis_points)
    }

    /// Creates an uninitialized fee distributor bound to this factory and a service
    /// Owner only
    pub fn create_reference_instance(ctx: Context<CreateReferenceInstance>) -> Result<()> {
        instructions::create_reference_instance::handler(ctx)
    }

    /// Points the factory at a reference instance used as template for new distributors
    /// Owner only
    pub fn set_reference_instance(ctx: Context<SetReferenceInstance>) -> Result<()> {
        instructions::set_reference_instance::handler(ctx)
    }

    /// Creates and initializes a fee distributor for a client from the reference instance
    /// Operator or owner; recipients are probed on-chain before the instance is accepted
    pub fn create_fee_distributor<'info>(
        ctx: Context<'_, '_, 'info, 'info, CreateFeeDistributor<'info>>,
        client: FeeRecipientInput,
        referrer: FeeRecipientInput,
        validator_data: ValidatorData,
    ) -> Result<()> {
        instructions::create_fee_distributor::handler(ctx, client, referrer, validator_data)
    }

    /// Sends lamports to a fee distributor
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Splits the accumulated balance between client, service and referrer
    /// Permissionless - anyone can call
    pub fn withdraw<'info>(ctx: Context<'_, '_, 'info, 'info, Withdraw<'info>>) -> Result<()> {
        instructions::withdraw::handler(ctx)
    }

    /// Moves stray tokens out of a fee distributor
    /// Owner only; wrapped SOL is never recoverable
    pub fn recover_token(ctx: Context<RecoverToken>, amount: u64) -> Result<()> {
        instructions::recover_token::handler(ctx, amount)
    }

    /// Records a client's request to exit validators
    pub fn voluntary_exit(ctx: Context<VoluntaryExit>, validator_ids: Vec<u64>) -> Result<()> {
        instructions::voluntary_exit::handler(ctx, validator_ids)
    }

    /// Creates the commitment oracle
    /// Owner only
    pub fn initialize_oracle(ctx: Context<InitializeOracle>) -> Result<()> {
        instructions::initialize_oracle::handler(ctx)
    }

    /// Publishes a new commitment root
    /// Operator or owner
    pub fn report(ctx: Context<Report>, root: [u8; 32]) -> Result<()> {
        instructions::report::handler(ctx, root)
    }

    /// Fails unless the proof places `(fee_distributor, amount)` under the current root
    pub fn verify(
        ctx: Context<Verify>,
        proof: Vec<[u8; 32]>,
        fee_distributor: Pubkey,
        amount: u64,
    ) -> Result<()> {
        instructions::verify::handler(ctx, proof, fee_distributor, amount)
    }
}
