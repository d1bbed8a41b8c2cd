use anchor_lang::prelude::*;

use crate::{
    constants::{COMMITMENT_ORACLE_SEED, MAX_PROOF_LENGTH},
    errors::ErrorCode,
    merkle,
    state::CommitmentOracle,
};

#[derive(Accounts)]
pub struct Verify<'info> {
    #[account(
        seeds = [COMMITMENT_ORACLE_SEED],
        bump = oracle.load()?.bump
    )]
    pub oracle: AccountLoader<'info, CommitmentOracle>,
}

/// Checks that `amount` is the attested cumulative reward of `fee_distributor`
/// Succeeds only against the current root
pub fn handler(
    ctx: Context<Verify>,
    proof: Vec<[u8; 32]>,
    fee_distributor: Pubkey,
    amount: u64,
) -> Result<()> {
    require!(proof.len() <= MAX_PROOF_LENGTH, ErrorCode::ProofTooLong);

    let oracle = ctx.accounts.oracle.load()?;
    let leaf = merkle::leaf_hash(&fee_distributor, amount);

    require!(
        merkle::verify(&proof, &oracle.root, leaf),
        ErrorCode::InvalidProof
    );

    #[cfg(feature = "verbose")]
    msg!("Verified {} lamports for {}", amount, fee_distributor);

    Ok(())
}
