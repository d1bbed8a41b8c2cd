use anchor_lang::prelude::*;

use crate::{
    constants::MAX_BASIS_POINTS,
    errors::ErrorCode,
    utils::{split_amount, Withdrawal},
};

/// Factory configuration and role store (single instance)
#[account(zero_copy(unsafe))]
#[repr(C)]
#[derive(Default)]
pub struct FactoryConfig {
    /// Owner of the factory and, transitively, of every fee distributor it created
    pub owner: Pubkey,
    /// Pending owner for two-step transfer (default = no pending transfer)
    pub pending_owner: Pubkey,
    /// Operator allowed to create fee distributors and report oracle roots
    pub operator: Pubkey,
    /// Template copied by create_fee_distributor (default = not set)
    pub reference_instance: Pubkey,
    /// Client share used when a caller supplies zero
    pub default_client_basis_points: u16,
    /// Bump seed for PDA derivation (stored for CU optimization)
    pub bump: u8,
    pub _padding: u8,
}

impl FactoryConfig {
    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }

    pub fn is_operator_or_owner(&self, key: &Pubkey) -> bool {
        self.is_owner(key) || (self.operator != Pubkey::default() && self.operator == *key)
    }

    pub fn reference_instance(&self) -> Option<Pubkey> {
        if self.reference_instance == Pubkey::default() {
            None
        } else {
            Some(self.reference_instance)
        }
    }

    /// Client share after substituting the factory default for zero
    pub fn effective_client_basis_points(&self, requested: u16) -> u16 {
        if requested == 0 {
            self.default_client_basis_points
        } else {
            requested
        }
    }
}

/// Lifecycle of a fee distributor. Initialized is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DistributorStatus {
    Uninitialized = 0,
    Initialized = 1,
}

/// Per-client fee distributor (reference instances share the layout)
#[account(zero_copy(unsafe))]
#[repr(C)]
#[derive(Default)]
pub struct FeeDistributor {
    /// Lamports committed to an in-flight withdrawal (0 = settled)
    pub pending_withdrawal: u64,
    /// Consensus-layer rewards owed to the client only (bookkeeping)
    pub client_only_cl_rewards: u64,
    /// First validator served by this distributor (bookkeeping)
    pub first_validator_id: u64,
    /// Factory that owns the template; its owner administers this account
    pub factory: Pubkey,
    /// Reference instance for clones, unique id for reference instances
    pub template: Pubkey,
    /// Service payee, copied from the template
    pub service: Pubkey,
    pub client: FeeRecipient,
    /// Default address and zero share when no referrer
    pub referrer: FeeRecipient,
    /// Number of validators served (bookkeeping)
    pub validator_count: u16,
    /// Schema version for future upgrades
    pub version: u8,
    /// DistributorStatus as u8
    pub status: u8,
    /// Bump seed for PDA derivation
    pub bump: u8,
    pub _reserved: [u8; 7],
}

/// Share of withdrawals owed to one recipient
#[zero_copy(unsafe)]
#[repr(C)]
#[derive(Default)]
pub struct FeeRecipient {
    /// Recipient's wallet address
    pub address: Pubkey,
    /// Share in basis points (0-10000, where 100 = 1%)
    pub basis_points: u16,
}

impl FeeRecipient {
    pub fn is_set(&self) -> bool {
        self.address != Pubkey::default()
    }
}

impl FeeDistributor {
    pub fn status(&self) -> DistributorStatus {
        if self.status == DistributorStatus::Initialized as u8 {
            DistributorStatus::Initialized
        } else {
            DistributorStatus::Uninitialized
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.status() == DistributorStatus::Initialized
    }

    pub fn factory(&self) -> Pubkey {
        self.factory
    }

    pub fn service(&self) -> Pubkey {
        self.service
    }

    pub fn client(&self) -> Pubkey {
        self.client.address
    }

    pub fn client_basis_points(&self) -> u16 {
        self.client.basis_points
    }

    pub fn referrer(&self) -> Pubkey {
        self.referrer.address
    }

    pub fn referrer_basis_points(&self) -> u16 {
        self.referrer.basis_points
    }

    /// Validates and stores the recipient configuration exactly once
    ///
    /// Recipients are probed by the caller afterwards; the enclosing
    /// instruction aborts (and this write is discarded) if a probe fails.
    pub fn initialize(&mut self, client: FeeRecipient, referrer: FeeRecipient) -> Result<()> {
        require!(!self.is_initialized(), ErrorCode::AlreadyInitialized);

        require!(client.is_set(), ErrorCode::ZeroAddress);
        require!(
            client.basis_points <= MAX_BASIS_POINTS && referrer.basis_points <= MAX_BASIS_POINTS,
            ErrorCode::InvalidBasisPoints
        );
        require!(
            client.basis_points as u32 + referrer.basis_points as u32 <= MAX_BASIS_POINTS as u32,
            ErrorCode::SharesExceedTotal
        );

        require!(client.address != self.service, ErrorCode::DuplicateRecipient);

        // Referrer is all-or-nothing
        require!(
            referrer.is_set() == (referrer.basis_points > 0),
            ErrorCode::InvalidReferrer
        );
        if referrer.is_set() {
            require!(
                referrer.address != self.service && referrer.address != client.address,
                ErrorCode::DuplicateRecipient
            );
        }

        self.client = client;
        self.referrer = referrer;
        self.status = DistributorStatus::Initialized as u8;

        Ok(())
    }

    /// Commits a withdrawal of everything not already in flight
    ///
    /// `available` is the balance above the rent-exempt minimum. The returned
    /// split is marked pending before any lamports move, so a second call
    /// before `settle_withdrawal` finds nothing to withdraw.
    pub fn begin_withdrawal(&mut self, available: u64) -> Result<Withdrawal> {
        require!(self.is_initialized(), ErrorCode::NotInitialized);

        let withdrawable = available.saturating_sub(self.pending_withdrawal);
        require!(withdrawable > 0, ErrorCode::NothingToWithdraw);

        let withdrawal = split_amount(
            withdrawable,
            self.client.basis_points,
            self.referrer.basis_points,
        )?;

        self.pending_withdrawal = self
            .pending_withdrawal
            .checked_add(withdrawable)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(withdrawal)
    }

    /// Releases the pending marker once the transfers have been made
    pub fn settle_withdrawal(&mut self, withdrawal: &Withdrawal) -> Result<()> {
        let total = withdrawal.total().ok_or(ErrorCode::MathOverflow)?;
        self.pending_withdrawal = self
            .pending_withdrawal
            .checked_sub(total)
            .ok_or(ErrorCode::MathUnderflow)?;
        Ok(())
    }
}

/// Single commitment root attested by the oracle
#[account(zero_copy(unsafe))]
#[repr(C)]
#[derive(Default)]
pub struct CommitmentOracle {
    /// Current Merkle root (all zeroes until the first report)
    pub root: [u8; 32],
    /// Number of reports received
    pub report_count: u64,
    /// Bump seed for PDA derivation
    pub bump: u8,
    pub _padding: [u8; 7],
}

// Compile-time size assertions to catch accidental struct changes
// Sizes exclude the 8-byte discriminator added by Anchor (see constants.rs)
const _: () = assert!(std::mem::size_of::<FactoryConfig>() == 132);
const _: () = assert!(std::mem::size_of::<FeeDistributor>() == 200);
const _: () = assert!(std::mem::size_of::<CommitmentOracle>() == 48);
