use anchor_lang::prelude::*;

#[event]
pub struct FactoryInitialized {
    pub factory: Pubkey,
    pub owner: Pubkey,
    pub operator: Pubkey,
    pub default_client_basis_points: u16,
    pub timestamp: i64,
}

#[event]
pub struct FactoryOwnershipTransferProposed {
    pub owner: Pubkey,
    pub pending_owner: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct FactoryOwnershipTransferAccepted {
    pub old_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct OperatorUpdated {
    pub owner: Pubkey,
    pub old_operator: Pubkey,
    pub new_operator: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct DefaultClientBasisPointsUpdated {
    pub owner: Pubkey,
    pub old_basis_points: u16,
    pub new_basis_points: u16,
    pub timestamp: i64,
}

#[event]
pub struct ReferenceInstanceCreated {
    pub reference_instance: Pubkey,
    pub factory: Pubkey,
    pub service: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ReferenceInstanceSet {
    pub factory: Pubkey,
    pub old_reference_instance: Pubkey,
    pub new_reference_instance: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct FeeDistributorCreated {
    pub fee_distributor: Pubkey,
    pub client: Pubkey,
    pub reference_instance: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct FeeDistributorInitialized {
    pub fee_distributor: Pubkey,
    pub client: Pubkey,
    pub client_basis_points: u16,
    pub referrer: Pubkey,
    pub referrer_basis_points: u16,
    pub timestamp: i64,
}

#[event]
pub struct Deposited {
    pub fee_distributor: Pubkey,
    pub depositor: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct Withdrawn {
    pub fee_distributor: Pubkey,
    pub client_amount: u64,
    pub service_amount: u64,
    pub referrer_amount: u64,
    pub executor: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct TokenRecovered {
    pub fee_distributor: Pubkey,
    pub mint: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct VoluntaryExitRequested {
    pub fee_distributor: Pubkey,
    pub client: Pubkey,
    pub validator_ids: Vec<u64>,
    pub timestamp: i64,
}

#[event]
pub struct OracleInitialized {
    pub oracle: Pubkey,
    pub owner: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct RootReported {
    pub oracle: Pubkey,
    pub reporter: Pubkey,
    pub root: [u8; 32],
    pub report_count: u64,
    pub timestamp: i64,
}
