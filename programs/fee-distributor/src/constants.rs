// Basis points
pub const MAX_BASIS_POINTS: u16 = 10_000;     // 100%

// PDA seeds
pub const FACTORY_CONFIG_SEED: &[u8] = b"factory_config";
pub const FEE_DISTRIBUTOR_SEED: &[u8] = b"fee_distributor";
pub const COMMITMENT_ORACLE_SEED: &[u8] = b"commitment_oracle";

// Limits
pub const MAX_PROOF_LENGTH: usize = 32;       // Enough for 2^32 leaves
pub const MAX_EXIT_VALIDATORS: usize = 64;

// Layout version written into every new FeeDistributor
pub const FEE_DISTRIBUTOR_VERSION: u8 = 1;

// Account sizes for zero-copy structs (8-byte discriminator included)

// FactoryConfig: discriminator (8) + owner (32) + pending_owner (32) + operator (32)
// + reference_instance (32) + default_client_basis_points (2) + bump (1) + padding (1)
pub const FACTORY_CONFIG_SIZE: usize = 8 + 32 + 32 + 32 + 32 + 2 + 1 + 1;  // 140 bytes

// FeeDistributor size calculation:
// - discriminator: 8
// - pending_withdrawal: 8
// - client_only_cl_rewards: 8
// - first_validator_id: 8
// - factory: 32
// - template: 32
// - service: 32
// - client: FeeRecipient = 32 + 2 = 34
// - referrer: FeeRecipient = 34
// - validator_count: 2
// - version: 1
// - status: 1
// - bump: 1
// - reserved: 7
// Total: 8 + 8 + 8 + 8 + 32 + 32 + 32 + 34 + 34 + 2 + 1 + 1 + 1 + 7 = 208
pub const FEE_DISTRIBUTOR_SIZE: usize = 208;

// CommitmentOracle: discriminator (8) + root (32) + report_count (8) + bump (1) + padding (7)
pub const COMMITMENT_ORACLE_SIZE: usize = 8 + 32 + 8 + 1 + 7;  // 56 bytes
