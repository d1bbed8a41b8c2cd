//! Instruction builders for Mollusk tests
//!
//! NOTE: This is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! All imports from solana_sdk::*, not modular crates

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

/// Program ID - must match lib.rs
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("FnwLxkJbBa4R6CLfSPwgrprmMS27J267LVR8XJLtZfvt");

// Anchor discriminators (first 8 bytes of sha256("global:function_name"))
// These must match the IDL/program
pub const DISCRIMINATOR_INITIALIZE_FACTORY: [u8; 8] = [0xb3, 0x40, 0x4b, 0xfa, 0x27, 0xfe, 0xf0, 0xb2];
pub const DISCRIMINATOR_TRANSFER_FACTORY_OWNERSHIP: [u8; 8] = [0x86, 0x58, 0x97, 0xfa, 0x1e, 0xed, 0x3b, 0xb4];
pub const DISCRIMINATOR_ACCEPT_FACTORY_OWNERSHIP: [u8; 8] = [0x8b, 0xa0, 0x58, 0xf9, 0x85, 0xa6, 0xde, 0x09];
pub const DISCRIMINATOR_SET_OPERATOR: [u8; 8] = [0xee, 0x99, 0x65, 0xa9, 0xf3, 0x83, 0x24, 0x01];
pub const DISCRIMINATOR_SET_DEFAULT_CLIENT_BASIS_POINTS: [u8; 8] = [0x90, 0x80, 0x32, 0xc6, 0xfd, 0x04, 0x34, 0x62];
pub const DISCRIMINATOR_CREATE_REFERENCE_INSTANCE: [u8; 8] = [0x30, 0x40, 0x5a, 0x93, 0x1f, 0x95, 0x24, 0x2c];
pub const DISCRIMINATOR_SET_REFERENCE_INSTANCE: [u8; 8] = [0xd9, 0x11, 0xad, 0x99, 0xc1, 0x7e, 0x0d, 0xc9];
pub const DISCRIMINATOR_CREATE_FEE_DISTRIBUTOR: [u8; 8] = [0xbf, 0x4c, 0x88, 0x3e, 0xe9, 0xd2, 0x0e, 0xbe];
pub const DISCRIMINATOR_DEPOSIT: [u8; 8] = [0xf2, 0x23, 0xc6, 0x89, 0x52, 0xe1, 0xf2, 0xb6];
pub const DISCRIMINATOR_WITHDRAW: [u8; 8] = [0xb7, 0x12, 0x46, 0x9c, 0x94, 0x6d, 0xa1, 0x22];
pub const DISCRIMINATOR_RECOVER_TOKEN: [u8; 8] = [0x2b, 0xf9, 0x25, 0x35, 0x2e, 0x2c, 0xe9, 0x26];
pub const DISCRIMINATOR_VOLUNTARY_EXIT: [u8; 8] = [0x66, 0x4d, 0xe6, 0xe7, 0x9c, 0x61, 0x94, 0xc1];
pub const DISCRIMINATOR_INITIALIZE_ORACLE: [u8; 8] = [0x90, 0xdf, 0x83, 0x78, 0xc4, 0xfd, 0xb5, 0x63];
pub const DISCRIMINATOR_REPORT: [u8; 8] = [0x60, 0x79, 0xf5, 0x54, 0xb2, 0x2d, 0x30, 0x5b];
pub const DISCRIMINATOR_VERIFY: [u8; 8] = [0x85, 0xa1, 0x8d, 0x30, 0x78, 0xc6, 0x58, 0x96];

/// Fee recipient input for create_fee_distributor
#[derive(Clone, Copy, Debug, Default)]
pub struct FeeRecipientInput {
    pub address: Pubkey,
    pub basis_points: u16,
}

impl FeeRecipientInput {
    fn serialize_into(&self, data: &mut Vec<u8>) {
        data.extend_from_slice(&self.address.to_bytes());
        data.extend_from_slice(&self.basis_points.to_le_bytes());
    }
}

/// Validator bookkeeping for create_fee_distributor
#[derive(Clone, Copy, Debug, Default)]
pub struct ValidatorData {
    pub client_only_cl_rewards: u64,
    pub first_validator_id: u64,
    pub validator_count: u16,
}

/// Derive factory config PDA
pub fn derive_factory_config() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"factory_config"], &PROGRAM_ID)
}

/// Derive fee distributor PDA
pub fn derive_fee_distributor(template: &Pubkey, client: &Pubkey, referrer: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            b"fee_distributor",
            template.as_ref(),
            client.as_ref(),
            referrer.as_ref(),
        ],
        &PROGRAM_ID,
    )
}

/// Derive reference instance PDA (no client, no referrer)
pub fn derive_reference_instance(unique_id: &Pubkey) -> (Pubkey, u8) {
    derive_fee_distributor(unique_id, &Pubkey::default(), &Pubkey::default())
}

/// Derive commitment oracle PDA
pub fn derive_commitment_oracle() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"commitment_oracle"], &PROGRAM_ID)
}

/// Derive program data PDA for BPF upgradeable loader
pub fn derive_program_data() -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PROGRAM_ID.as_ref()],
        &solana_sdk::bpf_loader_upgradeable::id(),
    )
}

/// Build initialize_factory instruction
///
/// Accounts:
/// 0. factory_config (writable) - PDA to initialize
/// 1. owner (writable, signer) - Must be upgrade authority
/// 2. program_data - BPF loader program data
/// 3. system_program
pub fn build_initialize_factory(
    factory_config: Pubkey,
    owner: Pubkey,
    program_data: Pubkey,
    operator: Pubkey,
    default_client_basis_points: u16,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 32 + 2);
    data.extend_from_slice(&DISCRIMINATOR_INITIALIZE_FACTORY);
    data.extend_from_slice(&operator.to_bytes());
    data.extend_from_slice(&default_client_basis_points.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(factory_config, false),
            AccountMeta::new(owner, true),
            AccountMeta::new_readonly(program_data, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

/// Build transfer_factory_ownership instruction
///
/// Accounts:
/// 0. factory_config (writable)
/// 1. owner (signer)
pub fn build_transfer_factory_ownership(
    factory_config: Pubkey,
    owner: Pubkey,
    new_owner: Pubkey,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 32);
    data.extend_from_slice(&DISCRIMINATOR_TRANSFER_FACTORY_OWNERSHIP);
    data.extend_from_slice(&new_owner.to_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(factory_config, false),
            AccountMeta::new_readonly(owner, true),
        ],
        data,
    }
}

/// Build accept_factory_ownership instruction
///
/// Accounts:
/// 0. factory_config (writable)
/// 1. new_owner (signer)
pub fn build_accept_factory_ownership(factory_config: Pubkey, new_owner: Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(factory_config, false),
            AccountMeta::new_readonly(new_owner, true),
        ],
        data: DISCRIMINATOR_ACCEPT_FACTORY_OWNERSHIP.to_vec(),
    }
}

/// Build set_operator instruction
///
/// Accounts:
/// 0. factory_config (writable)
/// 1. owner (signer)
pub fn build_set_operator(factory_config: Pubkey, owner: Pubkey, new_operator: Pubkey) -> Instruction {
    let mut data = Vec::with_capacity(8 + 32);
    data.extend_from_slice(&DISCRIMINATOR_SET_OPERATOR);
    data.extend_from_slice(&new_operator.to_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(factory_config, false),
            AccountMeta::new_readonly(owner, true),
        ],
        data,
    }
}

/// Build set_default_client_basis_points instruction
///
/// Accounts:
/// 0. factory_config (writable)
/// 1. owner (signer)
pub fn build_set_default_client_basis_points(
    factory_config: Pubkey,
    owner: Pubkey,
    basis_points: u16,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 2);
    data.extend_from_slice(&DISCRIMINATOR_SET_DEFAULT_CLIENT_BASIS_POINTS);
    data.extend_from_slice(&basis_points.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(factory_config, false),
            AccountMeta::new_readonly(owner, true),
        ],
        data,
    }
}

/// Build create_reference_instance instruction
///
/// Accounts (matching CreateReferenceInstance context order):
/// 0. factory_config (readonly)
/// 1. reference_instance (writable) - init
/// 2. unique_id (readonly)
/// 3. service (writable) - probed
/// 4. owner (writable, signer)
/// 5. system_program
pub fn build_create_reference_instance(
    factory_config: Pubkey,
    reference_instance: Pubkey,
    unique_id: Pubkey,
    service: Pubkey,
    owner: Pubkey,
) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(factory_config, false),
            AccountMeta::new(reference_instance, false),
            AccountMeta::new_readonly(unique_id, false),
            AccountMeta::new(service, false),
            AccountMeta::new(owner, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: DISCRIMINATOR_CREATE_REFERENCE_INSTANCE.to_vec(),
    }
}

/// Build set_reference_instance instruction
///
/// Accounts:
/// 0. factory_config (writable)
/// 1. reference_instance (readonly)
/// 2. owner (signer)
pub fn build_set_reference_instance(
    factory_config: Pubkey,
    reference_instance: Pubkey,
    owner: Pubkey,
) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(factory_config, false),
            AccountMeta::new_readonly(reference_instance, false),
            AccountMeta::new_readonly(owner, true),
        ],
        data: DISCRIMINATOR_SET_REFERENCE_INSTANCE.to_vec(),
    }
}

/// Build create_fee_distributor instruction
///
/// Accounts (matching CreateFeeDistributor context order):
/// 0. factory_config (readonly)
/// 1. reference_instance (readonly)
/// 2. fee_distributor (writable) - init
/// 3. authority (writable, signer)
/// 4. system_program
/// remaining_accounts: client, then referrer when set (writable, probed)
pub fn build_create_fee_distributor(
    factory_config: Pubkey,
    reference_instance: Pubkey,
    fee_distributor: Pubkey,
    authority: Pubkey,
    client: FeeRecipientInput,
    referrer: FeeRecipientInput,
    validator_data: ValidatorData,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 34 + 34 + 18);
    data.extend_from_slice(&DISCRIMINATOR_CREATE_FEE_DISTRIBUTOR);
    client.serialize_into(&mut data);
    referrer.serialize_into(&mut data);
    data.extend_from_slice(&validator_data.client_only_cl_rewards.to_le_bytes());
    data.extend_from_slice(&validator_data.first_validator_id.to_le_bytes());
    data.extend_from_slice(&validator_data.validator_count.to_le_bytes());

    let mut accounts = vec![
        AccountMeta::new_readonly(factory_config, false),
        AccountMeta::new_readonly(reference_instance, false),
        AccountMeta::new(fee_distributor, false),
        AccountMeta::new(authority, true),
        AccountMeta::new_readonly(system_program::id(), false),
        AccountMeta::new(client.address, false),
    ];
    if referrer.address != Pubkey::default() {
        accounts.push(AccountMeta::new(referrer.address, false));
    }

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data,
    }
}

/// Build deposit instruction
///
/// Accounts:
/// 0. fee_distributor (writable)
/// 1. depositor (writable, signer)
/// 2. system_program
pub fn build_deposit(fee_distributor: Pubkey, depositor: Pubkey, amount: u64) -> Instruction {
    let mut data = Vec::with_capacity(8 + 8);
    data.extend_from_slice(&DISCRIMINATOR_DEPOSIT);
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(fee_distributor, false),
            AccountMeta::new(depositor, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

/// Build withdraw instruction
///
/// Accounts:
/// 0. fee_distributor (writable)
/// 1. client (writable)
/// 2. service (writable)
/// 3. executor (readonly, not a signer)
/// remaining_accounts: referrer (writable) when Some
pub fn build_withdraw(
    fee_distributor: Pubkey,
    client: Pubkey,
    service: Pubkey,
    executor: Pubkey,
    referrer: Option<Pubkey>,
) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(fee_distributor, false),
        AccountMeta::new(client, false),
        AccountMeta::new(service, false),
        AccountMeta::new_readonly(executor, false),
    ];
    if let Some(referrer) = referrer {
        accounts.push(AccountMeta::new(referrer, false));
    }

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data: DISCRIMINATOR_WITHDRAW.to_vec(),
    }
}

/// Build recover_token instruction
///
/// Accounts:
/// 0. factory_config (readonly)
/// 1. fee_distributor (readonly)
/// 2. mint (readonly)
/// 3. source (writable) - token account owned by fee_distributor
/// 4. destination (writable)
/// 5. owner (signer)
/// 6. token_program
pub fn build_recover_token(
    factory_config: Pubkey,
    fee_distributor: Pubkey,
    mint: Pubkey,
    source: Pubkey,
    destination: Pubkey,
    owner: Pubkey,
    amount: u64,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 8);
    data.extend_from_slice(&DISCRIMINATOR_RECOVER_TOKEN);
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(factory_config, false),
            AccountMeta::new_readonly(fee_distributor, false),
            AccountMeta::new_readonly(mint, false),
            AccountMeta::new(source, false),
            AccountMeta::new(destination, false),
            AccountMeta::new_readonly(owner, true),
            AccountMeta::new_readonly(spl_token::id(), false),
        ],
        data,
    }
}

/// Build voluntary_exit instruction
///
/// Accounts:
/// 0. fee_distributor (readonly)
/// 1. client (signer)
pub fn build_voluntary_exit(
    fee_distributor: Pubkey,
    client: Pubkey,
    validator_ids: &[u64],
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 4 + validator_ids.len() * 8);
    data.extend_from_slice(&DISCRIMINATOR_VOLUNTARY_EXIT);
    data.extend_from_slice(&(validator_ids.len() as u32).to_le_bytes());
    for id in validator_ids {
        data.extend_from_slice(&id.to_le_bytes());
    }

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(fee_distributor, false),
            AccountMeta::new_readonly(client, true),
        ],
        data,
    }
}

/// Build initialize_oracle instruction
///
/// Accounts:
/// 0. factory_config (readonly)
/// 1. oracle (writable) - init
/// 2. owner (writable, signer)
/// 3. system_program
pub fn build_initialize_oracle(factory_config: Pubkey, oracle: Pubkey, owner: Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(factory_config, false),
            AccountMeta::new(oracle, false),
            AccountMeta::new(owner, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: DISCRIMINATOR_INITIALIZE_ORACLE.to_vec(),
    }
}

/// Build report instruction
///
/// Accounts:
/// 0. factory_config (readonly)
/// 1. oracle (writable)
/// 2. reporter (signer)
pub fn build_report(
    factory_config: Pubkey,
    oracle: Pubkey,
    reporter: Pubkey,
    root: [u8; 32],
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 32);
    data.extend_from_slice(&DISCRIMINATOR_REPORT);
    data.extend_from_slice(&root);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(factory_config, false),
            AccountMeta::new(oracle, false),
            AccountMeta::new_readonly(reporter, true),
        ],
        data,
    }
}

/// Build verify instruction
///
/// Accounts:
/// 0. oracle (readonly)
pub fn build_verify(
    oracle: Pubkey,
    proof: &[[u8; 32]],
    fee_distributor: Pubkey,
    amount: u64,
) -> Instruction {
    let mut data = Vec::with_capacity(8 + 4 + proof.len() * 32 + 32 + 8);
    data.extend_from_slice(&DISCRIMINATOR_VERIFY);
    data.extend_from_slice(&(proof.len() as u32).to_le_bytes());
    for node in proof {
        data.extend_from_slice(node);
    }
    data.extend_from_slice(&fee_distributor.to_bytes());
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![AccountMeta::new_readonly(oracle, false)],
        data,
    }
}
