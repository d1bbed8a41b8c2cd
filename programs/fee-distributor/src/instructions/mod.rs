#![allow(ambiguous_glob_reexports)]

pub mod accept_factory_ownership;
pub mod create_fee_distributor;
pub mod create_reference_instance;
pub mod deposit;
pub mod initialize_factory;
pub mod initialize_oracle;
pub mod recover_token;
pub mod report;
pub mod set_default_client_basis_points;
pub mod set_operator;
pub mod set_reference_instance;
pub mod transfer_factory_ownership;
pub mod verify;
pub mod voluntary_exit;
pub mod withdraw;

pub use accept_factory_ownership::*;
pub use create_fee_distributor::*;
pub use create_reference_instance::*;
pub use deposit::*;
pub use initialize_factory::*;
pub use initialize_oracle::*;
pub use recover_token::*;
pub use report::*;
pub use set_default_client_basis_points::*;
pub use set_operator::*;
pub use set_reference_instance::*;
pub use transfer_factory_ownership::*;
pub use verify::*;
pub use voluntary_exit::*;
pub use withdraw::*;
