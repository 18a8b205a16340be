pub mod initialize_extra_account_meta_list;
pub mod initialize_whitelist_state;
pub mod token_factory;
pub mod transfer_hook;
pub mod whitelist_operations;

pub use initialize_extra_account_meta_list::*;
pub use initialize_whitelist_state::*;
pub use token_factory::*;
pub use transfer_hook::*;
pub use whitelist_operations::*;
