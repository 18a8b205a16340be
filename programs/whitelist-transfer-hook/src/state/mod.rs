pub mod transfer_policy;
pub mod whitelist_state;

pub use transfer_policy::*;
pub use whitelist_state::*;
