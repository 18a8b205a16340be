use crate::state::TransferPolicy;

// PDA SEEDS

/// Seed for the WhitelistState registry PDA
pub const WHITELIST_STATE_SEED: &[u8] = b"whitelist-state";
/// Seed prefix for the per-mint ExtraAccountMetaList PDA
/// The mint address is appended as the second seed
pub const EXTRA_ACCOUNT_METAS_SEED: &[u8] = b"extra-account-metas";

/// Maximum number of addresses the whitelist registry can hold
/// The registry account is allocated at this capacity once and never resized
pub const MAX_WHITELISTED_ADDRESSES: usize = 50;

/// Which transfer parties must be whitelisted for a transfer to go through.
/// With `SenderAndRecipient` both the sending owner and the receiving owner
/// must be present in the registry before the token program will let a
/// transfer settle.
pub const TRANSFER_POLICY: TransferPolicy = TransferPolicy::SenderAndRecipient;
