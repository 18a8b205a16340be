use anchor_lang::prelude::*;

#[error_code]
pub enum WhitelistError {
    #[msg("Account has already been initialized")]
    AlreadyInitialized,
    #[msg("Not authorized to manage the whitelist")]
    Unauthorized,
    #[msg("Whitelist state account is not the canonical registry")]
    InvalidRegistryAccount,
    #[msg("Address not whitelisted")]
    NotWhitelisted,
    #[msg("Whitelist is at capacity")]
    CapacityExceeded,
    #[msg("This instruction can only run inside a token transfer")]
    NotTransferring,
}
