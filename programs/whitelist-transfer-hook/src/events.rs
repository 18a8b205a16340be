use anchor_lang::prelude::*;

/// Event emitted when the whitelist registry is created
/// Fields:
/// - admin: The public key of the identity installed as whitelist admin
#[event]
pub struct WhitelistStateInitialized {
    pub admin: Pubkey,
}

/// Event emitted when a user is added to the whitelist
/// Fields:
/// - user: The public key of the user being added to the whitelist
/// - added_by: The public key of the admin who added the user to the whitelist
#[event]
pub struct UserAddedToWhitelist {
    pub user: Pubkey,
    pub added_by: Pubkey,
}

/// Event emitted when a user is removed from the whitelist
/// Fields:
/// - user: The public key of the user being removed from the whitelist
/// - removed_by: The public key of the admin who removed the user from the whitelist
#[event]
pub struct UserRemovedFromWhitelist {
    pub user: Pubkey,
    pub removed_by: Pubkey,
}

/// Event emitted when a mint is created with its transfer hook bound to this program
/// Fields:
/// - mint: The public key of the new mint
#[event]
pub struct HookMintCreated {
    pub mint: Pubkey,
}

/// Event emitted when the extra account meta list for a mint is written
/// Fields:
/// - mint: The public key of the mint the list belongs to
#[event]
pub struct ExtraAccountMetasInitialized {
    pub mint: Pubkey,
}
