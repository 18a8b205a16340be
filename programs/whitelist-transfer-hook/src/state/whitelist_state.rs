use anchor_lang::prelude::*;

use crate::{constants::MAX_WHITELISTED_ADDRESSES, errors::WhitelistError};

/// Whitelist registry account - the single source of truth for which
/// addresses may take part in transfers of hooked mints.
///
/// Exactly one instance exists per deployment, at the PDA derived from
/// `WHITELIST_STATE_SEED`. Only `admin` may mutate the set.
#[account]
#[derive(InitSpace)]
pub struct WhitelistState {
    // The only identity allowed to add or remove addresses
    // Set at creation and never changed
    pub admin: Pubkey,

    // The allowed addresses, in insertion order
    // Treated as a set: no duplicates, order carries no meaning
    #[max_len(MAX_WHITELISTED_ADDRESSES)]
    pub allowed_addresses: Vec<Pubkey>,

    // Bump used to derive the PDA for this account
    pub bump: u8,
}

impl WhitelistState {
    /// Insert an address into the whitelist.
    ///
    /// Returns `Ok(true)` if the address was inserted and `Ok(false)` if it
    /// was already present. Fails with `CapacityExceeded` when the set is
    /// full and the address is not yet a member.
    pub fn add_address(&mut self, address: Pubkey) -> Result<bool> {
        if self.allowed_addresses.contains(&address) {
            return Ok(false);
        }

        require!(
            self.allowed_addresses.len() < MAX_WHITELISTED_ADDRESSES,
            WhitelistError::CapacityExceeded
        );

        self.allowed_addresses.push(address);
        Ok(true)
    }

    /// Remove an address from the whitelist.
    ///
    /// Returns `true` if the address was present and removed, `false` if it
    /// was not a member. Removing an absent address is a no-op.
    pub fn remove_address(&mut self, address: &Pubkey) -> bool {
        if let Some(index) = self
            .allowed_addresses
            .iter()
            .position(|entry| entry == address)
        {
            self.allowed_addresses.remove(index);
            true
        } else {
            false
        }
    }

    /// Check whether an address is a member of the whitelist
    pub fn is_whitelisted(&self, address: &Pubkey) -> bool {
        self.allowed_addresses.contains(address)
    }

    /// Require that a key is the registry admin.
    ///
    /// Runs before every mutation; whitelist membership confers no
    /// authority here.
    pub fn check_admin(&self, key: &Pubkey) -> Result<()> {
        require_keys_eq!(self.admin, *key, WhitelistError::Unauthorized);

        Ok(())
    }
}
