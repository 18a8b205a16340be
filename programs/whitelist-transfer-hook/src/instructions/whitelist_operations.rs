use anchor_lang::prelude::*;

use crate::{
    constants::WHITELIST_STATE_SEED,
    events::{UserAddedToWhitelist, UserRemovedFromWhitelist},
    state::WhitelistState,
};

/// Add or remove an address on the whitelist registry.
/// The signer must be the registry admin.
#[derive(Accounts)]
pub struct ManageWhitelist<'info> {
    /// The whitelist admin
    pub admin: Signer<'info>,

    /// The `WhitelistState` account being modified
    /// # PDA Seeds
    /// - `WHITELIST_STATE_SEED`
    #[account(
        mut,
        seeds = [WHITELIST_STATE_SEED],
        bump = whitelist_state.bump,
    )]
    pub whitelist_state: Account<'info, WhitelistState>,
}

impl<'info> ManageWhitelist<'info> {
    /// Add an address to the whitelist
    ///
    /// Adding an address that is already whitelisted is a no-op.
    /// # Arguments
    /// * `address` - The public key of the address to add to the whitelist
    /// # Returns
    /// * `Result<()>` - Ok if the address is whitelisted afterwards, Err otherwise
    pub fn add_to_whitelist(&mut self, address: Pubkey) -> Result<()> {
        self.whitelist_state.check_admin(&self.admin.key())?;

        if self.whitelist_state.add_address(address)? {
            emit!(UserAddedToWhitelist {
                user: address,
                added_by: self.admin.key(),
            });
        }

        Ok(())
    }

    /// Remove an address from the whitelist
    ///
    /// Removing an address that is not whitelisted is a no-op.
    /// # Arguments
    /// * `address` - The public key of the address to remove from the whitelist
    /// # Returns
    /// * `Result<()>` - Ok if the address is absent afterwards, Err otherwise
    pub fn remove_from_whitelist(&mut self, address: Pubkey) -> Result<()> {
        self.whitelist_state.check_admin(&self.admin.key())?;

        if self.whitelist_state.remove_address(&address) {
            emit!(UserRemovedFromWhitelist {
                user: address,
                removed_by: self.admin.key(),
            });
        }

        Ok(())
    }
}
