use anchor_lang::prelude::*;

use crate::{
    constants::WHITELIST_STATE_SEED, events::WhitelistStateInitialized, state::WhitelistState,
};

/// Create the whitelist registry with an empty allowed set.
/// The authority signer becomes the admin.
#[derive(Accounts)]
pub struct InitializeWhitelistState<'info> {
    /// Pays for account creation
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Installed as the whitelist admin; must sign so the admin identity
    /// cannot be assigned to a third party
    pub authority: Signer<'info>,

    /// The `WhitelistState` account being created
    /// # PDA Seeds
    /// - `WHITELIST_STATE_SEED`
    #[account(
        init,
        payer = payer,
        space = 8 + WhitelistState::INIT_SPACE,
        seeds = [WHITELIST_STATE_SEED],
        bump
    )]
    pub whitelist_state: Account<'info, WhitelistState>,

    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeWhitelistState<'info> {
    /// Initialize the registry with the authority as admin and no members
    /// # Arguments
    /// * `bumps` - Bumps for PDA derivation
    /// # Returns
    /// * `Result<()>` - Ok if the registry is successfully created, Err otherwise
    pub fn initialize_whitelist_state(
        &mut self,
        bumps: &InitializeWhitelistStateBumps,
    ) -> Result<()> {
        self.whitelist_state.set_inner(WhitelistState {
            admin: self.authority.key(),
            allowed_addresses: Vec::new(),
            bump: bumps.whitelist_state,
        });

        emit!(WhitelistStateInitialized {
            admin: self.authority.key(),
        });

        Ok(())
    }
}
