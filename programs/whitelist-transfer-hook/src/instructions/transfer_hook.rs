use std::cell::RefMut;

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount};
use spl_token_2022::{
    extension::{
        transfer_hook::TransferHookAccount, BaseStateWithExtensionsMut, PodStateWithExtensionsMut,
    },
    pod::PodAccount,
};

use crate::{
    constants::{EXTRA_ACCOUNT_METAS_SEED, TRANSFER_POLICY},
    errors::WhitelistError,
    state::WhitelistState,
    utils::whitelist_state_address,
};

/// Accounts the token program passes when it invokes the hook, in the
/// order fixed by the execute interface. The first four come from the
/// transfer itself; the rest are resolved from the extra account meta list.
#[derive(Accounts)]
pub struct TransferHook<'info> {
    /// The token account being debited
    #[account(
        token::mint = mint,
        token::authority = owner,
    )]
    pub source_token: InterfaceAccount<'info, TokenAccount>,

    /// The mint being transferred
    pub mint: InterfaceAccount<'info, Mint>,

    /// The token account being credited
    #[account(
        token::mint = mint,
    )]
    pub destination_token: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: source token account owner; may be a wallet or a PDA owned
    /// by another program
    pub owner: UncheckedAccount<'info>,

    /// CHECK: Seeds constraint validates the PDA address.
    #[account(
        seeds = [EXTRA_ACCOUNT_METAS_SEED, mint.key().as_ref()],
        bump
    )]
    pub extra_account_meta_list: UncheckedAccount<'info>,

    /// CHECK: Resolved against the canonical registry address and decoded
    /// in the handler, so a substituted account cannot pass.
    pub whitelist_state: UncheckedAccount<'info>,
}

impl<'info> TransferHook<'info> {
    /// Gate one transfer on the whitelist.
    ///
    /// Runs inside the token program's transfer; returning an error aborts
    /// the whole transfer. Mutates nothing, so a retried transfer simply
    /// runs the same checks again.
    /// # Arguments
    /// * `amount` - The transfer amount, in base units
    /// # Returns
    /// * `Result<()>` - Ok to let the transfer settle, Err to abort it
    pub fn transfer_hook(&self, amount: u64) -> Result<()> {
        self.check_is_transferring()?;

        let whitelist_state = self.resolve_whitelist_state()?;

        // Parties are beneficial owners: the source authority and the
        // destination token account's owner
        let sender = self.owner.key();
        let recipient = self.destination_token.owner;

        require!(
            TRANSFER_POLICY.allows(
                whitelist_state.is_whitelisted(&sender),
                whitelist_state.is_whitelisted(&recipient),
            ),
            WhitelistError::NotWhitelisted
        );

        msg!("transfer of {} allowed: {} -> {}", amount, sender, recipient);

        Ok(())
    }

    /// Check the passed registry account against the canonical PDA and
    /// decode it. Address, owner, and discriminator all have to match.
    fn resolve_whitelist_state(&self) -> Result<WhitelistState> {
        let (canonical, _) = whitelist_state_address();
        require_keys_eq!(
            self.whitelist_state.key(),
            canonical,
            WhitelistError::InvalidRegistryAccount
        );
        require_keys_eq!(
            *self.whitelist_state.owner,
            crate::ID,
            WhitelistError::InvalidRegistryAccount
        );

        let data = self.whitelist_state.try_borrow_data()?;
        WhitelistState::try_deserialize(&mut &data[..])
    }

    /// The token program flags the source account while a transfer is in
    /// flight. Without the flag this instruction was invoked directly, not
    /// as a hook, and must not pass.
    fn check_is_transferring(&self) -> Result<()> {
        let source_token_info = self.source_token.to_account_info();
        let mut account_data_ref: RefMut<&mut [u8]> = source_token_info.try_borrow_mut_data()?;

        let mut account = PodStateWithExtensionsMut::<PodAccount>::unpack(*account_data_ref)?;
        let extension = account.get_extension_mut::<TransferHookAccount>()?;

        require!(
            bool::from(extension.transferring),
            WhitelistError::NotTransferring
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialized_registry(admin: Pubkey, members: &[Pubkey]) -> Vec<u8> {
        let state = WhitelistState {
            admin,
            allowed_addresses: members.to_vec(),
            bump: 254,
        };
        let mut data = Vec::new();
        state.try_serialize(&mut data).unwrap();
        data
    }

    #[test]
    fn test_registry_decode_round_trips() {
        let admin = Pubkey::new_unique();
        let member = Pubkey::new_unique();
        let data = serialized_registry(admin, &[member]);

        let decoded = WhitelistState::try_deserialize(&mut &data[..]).unwrap();
        assert_eq!(decoded.admin, admin);
        assert!(decoded.is_whitelisted(&member));
        assert!(!decoded.is_whitelisted(&Pubkey::new_unique()));
    }

    #[test]
    fn test_registry_decode_rejects_foreign_discriminator() {
        // An account owned by this program but holding a different account
        // type must not pass for the registry
        let mut data = serialized_registry(Pubkey::new_unique(), &[]);
        data[0] ^= 0xff;

        assert!(WhitelistState::try_deserialize(&mut &data[..]).is_err());
    }

    #[test]
    fn test_registry_decode_rejects_empty_account() {
        let mut data: &[u8] = &[];
        assert!(WhitelistState::try_deserialize(&mut data).is_err());
    }
}
