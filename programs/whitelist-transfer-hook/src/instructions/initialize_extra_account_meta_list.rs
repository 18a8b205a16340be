use anchor_lang::{
    prelude::*,
    system_program::{
        allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
    },
};
use anchor_spl::token_interface::Mint;
use spl_tlv_account_resolution::{
    account::ExtraAccountMeta, seeds::Seed, state::ExtraAccountMetaList,
};
use spl_transfer_hook_interface::instruction::ExecuteInstruction;

use crate::{
    constants::{EXTRA_ACCOUNT_METAS_SEED, WHITELIST_STATE_SEED},
    errors::WhitelistError,
    events::ExtraAccountMetasInitialized,
};

/// Create and write the extra account meta list for a mint.
///
/// The token program reads this list to learn which additional accounts to
/// attach when it invokes the hook; here that is the whitelist registry.
/// The list is written once and never mutated.
#[derive(Accounts)]
pub struct InitializeExtraAccountMetaList<'info> {
    /// Pays for account creation
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The list account, created in the handler at its canonical PDA
    /// # PDA Seeds
    /// - `EXTRA_ACCOUNT_METAS_SEED`
    /// - The mint's address
    ///
    /// CHECK: Seeds constraint validates the PDA address; the handler
    /// creates and initializes it.
    #[account(
        mut,
        seeds = [EXTRA_ACCOUNT_METAS_SEED, mint.key().as_ref()],
        bump
    )]
    pub extra_account_meta_list: AccountInfo<'info>,

    /// The mint the list belongs to
    pub mint: InterfaceAccount<'info, Mint>,

    /// The whitelist registry the list will point transfers at
    /// # PDA Seeds
    /// - `WHITELIST_STATE_SEED`
    ///
    /// CHECK: Seeds constraint validates the PDA address; the registry does
    /// not need to exist yet.
    #[account(
        seeds = [WHITELIST_STATE_SEED],
        bump
    )]
    pub whitelist_state: UncheckedAccount<'info>,

    /// The system program
    pub system_program: Program<'info, System>,
}

/// A list account counts as created once it holds data. Lamports alone do
/// not claim the address, so a stray transfer to the PDA cannot block
/// initialization.
fn list_is_initialized(list: &AccountInfo) -> bool {
    !list.data_is_empty()
}

impl<'info> InitializeExtraAccountMetaList<'info> {
    /// The fixed account metas resolved for every transfer of the mint:
    /// the whitelist registry, read-only and unsigned. The hook only ever
    /// reads it.
    pub fn extra_account_metas() -> Result<Vec<ExtraAccountMeta>> {
        Ok(vec![ExtraAccountMeta::new_with_seeds(
            &[Seed::Literal {
                bytes: WHITELIST_STATE_SEED.to_vec(),
            }],
            false, // is_signer
            false, // is_writable
        )?])
    }

    /// Create the list account and write the metas
    /// # Arguments
    /// * `bumps` - Bumps for PDA derivation
    /// # Returns
    /// * `Result<()>` - Ok if the list is successfully created, Err otherwise
    pub fn initialize_extra_account_meta_list(
        &mut self,
        bumps: &InitializeExtraAccountMetaListBumps,
    ) -> Result<()> {
        require!(
            !list_is_initialized(&self.extra_account_meta_list),
            WhitelistError::AlreadyInitialized
        );

        let account_metas = Self::extra_account_metas()?;
        let account_size = ExtraAccountMetaList::size_of(account_metas.len())? as u64;
        let required_lamports = Rent::get()?.minimum_balance(account_size as usize);

        let mint = self.mint.key();
        let signer_seeds: &[&[&[u8]]] = &[&[
            EXTRA_ACCOUNT_METAS_SEED,
            mint.as_ref(),
            &[bumps.extra_account_meta_list],
        ]];

        if self.extra_account_meta_list.lamports() == 0 {
            create_account(
                CpiContext::new(
                    self.system_program.to_account_info(),
                    CreateAccount {
                        from: self.payer.to_account_info(),
                        to: self.extra_account_meta_list.to_account_info(),
                    },
                )
                .with_signer(signer_seeds),
                required_lamports,
                account_size,
                &crate::ID,
            )?;
        } else {
            // Funded before creation; top the balance up if short, then
            // claim the account in place
            let top_up =
                required_lamports.saturating_sub(self.extra_account_meta_list.lamports());
            if top_up > 0 {
                transfer(
                    CpiContext::new(
                        self.system_program.to_account_info(),
                        Transfer {
                            from: self.payer.to_account_info(),
                            to: self.extra_account_meta_list.to_account_info(),
                        },
                    ),
                    top_up,
                )?;
            }

            allocate(
                CpiContext::new(
                    self.system_program.to_account_info(),
                    Allocate {
                        account_to_allocate: self.extra_account_meta_list.to_account_info(),
                    },
                )
                .with_signer(signer_seeds),
                account_size,
            )?;

            assign(
                CpiContext::new(
                    self.system_program.to_account_info(),
                    Assign {
                        account_to_assign: self.extra_account_meta_list.to_account_info(),
                    },
                )
                .with_signer(signer_seeds),
                &crate::ID,
            )?;
        }

        ExtraAccountMetaList::init::<ExecuteInstruction>(
            &mut self.extra_account_meta_list.try_borrow_mut_data()?,
            &account_metas,
        )?;

        emit!(ExtraAccountMetasInitialized { mint });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_list_references_only_the_registry() {
        let metas = InitializeExtraAccountMetaList::extra_account_metas().unwrap();

        assert_eq!(metas.len(), 1);

        let registry_meta = &metas[0];
        assert!(!bool::from(registry_meta.is_signer));
        assert!(!bool::from(registry_meta.is_writable));
    }

    #[test]
    fn test_meta_list_is_deterministic() {
        // The descriptor is a pure function of the program, so re-deriving
        // it always yields the same bytes
        assert_eq!(
            InitializeExtraAccountMetaList::extra_account_metas().unwrap(),
            InitializeExtraAccountMetaList::extra_account_metas().unwrap()
        );
    }

    #[test]
    fn test_metas_fit_the_sized_account() {
        // `size_of` and `init` must agree, otherwise the on-chain write
        // would overrun the account we allocate
        let metas = InitializeExtraAccountMetaList::extra_account_metas().unwrap();
        let account_size = ExtraAccountMetaList::size_of(metas.len()).unwrap();

        let mut data = vec![0u8; account_size];
        ExtraAccountMetaList::init::<ExecuteInstruction>(&mut data, &metas).unwrap();
    }

    #[test]
    fn test_untouched_list_is_not_initialized() {
        let key = Pubkey::new_unique();
        let owner = System::id();
        let mut lamports = 0u64;
        let mut data: Vec<u8> = Vec::new();
        let list = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        assert!(!list_is_initialized(&list));
    }

    #[test]
    fn test_donated_lamports_do_not_claim_the_list() {
        // A transfer landing on the derived address before creation must
        // not read as an existing list
        let key = Pubkey::new_unique();
        let owner = System::id();
        let mut lamports = 1u64;
        let mut data: Vec<u8> = Vec::new();
        let list = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &owner, false, 0);

        assert!(!list_is_initialized(&list));
    }

    #[test]
    fn test_written_list_is_initialized() {
        let metas = InitializeExtraAccountMetaList::extra_account_metas().unwrap();
        let mut data = vec![0u8; ExtraAccountMetaList::size_of(metas.len()).unwrap()];
        ExtraAccountMetaList::init::<ExecuteInstruction>(&mut data, &metas).unwrap();

        let key = Pubkey::new_unique();
        let mut lamports = 1_000_000u64;
        let list =
            AccountInfo::new(&key, false, true, &mut lamports, &mut data, &crate::ID, false, 0);

        assert!(list_is_initialized(&list));
    }
}
