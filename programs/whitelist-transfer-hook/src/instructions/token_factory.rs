use anchor_lang::{
    prelude::*,
    solana_program::{program::invoke, system_instruction},
};
use anchor_spl::token_interface::TokenInterface;
use spl_token_2022::{
    extension::{self, ExtensionType},
    instruction::initialize_mint2,
    pod::PodMint,
};

use crate::events::HookMintCreated;

/// Create a Token-2022 mint whose TransferHook extension points at this
/// program. Every later transfer of the mint routes through the hook.
#[derive(Accounts)]
pub struct CreateMint<'info> {
    /// Funds the mint account and becomes its mint authority
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The new mint account, initialized manually with the TransferHook
    /// extension before the base mint
    #[account(mut)]
    pub mint: Signer<'info>,

    /// The system program
    pub system_program: Program<'info, System>,

    /// The token program (Token-2022)
    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> CreateMint<'info> {
    /// Initialize the mint with its transfer hook bound to this program
    /// # Arguments
    /// * `decimals` - The number of decimals for the new mint
    /// # Returns
    /// * `Result<()>` - Ok if the mint is successfully initialized, Err otherwise
    pub fn create_mint(&mut self, decimals: u8) -> Result<()> {
        let extension_types = [ExtensionType::TransferHook];
        let space = ExtensionType::try_calculate_account_len::<PodMint>(&extension_types)?;
        let rent = Rent::get()?;

        // Allocate space
        invoke(
            &system_instruction::allocate(&self.mint.key(), space as u64),
            &[self.mint.to_account_info()],
        )?;

        // Transfer minimum balance
        invoke(
            &system_instruction::transfer(
                &self.payer.key(),
                &self.mint.key(),
                rent.minimum_balance(space)
                    .saturating_sub(self.mint.lamports()),
            ),
            &[
                self.payer.to_account_info(),
                self.mint.to_account_info(),
                self.system_program.to_account_info(),
            ],
        )?;

        // Assign the mint account to the token program
        invoke(
            &system_instruction::assign(&self.mint.key(), &self.token_program.key()),
            &[
                self.mint.to_account_info(),
                self.system_program.to_account_info(),
            ],
        )?;

        // The extension must be written before the mint itself
        let init_transfer_hook_ix = extension::transfer_hook::instruction::initialize(
            &self.token_program.key(),
            &self.mint.key(),
            Some(self.payer.key()),
            Some(crate::ID),
        )?;
        invoke(&init_transfer_hook_ix, &[self.mint.to_account_info()])?;

        // Initialize Mint
        let init_mint_ix = initialize_mint2(
            &self.token_program.key(),
            &self.mint.key(),
            &self.payer.key(),
            None,
            decimals,
        )?;
        invoke(&init_mint_ix, &[self.mint.to_account_info()])?;

        emit!(HookMintCreated {
            mint: self.mint.key(),
        });

        Ok(())
    }
}
