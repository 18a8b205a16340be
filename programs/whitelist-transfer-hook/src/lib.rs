#![allow(unexpected_cfgs)]
#![allow(deprecated)]

use anchor_lang::prelude::*;

mod constants;
mod errors;
mod events;
mod instructions;
pub mod security;
mod state;
mod utils;

use instructions::*;

use spl_discriminator::SplDiscriminate;
use spl_transfer_hook_interface::instruction::ExecuteInstruction;

declare_id!("BpvNmk6XPJ3nYN3EBDpAVwfFZ4BPCvDzEwDkNXTSBSNi");

#[program]
pub mod whitelist_transfer_hook {
    use super::*;

    /// Create the whitelist registry at its canonical address
    ///
    /// The authority signer becomes the admin; the allowed set starts empty.
    /// There is exactly one registry per deployment, so a second call fails
    /// on the existing account.
    pub fn initialize_whitelist_state(ctx: Context<InitializeWhitelistState>) -> Result<()> {
        ctx.accounts.initialize_whitelist_state(&ctx.bumps)
    }

    /// Add an address to the whitelist
    /// Signer must be the registry admin
    pub fn add_to_whitelist(ctx: Context<ManageWhitelist>, address: Pubkey) -> Result<()> {
        ctx.accounts.add_to_whitelist(address)
    }

    /// Remove an address from the whitelist
    /// Signer must be the registry admin
    pub fn remove_from_whitelist(ctx: Context<ManageWhitelist>, address: Pubkey) -> Result<()> {
        ctx.accounts.remove_from_whitelist(address)
    }

    /// Create a Token-2022 mint with its transfer hook bound to this program
    ///
    /// The payer becomes the mint authority; no freeze authority is set.
    pub fn create_mint(ctx: Context<CreateMint>, decimals: u8) -> Result<()> {
        ctx.accounts.create_mint(decimals)
    }

    /// Write the extra account metas for a mint
    ///
    /// Registers the whitelist registry as the account the token program
    /// attaches to every transfer of the mint. One list per mint; a second
    /// call fails with `AlreadyInitialized`.
    pub fn initialize_extra_account_meta_list(
        ctx: Context<InitializeExtraAccountMetaList>,
    ) -> Result<()> {
        ctx.accounts.initialize_extra_account_meta_list(&ctx.bumps)
    }

    /// Gate a transfer of a hooked mint on the whitelist
    ///
    /// Invoked by the token program during every transfer, never directly
    /// by clients. Returns an error to abort the transfer.
    #[instruction(discriminator = ExecuteInstruction::SPL_DISCRIMINATOR_SLICE)]
    pub fn transfer_hook(ctx: Context<TransferHook>, amount: u64) -> Result<()> {
        ctx.accounts.transfer_hook(amount)
    }
}
