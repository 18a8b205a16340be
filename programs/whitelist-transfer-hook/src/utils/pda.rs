use anchor_lang::prelude::*;

use crate::constants::{EXTRA_ACCOUNT_METAS_SEED, WHITELIST_STATE_SEED};

/// Derive the canonical address of the whitelist registry
/// # Returns
/// * `(Pubkey, u8)` - The registry address and its bump
#[inline(always)]
pub fn whitelist_state_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[WHITELIST_STATE_SEED], &crate::ID)
}

/// Derive the canonical address of the extra account meta list for a mint
/// # Arguments
/// * `mint` - The mint the list belongs to
/// # Returns
/// * `(Pubkey, u8)` - The list address and its bump
#[inline(always)]
pub fn extra_account_meta_list_address(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[EXTRA_ACCOUNT_METAS_SEED, mint.as_ref()], &crate::ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_address_is_deterministic() {
        assert_eq!(whitelist_state_address(), whitelist_state_address());
    }

    #[test]
    fn test_registry_address_uses_fixed_seed() {
        // The derivation is part of the on-chain interface; clients compute
        // it from this exact literal
        let (expected, _) = Pubkey::find_program_address(&[b"whitelist-state"], &crate::ID);
        assert_eq!(whitelist_state_address().0, expected);
    }

    #[test]
    fn test_meta_list_address_uses_fixed_seed_prefix() {
        let mint = Pubkey::new_unique();
        let (expected, _) =
            Pubkey::find_program_address(&[b"extra-account-metas", mint.as_ref()], &crate::ID);
        assert_eq!(extra_account_meta_list_address(&mint).0, expected);
    }

    #[test]
    fn test_meta_list_address_is_per_mint() {
        let mint_a = Pubkey::new_unique();
        let mint_b = Pubkey::new_unique();

        assert_ne!(
            extra_account_meta_list_address(&mint_a).0,
            extra_account_meta_list_address(&mint_b).0
        );
        assert_eq!(
            extra_account_meta_list_address(&mint_a),
            extra_account_meta_list_address(&mint_a)
        );
    }

    #[test]
    fn test_registry_and_meta_list_addresses_differ() {
        let mint = Pubkey::new_unique();
        assert_ne!(
            whitelist_state_address().0,
            extra_account_meta_list_address(&mint).0
        );
    }
}
