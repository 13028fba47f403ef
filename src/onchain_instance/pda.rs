use solana_sdk::pubkey::Pubkey;

pub const POOL_SEED: &[u8] = b"pool";
pub const USER_SEED: &[u8] = b"user";

/// Pool PDA: seeds = ["pool"]
pub fn find_pool_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_SEED], program_id)
}

/// User account PDA: seeds = ["user", user]
pub fn find_user_account_address(user: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_SEED, user.as_ref()], program_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_pda_deterministic() {
        let (pool1, bump1) = find_pool_address(&crate::ID);
        let (pool2, bump2) = find_pool_address(&crate::ID);
        assert_eq!(pool1, pool2);
        assert_eq!(bump1, bump2);
    }

    #[test]
    fn test_pool_pda_differs_per_program() {
        let other_program = Pubkey::new_unique();
        let (pool, _) = find_pool_address(&crate::ID);
        let (other_pool, _) = find_pool_address(&other_program);
        assert_ne!(pool, other_pool);
    }

    #[test]
    fn test_user_pda_deterministic() {
        let user = Pubkey::new_unique();
        let (account1, bump1) = find_user_account_address(&user, &crate::ID);
        let (account2, bump2) = find_user_account_address(&user, &crate::ID);
        assert_eq!(account1, account2);
        assert_eq!(bump1, bump2);
    }

    #[test]
    fn test_user_pda_different_per_user() {
        let users: Vec<Pubkey> = (0..16).map(|_| Pubkey::new_unique()).collect();
        let mut accounts: Vec<Pubkey> = users
            .iter()
            .map(|user| find_user_account_address(user, &crate::ID).0)
            .collect();
        accounts.sort();
        accounts.dedup();
        assert_eq!(accounts.len(), users.len());
    }

    #[test]
    fn test_user_pda_differs_from_pool() {
        let (pool, _) = find_pool_address(&crate::ID);
        let (user_account, _) = find_user_account_address(&Pubkey::new_unique(), &crate::ID);
        assert_ne!(pool, user_account);
    }

    #[test]
    fn test_matches_manual_create_program_address() {
        let user = Pubkey::new_unique();
        let (account, bump) = find_user_account_address(&user, &crate::ID);
        let recreated = Pubkey::create_program_address(
            &[USER_SEED, user.as_ref(), &[bump]],
            &crate::ID,
        ).unwrap();
        assert_eq!(account, recreated);
    }
}
