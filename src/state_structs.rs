// --- On-chain account structs matching the airdrop program's Anchor definitions ---
use anchor_lang::prelude::*;
use serde::Serialize;

/// Global pool record, PDA seeds `["pool"]`.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct Pool {
    pub admin: Pubkey,
    pub airdrop_token_mint: Pubkey,
    pub pool_token_account: Pubkey,
    pub total_tokens: u64,
    pub airdrop_amount: u64,
    pub total_users: u64,
    pub bump: u8,
}

impl Pool {
    pub const LEN: usize = 32 + 32 + 32 + 8 + 8 + 8 + 1;
}

/// Per-user record, PDA seeds `["user", user]`.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct UserAccount {
    pub user: Pubkey,
    pub pool: Pubkey,
    pub airdrop_amount: u64,
    pub has_bet: bool,
    pub can_withdraw: bool,
    pub bump: u8,
}

impl UserAccount {
    pub const LEN: usize = 32 + 32 + 8 + 1 + 1 + 1;
}

// --- Display views ---

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInfo {
    pub address: String,
    pub admin: String,
    pub airdrop_token_mint: String,
    pub pool_token_account: String,
    pub total_tokens: u64,
    pub airdrop_amount: u64,
    pub total_users: u64,
}

impl From<(Pubkey, Pool)> for PoolInfo {
    fn from((address, pool): (Pubkey, Pool)) -> Self {
        PoolInfo {
            address: address.to_string(),
            admin: pool.admin.to_string(),
            airdrop_token_mint: pool.airdrop_token_mint.to_string(),
            pool_token_account: pool.pool_token_account.to_string(),
            total_tokens: pool.total_tokens,
            airdrop_amount: pool.airdrop_amount,
            total_users: pool.total_users,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccountInfo {
    pub user: String,
    pub has_bet: bool,
    pub can_withdraw: bool,
    pub airdrop_amount: u64,
}

impl From<UserAccount> for UserAccountInfo {
    fn from(src: UserAccount) -> Self {
        UserAccountInfo {
            user: src.user.to_string(),
            has_bet: src.has_bet,
            can_withdraw: src.can_withdraw,
            airdrop_amount: src.airdrop_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::{AccountDeserialize, AccountSerialize, Discriminator};

    fn sample_user() -> UserAccount {
        UserAccount {
            user: Pubkey::new_unique(),
            pool: Pubkey::new_unique(),
            airdrop_amount: 100,
            has_bet: true,
            can_withdraw: false,
            bump: 254,
        }
    }

    #[test]
    fn test_account_discriminators() {
        assert_eq!(Pool::DISCRIMINATOR, &[241, 154, 109, 4, 17, 177, 109, 188]);
        assert_eq!(UserAccount::DISCRIMINATOR, &[211, 33, 136, 16, 186, 110, 242, 127]);
    }

    #[test]
    fn test_account_sizes_match_layout() {
        let pool = Pool {
            admin: Pubkey::new_unique(),
            airdrop_token_mint: Pubkey::new_unique(),
            pool_token_account: Pubkey::new_unique(),
            total_tokens: 1_000_000,
            airdrop_amount: 100,
            total_users: 3,
            bump: 255,
        };
        let mut data = Vec::new();
        pool.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), 8 + Pool::LEN);

        let mut data = Vec::new();
        sample_user().try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), 8 + UserAccount::LEN);
    }

    #[test]
    fn test_wrong_discriminator_is_rejected() {
        let mut data = Vec::new();
        sample_user().try_serialize(&mut data).unwrap();
        assert!(Pool::try_deserialize(&mut data.as_slice()).is_err());
    }

    #[test]
    fn test_pool_view_from_address_and_pool() {
        let address = Pubkey::new_unique();
        let pool = Pool {
            admin: Pubkey::new_unique(),
            airdrop_token_mint: Pubkey::new_unique(),
            pool_token_account: Pubkey::new_unique(),
            total_tokens: 1_050_000,
            airdrop_amount: 100,
            total_users: 2,
            bump: 253,
        };
        let info = PoolInfo::from((address, pool.clone()));
        assert_eq!(info.address, address.to_string());
        assert_eq!(info.admin, pool.admin.to_string());

        let json = serde_json::to_value(info).unwrap();
        assert_eq!(json["totalTokens"], 1_050_000);
        assert_eq!(json["totalUsers"], 2);
        assert_eq!(json["airdropTokenMint"], pool.airdrop_token_mint.to_string());
    }

    #[test]
    fn test_user_view_serializes_camel_case() {
        let user = sample_user();
        let json = serde_json::to_value(UserAccountInfo::from(user.clone())).unwrap();
        assert_eq!(json["user"], user.user.to_string());
        assert_eq!(json["hasBet"], true);
        assert_eq!(json["canWithdraw"], false);
        assert_eq!(json["airdropAmount"], 100);
    }
}
