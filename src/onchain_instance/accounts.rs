//! Account sets expected by each airdrop program instruction, in program order.

use anchor_lang::ToAccountMetas;
use solana_sdk::{ instruction::AccountMeta, pubkey::Pubkey };

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializePool {
    pub pool: Pubkey,
    pub admin: Pubkey,
    pub airdrop_token_mint: Pubkey,
    pub pool_token_account: Pubkey,
    pub admin_token_account: Pubkey,
    pub token_program: Pubkey,
    pub associated_token_program: Pubkey,
    pub system_program: Pubkey,
    pub rent: Pubkey,
}

impl ToAccountMetas for InitializePool {
    fn to_account_metas(&self, is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.pool, false),
            AccountMeta::new(self.admin, is_signer.unwrap_or(true)),
            AccountMeta::new_readonly(self.airdrop_token_mint, false),
            AccountMeta::new(self.pool_token_account, false),
            AccountMeta::new(self.admin_token_account, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.associated_token_program, false),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new_readonly(self.rent, false)
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    pub pool: Pubkey,
    pub user_account: Pubkey,
    pub user: Pubkey,
    pub user_token_account: Pubkey,
    pub pool_token_account: Pubkey,
    pub token_program: Pubkey,
    pub associated_token_program: Pubkey,
    pub system_program: Pubkey,
    pub rent: Pubkey,
}

impl ToAccountMetas for CreateUser {
    fn to_account_metas(&self, is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.pool, false),
            AccountMeta::new(self.user_account, false),
            AccountMeta::new(self.user, is_signer.unwrap_or(true)),
            AccountMeta::new(self.user_token_account, false),
            AccountMeta::new(self.pool_token_account, false),
            AccountMeta::new_readonly(self.token_program, false),
            AccountMeta::new_readonly(self.associated_token_program, false),
            AccountMeta::new_readonly(self.system_program, false),
            AccountMeta::new_readonly(self.rent, false)
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkUserBet {
    pub user_account: Pubkey,
    pub user: Pubkey,
}

impl ToAccountMetas for MarkUserBet {
    fn to_account_metas(&self, is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.user_account, false),
            AccountMeta::new_readonly(self.user, is_signer.unwrap_or(true))
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawAirdrop {
    pub user_account: Pubkey,
    pub user: Pubkey,
    pub user_token_account: Pubkey,
    pub pool: Pubkey,
    pub user_wallet: Pubkey,
    pub token_program: Pubkey,
}

impl ToAccountMetas for WithdrawAirdrop {
    fn to_account_metas(&self, is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.user_account, false),
            AccountMeta::new(self.user, is_signer.unwrap_or(true)),
            AccountMeta::new(self.user_token_account, false),
            AccountMeta::new_readonly(self.pool, false),
            AccountMeta::new(self.user_wallet, false),
            AccountMeta::new_readonly(self.token_program, false)
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefillPool {
    pub pool: Pubkey,
    pub admin: Pubkey,
    pub admin_token_account: Pubkey,
    pub pool_token_account: Pubkey,
    pub token_program: Pubkey,
}

impl ToAccountMetas for RefillPool {
    fn to_account_metas(&self, is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.pool, false),
            AccountMeta::new_readonly(self.admin, is_signer.unwrap_or(true)),
            AccountMeta::new(self.admin_token_account, false),
            AccountMeta::new(self.pool_token_account, false),
            AccountMeta::new_readonly(self.token_program, false)
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateAirdropAmount {
    pub pool: Pubkey,
    pub admin: Pubkey,
}

impl ToAccountMetas for UpdateAirdropAmount {
    fn to_account_metas(&self, is_signer: Option<bool>) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.pool, false),
            AccountMeta::new_readonly(self.admin, is_signer.unwrap_or(true))
        ]
    }
}
