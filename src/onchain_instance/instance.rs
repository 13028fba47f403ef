use std::sync::Arc;

use anchor_lang::{ AccountDeserialize, InstructionData, ToAccountMetas };
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{ Keypair, Signature },
    system_program,
    sysvar,
};
use spl_associated_token_account::get_associated_token_address;
use spl_associated_token_account::ID as ASSOCIATED_TOKEN_PROGRAM_ID;
use spl_token::ID as TOKEN_PROGRAM_ID;

use crate::config::Config;
use crate::error::{ AirdropError, Result };
use crate::state_structs::{ Pool, UserAccount };

use super::{ accounts, instruction, pda };
use super::transport::{ AirdropTransport, RpcTransport };

/// Airdrop program client.
///
/// Every call derives the addresses it needs, fills the program's account set
/// and issues a single request through the transport. Failures are logged and
/// returned as produced by the transport.
pub struct AirdropClient<T = RpcTransport> {
    transport: T,
    program_id: Pubkey,
}

impl AirdropClient<RpcTransport> {
    /// Connect to the configured cluster, signing with `wallet`.
    pub fn from_config(config: &Config, wallet: Arc<Keypair>) -> Result<Self> {
        let transport = RpcTransport::new(
            config.cluster.clone(),
            wallet,
            config.commitment,
            config.program_id
        )?;
        Ok(Self::new(transport, config.program_id))
    }
}

impl<T: AirdropTransport> AirdropClient<T> {
    pub fn new(transport: T, program_id: Pubkey) -> Self {
        Self { transport, program_id }
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    /// Wallet acting as admin or user in the calls made by this client
    pub fn wallet(&self) -> Pubkey {
        self.transport.payer()
    }

    pub fn pool_address(&self) -> (Pubkey, u8) {
        pda::find_pool_address(&self.program_id)
    }

    pub fn user_account_address(&self, user: &Pubkey) -> (Pubkey, u8) {
        pda::find_user_account_address(user, &self.program_id)
    }

    // --- Instruction builders ---

    pub fn initialize_pool_instruction(
        &self,
        airdrop_token_mint: &Pubkey,
        initial_amount: u64,
        airdrop_amount: u64
    ) -> Instruction {
        let admin = self.wallet();
        let (pool, _) = self.pool_address();
        self.build(
            accounts::InitializePool {
                pool,
                admin,
                airdrop_token_mint: *airdrop_token_mint,
                pool_token_account: get_associated_token_address(&pool, airdrop_token_mint),
                admin_token_account: get_associated_token_address(&admin, airdrop_token_mint),
                token_program: TOKEN_PROGRAM_ID,
                associated_token_program: ASSOCIATED_TOKEN_PROGRAM_ID,
                system_program: system_program::ID,
                rent: sysvar::rent::ID,
            },
            instruction::InitializePool { initial_amount, airdrop_amount }
        )
    }

    pub fn create_user_instruction(&self, airdrop_token_mint: &Pubkey) -> Instruction {
        let user = self.wallet();
        let (pool, _) = self.pool_address();
        let (user_account, _) = self.user_account_address(&user);
        self.build(
            accounts::CreateUser {
                pool,
                user_account,
                user,
                user_token_account: get_associated_token_address(&user, airdrop_token_mint),
                pool_token_account: get_associated_token_address(&pool, airdrop_token_mint),
                token_program: TOKEN_PROGRAM_ID,
                associated_token_program: ASSOCIATED_TOKEN_PROGRAM_ID,
                system_program: system_program::ID,
                rent: sysvar::rent::ID,
            },
            instruction::CreateUser
        )
    }

    pub fn mark_user_bet_instruction(&self, user: &Pubkey) -> Instruction {
        let (user_account, _) = self.user_account_address(user);
        self.build(accounts::MarkUserBet { user_account, user: *user }, instruction::MarkUserBet)
    }

    pub fn withdraw_airdrop_instruction(&self, airdrop_token_mint: &Pubkey) -> Instruction {
        let user = self.wallet();
        let (pool, _) = self.pool_address();
        let (user_account, _) = self.user_account_address(&user);
        // The program checks both slots against the same mint/authority pair.
        let user_token_account = get_associated_token_address(&user, airdrop_token_mint);
        self.build(
            accounts::WithdrawAirdrop {
                user_account,
                user,
                user_token_account,
                pool,
                user_wallet: user_token_account,
                token_program: TOKEN_PROGRAM_ID,
            },
            instruction::WithdrawAirdrop
        )
    }

    pub fn refill_pool_instruction(&self, airdrop_token_mint: &Pubkey, amount: u64) -> Instruction {
        let admin = self.wallet();
        let (pool, _) = self.pool_address();
        self.build(
            accounts::RefillPool {
                pool,
                admin,
                admin_token_account: get_associated_token_address(&admin, airdrop_token_mint),
                pool_token_account: get_associated_token_address(&pool, airdrop_token_mint),
                token_program: TOKEN_PROGRAM_ID,
            },
            instruction::RefillPool { amount }
        )
    }

    pub fn update_airdrop_amount_instruction(&self, new_amount: u64) -> Instruction {
        let (pool, _) = self.pool_address();
        self.build(
            accounts::UpdateAirdropAmount { pool, admin: self.wallet() },
            instruction::UpdateAirdropAmount { new_amount }
        )
    }

    fn build(&self, accounts: impl ToAccountMetas, args: impl InstructionData) -> Instruction {
        Instruction {
            program_id: self.program_id,
            accounts: accounts.to_account_metas(None),
            data: args.data(),
        }
    }

    // --- Remote operations ---

    /// Initialize the airdrop pool, moving `initial_amount` tokens from the admin
    pub async fn initialize_pool(
        &self,
        airdrop_token_mint: &Pubkey,
        initial_amount: u64,
        airdrop_amount: u64
    ) -> Result<Signature> {
        let ix = self.initialize_pool_instruction(airdrop_token_mint, initial_amount, airdrop_amount);
        self.submit("initialize_pool", "Pool initialized successfully", ix).await
    }

    /// Create the caller's user account and allocate its airdrop
    pub async fn create_user(&self, airdrop_token_mint: &Pubkey) -> Result<Signature> {
        let ix = self.create_user_instruction(airdrop_token_mint);
        self.submit("create_user", "User created successfully", ix).await
    }

    /// Mark that `user` has placed a bet (called by the betting system)
    pub async fn mark_user_bet(&self, user: &Pubkey) -> Result<Signature> {
        let ix = self.mark_user_bet_instruction(user);
        self.submit("mark_user_bet", "User bet marked successfully", ix).await
    }

    /// Withdraw the caller's airdrop after betting
    pub async fn withdraw_airdrop(&self, airdrop_token_mint: &Pubkey) -> Result<Signature> {
        let ix = self.withdraw_airdrop_instruction(airdrop_token_mint);
        self.submit("withdraw_airdrop", "Airdrop withdrawn successfully", ix).await
    }

    /// Admin: add `amount` tokens to the pool
    pub async fn refill_pool(&self, airdrop_token_mint: &Pubkey, amount: u64) -> Result<Signature> {
        let ix = self.refill_pool_instruction(airdrop_token_mint, amount);
        self.submit("refill_pool", "Pool refilled successfully", ix).await
    }

    /// Admin: change the amount given to future users
    pub async fn update_airdrop_amount(&self, new_amount: u64) -> Result<Signature> {
        let ix = self.update_airdrop_amount_instruction(new_amount);
        self.submit("update_airdrop_amount", "Airdrop amount updated successfully", ix).await
    }

    pub async fn get_pool_info(&self) -> Result<Pool> {
        let (pool, _) = self.pool_address();
        self.fetch("get_pool_info", &pool).await
    }

    pub async fn get_user_account_info(&self, user: &Pubkey) -> Result<UserAccount> {
        let (user_account, _) = self.user_account_address(user);
        self.fetch("get_user_account_info", &user_account).await
    }

    async fn submit(&self, op: &str, success: &str, ix: Instruction) -> Result<Signature> {
        match self.transport.send_instruction(ix).await {
            Ok(signature) => {
                tracing::info!("[{}] {}: {}", op, success, signature);
                Ok(signature)
            }
            Err(e) => {
                log_failure(op, &e);
                Err(e)
            }
        }
    }

    async fn fetch<A: AccountDeserialize>(&self, op: &str, address: &Pubkey) -> Result<A> {
        tracing::debug!("[{}] Fetching account {}", op, address);
        let decoded = self.transport
            .fetch_account_data(address).await
            .and_then(|data| decode_account(address, &data));
        if let Err(e) = &decoded {
            log_failure(op, e);
        }
        decoded
    }
}

fn decode_account<A: AccountDeserialize>(address: &Pubkey, data: &[u8]) -> Result<A> {
    let mut data = data;
    A::try_deserialize(&mut data).map_err(|e| AirdropError::AccountDecode {
        address: *address,
        reason: e.to_string(),
    })
}

fn log_failure(op: &str, err: &AirdropError) {
    match err.program_error() {
        Some(program_error) =>
            tracing::error!(
                "[{}] Error: {} (program error {}: {})",
                op,
                err,
                program_error.code(),
                program_error
            ),
        None => tracing::error!("[{}] Error: {}", op, err),
    }
}
