//! Configuration module for environment variables and client settings

use std::{ env, str::FromStr, sync::Arc };

use anchor_client::Cluster;
use solana_sdk::{
    commitment_config::{ CommitmentConfig, CommitmentLevel },
    pubkey::Pubkey,
    signature::{ Keypair, read_keypair_file },
};

use crate::error::{ AirdropError, Result };

/// Cluster moniker used when `SOLANA_RPC_URL` is unset
pub const DEFAULT_CLUSTER: &str = "devnet";

#[derive(Debug, Clone)]
pub struct Config {
    /// RPC endpoint or cluster moniker (`devnet`, `localnet`, ...)
    pub cluster: Cluster,

    pub commitment: CommitmentConfig,

    /// Airdrop program id, defaults to the deployed program
    pub program_id: Pubkey,

    /// Token mint distributed by the pool, only needed by token operations
    pub token_mint: Option<Pubkey>,

    pub wallet: WalletSource,

    /// Optional second wallet used by the demo as the airdrop recipient
    pub user_wallet: Option<WalletSource>,
}

/// Where the payer keypair comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletSource {
    /// Base58 encoded 64-byte keypair
    PrivateKey(String),
    /// Solana CLI JSON keypair file
    KeypairFile(String),
}

impl WalletSource {
    pub fn load(&self) -> Result<Arc<Keypair>> {
        let keypair = match self {
            WalletSource::PrivateKey(encoded) => {
                let bytes = bs58
                    ::decode(encoded)
                    .into_vec()
                    .map_err(|e| AirdropError::Config(format!("invalid base58 private key: {}", e)))?;
                Keypair::from_bytes(&bytes).map_err(|e|
                    AirdropError::Config(format!("invalid keypair bytes: {}", e))
                )?
            }
            WalletSource::KeypairFile(path) => {
                read_keypair_file(path).map_err(|e|
                    AirdropError::Config(format!("failed to read keypair file {}: {}", path, e))
                )?
            }
        };
        Ok(Arc::new(keypair))
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Blank values (e.g. `KEY=` lines in `.env`) count as unset.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let rpc_url = lookup("SOLANA_RPC_URL").unwrap_or_else(|| DEFAULT_CLUSTER.to_string());
        let cluster = Cluster::from_str(&rpc_url).map_err(|e|
            AirdropError::Config(format!("invalid SOLANA_RPC_URL {}: {}", rpc_url, e))
        )?;

        let commitment = match lookup("SOLANA_COMMITMENT") {
            Some(level) =>
                CommitmentConfig {
                    commitment: CommitmentLevel::from_str(&level).map_err(|_|
                        AirdropError::Config(format!("invalid SOLANA_COMMITMENT: {}", level))
                    )?,
                },
            None => CommitmentConfig::confirmed(),
        };

        let program_id = match lookup("AIRDROP_PROGRAM_ID") {
            Some(id) => parse_pubkey("AIRDROP_PROGRAM_ID", &id)?,
            None => crate::ID,
        };

        let token_mint = lookup("AIRDROP_TOKEN_MINT")
            .map(|mint| parse_pubkey("AIRDROP_TOKEN_MINT", &mint))
            .transpose()?;

        let wallet = match (lookup("WALLET_PRIVATE_KEY"), lookup("WALLET_KEYPAIR_PATH")) {
            (Some(key), _) => WalletSource::PrivateKey(key),
            (None, Some(path)) => WalletSource::KeypairFile(path),
            (None, None) => {
                return Err(
                    AirdropError::Config(
                        "WALLET_PRIVATE_KEY or WALLET_KEYPAIR_PATH environment variable is required".to_string()
                    )
                );
            }
        };

        Ok(Self {
            cluster,
            commitment,
            program_id,
            token_mint,
            wallet,
            user_wallet: lookup("USER_PRIVATE_KEY").map(WalletSource::PrivateKey),
        })
    }

    pub fn require_token_mint(&self) -> Result<Pubkey> {
        self.token_mint.ok_or_else(||
            AirdropError::Config("AIRDROP_TOKEN_MINT environment variable is required".to_string())
        )
    }
}

fn parse_pubkey(name: &str, value: &str) -> Result<Pubkey> {
    Pubkey::from_str(value).map_err(|e| AirdropError::Config(format!("invalid {} {}: {}", name, value, e)))
}
