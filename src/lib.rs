//! # AICAT Airdrop Client
//!
//! Rust client for the AICAT airdrop program on Solana. Users register to receive
//! a fixed token allocation from a shared pool and can withdraw it once the
//! betting system has marked them as having placed a bet.
//!
//! ## Architecture
//! - `onchain_instance`: address derivation, instruction building and the client
//! - `state_structs`: on-chain account layouts and display views
//! - `config`: environment variable configuration
//! - `error`: error types
//!
//! ## Example
//! ```no_run
//! use aicat_airdrop_client::{ config::Config, AirdropClient };
//!
//! # async fn run() -> aicat_airdrop_client::error::Result<()> {
//! let config = Config::from_env()?;
//! let client = AirdropClient::from_config(&config, config.wallet.load()?)?;
//! let pool = client.get_pool_info().await?;
//! println!("{} tokens left for {} users", pool.total_tokens, pool.total_users);
//! # Ok(())
//! # }
//! ```

use anchor_lang::declare_id;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod config;
pub mod error;
pub mod onchain_instance;
pub mod state_structs;

pub use onchain_instance::{ AirdropClient, AirdropTransport, RpcTransport };
pub use state_structs::{ Pool, UserAccount };
