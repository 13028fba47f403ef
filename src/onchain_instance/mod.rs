//! # Onchain Program Instance Module
//!
//! Client side of the AICAT airdrop program deployed on Solana.
//!
//! ## Features
//! - PDA derivation for the pool and per-user accounts
//! - Account sets and instruction data for every program instruction
//! - Transaction submission through an Anchor client
//! - Decoding of pool and user account state

/// Account sets passed to each instruction
pub mod accounts;

/// Instruction arguments and discriminators
pub mod instruction;

/// Airdrop client: address derivation and remote operations
pub mod instance;

/// Program derived addresses
pub mod pda;

/// Transaction submission and account fetching
pub mod transport;

pub use instance::AirdropClient;
pub use transport::{ AirdropTransport, RpcTransport };
