//! Error types for the airdrop client.
//!
//! Remote failures are wrapped once and handed back to the caller untouched.
//! [`AirdropError::program_error`] only reads the wrapped value so logs can name
//! the on-chain error that caused a rejected transaction.

use solana_client::client_error::ClientError;
use solana_sdk::{
    instruction::InstructionError,
    pubkey::Pubkey,
    signer::SignerError,
    transaction::TransactionError,
};
use thiserror::Error;

pub type Result<T, E = AirdropError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AirdropError {
    #[error("rpc request failed: {0}")]
    Rpc(#[from] ClientError),

    #[error("failed to sign transaction: {0}")]
    Signing(#[from] SignerError),

    #[error("anchor client error: {0}")]
    Anchor(#[from] anchor_client::ClientError),

    #[error("failed to decode account {address}: {reason}")]
    AccountDecode { address: Pubkey, reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl AirdropError {
    /// Custom error raised by the airdrop program, if the RPC node reported one.
    pub fn program_error(&self) -> Option<AirdropProgramError> {
        let AirdropError::Rpc(err) = self else {
            return None;
        };
        match err.get_transaction_error()? {
            TransactionError::InstructionError(_, InstructionError::Custom(code)) => {
                AirdropProgramError::from_code(code)
            }
            _ => None,
        }
    }
}

/// Error codes emitted by the on-chain airdrop program.
///
/// Anchor numbers user errors from 6000 in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AirdropProgramError {
    #[error("Insufficient funds in pool")]
    InsufficientPoolFunds,
    #[error("Unauthorized user")]
    UnauthorizedUser,
    #[error("Unauthorized admin")]
    UnauthorizedAdmin,
    #[error("Withdrawal not allowed")]
    WithdrawalNotAllowed,
    #[error("Betting required before withdrawal")]
    BettingRequired,
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
}

const ERROR_CODE_OFFSET: u32 = 6000;

impl AirdropProgramError {
    pub fn from_code(code: u32) -> Option<Self> {
        let error = match code.checked_sub(ERROR_CODE_OFFSET)? {
            0 => Self::InsufficientPoolFunds,
            1 => Self::UnauthorizedUser,
            2 => Self::UnauthorizedAdmin,
            3 => Self::WithdrawalNotAllowed,
            4 => Self::BettingRequired,
            5 => Self::ArithmeticOverflow,
            _ => return None,
        };
        Some(error)
    }

    pub fn code(self) -> u32 {
        ERROR_CODE_OFFSET + self as u32
    }
}
