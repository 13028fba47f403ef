//! Instruction arguments of the airdrop program.
//!
//! Data layout is the Anchor one: `sha256("global:<name>")[..8]` followed by
//! the Borsh encoded arguments.

use anchor_lang::prelude::borsh;
use anchor_lang::{ AnchorSerialize, Discriminator, InstructionData };

#[derive(AnchorSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitializePool {
    pub initial_amount: u64,
    pub airdrop_amount: u64,
}

impl Discriminator for InitializePool {
    const DISCRIMINATOR: &'static [u8] = &[95, 180, 10, 172, 84, 174, 232, 40];
}

impl InstructionData for InitializePool {}

#[derive(AnchorSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateUser;

impl Discriminator for CreateUser {
    const DISCRIMINATOR: &'static [u8] = &[108, 227, 130, 130, 252, 109, 75, 218];
}

impl InstructionData for CreateUser {}

#[derive(AnchorSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkUserBet;

impl Discriminator for MarkUserBet {
    const DISCRIMINATOR: &'static [u8] = &[123, 232, 81, 27, 220, 200, 189, 162];
}

impl InstructionData for MarkUserBet {}

#[derive(AnchorSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawAirdrop;

impl Discriminator for WithdrawAirdrop {
    const DISCRIMINATOR: &'static [u8] = &[58, 46, 29, 224, 228, 15, 175, 5];
}

impl InstructionData for WithdrawAirdrop {}

#[derive(AnchorSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefillPool {
    pub amount: u64,
}

impl Discriminator for RefillPool {
    const DISCRIMINATOR: &'static [u8] = &[249, 2, 22, 42, 43, 12, 190, 173];
}

impl InstructionData for RefillPool {}

#[derive(AnchorSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateAirdropAmount {
    pub new_amount: u64,
}

impl Discriminator for UpdateAirdropAmount {
    const DISCRIMINATOR: &'static [u8] = &[18, 141, 229, 47, 31, 60, 153, 159];
}

impl InstructionData for UpdateAirdropAmount {}

#[cfg(test)]
mod tests {
    use super::*;

    /// sha256("global:{name}")[..8]
    fn anchor_discriminator(name: &str) -> [u8; 8] {
        let preimage = format!("global:{}", name);
        let hash = solana_sdk::hash::hash(preimage.as_bytes());
        let mut disc = [0u8; 8];
        disc.copy_from_slice(&hash.to_bytes()[..8]);
        disc
    }

    #[test]
    fn test_discriminators_match_instruction_names() {
        assert_eq!(InitializePool::DISCRIMINATOR, anchor_discriminator("initialize_pool"));
        assert_eq!(CreateUser::DISCRIMINATOR, anchor_discriminator("create_user"));
        assert_eq!(MarkUserBet::DISCRIMINATOR, anchor_discriminator("mark_user_bet"));
        assert_eq!(WithdrawAirdrop::DISCRIMINATOR, anchor_discriminator("withdraw_airdrop"));
        assert_eq!(RefillPool::DISCRIMINATOR, anchor_discriminator("refill_pool"));
        assert_eq!(
            UpdateAirdropAmount::DISCRIMINATOR,
            anchor_discriminator("update_airdrop_amount")
        );
    }

    #[test]
    fn test_initialize_pool_data_layout() {
        let data = (InitializePool { initial_amount: 1_000_000, airdrop_amount: 100 }).data();
        // 8 (disc) + 2 * u64
        assert_eq!(data.len(), 24);
        assert_eq!(&data[..8], InitializePool::DISCRIMINATOR);
        assert_eq!(&data[8..16], &1_000_000u64.to_le_bytes());
        assert_eq!(&data[16..], &100u64.to_le_bytes());
    }

    #[test]
    fn test_no_arg_instructions_are_discriminator_only() {
        assert_eq!(CreateUser.data(), CreateUser::DISCRIMINATOR);
        assert_eq!(MarkUserBet.data(), MarkUserBet::DISCRIMINATOR);
        assert_eq!(WithdrawAirdrop.data(), WithdrawAirdrop::DISCRIMINATOR);
    }

    #[test]
    fn test_amount_instructions_data_layout() {
        let data = (RefillPool { amount: 50_000 }).data();
        assert_eq!(&data[8..], &50_000u64.to_le_bytes());

        let data = (UpdateAirdropAmount { new_amount: 250 }).data();
        assert_eq!(&data[8..], &250u64.to_le_bytes());
    }
}
