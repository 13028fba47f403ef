//! Transaction submission for the airdrop client.
//!
//! [`AirdropTransport`] is the seam between request shaping and the network;
//! [`RpcTransport`] signs with a single payer and talks to a cluster RPC node.

use std::sync::Arc;

use anchor_client::{ Client, Cluster, Program };
use async_trait::async_trait;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{ Keypair, Signature },
    signer::Signer,
    transaction::Transaction,
};

use crate::error::Result;

/// Submits airdrop program calls on behalf of a single payer.
#[async_trait]
pub trait AirdropTransport: Send + Sync {
    /// Wallet that pays for and signs submitted transactions.
    fn payer(&self) -> Pubkey;

    /// Sends `instruction` in its own transaction and waits for confirmation.
    async fn send_instruction(&self, instruction: Instruction) -> Result<Signature>;

    /// Raw data of the account at `address`.
    async fn fetch_account_data(&self, address: &Pubkey) -> Result<Vec<u8>>;
}

/// Transport backed by an Anchor client connected to a cluster RPC node.
pub struct RpcTransport {
    payer: Arc<Keypair>,
    program: Program<Arc<Keypair>>,
}

impl RpcTransport {
    pub fn new(
        cluster: Cluster,
        payer: Arc<Keypair>,
        commitment: CommitmentConfig,
        program_id: Pubkey
    ) -> Result<Self> {
        let client = Client::new_with_options(cluster, payer.clone(), commitment);
        let program = client.program(program_id)?;
        Ok(Self { payer, program })
    }
}

#[async_trait]
impl AirdropTransport for RpcTransport {
    fn payer(&self) -> Pubkey {
        self.payer.pubkey()
    }

    async fn send_instruction(&self, instruction: Instruction) -> Result<Signature> {
        let rpc = self.program.rpc();
        let recent_blockhash = rpc.get_latest_blockhash().await?;

        let mut tx = Transaction::new_with_payer(&[instruction], Some(&self.payer.pubkey()));
        tx.try_sign(&[self.payer.as_ref()], recent_blockhash)?;

        tracing::debug!("Submitting transaction with blockhash {}", recent_blockhash);
        let signature = rpc.send_and_confirm_transaction(&tx).await?;
        Ok(signature)
    }

    async fn fetch_account_data(&self, address: &Pubkey) -> Result<Vec<u8>> {
        let rpc = self.program.rpc();
        let data = rpc.get_account_data(address).await?;
        Ok(data)
    }
}
