//! # AICAT Airdrop Demo
//!
//! Walks through the full airdrop lifecycle against a live cluster:
//! pool initialization, user registration, bet marking, withdrawal and refill.
//!
//! ## Environment Setup
//! Copy `.env.example` to `.env` and configure:
//! ```bash
//! cp .env.example .env
//! # Set WALLET_PRIVATE_KEY (admin), USER_PRIVATE_KEY and AIRDROP_TOKEN_MINT
//! ```
//!
//! ## Running
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use aicat_airdrop_client::{
    config::Config,
    state_structs::{ PoolInfo, UserAccountInfo },
    AirdropClient,
    AirdropTransport,
};
use anyhow::{ Context, Result };
use solana_sdk::{ pubkey::Pubkey, signer::Signer };
use tracing_subscriber::{ layer::SubscriberExt, util::SubscriberInitExt, EnvFilter };

const INITIAL_POOL_AMOUNT: u64 = 1_000_000;
const AIRDROP_AMOUNT: u64 = 100;
const REFILL_AMOUNT: u64 = 50_000;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber
        ::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt
                ::layer()
                .with_target(false)
                .compact()
        )
        .init();

    tracing::info!("Package: {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if let Err(e) = run().await {
        tracing::error!("Error during demo: {:#}", e);
        std::process::exit(1);
    }
    tracing::info!("Demo completed successfully");
}

async fn run() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    let mint = config.require_token_mint()?;

    let admin = AirdropClient::from_config(&config, config.wallet.load()?)?;
    let user_wallet = config.user_wallet
        .as_ref()
        .context("USER_PRIVATE_KEY environment variable is required for the demo")?
        .load()?;
    let user_pubkey = user_wallet.pubkey();
    let user = AirdropClient::from_config(&config, user_wallet)?;

    tracing::info!("Program: {}", admin.program_id());
    tracing::info!("Admin: {}, user: {}", admin.wallet(), user_pubkey);

    tracing::info!("1. Initializing pool...");
    admin.initialize_pool(&mint, INITIAL_POOL_AMOUNT, AIRDROP_AMOUNT).await?;

    tracing::info!("2. Creating user account...");
    user.create_user(&mint).await?;

    tracing::info!("3. Checking user account info...");
    print_user(&admin, &user_pubkey).await?;

    tracing::info!("4. Marking user bet...");
    on_user_places_bet(&user, &user_pubkey).await?;

    tracing::info!("5. Withdrawing airdrop...");
    user.withdraw_airdrop(&mint).await?;

    tracing::info!("6. Checking final user account info...");
    print_user(&admin, &user_pubkey).await?;

    tracing::info!("7. Refilling pool...");
    admin.refill_pool(&mint, REFILL_AMOUNT).await?;

    tracing::info!("8. Checking pool info...");
    let pool = admin.get_pool_info().await?;
    let info = PoolInfo::from((admin.pool_address().0, pool));
    tracing::info!("Pool info: {}", serde_json::to_string_pretty(&info)?);

    Ok(())
}

/// Hook for the betting system: records that `user` placed a bet so the
/// airdrop becomes withdrawable.
async fn on_user_places_bet<T: AirdropTransport>(
    client: &AirdropClient<T>,
    user: &Pubkey
) -> Result<()> {
    tracing::info!("User {} placed a bet", user);
    client.mark_user_bet(user).await?;
    tracing::info!("User {} can now withdraw their airdrop tokens", user);
    Ok(())
}

async fn print_user<T: AirdropTransport>(client: &AirdropClient<T>, user: &Pubkey) -> Result<()> {
    let account = client.get_user_account_info(user).await?;
    let info = UserAccountInfo::from(account);
    tracing::info!("User info: {}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
