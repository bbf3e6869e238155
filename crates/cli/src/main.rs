//! Command Line Interface for LP token redemption.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use lp_redeem_domain::PoolType;
use lp_redeem_execution::prelude::*;
use lp_redeem_protocols::registry::PoolRegistry;
use lp_redeem_protocols::rpc::RpcProvider;
use rust_decimal::Decimal;
use solana_sdk::pubkey::Pubkey;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "lp-redeem")]
#[command(about = "Preview and submit pro-rata LP token withdrawals", long_about = None)]
struct Cli {
    /// Path to the pool registry JSON file
    #[arg(long, default_value = "pools.json", global = true)]
    registry: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the pools known to the registry
    Pools,
    /// Preview the withdrawal output for an LP amount
    Preview {
        /// First symbol of the ordered pair (e.g., SOL)
        #[arg(short = 'x', long)]
        symbol_x: String,

        /// Second symbol of the ordered pair (e.g., USDC)
        #[arg(short = 'y', long)]
        symbol_y: String,

        /// Pool type (constant-product | stable-swap)
        #[arg(short, long, default_value = "constant-product")]
        pool_type: PoolType,

        /// LP token amount to redeem, display-scaled
        #[arg(short, long)]
        amount: Decimal,

        /// Wallet address owning the LP tokens
        #[arg(short, long)]
        owner: Pubkey,
    },
    /// Submit a withdrawal transaction
    Withdraw {
        /// First symbol of the ordered pair (e.g., SOL)
        #[arg(short = 'x', long)]
        symbol_x: String,

        /// Second symbol of the ordered pair (e.g., USDC)
        #[arg(short = 'y', long)]
        symbol_y: String,

        /// Pool type (constant-product | stable-swap)
        #[arg(short, long, default_value = "constant-product")]
        pool_type: PoolType,

        /// LP token amount to redeem, display-scaled
        #[arg(short, long)]
        amount: Decimal,

        /// Path to the signing keypair file
        #[arg(short, long)]
        keypair: PathBuf,

        /// Slippage floor in basis points below the previewed amounts
        #[arg(long, default_value_t = 0)]
        slippage_bps: u16,

        /// Simulate the transaction instead of broadcasting it
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
}

fn load_service(registry_path: &PathBuf) -> Result<WithdrawService> {
    let rpc_url =
        env::var("RPC_URL").unwrap_or_else(|_| "https://api.devnet.solana.com".to_string());
    let json = std::fs::read_to_string(registry_path)
        .with_context(|| format!("failed to read registry {}", registry_path.display()))?;
    let registry = PoolRegistry::from_json(&json)
        .with_context(|| format!("failed to parse registry {}", registry_path.display()))?;
    Ok(WithdrawService::new(registry, Arc::new(RpcProvider::new(rpc_url))))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let service = load_service(&cli.registry)?;

    match &cli.command {
        Commands::Pools => {
            println!("📒 {} registered pool(s):", service.pools().len());
            for pool in service.pools() {
                println!(
                    "  {:<24} pool={} lp_mint={}",
                    pool.label(),
                    pool.addresses.pool,
                    pool.addresses.lp_mint
                );
            }
        }
        Commands::Preview {
            symbol_x,
            symbol_y,
            pool_type,
            amount,
            owner,
        } => {
            println!("🔍 Previewing withdrawal of {amount} LP from {symbol_x}/{symbol_y}...");
            let outcome = service
                .preview(symbol_x, symbol_y, *pool_type, *amount, owner)
                .await?;

            println!("\n💧 Withdrawal Preview (slot {})", outcome.preview.snapshot_slot);
            println!("════════════════════════════════════");
            println!("LP balance:      {}", outcome.owned_balance);
            println!("LP to redeem:    {amount}");
            println!(
                "You receive:     {} {}",
                outcome.preview.receive_x, outcome.pool.token_x.symbol
            );
            println!(
                "               + {} {}",
                outcome.preview.receive_y, outcome.pool.token_y.symbol
            );
            println!("════════════════════════════════════");
            println!("Estimate only — pool state may move before execution.");
        }
        Commands::Withdraw {
            symbol_x,
            symbol_y,
            pool_type,
            amount,
            keypair,
            slippage_bps,
            dry_run,
        } => {
            let wallet = Wallet::from_file(keypair)?;
            println!(
                "🚀 Withdrawing {amount} LP from {symbol_x}/{symbol_y} as {}...",
                wallet.pubkey()
            );

            let report = service
                .withdraw(
                    symbol_x,
                    symbol_y,
                    *pool_type,
                    *amount,
                    *slippage_bps,
                    wallet.signer(),
                    *dry_run,
                )
                .await?;

            println!(
                "\n💧 Previewed output: {} / {} (slot {})",
                report.preview.receive_x, report.preview.receive_y, report.preview.snapshot_slot
            );

            match report.execution {
                None => {
                    if report.simulated_ok {
                        println!("✅ Dry run: simulation succeeded, nothing broadcast.");
                    } else {
                        println!("❌ Dry run: simulation failed.");
                    }
                }
                Some(result) if result.success => {
                    println!(
                        "✅ Confirmed in slot {}: {}",
                        result.slot.unwrap_or(0),
                        result.signature
                    );
                }
                Some(result) => {
                    println!(
                        "❌ Transaction failed: {}",
                        result.error.unwrap_or_else(|| "unknown error".to_string())
                    );
                }
            }
        }
    }

    Ok(())
}
