//! `bithub` command-line front end for the wallet API.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use bithub_client::{
    AddressParams, BalanceParams, CoinType, GatewayConfig, NetType, SendParams, WalletGateway,
};

/// Manage BitHub custodial wallets from the command line.
#[derive(Parser)]
#[command(name = "bithub")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Use the test network regardless of BITHUB_NETWORK.
    #[arg(long, global = true)]
    testnet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the supported coins.
    Coins,

    /// Create a new deposit address.
    CreateAddress {
        /// Currency code, e.g. BTC or TBTC.
        coin: CoinType,

        /// Label to attach to the address.
        #[arg(short, long)]
        label: Option<String>,
    },

    /// List addresses, optionally filtered by label.
    ListAddresses {
        /// Currency code, e.g. BTC or TBTC.
        coin: CoinType,

        /// Only return addresses with this label.
        #[arg(short, long)]
        label: Option<String>,
    },

    /// Show the wallet balance.
    Balance {
        /// Currency code, e.g. BTC or TBTC.
        coin: CoinType,
    },

    /// Send funds to an address.
    Send {
        /// Currency code, e.g. BTC or TBTC.
        coin: CoinType,

        /// Destination address.
        address: String,

        /// Amount in whole coin units.
        amount: f64,
    },
}

#[derive(Serialize)]
struct CoinRow {
    id: u32,
    code: &'static str,
    name: &'static str,
    net: Option<NetType>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to encode output")?;
    println!("{}", text);
    Ok(())
}

fn build_gateway(testnet: bool) -> Result<WalletGateway> {
    let mut config = GatewayConfig::from_env().context("Failed to load configuration")?;
    if testnet {
        config = config.testnet();
    }

    info!(base_url = %config.base_url, net = %config.net, "Connecting to wallet API");
    WalletGateway::with_default_transport(config).context("Failed to build HTTP transport")
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Coins => {
            let rows: Vec<CoinRow> = CoinType::all()
                .map(|coin| CoinRow {
                    id: coin.id(),
                    code: coin.currency_code(),
                    name: coin.display_name(),
                    net: coin.net(),
                })
                .collect();
            print_json(&rows)?;
        }
        Commands::CreateAddress { coin, label } => {
            let gateway = build_gateway(cli.testnet)?;
            let params = AddressParams { coin, label };
            let address = gateway
                .create_address(&params)
                .await
                .context("Failed to create address")?;
            print_json(&address)?;
        }
        Commands::ListAddresses { coin, label } => {
            let gateway = build_gateway(cli.testnet)?;
            let params = AddressParams { coin, label };
            let addresses = gateway
                .list_addresses(&params)
                .await
                .context("Failed to list addresses")?;
            print_json(&addresses)?;
        }
        Commands::Balance { coin } => {
            let gateway = build_gateway(cli.testnet)?;
            let balance = gateway
                .get_balance(&BalanceParams::new(coin))
                .await
                .context("Failed to fetch balance")?;
            print_json(&balance)?;
        }
        Commands::Send {
            coin,
            address,
            amount,
        } => {
            let gateway = build_gateway(cli.testnet)?;
            let transaction = gateway
                .send(&SendParams::new(coin, address, amount))
                .await
                .context("Failed to send funds")?;
            print_json(&transaction)?;
        }
    }

    Ok(())
}
