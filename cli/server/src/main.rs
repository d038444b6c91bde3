//! hkid server binary
//!
//! Loads configuration, installs logging, connects to the ledger node and
//! serves the naming routes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use adapters::{DynController, LedgerClient, RpcController, RpcRegistry, RpcResolver};
use config::Config;
use dispatcher::NameService;
use http::HttpTransport;
use server::AppState;
use transport::DynTransport;
use types::Address;

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("hkid-server");
        println!();
        println!("USAGE:");
        println!("    hkid-server [FLAGS]");
        println!();
        println!("FLAGS:");
        println!("    --config <path>               Load configuration from <path> (default: ~/.config/hkid/config.toml)");
        println!("    --help, -h                    Show this help message");
        println!();
        println!("ENVIRONMENT:");
        println!("    HKID_RPC_URL, HKID_SENDER, HKID_REGISTRY, HKID_CONTROLLER, HKID_RESOLVER,");
        println!("    HKID_HOST, HKID_PORT, HKID_LOG_LEVEL override the configuration file");
        return;
    }

    let config_path = match args.iter().position(|a| a == "--config") {
        Some(i) => match args.get(i + 1) {
            Some(path) => Some(PathBuf::from(path)),
            None => {
                eprintln!("Error: --config requires a path");
                eprintln!("Use 'hkid-server --help' for usage information");
                std::process::exit(1);
            }
        },
        None => None,
    };

    if let Err(e) = run(config_path).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(config_path.as_deref())?;
    logging::init(&config.logging.level, config.logging.file.as_deref())?;

    let transport: DynTransport = Arc::new(HttpTransport::from_config(&config.ledger.transport)?);
    let client = Arc::new(LedgerClient::new(transport, config.ledger.sender));
    tracing::info!(endpoint = client.endpoint(), "connected ledger client");
    if client.sender().is_none() {
        tracing::warn!("no sender configured; registrations will be rejected");
    }

    let registry = Arc::new(RpcRegistry::new(client.clone(), config.contracts.registry));
    let controller = Arc::new(RpcController::new(client.clone(), config.contracts.controller));
    let mut service = NameService::new(registry, controller);
    if let Some(resolver) = config.contracts.resolver {
        service = service.with_resolver(Arc::new(RpcResolver::new(client.clone(), resolver)));
    }

    let state = AppState::new(service).with_controller_factory(Arc::new(move |address: Address| {
        Arc::new(RpcController::new(client.clone(), address)) as DynController
    }));

    let host: IpAddr = config.server.host.parse()?;
    server::serve(Arc::new(state), SocketAddr::new(host, config.server.port)).await;
    Ok(())
}
