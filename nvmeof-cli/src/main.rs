//! NVMe-oF gateway command-line interface

mod gateway;
mod initiator;
mod listener;
mod namespace;
mod subsystem;

use clap::{command, Parser, Subcommand};
use gateway::Gateway;
use initiator::Initiator;
use listener::Listener;
use namespace::Namespace;
use nvmeof_sdk::Client;
use serde::Serialize;
use subsystem::Subsystem;
use tracing_error::ErrorLayer;
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, env = "NVMEOF_ADDR", default_value = "http://127.0.0.1:8080/api/nvmeof")]
    addr: String,

    #[arg(long, env = "NVMEOF_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "list gateways")]
    Gateway(Gateway),
    #[command(about = "manage subsystems")]
    Subsystem(Subsystem),
    #[command(about = "manage the initiators allowed to connect to a subsystem")]
    Initiator(Initiator),
    #[command(about = "manage the listeners of a subsystem")]
    Listener(Listener),
    #[command(about = "manage the namespaces of a subsystem")]
    Namespace(Namespace),
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    tracing::debug!(addr = %cli.addr, "sending requests to gateway");

    let sdk = Client::new(cli.addr);
    sdk.set_token(cli.token).await;

    match cli.command {
        Commands::Gateway(gateway) => gateway.handle(&sdk).await,
        Commands::Subsystem(subsystem) => subsystem.handle(&sdk).await,
        Commands::Initiator(initiator) => initiator.handle(&sdk).await,
        Commands::Listener(listener) => listener.handle(&sdk).await,
        Commands::Namespace(namespace) => namespace.handle(&sdk).await,
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::Registry::default()
        .with(ErrorLayer::default())
        .with(env_filter)
        .with(tracing_subscriber::fmt::Layer::default());

    // set the subscriber as the default for the application
    tracing::subscriber::set_global_default(subscriber)
        .expect("failed to setup tracing subscriber");
}

pub(crate) fn handle_resp<T: Serialize>(resp: Result<T, nvmeof_sdk::Error>) {
    match resp {
        Ok(resp) => {
            let resp = serde_json::to_string_pretty(&resp).unwrap();
            println!("{resp}");
        }
        Err(e) => {
            println!("Error: {e}");
        }
    }
}

pub(crate) async fn handle_http_resp(resp: Result<nvmeof_sdk::Response, nvmeof_sdk::Error>) {
    match resp {
        Ok(resp) => {
            let status = resp.status();
            match resp.text().await {
                Ok(body) if !body.is_empty() => println!("{status}\n{body}"),
                _ => println!("{status}"),
            }
        }
        Err(e) => {
            println!("Error: {e}");
        }
    }
}
