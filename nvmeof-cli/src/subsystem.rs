use clap::Subcommand;
use nvmeof_sdk::{subsystem::CreateSubsystemParams, Client, MAX_NAMESPACE};

use crate::{handle_http_resp, handle_resp};

#[derive(clap::Args, Debug)]
pub struct Subsystem {
    #[clap(subcommand)]
    subcommand: SubsystemSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SubsystemSubcommand {
    #[command(about = "create new subsystem")]
    Create {
        #[arg(help = "NVMe qualified name of the subsystem")]
        nqn: String,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_NAMESPACE as i64))]
        max_namespaces: Option<u32>,
        #[arg(long)]
        enable_ha: bool,
    },
    #[command(about = "delete subsystem")]
    Delete {
        #[arg(help = "NVMe qualified name of the subsystem")]
        nqn: String,
    },
    #[command(about = "retrieve subsystem")]
    Get {
        #[arg(help = "NVMe qualified name of the subsystem")]
        nqn: String,
    },
    #[command(about = "list subsystems")]
    List,
    #[command(about = "check whether a subsystem exists")]
    Present {
        #[arg(help = "NVMe qualified name of the subsystem")]
        nqn: String,
    },
}

impl Subsystem {
    pub async fn handle(self, sdk: &Client) {
        match self.subcommand {
            SubsystemSubcommand::Create {
                nqn,
                max_namespaces,
                enable_ha,
            } => {
                let resp = sdk
                    .subsystem
                    .create(&CreateSubsystemParams {
                        nqn,
                        max_namespaces,
                        enable_ha,
                    })
                    .await;
                handle_http_resp(resp).await;
            }
            SubsystemSubcommand::Delete { nqn } => {
                let resp = sdk.subsystem.delete(&nqn).await;
                handle_http_resp(resp).await;
            }
            SubsystemSubcommand::Get { nqn } => {
                let resp = sdk.subsystem.get(&nqn).await;
                handle_resp(resp);
            }
            SubsystemSubcommand::List => {
                let resp = sdk.subsystem.list().await;
                handle_resp(resp);
            }
            SubsystemSubcommand::Present { nqn } => {
                println!("{}", sdk.subsystem.is_present(&nqn).await);
            }
        }
    }
}
