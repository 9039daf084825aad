use clap::Subcommand;
use nvmeof_sdk::{initiator::AddInitiatorParams, Client};

use crate::{handle_http_resp, handle_resp};

#[derive(clap::Args, Debug)]
pub struct Initiator {
    #[clap(subcommand)]
    subcommand: InitiatorSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum InitiatorSubcommand {
    #[command(about = "allow an initiator to connect to a subsystem")]
    Add {
        #[arg(help = "NVMe qualified name of the subsystem")]
        nqn: String,
        #[arg(help = "host NQN of the initiator, or \"*\" for any host")]
        host_nqn: String,
    },
    #[command(about = "remove an initiator from a subsystem")]
    Remove {
        #[arg(help = "NVMe qualified name of the subsystem")]
        nqn: String,
        #[arg(help = "host NQN of the initiator")]
        host_nqn: String,
    },
    #[command(about = "list the initiators allowed to connect to a subsystem")]
    List {
        #[arg(help = "NVMe qualified name of the subsystem")]
        nqn: String,
    },
}

impl Initiator {
    pub async fn handle(self, sdk: &Client) {
        match self.subcommand {
            InitiatorSubcommand::Add { nqn, host_nqn } => {
                let resp = sdk
                    .initiator
                    .add(&nqn, &AddInitiatorParams { host_nqn })
                    .await;
                handle_http_resp(resp).await;
            }
            InitiatorSubcommand::Remove { nqn, host_nqn } => {
                let resp = sdk.initiator.remove(&nqn, &host_nqn).await;
                handle_http_resp(resp).await;
            }
            InitiatorSubcommand::List { nqn } => {
                let resp = sdk.initiator.list(&nqn).await;
                handle_resp(resp);
            }
        }
    }
}
