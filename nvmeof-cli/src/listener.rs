use clap::Subcommand;
use nvmeof_sdk::{listener::CreateListenerParams, Client};

use crate::{handle_http_resp, handle_resp};

#[derive(clap::Args, Debug)]
pub struct Listener {
    #[clap(subcommand)]
    subcommand: ListenerSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ListenerSubcommand {
    #[command(about = "create a listener on a gateway node")]
    Create {
        #[arg(help = "NVMe qualified name of the subsystem")]
        nqn: String,
        #[arg(long, help = "gateway node the listener runs on")]
        host_name: String,
        #[arg(long, help = "transport address to listen on")]
        traddr: String,
        #[arg(long, default_value_t = 4420)]
        trsvcid: u16,
    },
    #[command(about = "delete a listener")]
    Delete {
        #[arg(help = "NVMe qualified name of the subsystem")]
        nqn: String,
        #[arg(long, help = "gateway node the listener runs on")]
        host_name: String,
        #[arg(long, help = "transport address the listener is bound to")]
        traddr: String,
        #[arg(long, default_value_t = 4420)]
        trsvcid: u16,
    },
    #[command(about = "list the listeners of a subsystem")]
    List {
        #[arg(help = "NVMe qualified name of the subsystem")]
        nqn: String,
    },
}

impl Listener {
    pub async fn handle(self, sdk: &Client) {
        match self.subcommand {
            ListenerSubcommand::Create {
                nqn,
                host_name,
                traddr,
                trsvcid,
            } => {
                let resp = sdk
                    .listener
                    .create(
                        &nqn,
                        &CreateListenerParams {
                            host_name,
                            traddr,
                            trsvcid,
                        },
                    )
                    .await;
                handle_http_resp(resp).await;
            }
            ListenerSubcommand::Delete {
                nqn,
                host_name,
                traddr,
                trsvcid,
            } => {
                let resp = sdk.listener.delete(&nqn, &host_name, &traddr, trsvcid).await;
                handle_http_resp(resp).await;
            }
            ListenerSubcommand::List { nqn } => {
                let resp = sdk.listener.list(&nqn).await;
                handle_resp(resp);
            }
        }
    }
}
