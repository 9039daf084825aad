use clap::Subcommand;
use nvmeof_sdk::{
    namespace::{CreateNamespaceParams, EditNamespaceParams},
    Client,
};

use crate::{handle_http_resp, handle_resp};

#[derive(clap::Args, Debug)]
pub struct Namespace {
    #[clap(subcommand)]
    subcommand: NamespaceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum NamespaceSubcommand {
    #[command(about = "create a namespace backed by a new RBD image")]
    Create {
        #[arg(help = "NVMe qualified name of the subsystem")]
        nqn: String,
        #[arg(long, help = "name of the RBD image to create")]
        rbd_image_name: String,
        #[arg(long, default_value = "rbd")]
        rbd_pool: String,
        #[arg(long, help = "size of the RBD image in bytes")]
        size: u64,
    },
    #[command(about = "retrieve a namespace")]
    Get {
        #[arg(help = "NVMe qualified name of the subsystem")]
        nqn: String,
        nsid: u32,
    },
    #[command(about = "list the namespaces of a subsystem")]
    List {
        #[arg(help = "NVMe qualified name of the subsystem")]
        nqn: String,
    },
    #[command(about = "resize the RBD image behind a namespace")]
    Resize {
        #[arg(help = "NVMe qualified name of the subsystem")]
        nqn: String,
        nsid: u32,
        #[arg(long, help = "new size of the RBD image in bytes")]
        size: u64,
    },
    #[command(about = "delete a namespace")]
    Delete {
        #[arg(help = "NVMe qualified name of the subsystem")]
        nqn: String,
        nsid: u32,
    },
}

impl Namespace {
    pub async fn handle(self, sdk: &Client) {
        match self.subcommand {
            NamespaceSubcommand::Create {
                nqn,
                rbd_image_name,
                rbd_pool,
                size,
            } => {
                let resp = sdk
                    .namespace
                    .create(
                        &nqn,
                        &CreateNamespaceParams {
                            rbd_image_name,
                            rbd_pool,
                            size,
                        },
                    )
                    .await;
                handle_http_resp(resp).await;
            }
            NamespaceSubcommand::Get { nqn, nsid } => {
                let resp = sdk.namespace.get(&nqn, nsid).await;
                handle_resp(resp);
            }
            NamespaceSubcommand::List { nqn } => {
                let resp = sdk.namespace.list(&nqn).await;
                handle_resp(resp);
            }
            NamespaceSubcommand::Resize { nqn, nsid, size } => {
                let resp = sdk
                    .namespace
                    .update(&nqn, nsid, &EditNamespaceParams {
                        rbd_image_size: size,
                    })
                    .await;
                handle_http_resp(resp).await;
            }
            NamespaceSubcommand::Delete { nqn, nsid } => {
                let resp = sdk.namespace.delete(&nqn, nsid).await;
                handle_http_resp(resp).await;
            }
        }
    }
}
