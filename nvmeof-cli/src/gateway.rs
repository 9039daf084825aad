use clap::Subcommand;
use nvmeof_sdk::Client;

use crate::handle_resp;

#[derive(clap::Args, Debug)]
pub struct Gateway {
    #[clap(subcommand)]
    subcommand: GatewaySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum GatewaySubcommand {
    #[command(about = "list gateways")]
    List,
}

impl Gateway {
    pub async fn handle(self, sdk: &Client) {
        match self.subcommand {
            GatewaySubcommand::List => {
                let resp = sdk.gateway.list().await;
                handle_resp(resp);
            }
        }
    }
}
