use std::sync::Arc;

pub use nvmeof_types::methods::gateway::Gateway;

use crate::{base::BaseClient, Error};

pub struct Client {
    client: Arc<BaseClient>,
}

impl Client {
    pub(crate) fn new(client: Arc<BaseClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Gateway>, Error> {
        self.client.get("/gateway".into()).await
    }
}
