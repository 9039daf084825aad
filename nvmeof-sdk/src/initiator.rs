use std::sync::Arc;

use reqwest::Response;

pub use nvmeof_types::methods::initiator::{AddInitiatorParams, Initiator};

use crate::{base::BaseClient, Error};

pub struct Client {
    client: Arc<BaseClient>,
}

impl Client {
    pub(crate) fn new(client: Arc<BaseClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, nqn: &str) -> Result<Vec<Initiator>, Error> {
        self.client.get(format!("/subsystem/{nqn}/host")).await
    }

    pub async fn add(&self, nqn: &str, params: &AddInitiatorParams) -> Result<Response, Error> {
        self.client
            .post(format!("/subsystem/{nqn}/host"), params)
            .await
    }

    pub async fn remove(&self, nqn: &str, host_nqn: &str) -> Result<Response, Error> {
        self.client
            .delete(format!("/subsystem/{nqn}/host/{host_nqn}"))
            .await
    }
}
