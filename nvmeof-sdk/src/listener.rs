use std::sync::Arc;

use reqwest::Response;

pub use nvmeof_types::methods::listener::{CreateListenerParams, Listener};

use crate::{base::BaseClient, Error};

pub struct Client {
    client: Arc<BaseClient>,
}

impl Client {
    pub(crate) fn new(client: Arc<BaseClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, nqn: &str) -> Result<Vec<Listener>, Error> {
        self.client.get(format!("/subsystem/{nqn}/listener")).await
    }

    pub async fn create(&self, nqn: &str, params: &CreateListenerParams) -> Result<Response, Error> {
        self.client
            .post(format!("/subsystem/{nqn}/listener"), params)
            .await
    }

    pub async fn delete(
        &self,
        nqn: &str,
        host_name: &str,
        traddr: &str,
        trsvcid: u16,
    ) -> Result<Response, Error> {
        self.client
            .delete(format!(
                "/subsystem/{nqn}/listener/{host_name}/{traddr}?trsvcid={trsvcid}"
            ))
            .await
    }
}
