use std::sync::Arc;

use reqwest::Response;

pub use nvmeof_types::methods::subsystem::{CreateSubsystemParams, Subsystem};

use crate::{base::BaseClient, Error};

pub struct Client {
    client: Arc<BaseClient>,
}

impl Client {
    pub(crate) fn new(client: Arc<BaseClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Subsystem>, Error> {
        self.client.get("/subsystem".into()).await
    }

    pub async fn get(&self, nqn: &str) -> Result<Subsystem, Error> {
        self.client.get(format!("/subsystem/{nqn}")).await
    }

    pub async fn create(&self, params: &CreateSubsystemParams) -> Result<Response, Error> {
        self.client.post("/subsystem".into(), params).await
    }

    pub async fn delete(&self, nqn: &str) -> Result<Response, Error> {
        self.client.delete(format!("/subsystem/{nqn}")).await
    }

    /// Probe for a subsystem by fetching it. Any failure, a 404 as much as
    /// a transport error, is reported as "not present".
    pub async fn is_present(&self, nqn: &str) -> bool {
        self.get(nqn).await.is_ok()
    }
}
