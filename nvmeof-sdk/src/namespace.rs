use std::sync::Arc;

use reqwest::Response;

pub use nvmeof_types::methods::namespace::{
    CreateNamespaceParams, EditNamespaceParams, Namespace,
};

use crate::{base::BaseClient, Error};

pub struct Client {
    client: Arc<BaseClient>,
}

impl Client {
    pub(crate) fn new(client: Arc<BaseClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, nqn: &str) -> Result<Vec<Namespace>, Error> {
        self.client.get(format!("/subsystem/{nqn}/namespace")).await
    }

    pub async fn get(&self, nqn: &str, nsid: u32) -> Result<Namespace, Error> {
        self.client
            .get(format!("/subsystem/{nqn}/namespace/{nsid}"))
            .await
    }

    pub async fn create(&self, nqn: &str, params: &CreateNamespaceParams) -> Result<Response, Error> {
        self.client
            .post(format!("/subsystem/{nqn}/namespace"), params)
            .await
    }

    pub async fn update(
        &self,
        nqn: &str,
        nsid: u32,
        params: &EditNamespaceParams,
    ) -> Result<Response, Error> {
        self.client
            .patch(format!("/subsystem/{nqn}/namespace/{nsid}"), params)
            .await
    }

    pub async fn delete(&self, nqn: &str, nsid: u32) -> Result<Response, Error> {
        self.client
            .delete(format!("/subsystem/{nqn}/namespace/{nsid}"))
            .await
    }
}
