use std::sync::Arc;

use base::BaseClient;

pub(crate) mod base;
mod error;
pub mod gateway;
pub mod initiator;
pub mod listener;
pub mod namespace;
pub mod subsystem;

pub use error::Error;
pub use nvmeof_types::MAX_NAMESPACE;
pub use reqwest::Response;

pub struct Client {
    base: Arc<BaseClient>,
    pub gateway: crate::gateway::Client,
    pub subsystem: crate::subsystem::Client,
    pub initiator: crate::initiator::Client,
    pub listener: crate::listener::Client,
    pub namespace: crate::namespace::Client,
}

impl Client {
    pub fn new(api_url: impl ToString) -> Self {
        let base = Arc::new(BaseClient::new(api_url));

        let gateway = crate::gateway::Client::new(Arc::clone(&base));
        let subsystem = crate::subsystem::Client::new(Arc::clone(&base));
        let initiator = crate::initiator::Client::new(Arc::clone(&base));
        let listener = crate::listener::Client::new(Arc::clone(&base));
        let namespace = crate::namespace::Client::new(Arc::clone(&base));

        Self {
            base,
            gateway,
            subsystem,
            initiator,
            listener,
            namespace,
        }
    }

    pub async fn set_token(&self, token: Option<String>) {
        self.base.set_token(token).await;
    }
}
