use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::Error;

pub(crate) struct BaseClient {
    api_url: String,
    http: reqwest::Client,
    token: RwLock<Option<String>>,
}

impl BaseClient {
    pub fn new(api_url: impl ToString) -> Self {
        let api_url = api_url.to_string().trim_end_matches('/').to_string();
        Self {
            api_url,
            http: reqwest::Client::new(),
            token: RwLock::new(None),
        }
    }

    pub async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    async fn with_token(&self, rb: RequestBuilder) -> RequestBuilder {
        match self.token.read().await.as_ref() {
            Some(token) => rb.bearer_auth(token),
            None => rb,
        }
    }

    async fn send<T: for<'de> serde::de::Deserialize<'de>>(rb: RequestBuilder) -> Result<T, Error> {
        let resp = rb.send().await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound);
        }
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(Error::Api { status, message });
        }
        resp.json::<T>().await.map_err(Error::Decode)
    }

    // The raw response goes back to the caller so the status line and
    // headers stay inspectable. Only transport failures become errors.
    async fn send_raw(rb: RequestBuilder) -> Result<Response, Error> {
        rb.send().await.map_err(Error::Transport)
    }

    pub async fn get<T: for<'de> serde::de::Deserialize<'de>>(
        &self,
        path: String,
    ) -> Result<T, Error> {
        let rb = self.http.get(format!("{}{}", self.api_url, path));
        Self::send(self.with_token(rb).await).await
    }

    pub async fn post<T: Serialize>(&self, path: String, body: &T) -> Result<Response, Error> {
        let rb = self
            .http
            .post(format!("{}{}", self.api_url, path))
            .json(body);
        Self::send_raw(self.with_token(rb).await).await
    }

    pub async fn patch<T: Serialize>(&self, path: String, body: &T) -> Result<Response, Error> {
        let rb = self
            .http
            .patch(format!("{}{}", self.api_url, path))
            .json(body);
        Self::send_raw(self.with_token(rb).await).await
    }

    pub async fn delete(&self, path: String) -> Result<Response, Error> {
        let rb = self.http.delete(format!("{}{}", self.api_url, path));
        Self::send_raw(self.with_token(rb).await).await
    }
}
