use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::http::{self, ResponseKind};
use crate::model::provider::DomainApi;

pub struct ApiClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(config.http_timeout).build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn auth_headers(&self) -> Result<HeaderMap> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|_| Error::Config("APIKEY is not a valid header value".to_string()))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    fn write_headers(&self) -> Result<HeaderMap> {
        let mut headers = http::json_headers();
        headers.extend(self.auth_headers()?);
        Ok(headers)
    }
}

#[async_trait]
impl DomainApi for ApiClient {
    async fn get(&self, path: &str) -> Result<Value> {
        let body = http::get(
            &self.client,
            &self.url(path),
            ResponseKind::Json,
            Some(self.auth_headers()?),
        )
        .await?;
        Ok(body.into_json())
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        http::post_json(
            &self.client,
            &self.url(path),
            Some(body),
            Some(self.write_headers()?),
        )
        .await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value> {
        http::put_json(
            &self.client,
            &self.url(path),
            Some(body),
            Some(self.write_headers()?),
        )
        .await
    }

    async fn delete(&self, path: &str) -> Result<String> {
        http::delete(&self.client, &self.url(path), Some(self.auth_headers()?)).await
    }
}
