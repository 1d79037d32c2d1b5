//! Generic HTTP helpers. Every failure is logged here and handed back as an
//! `Error`; nothing in this module panics on a bad response.

use log::{debug, error};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// How a GET response body should be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseKind {
    Json,
    #[default]
    Text,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(Value),
    Text(String),
}

impl Body {
    pub fn into_json(self) -> Value {
        match self {
            Body::Json(value) => value,
            Body::Text(text) => Value::String(text),
        }
    }
}

pub fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

pub async fn post_json<B>(
    client: &Client,
    url: &str,
    body: Option<&B>,
    headers: Option<HeaderMap>,
) -> Result<Value>
where
    B: Serialize + ?Sized,
{
    send_json(client, Method::POST, url, body, headers).await
}

pub async fn put_json<B>(
    client: &Client,
    url: &str,
    body: Option<&B>,
    headers: Option<HeaderMap>,
) -> Result<Value>
where
    B: Serialize + ?Sized,
{
    send_json(client, Method::PUT, url, body, headers).await
}

pub async fn get(
    client: &Client,
    url: &str,
    kind: ResponseKind,
    headers: Option<HeaderMap>,
) -> Result<Body> {
    let request = client
        .request(Method::GET, url)
        .headers(headers.unwrap_or_default());

    execute(request)
        .await
        .and_then(|text| match kind {
            ResponseKind::Json => Ok(Body::Json(serde_json::from_str(&text)?)),
            ResponseKind::Text => Ok(Body::Text(text)),
        })
        .inspect_err(|e| error!("GET {url} failed: {e}"))
}

/// Returns the raw response text, even when the server answered with JSON.
pub async fn delete(client: &Client, url: &str, headers: Option<HeaderMap>) -> Result<String> {
    let request = client
        .request(Method::DELETE, url)
        .headers(headers.unwrap_or_default());

    execute(request)
        .await
        .inspect_err(|e| error!("DELETE {url} failed: {e}"))
}

async fn send_json<B>(
    client: &Client,
    method: Method,
    url: &str,
    body: Option<&B>,
    headers: Option<HeaderMap>,
) -> Result<Value>
where
    B: Serialize + ?Sized,
{
    let result = async {
        let mut request = client
            .request(method.clone(), url)
            .headers(headers.unwrap_or_else(json_headers));
        if let Some(body) = body {
            request = request.body(serde_json::to_string(body)?);
        }
        let text = execute(request).await?;
        Ok::<Value, Error>(serde_json::from_str(&text)?)
    }
    .await;

    result.inspect_err(|e| error!("{method} {url} failed: {e}"))
}

async fn execute(request: RequestBuilder) -> Result<String> {
    let response = request.send().await?;
    let status = response.status();
    let text = response.text().await?;
    debug!("response {status} ({} bytes)", text.len());

    if !status.is_success() {
        return Err(Error::Status { status, body: text });
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_post_json_sends_body_and_default_content_type() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/items")
                    .header("content-type", "application/json")
                    .json_body(json!({ "name": "a" }));
                then.status(201).json_body(json!({ "id": 7 }));
            })
            .await;

        let client = Client::new();
        let result = post_json(&client, &server.url("/items"), Some(&json!({ "name": "a" })), None)
            .await
            .unwrap();
        assert_eq!(result, json!({ "id": 7 }));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_put_json_unparseable_body_is_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(PUT).path("/items/1");
                then.status(200).body("not json");
            })
            .await;

        let client = Client::new();
        let result = put_json(&client, &server.url("/items/1"), Some(&json!({})), None).await;
        assert_matches!(result, Err(Error::Json(_)));
    }

    #[tokio::test]
    async fn test_post_json_unparseable_body_is_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/items");
                then.status(201).body("<html>created</html>");
            })
            .await;

        let client = Client::new();
        let result = post_json(&client, &server.url("/items"), Some(&json!({})), None).await;
        assert_matches!(result, Err(Error::Json(_)));
    }

    #[tokio::test]
    async fn test_get_json_unparseable_body_is_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/page");
                then.status(200).body("<html></html>");
            })
            .await;

        let client = Client::new();
        let result = get(&client, &server.url("/page"), ResponseKind::Json, None).await;
        assert_matches!(result, Err(Error::Json(_)));
    }

    #[tokio::test]
    async fn test_get_text_and_json_modes() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/thing");
                then.status(200).body(r#"{"ok":true}"#);
            })
            .await;

        let client = Client::new();
        let url = server.url("/thing");
        let text = get(&client, &url, ResponseKind::default(), None).await.unwrap();
        assert_eq!(text, Body::Text(r#"{"ok":true}"#.to_string()));

        let parsed = get(&client, &url, ResponseKind::Json, None).await.unwrap();
        assert_eq!(parsed, Body::Json(json!({ "ok": true })));
    }

    #[tokio::test]
    async fn test_get_non_success_status_is_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/missing");
                then.status(404).json_body(json!({ "id": "not_found" }));
            })
            .await;

        let client = Client::new();
        let result = get(&client, &server.url("/missing"), ResponseKind::Json, None).await;
        assert_matches!(result, Err(Error::Status { status, .. }) if status.as_u16() == 404);
    }

    #[tokio::test]
    async fn test_delete_returns_raw_text() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/items/1");
                then.status(200).body(r#"{"deleted":true}"#);
            })
            .await;

        let client = Client::new();
        let body = delete(&client, &server.url("/items/1"), None).await.unwrap();
        assert_eq!(body, r#"{"deleted":true}"#);
    }

    #[tokio::test]
    async fn test_transport_failure_is_error() {
        let client = Client::new();
        // Nothing listens on port 1.
        let result = post_json(&client, "http://127.0.0.1:1/x", None::<&Value>, None).await;
        assert_matches!(result, Err(Error::Http(_)));
    }
}
