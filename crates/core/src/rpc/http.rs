//! JSON-RPC 2.0 over HTTP, backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use super::rpc_errors::RpcError;
use super::transport::RpcTransport;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const JSON_RPC_VERSION: &str = "2.0";
const REQUEST_ID: u64 = 1;

/// Production transport: POSTs JSON-RPC 2.0 envelopes to a fullnode.
pub struct HttpRpcTransport {
    client: Client,
    endpoint: String,
}

impl HttpRpcTransport {
    /// Create a transport for the given fullnode endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this transport talks to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RpcTransport for HttpRpcTransport {
    async fn call(&self, method: &str, params: Vec<Value>) -> Result<Value, RpcError> {
        let envelope = json!({
            "jsonrpc": JSON_RPC_VERSION,
            "id": REQUEST_ID,
            "method": method,
            "params": params,
        });

        debug!(method, endpoint = %self.endpoint, "issuing RPC call");

        let response = self.client.post(&self.endpoint).json(&envelope).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::Http {
                status: status.as_u16(),
            });
        }

        let mut body: Value = response.json().await?;

        if let Some(error) = body.get("error") {
            let code = error.get("code").and_then(Value::as_i64).unwrap_or(0);
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(RpcError::Protocol { code, message });
        }

        Ok(body
            .get_mut("result")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }
}
