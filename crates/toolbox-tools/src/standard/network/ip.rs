//! Public IP address lookup through ipify.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use toolbox_core::{ExecutionResult, FailureReason, Tool};

use super::{DEFAULT_NETWORK_TIMEOUT, request_failure, run_async};

pub const DEFAULT_IPIFY_URL: &str = "https://api.ipify.org";

#[derive(Debug, Deserialize)]
struct IpifyResponse {
    ip: String,
}

/// Reports the public address the service sees for this host. Input is
/// ignored.
#[derive(Debug, Clone)]
pub struct IpAddressCheckerTool {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl IpAddressCheckerTool {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the caller's public IP.
    pub async fn lookup(&self) -> Result<String, FailureReason> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("format", "json")])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| request_failure("ipify", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FailureReason::NetworkError {
                message: format!("ipify responded with HTTP {}", status.as_u16()),
            });
        }

        let body: IpifyResponse = response.json().await.map_err(|e| {
            FailureReason::NetworkError {
                message: format!("Unexpected ipify response: {}", e),
            }
        })?;
        Ok(body.ip)
    }
}

impl Default for IpAddressCheckerTool {
    fn default() -> Self {
        Self::new(DEFAULT_IPIFY_URL, DEFAULT_NETWORK_TIMEOUT)
    }
}

impl Tool for IpAddressCheckerTool {
    fn name(&self) -> &str {
        "ip-address-checker"
    }

    fn call(&self, _input: String) -> ExecutionResult {
        run_async(|| async move {
            ExecutionResult::from(
                self.lookup()
                    .await
                    .map(|ip| serde_json::json!({ "ip": ip })),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn ipify(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("format", "json"))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn echoes_ip() {
        let server =
            ipify(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ip": "203.0.113.7"})))
                .await;
        let tool = IpAddressCheckerTool::new(server.uri(), DEFAULT_NETWORK_TIMEOUT);
        assert_eq!(tool.lookup().await.unwrap(), "203.0.113.7");
    }

    #[tokio::test]
    async fn upstream_error_status() {
        let server = ipify(ResponseTemplate::new(503)).await;
        let tool = IpAddressCheckerTool::new(server.uri(), DEFAULT_NETWORK_TIMEOUT);
        let err = tool.lookup().await.unwrap_err();
        assert!(matches!(err, FailureReason::NetworkError { .. }));
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let server = ipify(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"ip": "203.0.113.7"}))
                .set_delay(Duration::from_millis(500)),
        )
        .await;
        let tool = IpAddressCheckerTool::new(server.uri(), Duration::from_millis(50));
        let err = tool.lookup().await.unwrap_err();
        assert!(matches!(err, FailureReason::Timeout { .. }));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn tool_call_outputs_json() {
        let server =
            ipify(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ip": "198.51.100.1"})))
                .await;
        let tool = IpAddressCheckerTool::new(server.uri(), DEFAULT_NETWORK_TIMEOUT);
        let out = tool.call(String::new()).output_json().unwrap();
        assert_eq!(out, serde_json::json!({"ip": "198.51.100.1"}));
    }
}
