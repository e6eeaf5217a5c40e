//! Domain registration age from RDAP.

use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use toolbox_core::{ExecutionResult, FailureReason, Tool};
use url::Url;

use crate::core::{ToolConfig, invalid_input};
use crate::standard::calc::calculate_age;
use crate::standard::network::{DEFAULT_NETWORK_TIMEOUT, request_failure, run_async};

/// Bootstrap service that redirects to the authoritative registry.
pub const DEFAULT_RDAP_URL: &str = "https://rdap.org";

/// Reduce a URL or host to the registrable name: no scheme, path, port or
/// leading `www.`.
pub fn normalize_domain(input: &str) -> Result<String, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Please enter a domain name".to_string());
    }
    let with_scheme = if input.contains("://") {
        input.to_string()
    } else {
        format!("http://{}", input)
    };
    let host = Url::parse(&with_scheme)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .ok_or_else(|| format!("\"{}\" is not a valid domain", input))?;
    let host = host.strip_prefix("www.").unwrap_or(&host).trim_end_matches('.');

    let valid_labels = host.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    if !host.contains('.') || !valid_labels {
        return Err(format!("\"{}\" is not a valid domain", input));
    }
    Ok(host.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainAge {
    pub domain: String,
    pub created: DateTime<Utc>,
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub total_days: i64,
}

/// Age of a domain registered at `created`, as of `today`.
pub fn domain_age(domain: &str, created: DateTime<Utc>, today: NaiveDate) -> Result<DomainAge, String> {
    let age = calculate_age(created.date_naive(), today)?;
    Ok(DomainAge {
        domain: domain.to_string(),
        created,
        years: age.years,
        months: age.months,
        days: age.days,
        total_days: (today - created.date_naive()).num_days(),
    })
}

#[derive(Debug, Deserialize)]
struct RdapDomain {
    #[serde(default)]
    events: Vec<RdapEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RdapEvent {
    event_action: String,
    event_date: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DomainInput {
    pub domain: String,
}

impl ToolConfig for DomainInput {
    fn from_simple(input: String) -> Option<Self> {
        Some(Self { domain: input })
    }
}

#[derive(Debug, Clone)]
pub struct DomainAgeCheckerTool {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl DomainAgeCheckerTool {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Registration date of an already-normalized domain.
    pub async fn registration_date(&self, domain: &str) -> Result<DateTime<Utc>, FailureReason> {
        let url = format!("{}/domain/{}", self.base_url.trim_end_matches('/'), domain);
        tracing::debug!(%domain, %url, "Querying RDAP");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/rdap+json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| request_failure("RDAP", e))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FailureReason::NotFound {
                resource: format!("domain {}", domain),
            });
        }
        if !status.is_success() {
            return Err(FailureReason::NetworkError {
                message: format!("RDAP responded with HTTP {}", status.as_u16()),
            });
        }

        let record: RdapDomain = response.json().await.map_err(|e| FailureReason::NetworkError {
            message: format!("Unexpected RDAP response: {}", e),
        })?;

        let event = record
            .events
            .iter()
            .find(|event| event.event_action == "registration")
            .ok_or_else(|| FailureReason::NotFound {
                resource: format!("registration date for {}", domain),
            })?;

        DateTime::parse_from_rfc3339(&event.event_date)
            .map(|date| date.with_timezone(&Utc))
            .map_err(|e| FailureReason::NetworkError {
                message: format!("Invalid RDAP registration date '{}': {}", event.event_date, e),
            })
    }

    async fn check(&self, input: String) -> Result<serde_json::Value, FailureReason> {
        let config = DomainInput::parse(input)?;
        let domain = normalize_domain(&config.domain).map_err(invalid_input)?;
        let created = self.registration_date(&domain).await?;
        let age = domain_age(&domain, created, Utc::now().date_naive()).map_err(invalid_input)?;
        serde_json::to_value(age).map_err(|e| FailureReason::InternalError {
            message: e.to_string(),
        })
    }
}

impl Default for DomainAgeCheckerTool {
    fn default() -> Self {
        Self::new(DEFAULT_RDAP_URL, DEFAULT_NETWORK_TIMEOUT)
    }
}

impl Tool for DomainAgeCheckerTool {
    fn name(&self) -> &str {
        "domain-age-checker"
    }

    fn call(&self, input: String) -> ExecutionResult {
        run_async(|| async move { ExecutionResult::from(self.check(input).await) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[rstest]
    #[case("example.com", "example.com")]
    #[case("  https://www.Example.com/about?x=1 ", "example.com")]
    #[case("http://blog.example.co.uk:8080", "blog.example.co.uk")]
    #[case("www.rust-lang.org", "rust-lang.org")]
    fn normalizes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_domain(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("localhost")]
    #[case("bad_domain.com")]
    #[case("-oops.com")]
    fn rejects(#[case] input: &str) {
        assert!(normalize_domain(input).is_err());
    }

    #[test]
    fn age_from_registration() {
        let created = Utc.with_ymd_and_hms(1995, 8, 14, 4, 0, 0).unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 8, 20).unwrap();
        let age = domain_age("example.com", created, today).unwrap();
        assert_eq!((age.years, age.months, age.days), (30, 0, 6));
        assert_eq!(age.total_days, 10_964);
    }

    async fn rdap(status: u16, body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/domain/example.com"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn reads_registration_event() {
        let server = rdap(
            200,
            serde_json::json!({
                "ldhName": "EXAMPLE.COM",
                "events": [
                    {"eventAction": "expiration", "eventDate": "2026-08-13T04:00:00Z"},
                    {"eventAction": "registration", "eventDate": "1995-08-14T04:00:00Z"}
                ]
            }),
        )
        .await;
        let tool = DomainAgeCheckerTool::new(server.uri(), DEFAULT_NETWORK_TIMEOUT);
        let created = tool.registration_date("example.com").await.unwrap();
        assert_eq!(created, Utc.with_ymd_and_hms(1995, 8, 14, 4, 0, 0).unwrap());
    }

    #[tokio::test]
    async fn unknown_domain_is_not_found() {
        let server = rdap(404, serde_json::json!({"errorCode": 404})).await;
        let tool = DomainAgeCheckerTool::new(server.uri(), DEFAULT_NETWORK_TIMEOUT);
        let err = tool.registration_date("example.com").await.unwrap_err();
        assert!(matches!(err, FailureReason::NotFound { .. }));
    }

    #[tokio::test]
    async fn missing_registration_event() {
        let server = rdap(200, serde_json::json!({"events": []})).await;
        let tool = DomainAgeCheckerTool::new(server.uri(), DEFAULT_NETWORK_TIMEOUT);
        let err = tool.registration_date("example.com").await.unwrap_err();
        assert!(matches!(err, FailureReason::NotFound { .. }));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn tool_call_reports_age() {
        let server = rdap(
            200,
            serde_json::json!({
                "events": [{"eventAction": "registration", "eventDate": "1995-08-14T04:00:00Z"}]
            }),
        )
        .await;
        let tool = DomainAgeCheckerTool::new(server.uri(), DEFAULT_NETWORK_TIMEOUT);
        let out = tool
            .call("https://www.example.com/".into())
            .output_json()
            .unwrap();
        assert_eq!(out["domain"], "example.com");
        assert_eq!(out["created"], "1995-08-14T04:00:00Z");
        assert!(out["years"].as_u64().unwrap() >= 30);
    }

    #[test]
    fn invalid_domain_fails_before_network() {
        let tool = DomainAgeCheckerTool::new("http://127.0.0.1:9", DEFAULT_NETWORK_TIMEOUT);
        let result = tool.call("not a domain".into());
        assert!(matches!(
            result.failure_reason(),
            Some(FailureReason::InvalidInput { .. })
        ));
    }
}
