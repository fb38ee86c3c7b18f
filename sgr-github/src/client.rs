//! GitHub GraphQL client for the contribution calendar.

use log::{debug, info};
use reqwest::{header, Client, StatusCode};
use std::time::Duration;

use crate::{
    calendar::{error_detail, parse_calendar, request_body},
    day_record::DayRecord,
    error::{ContribError, Result},
    window::QueryWindow,
};

pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";
pub const DEFAULT_USERNAME: &str = "grifjst";
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and for whom to fetch the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub endpoint: String,
    pub username: String,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            endpoint: String::from(GITHUB_GRAPHQL_URL),
            username: String::from(DEFAULT_USERNAME),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Read the bearer credential from `GITHUB_TOKEN`.
pub fn token_from_env() -> Result<String> {
    token_from(std::env::var(TOKEN_ENV_VAR).ok())
}

/// Trim a raw credential, rejecting one that is absent or blank.
pub fn token_from(value: Option<String>) -> Result<String> {
    match value {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(ContribError::MissingToken),
    }
}

/// Turn a non-success status into [`ContribError::Request`].
pub fn check_status(status: StatusCode, body: &str) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ContribError::Request {
            status: status.as_u16(),
            detail: error_detail(body),
        })
    }
}

/// Fetch the trailing year of daily contribution counts for `config.username`.
pub async fn fetch_contributions(config: &FetchConfig, token: &str) -> Result<Vec<DayRecord>> {
    let window = QueryWindow::trailing_year();
    fetch_contributions_in(config, token, &window).await
}

/// Fetch the daily contribution counts for an explicit window.
pub async fn fetch_contributions_in(
    config: &FetchConfig,
    token: &str,
    window: &QueryWindow,
) -> Result<Vec<DayRecord>> {
    let client = Client::builder()
        .timeout(config.timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    debug!(
        "Querying {} for {} from {} to {}",
        config.endpoint,
        config.username,
        window.from_iso(),
        window.to_iso()
    );

    let response = client
        .post(&config.endpoint)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .json(&request_body(&config.username, window))
        .send()
        .await?;
    let status = response.status();
    let body = response.text().await?;
    check_status(status, &body)?;

    let days = parse_calendar(&body)?;
    info!("Received {} days for {}", days.len(), config.username);
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    /// Serve one canned HTTP response on a local port, handing back the
    /// raw request it received.
    fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}/graphql", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut raw: Vec<u8> = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&raw).to_string();
                if let Some(head_end) = text.find("\r\n\r\n") {
                    let content_length = text[..head_end]
                        .lines()
                        .filter_map(|l| l.split_once(':'))
                        .find(|(k, _)| k.trim().eq_ignore_ascii_case("content-length"))
                        .and_then(|(_, v)| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if raw.len() >= head_end + 4 + content_length {
                        break;
                    }
                }
            }
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            let _ = tx.send(String::from_utf8_lossy(&raw).to_string());
        });
        (endpoint, rx)
    }

    fn local_config(endpoint: String) -> FetchConfig {
        FetchConfig {
            endpoint,
            username: String::from("grifjst"),
            timeout: Duration::from_secs(5),
        }
    }

    fn fixed_window() -> QueryWindow {
        QueryWindow::ending_at(Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap())
    }

    #[tokio::test]
    async fn test_fetch_unauthorized_is_request_error() {
        let (endpoint, rx) = serve_once(
            "HTTP/1.1 401 Unauthorized",
            r#"{"errors":[{"message":"Bad credentials"}]}"#,
        );
        let result = fetch_contributions_in(&local_config(endpoint), "tok", &fixed_window()).await;
        match result {
            Err(ContribError::Request { status, detail }) => {
                assert_eq!(status, 401);
                assert_eq!(detail, "Bad credentials");
            }
            other => panic!("expected Request error, got {:?}", other),
        }

        let request = rx.recv().unwrap();
        let lowered = request.to_lowercase();
        assert!(request.starts_with("POST /graphql "), "{}", request);
        assert!(lowered.contains("authorization: bearer tok"), "{}", request);
        assert!(lowered.contains("user-agent: sgr-github/"), "{}", request);
        assert!(request.contains(r#""user":"grifjst""#), "{}", request);
        assert!(request.contains(r#""to":"2024-06-15T00:00:00Z""#), "{}", request);
    }

    #[tokio::test]
    async fn test_fetch_ok_parses_calendar() {
        let (endpoint, _rx) = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"data":{"user":{"contributionsCollection":{"contributionCalendar":{"weeks":[{"contributionDays":[{"date":"2024-06-14","contributionCount":5}]}]}}}}}"#,
        );
        let days = fetch_contributions_in(&local_config(endpoint), "tok", &fixed_window())
            .await
            .unwrap();
        assert_eq!(
            days,
            vec![DayRecord::new(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(), 5)]
        );
    }

    #[tokio::test]
    async fn test_fetch_ok_with_missing_shape_is_malformed() {
        let (endpoint, _rx) = serve_once("HTTP/1.1 200 OK", r#"{"data":{"user":{}}}"#);
        let result = fetch_contributions_in(&local_config(endpoint), "tok", &fixed_window()).await;
        assert!(matches!(result, Err(ContribError::MalformedResponse(_))));
    }

    #[test]
    fn test_token_from_trims() {
        assert_eq!(token_from(Some(String::from("  abc123\n"))).unwrap(), "abc123");
    }

    #[test]
    fn test_token_from_rejects_missing_or_blank() {
        assert!(matches!(token_from(None), Err(ContribError::MissingToken)));
        assert!(matches!(
            token_from(Some(String::from("   "))),
            Err(ContribError::MissingToken)
        ));
    }

    #[test]
    fn test_check_status_ok() {
        assert!(check_status(StatusCode::OK, "{}").is_ok());
    }

    #[test]
    fn test_check_status_carries_remote_errors() {
        let body = r#"{"errors":[{"message":"Bad credentials"}]}"#;
        match check_status(StatusCode::UNAUTHORIZED, body) {
            Err(ContribError::Request { status, detail }) => {
                assert_eq!(status, 401);
                assert_eq!(detail, "Bad credentials");
            }
            other => panic!("expected Request error, got {:?}", other),
        }
    }

    #[test]
    fn test_check_status_unknown_detail() {
        match check_status(StatusCode::BAD_GATEWAY, "<html></html>") {
            Err(ContribError::Request { status, detail }) => {
                assert_eq!(status, 502);
                assert_eq!(detail, "unknown");
            }
            other => panic!("expected Request error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_fetch_config() {
        let config = FetchConfig::default();
        assert_eq!(config.endpoint, "https://api.github.com/graphql");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
