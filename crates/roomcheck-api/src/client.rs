use crate::reply::parse_reply;
use async_trait::async_trait;
use log::debug;
use roomcheck_core::exceptions::GenericError;
use roomcheck_core::get_roomcheck_setting;
use roomcheck_core::models::{AvailabilityOutcome, AvailabilityRequest};
use std::time::Duration;

/// Capability for checking room availability against the booking server.
/// The workflow only ever sees this trait, so tests substitute a stub and
/// never touch the network.
#[async_trait]
pub trait AvailabilityApi: Send + Sync {
    async fn check(
        &self,
        request: &AvailabilityRequest,
    ) -> Result<AvailabilityOutcome, GenericError>;
}

/// This client is used to house utility functions at a slightly higher level
/// than the raw HTTP exchange with the booking server.
#[derive(Clone)]
pub struct AvailabilityClient {
    base_url: String,
    http: reqwest::Client,
}

impl AvailabilityClient {
    /// Build a client against the configured server URL. The request timeout
    /// comes from `ROOMCHECK_HTTP_TIMEOUT_MS` so a dead server cannot leave
    /// the workflow stuck in its submitting state.
    pub fn new() -> Result<Self, GenericError> {
        Self::with_base_url(get_roomcheck_setting!(ROOMCHECK_SERVER_URL))
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, GenericError> {
        let timeout_ms = get_roomcheck_setting!(ROOMCHECK_HTTP_TIMEOUT_MS, usize) as u64;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| GenericError::RuntimeError(e.to_string()))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }
}

#[async_trait]
impl AvailabilityApi for AvailabilityClient {
    async fn check(
        &self,
        request: &AvailabilityRequest,
    ) -> Result<AvailabilityOutcome, GenericError> {
        let url = format!("{}/search-availability-json", self.base_url);
        let fields = request.form_fields(&get_roomcheck_setting!(ROOMCHECK_DATE_FORMAT));
        debug!("POST {} for room {}", url, request.room_id);

        let response = self
            .http
            .post(&url)
            .form(&fields)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenericError::TimeoutError
                } else {
                    GenericError::TransportError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenericError::TransportError(format!(
                "server returned {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GenericError::TransportError(e.to_string()))?;
        debug!("Got availability payload: {} bytes", body.len());
        parse_reply(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = AvailabilityClient::with_base_url("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        // Reserved TEST-NET-1 address; nothing listens there.
        unsafe {
            std::env::set_var("ROOMCHECK_HTTP_TIMEOUT_MS", "200");
        }
        let client = AvailabilityClient::with_base_url("http://192.0.2.1:9").unwrap();
        unsafe {
            std::env::remove_var("ROOMCHECK_HTTP_TIMEOUT_MS");
        }
        let request = AvailabilityRequest {
            room_id: "1".to_string(),
            csrf_token: "t".to_string(),
            dates: roomcheck_core::models::DateRange::parse(
                "2024-06-01",
                "2024-06-05",
                "%Y-%m-%d",
                chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            )
            .unwrap(),
        };
        let err = client.check(&request).await.unwrap_err();
        assert!(matches!(
            err,
            GenericError::TransportError(_) | GenericError::TimeoutError
        ));
    }
}
