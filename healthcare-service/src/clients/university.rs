//! HTTP client for the university service

use super::{build_http, check_status};
use campus_shared::{Appointment, PeerError};
use reqwest::Client;
use std::time::Duration;
use tracing::info;

const SERVICE: &str = "university";

#[derive(Clone)]
pub struct UniversityClient {
    http: Client,
    base_url: String,
}

impl UniversityClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PeerError> {
        Ok(Self {
            http: build_http(SERVICE, timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /notificationsByHealthcare` with the full appointment
    pub async fn notify_systematic(&self, appointment: &Appointment) -> Result<(), PeerError> {
        let url = format!("{}/notificationsByHealthcare", self.base_url);
        info!(appointment_id = %appointment.id, "Sending systematic appointment to university");

        let response = self
            .http
            .post(&url)
            .json(appointment)
            .send()
            .await
            .map_err(|e| PeerError::Transport {
                service: SERVICE,
                message: e.to_string(),
            })?;

        check_status(SERVICE, response)?;
        Ok(())
    }
}
