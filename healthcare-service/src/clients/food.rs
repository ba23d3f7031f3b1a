//! HTTP client for the food service

use super::{build_http, check_status};
use campus_shared::{PeerError, TherapyData};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

const SERVICE: &str = "food";

#[derive(Clone)]
pub struct FoodClient {
    http: Client,
    base_url: String,
}

impl FoodClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PeerError> {
        Ok(Self {
            http: build_http(SERVICE, timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /therapy` so the kitchen can act on a new therapy
    pub async fn push_therapy(&self, therapy: &TherapyData) -> Result<(), PeerError> {
        let url = format!("{}/therapy", self.base_url);
        debug!(therapy_id = %therapy.therapy_id, "Sending therapy to food service");

        let response = self
            .http
            .post(&url)
            .json(therapy)
            .send()
            .await
            .map_err(transport)?;

        check_status(SERVICE, response).map_err(|e| {
            warn!(therapy_id = %therapy.therapy_id, error = %e, "Food service rejected therapy");
            e
        })?;
        Ok(())
    }

    /// `GET /therapies/done`
    pub async fn done_therapies(&self) -> Result<Vec<TherapyData>, PeerError> {
        let url = format!("{}/therapies/done", self.base_url);

        let response = self.http.get(&url).send().await.map_err(transport)?;
        let response = check_status(SERVICE, response)?;

        response
            .json::<Vec<TherapyData>>()
            .await
            .map_err(|e| PeerError::Decode {
                service: SERVICE,
                message: e.to_string(),
            })
    }
}

fn transport(err: reqwest::Error) -> PeerError {
    PeerError::Transport {
        service: SERVICE,
        message: err.to_string(),
    }
}
