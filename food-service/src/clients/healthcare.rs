//! HTTP client for the healthcare service

use campus_shared::{PeerError, TherapyData, TherapyStatusUpdate};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

const SERVICE: &str = "healthcare";

/// Outbound calls to the healthcare service
#[derive(Clone)]
pub struct HealthcareClient {
    http: Client,
    base_url: String,
}

impl HealthcareClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PeerError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PeerError::Transport {
                service: SERVICE,
                message: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `PUT /updateTherapy` with the new status of one therapy
    pub async fn notify_status(&self, update: &TherapyStatusUpdate) -> Result<(), PeerError> {
        let url = format!("{}/updateTherapy", self.base_url);
        debug!(therapy_id = %update.id, status = %update.status, "Notifying healthcare");

        let response = self
            .http
            .put(&url)
            .json(update)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!(therapy_id = %update.id, status = status.as_u16(), "Healthcare rejected status update");
            return Err(PeerError::Status {
                service: SERVICE,
                status: status.as_u16(),
            });
        }

        Ok(())
    }

    /// `GET /therapies`
    pub async fn fetch_therapies(&self) -> Result<Vec<TherapyData>, PeerError> {
        let url = format!("{}/therapies", self.base_url);

        let response = self.http.get(&url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(PeerError::Status {
                service: SERVICE,
                status: status.as_u16(),
            });
        }

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

#[cfg(test)]
mod tests {
    use super::*;
    use campus_shared::TherapyStatus;
    use uuid::Uuid;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HealthcareClient {
        HealthcareClient::new(&server.uri(), Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn test_notify_status_sends_id_and_status() {
        let server = MockServer::start().await;
        let id = Uuid::new_v4();

        Mock::given(method("PUT"))
            .and(path("/updateTherapy"))
            .and(body_json(serde_json::json!({ "id": id, "status": "done" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let update = TherapyStatusUpdate {
            id,
            status: TherapyStatus::Done,
        };
        client_for(&server).notify_status(&update).await.unwrap();
    }

    #[tokio::test]
    async fn test_notify_status_non_ok_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/updateTherapy"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let update = TherapyStatusUpdate {
            id: Uuid::new_v4(),
            status: TherapyStatus::Undone,
        };
        let err = client_for(&server).notify_status(&update).await.unwrap_err();
        assert!(matches!(err, PeerError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_fetch_therapies_decodes_list() {
        let server = MockServer::start().await;
        let therapy_id = Uuid::new_v4();
        let student_id = Uuid::new_v4();

        Mock::given(method("GET"))
            .and(path("/therapies"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "therapyId": therapy_id,
                    "studentId": student_id,
                    "diagnosis": "celiac disease",
                    "status": "sent to food service"
                }
            ])))
            .mount(&server)
            .await;

        let therapies = client_for(&server).fetch_therapies().await.unwrap();
        assert_eq!(therapies.len(), 1);
        assert_eq!(therapies[0].therapy_id, therapy_id);
        assert_eq!(therapies[0].status, TherapyStatus::SentToFoodService);
    }

    #[tokio::test]
    async fn test_unreachable_peer_is_transport_error() {
        // Nothing listens on port 9 locally
        let client = HealthcareClient::new("http://127.0.0.1:9", Duration::from_millis(500)).unwrap();
        let err = client.fetch_therapies().await.unwrap_err();
        assert!(matches!(err, PeerError::Transport { .. }));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HealthcareClient::new("http://healthcare:8003/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://healthcare:8003");
    }
}
