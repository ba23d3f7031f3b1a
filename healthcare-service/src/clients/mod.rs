//! Clients for peer services

pub mod food;
pub mod university;

pub use food::FoodClient;
pub use university::UniversityClient;

use campus_shared::PeerError;
use reqwest::{Client, Response};
use std::time::Duration;

fn build_http(service: &'static str, timeout: Duration) -> Result<Client, PeerError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| PeerError::Transport {
            service,
            message: e.to_string(),
        })
}

/// Any 2xx passes; everything else becomes `PeerError::Status`
fn check_status(service: &'static str, response: Response) -> Result<Response, PeerError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(PeerError::Status {
            service,
            status: status.as_u16(),
        })
    }
}
