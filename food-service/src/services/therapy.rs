//! Therapy handling on the kitchen side
//!
//! Status changes are written locally first and then pushed to healthcare.
//! When the push fails the caller gets an upstream error while the local
//! status stays as written; there is no retry.

use crate::db::{with_timeout, BULK_READ_TIMEOUT, DEFAULT_TIMEOUT, STATUS_UPDATE_TIMEOUT};
use crate::error::ApiError;
use crate::repositories::{TherapyRecord, TherapyRepository};
use crate::state::AppState;
use campus_shared::{TherapyData, TherapyStatus, TherapyStatusUpdate, ValidationError};
use tracing::{error, info};
use uuid::Uuid;

fn into_therapies(records: Vec<TherapyRecord>) -> Result<Vec<TherapyData>, ApiError> {
    records
        .into_iter()
        .map(|r| TherapyData::try_from(r).map_err(ApiError::Internal))
        .collect()
}

/// Statuses the kitchen may set by hand
pub fn parse_kitchen_status(raw: &str) -> Result<TherapyStatus, ValidationError> {
    match raw.parse::<TherapyStatus>() {
        Ok(status @ (TherapyStatus::Done | TherapyStatus::Undone)) => Ok(status),
        _ => Err(ValidationError::InvalidValue {
            field: "status",
            value: raw.to_string(),
        }),
    }
}

pub struct TherapyService;

impl TherapyService {
    /// Store a therapy pushed by healthcare and add it to the cache
    pub async fn receive(state: &AppState, therapy: TherapyData) -> Result<TherapyData, ApiError> {
        let record = with_timeout(DEFAULT_TIMEOUT, TherapyRepository::save(state.db(), &therapy))
            .await
            .map_err(ApiError::Internal)?;
        let saved = TherapyData::try_from(record).map_err(ApiError::Internal)?;

        state.therapies.push(saved.clone()).await;
        info!(therapy_id = %saved.therapy_id, student_id = %saved.student_id, "Therapy received");
        Ok(saved)
    }

    pub async fn list(state: &AppState) -> Result<Vec<TherapyData>, ApiError> {
        let records = with_timeout(BULK_READ_TIMEOUT, TherapyRepository::list_all(state.db()))
            .await
            .map_err(ApiError::Internal)?;

        into_therapies(records)
    }

    pub async fn list_done(state: &AppState) -> Result<Vec<TherapyData>, ApiError> {
        let records = with_timeout(
            BULK_READ_TIMEOUT,
            TherapyRepository::list_by_status(state.db(), TherapyStatus::Done),
        )
        .await
        .map_err(ApiError::Internal)?;

        into_therapies(records)
    }

    pub async fn cached(state: &AppState) -> Vec<TherapyData> {
        state.therapies.snapshot().await
    }

    /// Pull every therapy from healthcare and append it to the cache
    pub async fn pull_from_healthcare(state: &AppState) -> Result<Vec<TherapyData>, ApiError> {
        let therapies = state.healthcare.fetch_therapies().await?;
        state.therapies.extend(therapies.iter().cloned()).await;

        info!(count = therapies.len(), "Therapies pulled from healthcare");
        Ok(therapies)
    }

    pub async fn clear_cache(state: &AppState) {
        state.therapies.clear().await;
        info!("Therapy cache cleared");
    }

    /// Mark a therapy done and tell healthcare
    pub async fn approve(state: &AppState, therapy_id: Uuid) -> Result<TherapyStatusUpdate, ApiError> {
        Self::change_status(state, therapy_id, TherapyStatus::Done).await
    }

    /// Set `done` or `undone` from its wire name and tell healthcare
    pub async fn set_status(
        state: &AppState,
        therapy_id: Uuid,
        raw: &str,
    ) -> Result<TherapyStatusUpdate, ApiError> {
        let status = parse_kitchen_status(raw)?;
        Self::change_status(state, therapy_id, status).await
    }

    async fn change_status(
        state: &AppState,
        therapy_id: Uuid,
        status: TherapyStatus,
    ) -> Result<TherapyStatusUpdate, ApiError> {
        let updated = with_timeout(
            STATUS_UPDATE_TIMEOUT,
            TherapyRepository::set_status(state.db(), therapy_id, status),
        )
        .await
        .map_err(ApiError::Internal)?;

        if !updated {
            return Err(ApiError::NotFound("Therapy not found".to_string()));
        }
        info!(therapy_id = %therapy_id, status = %status, "Therapy status updated");

        let update = TherapyStatusUpdate {
            id: therapy_id,
            status,
        };
        // The local write stands even if this fails
        if let Err(e) = state.healthcare.notify_status(&update).await {
            error!(therapy_id = %therapy_id, error = %e, "Healthcare notification failed");
            return Err(e.into());
        }
        Ok(update)
    }
}
